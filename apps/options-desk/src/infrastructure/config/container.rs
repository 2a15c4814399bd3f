//! Dependency Injection Container
//!
//! Wires repositories, the clock, and configuration into use cases.

use std::sync::Arc;

use crate::application::ports::{ClockPort, SystemClock};
use crate::application::use_cases::{
    ManageHoldingsUseCase, OpenStrategyUseCase, PortfolioQueryUseCase, QuoteOptionUseCase,
    StrategyLifecycleUseCase,
};
use crate::config::{PricingConfig, StrategiesConfig};
use crate::domain::holding::HoldingRepository;
use crate::domain::strategy::StrategyRepository;
use crate::infrastructure::persistence::{InMemoryHoldingRepository, InMemoryStrategyRepository};

/// Container backed by the in-memory repositories and the system clock.
pub type InMemoryContainer =
    Container<InMemoryStrategyRepository, InMemoryHoldingRepository, SystemClock>;

/// Dependency injection container.
///
/// Use cases built from the same container share one set of repositories.
pub struct Container<S, H, C>
where
    S: StrategyRepository + 'static,
    H: HoldingRepository + 'static,
    C: ClockPort + 'static,
{
    // Ports
    strategy_repo: Arc<S>,
    holding_repo: Arc<H>,
    clock: Arc<C>,

    // Settings
    pricing: PricingConfig,
    strategies: StrategiesConfig,
}

impl<S, H, C> Container<S, H, C>
where
    S: StrategyRepository + 'static,
    H: HoldingRepository + 'static,
    C: ClockPort + 'static,
{
    /// Create a new container with all dependencies.
    pub const fn new(
        strategy_repo: Arc<S>,
        holding_repo: Arc<H>,
        clock: Arc<C>,
        pricing: PricingConfig,
        strategies: StrategiesConfig,
    ) -> Self {
        Self {
            strategy_repo,
            holding_repo,
            clock,
            pricing,
            strategies,
        }
    }

    /// Get the strategy repository.
    pub fn strategy_repo(&self) -> Arc<S> {
        Arc::clone(&self.strategy_repo)
    }

    /// Get the holding repository.
    pub fn holding_repo(&self) -> Arc<H> {
        Arc::clone(&self.holding_repo)
    }

    /// Get the clock.
    pub fn clock(&self) -> Arc<C> {
        Arc::clone(&self.clock)
    }

    /// Pricing settings handed to use cases.
    pub const fn pricing(&self) -> PricingConfig {
        self.pricing
    }

    /// Create an `OpenStrategyUseCase`.
    pub fn open_strategy_use_case(&self) -> OpenStrategyUseCase<S, C> {
        OpenStrategyUseCase::new(
            Arc::clone(&self.strategy_repo),
            Arc::clone(&self.clock),
            self.pricing,
            self.strategies.leg_count_policy,
        )
    }

    /// Create a `StrategyLifecycleUseCase`.
    pub fn strategy_lifecycle_use_case(&self) -> StrategyLifecycleUseCase<S> {
        StrategyLifecycleUseCase::new(Arc::clone(&self.strategy_repo))
    }

    /// Create a `PortfolioQueryUseCase`.
    pub fn portfolio_query_use_case(&self) -> PortfolioQueryUseCase<S, H, C> {
        PortfolioQueryUseCase::new(
            Arc::clone(&self.strategy_repo),
            Arc::clone(&self.holding_repo),
            Arc::clone(&self.clock),
        )
    }

    /// Create a `ManageHoldingsUseCase`.
    pub fn manage_holdings_use_case(&self) -> ManageHoldingsUseCase<H, C> {
        ManageHoldingsUseCase::new(Arc::clone(&self.holding_repo), Arc::clone(&self.clock))
    }

    /// Create a `QuoteOptionUseCase`.
    pub const fn quote_option_use_case(&self) -> QuoteOptionUseCase {
        QuoteOptionUseCase::new(self.pricing)
    }
}

impl InMemoryContainer {
    /// Build a container over fresh in-memory repositories.
    pub fn in_memory(pricing: PricingConfig, strategies: StrategiesConfig) -> Self {
        Self::new(
            Arc::new(InMemoryStrategyRepository::new()),
            Arc::new(InMemoryHoldingRepository::new()),
            Arc::new(SystemClock),
            pricing,
            strategies,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::FixedClock;
    use crate::application::use_cases::{LegInput, OpenStrategyCommand};
    use crate::domain::shared::{Money, OptionRight, UserId};
    use crate::domain::strategy::{LegCountPolicy, StrategyError, StrategyStatus};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn fixed_container(
        policy: LegCountPolicy,
    ) -> Container<InMemoryStrategyRepository, InMemoryHoldingRepository, FixedClock> {
        Container::new(
            Arc::new(InMemoryStrategyRepository::new()),
            Arc::new(InMemoryHoldingRepository::new()),
            Arc::new(FixedClock::new(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap())),
            PricingConfig::default(),
            StrategiesConfig {
                leg_count_policy: policy,
            },
        )
    }

    fn call_leg(
        strike: rust_decimal::Decimal,
        premium: rust_decimal::Decimal,
        qty: i32,
    ) -> LegInput {
        LegInput {
            right: OptionRight::Call,
            strike,
            expiration: NaiveDate::from_ymd_opt(2026, 3, 20).unwrap(),
            premium: Some(Money::new(premium)),
            quantity: qty,
        }
    }

    fn vertical(strategy_type: &str, legs: Vec<LegInput>) -> OpenStrategyCommand {
        OpenStrategyCommand {
            user_id: UserId::new("u1"),
            strategy_type: strategy_type.to_string(),
            ticker: "SPY".to_string(),
            legs,
            net_cost: Some(Money::new(dec!(2.50))),
            market: None,
        }
    }

    #[tokio::test]
    async fn use_cases_share_repositories() {
        let container = fixed_container(LegCountPolicy::Enforce);

        let opened = container
            .open_strategy_use_case()
            .execute(vertical(
                "SPREAD",
                vec![call_leg(dec!(450), dec!(4.00), 1), call_leg(dec!(455), dec!(1.50), -1)],
            ))
            .await
            .unwrap();

        assert_eq!(container.strategy_repo().len(), 1);

        container
            .strategy_lifecycle_use_case()
            .close(opened.id())
            .await
            .unwrap();

        let stored = container
            .portfolio_query_use_case()
            .get_strategy(opened.id())
            .await
            .unwrap();
        assert_eq!(stored.status(), StrategyStatus::Closed);
    }

    #[tokio::test]
    async fn leg_count_policy_comes_from_config() {
        let enforcing = fixed_container(LegCountPolicy::Enforce);
        let result = enforcing
            .open_strategy_use_case()
            .execute(vertical("VERTICAL", vec![call_leg(dec!(450), dec!(4.00), 1)]))
            .await;
        assert!(matches!(result, Err(StrategyError::InvalidLegs { .. })));

        let advisory = fixed_container(LegCountPolicy::Advisory);
        let result = advisory
            .open_strategy_use_case()
            .execute(vertical("VERTICAL", vec![call_leg(dec!(450), dec!(4.00), 1)]))
            .await;
        assert!(result.is_ok());
    }

    #[test]
    fn in_memory_container_starts_empty() {
        let container =
            InMemoryContainer::in_memory(PricingConfig::default(), StrategiesConfig::default());
        assert!(container.strategy_repo().is_empty());
        assert!(container.holding_repo().is_empty());
        assert_eq!(container.pricing(), PricingConfig::default());
    }
}
