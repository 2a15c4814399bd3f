//! Open Strategy Use Case
//!
//! Resolves the strategy type, applies the leg-count policy, fills in any
//! missing leg premiums from a market snapshot, and inserts the finished
//! aggregate in one call.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::application::ports::ClockPort;
use crate::config::PricingConfig;
use crate::domain::notation::ParsedOption;
use crate::domain::shared::{DomainError, Money, OptionRight, Ticker, UserId};
use crate::domain::strategy::{
    LegCountPolicy, LegDraft, OpenStrategyParams, Strategy, StrategyError, StrategyRepository,
    StrategyType,
};
use crate::pricing::{BlackScholes, PricingInputs};

/// A leg as supplied by the caller. The premium may be left for the pricer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegInput {
    /// Call or put.
    pub right: OptionRight,
    /// Strike price.
    pub strike: Decimal,
    /// Expiration date.
    pub expiration: NaiveDate,
    /// Per-contract premium; `None` to price from the market snapshot.
    pub premium: Option<Money>,
    /// Signed contract count: positive is long, negative is short.
    pub quantity: i32,
}

impl LegInput {
    /// Build a leg from parsed notation, dating expiry from `today`.
    ///
    /// # Errors
    ///
    /// Returns error if the expiration date is out of calendar range.
    pub fn from_parsed(
        option: &ParsedOption,
        today: NaiveDate,
        premium: Option<Money>,
        quantity: i32,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            right: option.right(),
            strike: option.strike(),
            expiration: option.expiration(today)?,
            premium,
            quantity,
        })
    }
}

/// Underlying state used to price legs without a premium.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Underlying spot price.
    pub spot: Decimal,
    /// Annualized volatility; falls back to the configured default.
    pub volatility: Option<f64>,
}

/// Command to open a strategy.
#[derive(Debug, Clone)]
pub struct OpenStrategyCommand {
    /// Owning user.
    pub user_id: UserId,
    /// Strategy name or alias ("SPREAD", "ic", ...).
    pub strategy_type: String,
    /// Underlying ticker.
    pub ticker: String,
    /// Legs in display order.
    pub legs: Vec<LegInput>,
    /// Debit (positive) or credit (negative); `None` if unknown.
    pub net_cost: Option<Money>,
    /// Needed only when some leg has no premium.
    pub market: Option<MarketSnapshot>,
}

/// Use case for opening strategies.
pub struct OpenStrategyUseCase<R, C>
where
    R: StrategyRepository,
    C: ClockPort,
{
    strategy_repo: Arc<R>,
    clock: Arc<C>,
    pricing: PricingConfig,
    leg_count_policy: LegCountPolicy,
    pricer: BlackScholes,
}

impl<R, C> OpenStrategyUseCase<R, C>
where
    R: StrategyRepository,
    C: ClockPort,
{
    /// Create a new `OpenStrategyUseCase`.
    pub const fn new(
        strategy_repo: Arc<R>,
        clock: Arc<C>,
        pricing: PricingConfig,
        leg_count_policy: LegCountPolicy,
    ) -> Self {
        Self {
            strategy_repo,
            clock,
            pricing,
            leg_count_policy,
            pricer: BlackScholes,
        }
    }

    /// Compose and persist a new strategy.
    ///
    /// # Errors
    ///
    /// - `UnknownStrategyType` if the name does not resolve
    /// - `InvalidLegs` if the legs violate the policy, fail validation, or
    ///   cannot be priced
    /// - `Repository` if the insert fails
    pub async fn execute(&self, cmd: OpenStrategyCommand) -> Result<Strategy, StrategyError> {
        let strategy_type = StrategyType::resolve(&cmd.strategy_type)?;
        self.apply_leg_count_policy(strategy_type, cmd.legs.len())?;

        let today = self.clock.today();
        let legs = cmd
            .legs
            .iter()
            .enumerate()
            .map(|(index, leg)| self.draft_leg(index, leg, cmd.market.as_ref(), today))
            .collect::<Result<Vec<_>, _>>()?;

        let strategy = Strategy::open(OpenStrategyParams {
            user_id: cmd.user_id,
            strategy_type,
            ticker: Ticker::new(cmd.ticker),
            legs,
            net_cost: cmd.net_cost,
        })?;

        self.strategy_repo.insert(&strategy).await?;

        tracing::info!(
            strategy_id = %strategy.id(),
            user_id = %strategy.user_id(),
            strategy_type = %strategy.strategy_type(),
            ticker = %strategy.ticker(),
            legs = strategy.legs().len(),
            "Strategy opened"
        );

        Ok(strategy)
    }

    fn apply_leg_count_policy(
        &self,
        strategy_type: StrategyType,
        leg_count: usize,
    ) -> Result<(), StrategyError> {
        match (strategy_type.check_leg_count(leg_count), self.leg_count_policy) {
            (Ok(()), _) => Ok(()),
            (Err(e), LegCountPolicy::Enforce) => Err(e),
            (Err(e), LegCountPolicy::Advisory) => {
                tracing::warn!(
                    strategy_type = %strategy_type,
                    leg_count,
                    error = %e,
                    "Leg count does not match strategy type"
                );
                Ok(())
            }
        }
    }

    fn draft_leg(
        &self,
        index: usize,
        leg: &LegInput,
        market: Option<&MarketSnapshot>,
        today: NaiveDate,
    ) -> Result<LegDraft, StrategyError> {
        let premium = match (leg.premium, market) {
            (Some(premium), _) => premium,
            (None, Some(market)) => self.price_leg(leg, market, today).map_err(|message| {
                StrategyError::invalid_legs(format!("leg {}: {message}", index + 1))
            })?,
            (None, None) => {
                return Err(StrategyError::invalid_legs(format!(
                    "leg {} has no premium and no market snapshot to price it",
                    index + 1
                )));
            }
        };

        Ok(LegDraft {
            right: leg.right,
            strike: leg.strike,
            expiration: leg.expiration,
            premium,
            quantity: leg.quantity,
        })
    }

    fn price_leg(
        &self,
        leg: &LegInput,
        market: &MarketSnapshot,
        today: NaiveDate,
    ) -> Result<Money, String> {
        let days = (leg.expiration - today).num_days();
        let inputs = PricingInputs {
            spot: to_f64(market.spot)?,
            strike: to_f64(leg.strike)?,
            time_to_expiry_years: days as f64 / f64::from(self.pricing.day_count_basis),
            volatility: market.volatility.unwrap_or(self.pricing.default_volatility),
            risk_free_rate: self.pricing.risk_free_rate,
            right: leg.right,
        };

        let premium = self.pricer.price(&inputs).map_err(|e| e.to_string())?;
        tracing::debug!(strike = %leg.strike, right = %leg.right, %premium, "Priced leg");
        Ok(premium)
    }
}

fn to_f64(value: Decimal) -> Result<f64, String> {
    value
        .to_f64()
        .ok_or_else(|| format!("{value} is not representable as f64"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::FixedClock;
    use crate::application::use_cases::mocks::MockStrategyRepo;
    use crate::domain::strategy::StrategyStatus;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    fn leg(right: OptionRight, strike: Decimal, premium: Option<Decimal>, quantity: i32) -> LegInput {
        LegInput {
            right,
            strike,
            expiration: NaiveDate::from_ymd_opt(2026, 2, 14).unwrap(),
            premium: premium.map(Money::new),
            quantity,
        }
    }

    fn spread_cmd() -> OpenStrategyCommand {
        OpenStrategyCommand {
            user_id: UserId::new("u1"),
            strategy_type: "SPREAD".to_string(),
            ticker: "SPY".to_string(),
            legs: vec![
                leg(OptionRight::Call, dec!(450), Some(dec!(5.20)), 1),
                leg(OptionRight::Call, dec!(455), Some(dec!(2.70)), -1),
            ],
            net_cost: Some(Money::new(dec!(2.50))),
            market: None,
        }
    }

    fn use_case(
        repo: MockStrategyRepo,
        policy: LegCountPolicy,
    ) -> OpenStrategyUseCase<MockStrategyRepo, FixedClock> {
        OpenStrategyUseCase::new(
            Arc::new(repo),
            Arc::new(FixedClock::new(today())),
            PricingConfig::default(),
            policy,
        )
    }

    fn inserting_repo() -> MockStrategyRepo {
        let mut repo = MockStrategyRepo::new();
        repo.expect_insert().times(1).returning(|_| Ok(()));
        repo
    }

    #[tokio::test]
    async fn opens_spread_as_vertical_with_linked_legs() {
        let mut repo = MockStrategyRepo::new();
        repo.expect_insert()
            .withf(|s: &Strategy| s.legs().len() == 2 && s.verify_leg_linkage().is_ok())
            .times(1)
            .returning(|_| Ok(()));

        let strategy = use_case(repo, LegCountPolicy::Enforce)
            .execute(spread_cmd())
            .await
            .unwrap();

        assert_eq!(strategy.strategy_type(), StrategyType::Vertical);
        assert_eq!(strategy.status(), StrategyStatus::Open);
        assert!(strategy.legs().iter().all(|l| l.strategy_id() == strategy.id()));
        assert_eq!(strategy.net_cost(), Some(Money::new(dec!(2.50))));
    }

    #[tokio::test]
    async fn unknown_type_never_touches_repository() {
        let mut repo = MockStrategyRepo::new();
        repo.expect_insert().times(0);

        let mut cmd = spread_cmd();
        cmd.strategy_type = "calendar".to_string();

        let err = use_case(repo, LegCountPolicy::Enforce)
            .execute(cmd)
            .await
            .unwrap_err();
        assert!(matches!(err, StrategyError::UnknownStrategyType { .. }));
    }

    #[tokio::test]
    async fn enforce_policy_rejects_wrong_leg_count() {
        let mut repo = MockStrategyRepo::new();
        repo.expect_insert().times(0);

        let mut cmd = spread_cmd();
        cmd.legs.push(leg(OptionRight::Put, dec!(440), Some(dec!(1.00)), 1));

        let err = use_case(repo, LegCountPolicy::Enforce)
            .execute(cmd)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("expects 2 leg(s), got 3"));
    }

    #[tokio::test]
    async fn advisory_policy_accepts_wrong_leg_count() {
        let mut cmd = spread_cmd();
        cmd.legs.push(leg(OptionRight::Put, dec!(440), Some(dec!(1.00)), 1));

        let strategy = use_case(inserting_repo(), LegCountPolicy::Advisory)
            .execute(cmd)
            .await
            .unwrap();
        assert_eq!(strategy.legs().len(), 3);
    }

    #[tokio::test]
    async fn empty_legs_fail_under_either_policy() {
        for policy in [LegCountPolicy::Enforce, LegCountPolicy::Advisory] {
            let mut repo = MockStrategyRepo::new();
            repo.expect_insert().times(0);

            let mut cmd = spread_cmd();
            cmd.strategy_type = "custom".to_string();
            cmd.legs.clear();

            let err = use_case(repo, policy).execute(cmd).await.unwrap_err();
            assert!(matches!(err, StrategyError::InvalidLegs { .. }));
        }
    }

    #[tokio::test]
    async fn missing_premium_is_priced_from_snapshot() {
        let mut cmd = spread_cmd();
        cmd.legs[1].premium = None;
        cmd.market = Some(MarketSnapshot {
            spot: dec!(452),
            volatility: Some(0.18),
        });

        let strategy = use_case(inserting_repo(), LegCountPolicy::Enforce)
            .execute(cmd)
            .await
            .unwrap();

        let priced = strategy.legs()[1].premium();
        assert!(priced.is_positive());
        assert!(priced < Money::new(dec!(452)));
        assert_eq!(strategy.legs()[0].premium(), Money::new(dec!(5.20)));
    }

    #[tokio::test]
    async fn missing_premium_without_snapshot_fails() {
        let mut repo = MockStrategyRepo::new();
        repo.expect_insert().times(0);

        let mut cmd = spread_cmd();
        cmd.legs[0].premium = None;

        let err = use_case(repo, LegCountPolicy::Enforce)
            .execute(cmd)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("leg 1 has no premium"));
    }

    #[tokio::test]
    async fn expired_leg_cannot_be_priced() {
        let mut repo = MockStrategyRepo::new();
        repo.expect_insert().times(0);

        let mut cmd = spread_cmd();
        cmd.legs[0].premium = None;
        cmd.legs[0].expiration = today();
        cmd.market = Some(MarketSnapshot {
            spot: dec!(452),
            volatility: None,
        });

        let err = use_case(repo, LegCountPolicy::Enforce)
            .execute(cmd)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("time_to_expiry_years"));
    }

    #[tokio::test]
    async fn repository_failure_is_surfaced() {
        let mut repo = MockStrategyRepo::new();
        repo.expect_insert().times(1).returning(|_| {
            Err(StrategyError::Repository {
                message: "disk full".to_string(),
            })
        });

        let err = use_case(repo, LegCountPolicy::Enforce)
            .execute(spread_cmd())
            .await
            .unwrap_err();
        assert!(matches!(err, StrategyError::Repository { .. }));
    }

    #[test]
    fn leg_input_from_parsed() {
        let option = crate::domain::notation::parse_notation("SPY 450c 30d").unwrap();
        let input = LegInput::from_parsed(&option, today(), None, -2).unwrap();
        assert_eq!(input.expiration, NaiveDate::from_ymd_opt(2026, 2, 14).unwrap());
        assert_eq!(input.quantity, -2);
        assert!(input.premium.is_none());
    }
}
