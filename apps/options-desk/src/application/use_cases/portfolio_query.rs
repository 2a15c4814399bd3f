//! Portfolio Query Use Case
//!
//! Read-only filters over persisted strategies and holdings.

use std::sync::Arc;

use crate::application::dto::PortfolioSummaryDto;
use crate::application::ports::ClockPort;
use crate::domain::holding::{Holding, HoldingError, HoldingRepository};
use crate::domain::shared::{Money, StrategyId, UserId};
use crate::domain::strategy::{Strategy, StrategyError, StrategyRepository, StrategyStatus};
use crate::error::DeskError;

/// Use case for portfolio reads.
pub struct PortfolioQueryUseCase<S, H, C>
where
    S: StrategyRepository,
    H: HoldingRepository,
    C: ClockPort,
{
    strategy_repo: Arc<S>,
    holding_repo: Arc<H>,
    clock: Arc<C>,
}

impl<S, H, C> PortfolioQueryUseCase<S, H, C>
where
    S: StrategyRepository,
    H: HoldingRepository,
    C: ClockPort,
{
    /// Create a new `PortfolioQueryUseCase`.
    pub const fn new(strategy_repo: Arc<S>, holding_repo: Arc<H>, clock: Arc<C>) -> Self {
        Self {
            strategy_repo,
            holding_repo,
            clock,
        }
    }

    /// Open strategies for a user.
    ///
    /// # Errors
    ///
    /// Returns error if the repository query fails.
    pub async fn list_open(&self, user_id: &UserId) -> Result<Vec<Strategy>, StrategyError> {
        self.list_by_user_and_status(user_id, StrategyStatus::Open)
            .await
    }

    /// Strategies for a user in one status.
    ///
    /// # Errors
    ///
    /// Returns error if the repository query fails.
    pub async fn list_by_user_and_status(
        &self,
        user_id: &UserId,
        status: StrategyStatus,
    ) -> Result<Vec<Strategy>, StrategyError> {
        self.strategy_repo
            .find_by_user_and_status(user_id, status)
            .await
    }

    /// Every strategy a user has, open or closed.
    ///
    /// # Errors
    ///
    /// Returns error if the repository query fails.
    pub async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Strategy>, StrategyError> {
        self.strategy_repo.find_by_user(user_id).await
    }

    /// One strategy by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub async fn get_strategy(&self, strategy_id: &StrategyId) -> Result<Strategy, StrategyError> {
        self.strategy_repo
            .find_by_id(strategy_id)
            .await?
            .ok_or_else(|| StrategyError::NotFound {
                strategy_id: strategy_id.clone(),
            })
    }

    /// Every holding a user has.
    ///
    /// # Errors
    ///
    /// Returns error if the repository query fails.
    pub async fn holdings(&self, user_id: &UserId) -> Result<Vec<Holding>, HoldingError> {
        self.holding_repo.find_by_user(user_id).await
    }

    /// Holdings that have not expired as of today.
    ///
    /// # Errors
    ///
    /// Returns error if the repository query fails.
    pub async fn active_holdings(&self, user_id: &UserId) -> Result<Vec<Holding>, HoldingError> {
        let today = self.clock.today();
        let mut holdings = self.holding_repo.find_by_user(user_id).await?;
        holdings.retain(|h| h.is_active_on(today));
        Ok(holdings)
    }

    /// Counts and known net cost across a user's book.
    ///
    /// # Errors
    ///
    /// Returns error if either repository query fails.
    pub async fn summary(&self, user_id: &UserId) -> Result<PortfolioSummaryDto, DeskError> {
        let today = self.clock.today();
        let strategies = self.list_by_user(user_id).await?;
        let holdings = self.holdings(user_id).await?;

        let (open, closed): (Vec<_>, Vec<_>) =
            strategies.iter().partition(|s| s.status().is_open());

        let open_net_cost: Money = open.iter().filter_map(|s| s.net_cost()).sum();
        let unknown_net_cost = open.iter().filter(|s| s.net_cost().is_none()).count();

        Ok(PortfolioSummaryDto {
            user_id: user_id.to_string(),
            as_of: today,
            open_strategies: open.len(),
            closed_strategies: closed.len(),
            open_net_cost: open_net_cost.amount(),
            open_strategies_without_net_cost: unknown_net_cost,
            holdings: holdings.len(),
            active_holdings: holdings.iter().filter(|h| h.is_active_on(today)).count(),
        })
    }
}
