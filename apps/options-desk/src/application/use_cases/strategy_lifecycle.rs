//! Strategy Lifecycle Use Case
//!
//! Close and reopen. Repeating a transition the strategy is already in is a
//! no-op and skips the write.

use std::sync::Arc;

use crate::domain::shared::StrategyId;
use crate::domain::strategy::{Strategy, StrategyError, StrategyRepository};

/// Use case for strategy status transitions.
pub struct StrategyLifecycleUseCase<R>
where
    R: StrategyRepository,
{
    strategy_repo: Arc<R>,
}

impl<R> StrategyLifecycleUseCase<R>
where
    R: StrategyRepository,
{
    /// Create a new `StrategyLifecycleUseCase`.
    pub const fn new(strategy_repo: Arc<R>) -> Self {
        Self { strategy_repo }
    }

    /// Close a strategy.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id, or a repository error.
    pub async fn close(&self, strategy_id: &StrategyId) -> Result<Strategy, StrategyError> {
        let mut strategy = self.load(strategy_id).await?;

        if strategy.close() {
            self.strategy_repo.update_status(&strategy).await?;
            tracing::info!(strategy_id = %strategy_id, "Strategy closed");
        } else {
            tracing::debug!(strategy_id = %strategy_id, "Strategy already closed");
        }

        Ok(strategy)
    }

    /// Return a closed strategy to open.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id, or a repository error.
    pub async fn reopen(&self, strategy_id: &StrategyId) -> Result<Strategy, StrategyError> {
        let mut strategy = self.load(strategy_id).await?;

        if strategy.reopen() {
            self.strategy_repo.update_status(&strategy).await?;
            tracing::info!(strategy_id = %strategy_id, "Strategy reopened");
        } else {
            tracing::debug!(strategy_id = %strategy_id, "Strategy already open");
        }

        Ok(strategy)
    }

    async fn load(&self, strategy_id: &StrategyId) -> Result<Strategy, StrategyError> {
        self.strategy_repo
            .find_by_id(strategy_id)
            .await?
            .ok_or_else(|| StrategyError::NotFound {
                strategy_id: strategy_id.clone(),
            })
    }
}
