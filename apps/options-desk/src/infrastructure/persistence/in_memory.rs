//! In-memory repositories.
//!
//! Maps guarded by `std::sync::RwLock`. Each aggregate is written in one
//! lock acquisition, so readers never see a strategy with half its legs.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::holding::{Holding, HoldingError, HoldingRepository};
use crate::domain::shared::{HoldingId, StrategyId, Ticker, UserId};
use crate::domain::strategy::{Strategy, StrategyError, StrategyRepository, StrategyStatus};

/// In-memory implementation of `StrategyRepository`.
#[derive(Debug, Default)]
pub struct InMemoryStrategyRepository {
    strategies: RwLock<HashMap<StrategyId, Strategy>>,
}

impl InMemoryStrategyRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored strategies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn collect_where(&self, predicate: impl Fn(&Strategy) -> bool) -> Vec<Strategy> {
        let strategies = self
            .strategies
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        let mut matched: Vec<Strategy> = strategies
            .values()
            .filter(|s| predicate(s))
            .cloned()
            .collect();
        matched.sort_by(|a, b| {
            a.opened_at()
                .cmp(&b.opened_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        matched
    }
}

#[async_trait]
impl StrategyRepository for InMemoryStrategyRepository {
    async fn insert(&self, strategy: &Strategy) -> Result<(), StrategyError> {
        strategy
            .verify_leg_linkage()
            .map_err(|e| StrategyError::invalid_legs(e.to_string()))?;

        let mut strategies = self
            .strategies
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if strategies.contains_key(strategy.id()) {
            return Err(StrategyError::Repository {
                message: format!("strategy {} already exists", strategy.id()),
            });
        }

        strategies.insert(strategy.id().clone(), strategy.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &StrategyId) -> Result<Option<Strategy>, StrategyError> {
        let strategies = self
            .strategies
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(strategies.get(id).cloned())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Strategy>, StrategyError> {
        Ok(self.collect_where(|s| s.user_id() == user_id))
    }

    async fn find_by_user_and_status(
        &self,
        user_id: &UserId,
        status: StrategyStatus,
    ) -> Result<Vec<Strategy>, StrategyError> {
        Ok(self.collect_where(|s| s.user_id() == user_id && s.status() == status))
    }

    async fn update_status(&self, strategy: &Strategy) -> Result<(), StrategyError> {
        let mut strategies = self
            .strategies
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let Some(stored) = strategies.get_mut(strategy.id()) else {
            return Err(StrategyError::NotFound {
                strategy_id: strategy.id().clone(),
            });
        };

        stored.adopt_status(strategy);
        Ok(())
    }
}

/// In-memory implementation of `HoldingRepository`.
#[derive(Debug, Default)]
pub struct InMemoryHoldingRepository {
    holdings: RwLock<HashMap<HoldingId, Holding>>,
}

impl InMemoryHoldingRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored holdings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.holdings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl HoldingRepository for InMemoryHoldingRepository {
    async fn insert(&self, holding: &Holding) -> Result<(), HoldingError> {
        let mut holdings = self
            .holdings
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if holdings.contains_key(holding.id()) {
            return Err(HoldingError::Repository {
                message: format!("holding {} already exists", holding.id()),
            });
        }

        holdings.insert(holding.id().clone(), holding.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &HoldingId) -> Result<Option<Holding>, HoldingError> {
        let holdings = self.holdings.read().unwrap_or_else(PoisonError::into_inner);
        Ok(holdings.get(id).cloned())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Holding>, HoldingError> {
        let holdings = self.holdings.read().unwrap_or_else(PoisonError::into_inner);

        let mut matched: Vec<Holding> = holdings
            .values()
            .filter(|h| h.user_id() == user_id)
            .cloned()
            .collect();
        matched.sort_by(|a, b| {
            a.added_at()
                .cmp(&b.added_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        Ok(matched)
    }

    async fn delete(&self, id: &HoldingId) -> Result<(), HoldingError> {
        let mut holdings = self
            .holdings
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        holdings
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| HoldingError::NotFound {
                holding_id: id.clone(),
            })
    }

    async fn delete_by_user_and_ticker(
        &self,
        user_id: &UserId,
        ticker: &Ticker,
    ) -> Result<usize, HoldingError> {
        let mut holdings = self
            .holdings
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let before = holdings.len();
        holdings.retain(|_, h| !(h.user_id() == user_id && h.ticker() == ticker));
        Ok(before - holdings.len())
    }
}
