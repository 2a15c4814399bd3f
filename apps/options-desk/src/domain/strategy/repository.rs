//! Strategy Repository Trait
//!
//! Defines the persistence abstraction for strategies.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::aggregate::Strategy;
use super::errors::StrategyError;
use super::value_objects::StrategyStatus;
use crate::domain::shared::{StrategyId, UserId};

/// Repository trait for Strategy persistence.
///
/// Aggregates are written whole; no partial leg writes are exposed.
#[async_trait]
pub trait StrategyRepository: Send + Sync {
    /// Insert a newly opened strategy with all of its legs.
    ///
    /// # Errors
    ///
    /// Returns error if the id already exists or persistence fails.
    async fn insert(&self, strategy: &Strategy) -> Result<(), StrategyError>;

    /// Find a strategy by ID.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_id(&self, id: &StrategyId) -> Result<Option<Strategy>, StrategyError>;

    /// All strategies for a user, in any status.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Strategy>, StrategyError>;

    /// Strategies for a user in the given status.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_user_and_status(
        &self,
        user_id: &UserId,
        status: StrategyStatus,
    ) -> Result<Vec<Strategy>, StrategyError>;

    /// Persist a status transition made on the aggregate.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the strategy does not exist.
    async fn update_status(&self, strategy: &Strategy) -> Result<(), StrategyError>;
}
