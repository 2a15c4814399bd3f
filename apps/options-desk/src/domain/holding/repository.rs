//! Holding Repository Trait

use async_trait::async_trait;

use super::errors::HoldingError;
use super::holding::Holding;
use crate::domain::shared::{HoldingId, Ticker, UserId};

/// Repository trait for Holding persistence.
#[async_trait]
pub trait HoldingRepository: Send + Sync {
    /// Insert a new holding.
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails.
    async fn insert(&self, holding: &Holding) -> Result<(), HoldingError>;

    /// Find a holding by ID.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_id(&self, id: &HoldingId) -> Result<Option<Holding>, HoldingError>;

    /// All holdings for a user.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Holding>, HoldingError>;

    /// Delete a holding by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the holding does not exist.
    async fn delete(&self, id: &HoldingId) -> Result<(), HoldingError>;

    /// Delete every holding a user has on a ticker, returning how many were removed.
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails.
    async fn delete_by_user_and_ticker(
        &self,
        user_id: &UserId,
        ticker: &Ticker,
    ) -> Result<usize, HoldingError>;
}
