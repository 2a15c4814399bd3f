//! Holding errors.

use thiserror::Error;

use crate::domain::notation::NotationError;
use crate::domain::shared::HoldingId;

/// Errors from the holdings book.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HoldingError {
    /// No holding with this id.
    #[error("Holding not found: {holding_id}")]
    NotFound {
        /// Holding ID.
        holding_id: HoldingId,
    },

    /// Holding fields failed validation.
    #[error("Invalid holding: {message}")]
    InvalidHolding {
        /// Error message.
        message: String,
    },

    /// Contract notation could not be parsed.
    #[error(transparent)]
    Notation(#[from] NotationError),

    /// Storage collaborator failed.
    #[error("Holding repository error: {message}")]
    Repository {
        /// Error message.
        message: String,
    },
}
