//! Strategy errors.

use thiserror::Error;

use super::value_objects::StrategyType;
use crate::domain::shared::StrategyId;

/// Errors that can occur while composing, transitioning, or loading strategies.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StrategyError {
    /// Strategy name is neither a canonical type nor a known alias.
    #[error("Unknown strategy type '{input}': expected one of {accepted}")]
    UnknownStrategyType {
        /// Name as supplied by the caller.
        input: String,
        /// Canonical names, comma separated.
        accepted: String,
    },

    /// No strategy with this id is known to the repository.
    #[error("Strategy not found: {strategy_id}")]
    NotFound {
        /// Strategy ID.
        strategy_id: StrategyId,
    },

    /// Underlying ticker is malformed.
    #[error("Invalid ticker '{ticker}': {message}")]
    InvalidTicker {
        /// Ticker as supplied.
        ticker: String,
        /// What was wrong.
        message: String,
    },

    /// Leg list or an individual leg is unusable.
    #[error("Invalid legs: {message}")]
    InvalidLegs {
        /// Error message.
        message: String,
    },

    /// Storage collaborator failed.
    #[error("Strategy repository error: {message}")]
    Repository {
        /// Error message.
        message: String,
    },
}

impl StrategyError {
    /// Build an `UnknownStrategyType` listing every canonical name.
    #[must_use]
    pub fn unknown_type(input: impl Into<String>) -> Self {
        let accepted = StrategyType::ALL
            .iter()
            .map(StrategyType::canonical_name)
            .collect::<Vec<_>>()
            .join(", ");

        Self::UnknownStrategyType {
            input: input.into(),
            accepted,
        }
    }

    /// Build an `InvalidLegs` error.
    #[must_use]
    pub fn invalid_legs(message: impl Into<String>) -> Self {
        Self::InvalidLegs {
            message: message.into(),
        }
    }
}
