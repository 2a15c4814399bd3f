//! Crate-level error handling for the options desk.
//!
//! Each bounded context has its own error enum. [`DeskError`] wraps them for
//! callers that cross contexts and maps every failure to a stable
//! [`ErrorCode`].
//!
//! # Categories
//!
//! | Category | Codes | CLI exit status |
//! |----------|-------|-----------------|
//! | Invalid input | `MALFORMED_NOTATION`, `NUMERIC_FORMAT`, `INVALID_PRICING_INPUT`, `UNKNOWN_STRATEGY_TYPE`, `INVALID_TICKER`, `INVALID_LEGS`, `INVALID_HOLDING`, `INVALID_CONFIG` | 2 |
//! | Not found | `STRATEGY_NOT_FOUND`, `HOLDING_NOT_FOUND` | 3 |
//! | Internal | `REPOSITORY_ERROR` | 1 |

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::holding::HoldingError;
use crate::domain::notation::NotationError;
use crate::domain::strategy::StrategyError;
use crate::pricing::PricingError;

/// Stable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Invalid input
    /// Notation had fewer than three tokens.
    MalformedNotation,
    /// Strike or day count was not a number.
    NumericFormat,
    /// Pricing parameter out of domain.
    InvalidPricingInput,
    /// Strategy name not recognized.
    UnknownStrategyType,
    /// Strategy ticker rejected.
    InvalidTicker,
    /// Legs rejected.
    InvalidLegs,
    /// Holding fields rejected.
    InvalidHolding,
    /// Configuration could not be loaded.
    InvalidConfig,

    // Not found
    /// Strategy id unknown.
    StrategyNotFound,
    /// Holding id unknown.
    HoldingNotFound,

    // Internal
    /// Storage collaborator failed.
    RepositoryError,
}

/// Broad class of an error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Caller supplied bad input; retrying the same input fails the same way.
    InvalidInput,
    /// Referenced entity does not exist.
    NotFound,
    /// Failure outside the caller's control.
    Internal,
}

impl ErrorCode {
    /// Category of this code.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedNotation
            | Self::NumericFormat
            | Self::InvalidPricingInput
            | Self::UnknownStrategyType
            | Self::InvalidTicker
            | Self::InvalidLegs
            | Self::InvalidHolding
            | Self::InvalidConfig => ErrorCategory::InvalidInput,

            Self::StrategyNotFound | Self::HoldingNotFound => ErrorCategory::NotFound,

            Self::RepositoryError => ErrorCategory::Internal,
        }
    }

    /// Process exit status for the CLI.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Internal => 1,
            ErrorCategory::InvalidInput => 2,
            ErrorCategory::NotFound => 3,
        }
    }

    /// Reason string, identical to the serialized form.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::MalformedNotation => "MALFORMED_NOTATION",
            Self::NumericFormat => "NUMERIC_FORMAT",
            Self::InvalidPricingInput => "INVALID_PRICING_INPUT",
            Self::UnknownStrategyType => "UNKNOWN_STRATEGY_TYPE",
            Self::InvalidTicker => "INVALID_TICKER",
            Self::InvalidLegs => "INVALID_LEGS",
            Self::InvalidHolding => "INVALID_HOLDING",
            Self::InvalidConfig => "INVALID_CONFIG",
            Self::StrategyNotFound => "STRATEGY_NOT_FOUND",
            Self::HoldingNotFound => "HOLDING_NOT_FOUND",
            Self::RepositoryError => "REPOSITORY_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// Any error the desk can produce.
#[derive(Debug, Error)]
pub enum DeskError {
    /// Notation parse failure.
    #[error(transparent)]
    Notation(#[from] NotationError),

    /// Pricing failure.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Strategy failure.
    #[error(transparent)]
    Strategy(#[from] StrategyError),

    /// Holding failure.
    #[error(transparent)]
    Holding(#[from] HoldingError),

    /// Configuration failure.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl DeskError {
    /// Stable code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Notation(e) => notation_code(e),
            Self::Pricing(PricingError::InvalidInput { .. }) => ErrorCode::InvalidPricingInput,
            Self::Strategy(e) => match e {
                StrategyError::UnknownStrategyType { .. } => ErrorCode::UnknownStrategyType,
                StrategyError::NotFound { .. } => ErrorCode::StrategyNotFound,
                StrategyError::InvalidTicker { .. } => ErrorCode::InvalidTicker,
                StrategyError::InvalidLegs { .. } => ErrorCode::InvalidLegs,
                StrategyError::Repository { .. } => ErrorCode::RepositoryError,
            },
            Self::Holding(e) => match e {
                HoldingError::NotFound { .. } => ErrorCode::HoldingNotFound,
                HoldingError::InvalidHolding { .. } => ErrorCode::InvalidHolding,
                HoldingError::Notation(inner) => notation_code(inner),
                HoldingError::Repository { .. } => ErrorCode::RepositoryError,
            },
            Self::Config(_) => ErrorCode::InvalidConfig,
        }
    }

    /// Key-value context for the response body.
    #[must_use]
    pub fn details(&self) -> HashMap<String, String> {
        let mut details = HashMap::new();

        match self {
            Self::Notation(NotationError::NumericFormat { field, value })
            | Self::Holding(HoldingError::Notation(NotationError::NumericFormat { field, value })) => {
                details.insert("field".to_string(), field.to_string());
                details.insert("value".to_string(), value.clone());
            }
            Self::Pricing(PricingError::InvalidInput { field, .. }) => {
                details.insert("field".to_string(), (*field).to_string());
            }
            Self::Strategy(StrategyError::NotFound { strategy_id }) => {
                details.insert("strategy_id".to_string(), strategy_id.to_string());
            }
            Self::Strategy(StrategyError::InvalidTicker { ticker, .. }) => {
                details.insert("ticker".to_string(), ticker.clone());
            }
            Self::Strategy(StrategyError::UnknownStrategyType { input, accepted }) => {
                details.insert("input".to_string(), input.clone());
                details.insert("accepted".to_string(), accepted.clone());
            }
            Self::Holding(HoldingError::NotFound { holding_id }) => {
                details.insert("holding_id".to_string(), holding_id.to_string());
            }
            _ => {}
        }

        details
    }

    /// Serializable response body.
    #[must_use]
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.code(),
            message: self.to_string(),
            details: self.details(),
        }
    }
}

const fn notation_code(error: &NotationError) -> ErrorCode {
    match error {
        NotationError::MalformedNotation { .. } => ErrorCode::MalformedNotation,
        NotationError::NumericFormat { .. } => ErrorCode::NumericFormat,
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Additional details.
    pub details: HashMap<String, String>,
}
