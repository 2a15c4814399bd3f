//! Errors raised by value objects and aggregate invariants.

use thiserror::Error;

/// Validation and invariant failures below the bounded-context errors.
///
/// Contexts wrap these into their own enums (e.g. a bad ticker becomes
/// `StrategyError::InvalidLegs`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field held a value outside its domain.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// What was wrong.
        message: String,
    },

    /// An aggregate was found in a state its constructor never produces.
    #[error("Invariant violation in {aggregate}: {invariant} (state: {state})")]
    InvariantViolation {
        /// Aggregate type.
        aggregate: String,
        /// The rule that failed.
        invariant: String,
        /// Offending state.
        state: String,
    },
}
