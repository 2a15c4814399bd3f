//! Notation Errors

use std::fmt;

use thiserror::Error;

/// Which numeric field of a notation string failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotationField {
    /// Strike price (second token).
    Strike,
    /// Days to expiration (third token).
    Days,
}

impl fmt::Display for NotationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strike => write!(f, "strike"),
            Self::Days => write!(f, "days"),
        }
    }
}

/// Errors produced while parsing contract notation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Fewer than three whitespace-separated tokens.
    #[error(
        "Malformed notation '{input}': expected <TICKER> <STRIKE>[C|P] <DAYS>[D], found {tokens} token(s)"
    )]
    MalformedNotation {
        /// The raw input.
        input: String,
        /// Number of tokens found.
        tokens: usize,
    },

    /// A numeric token could not be parsed.
    #[error("Invalid {field} '{value}': not a number")]
    NumericFormat {
        /// Offending field.
        field: NotationField,
        /// The text that failed to parse.
        value: String,
    },
}
