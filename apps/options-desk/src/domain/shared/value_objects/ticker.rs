//! Ticker value object for underlying symbols.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// Longest ticker accepted by [`Ticker::validate`].
const MAX_TICKER_LEN: usize = 10;

/// An underlying ticker symbol ("NVDA", "SPY", "BRK.B").
///
/// Always stored uppercase. No lookup against a known-symbol list is made.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    /// Create a new ticker, normalized to uppercase.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().to_uppercase())
    }

    /// Get the ticker string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Validate the ticker shape.
    ///
    /// # Errors
    ///
    /// Returns error if the ticker is empty, too long, or contains characters
    /// other than ASCII alphanumerics, `.`, `-`, or `/`.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.0.is_empty() {
            return Err(DomainError::InvalidValue {
                field: "ticker".to_string(),
                message: "Ticker cannot be empty".to_string(),
            });
        }

        if self.0.len() > MAX_TICKER_LEN {
            return Err(DomainError::InvalidValue {
                field: "ticker".to_string(),
                message: format!("Ticker exceeds {MAX_TICKER_LEN} characters"),
            });
        }

        if !self
            .0
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '/'))
        {
            return Err(DomainError::InvalidValue {
                field: "ticker".to_string(),
                message: "Ticker contains invalid characters".to_string(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Ticker {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Ticker {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
