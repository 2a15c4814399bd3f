//! Leg-count policy applied when opening strategies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a mismatch between a strategy type's expected leg count and the
/// supplied legs is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegCountPolicy {
    /// Reject the strategy with `InvalidLegs`.
    #[default]
    Enforce,
    /// Accept the strategy and log a warning.
    Advisory,
}

impl fmt::Display for LegCountPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enforce => write!(f, "enforce"),
            Self::Advisory => write!(f, "advisory"),
        }
    }
}
