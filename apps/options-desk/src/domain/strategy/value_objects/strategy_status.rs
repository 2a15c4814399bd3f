//! Strategy lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::shared::DomainError;

/// Lifecycle state of a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrategyStatus {
    /// Position is live.
    #[default]
    Open,
    /// Position has been closed.
    Closed,
}

impl StrategyStatus {
    /// Returns true if the strategy is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Returns true if the strategy is closed.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl fmt::Display for StrategyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Closed => write!(f, "CLOSED"),
        }
    }
}

impl FromStr for StrategyStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OPEN" => Ok(Self::Open),
            "CLOSED" => Ok(Self::Closed),
            other => Err(DomainError::InvalidValue {
                field: "status".to_string(),
                message: format!("expected OPEN or CLOSED, got {other}"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_default_is_open() {
        assert_eq!(StrategyStatus::default(), StrategyStatus::Open);
        assert!(StrategyStatus::Open.is_open());
        assert!(StrategyStatus::Closed.is_closed());
    }

    #[test]
    fn status_from_str() {
        assert_eq!("closed".parse::<StrategyStatus>().unwrap(), StrategyStatus::Closed);
        assert_eq!(" Open ".parse::<StrategyStatus>().unwrap(), StrategyStatus::Open);
        assert!("pending".parse::<StrategyStatus>().is_err());
    }

    #[test]
    fn status_serde() {
        let json = serde_json::to_string(&StrategyStatus::Closed).unwrap();
        assert_eq!(json, "\"CLOSED\"");
    }
}
