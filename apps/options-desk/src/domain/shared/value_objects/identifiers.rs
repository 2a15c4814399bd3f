//! Strongly-typed identifiers for domain entities.
//!
//! These prevent mixing up IDs from different contexts.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Generate a new unique identifier using UUID v4.
            #[must_use]
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            /// Get the inner string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

define_id!(StrategyId, "Unique identifier for a strategy aggregate.");
define_id!(HoldingId, "Unique identifier for a single-contract holding.");
define_id!(
    UserId,
    "Identifier of the user who owns strategies and holdings."
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_id_new_and_display() {
        let id = StrategyId::new("strat-123");
        assert_eq!(id.as_str(), "strat-123");
        assert_eq!(format!("{id}"), "strat-123");
    }

    #[test]
    fn strategy_id_generate_is_unique() {
        assert_ne!(StrategyId::generate(), StrategyId::generate());
    }

    #[test]
    fn user_id_from_conversions() {
        let id: UserId = "u1".into();
        assert_eq!(id.as_str(), "u1");

        let id: UserId = String::from("u2").into();
        assert_eq!(id.into_inner(), "u2");
    }

    #[test]
    fn holding_id_generate() {
        assert!(!HoldingId::generate().as_str().is_empty());
    }

    #[test]
    fn serde_is_transparent() {
        let id = StrategyId::new("strat-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"strat-1\"");

        let parsed: StrategyId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
