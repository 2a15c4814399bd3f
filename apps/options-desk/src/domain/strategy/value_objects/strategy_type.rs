//! Strategy Type Value Object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::strategy::errors::StrategyError;

/// Canonical multi-leg strategy shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrategyType {
    /// One contract.
    Single,
    /// Two strikes, same expiry.
    Vertical,
    /// Butterfly: long wings, short body.
    Fly,
    /// Call and put at the same strike.
    Straddle,
    /// OTM put spread plus OTM call spread.
    IronCondor,
    /// Anything else; leg count is free.
    Custom,
}

/// Every name `resolve` accepts, after normalization, mapped to its type.
const NAME_TABLE: &[(&str, StrategyType)] = &[
    ("SINGLE", StrategyType::Single),
    ("VERTICAL", StrategyType::Vertical),
    ("SPREAD", StrategyType::Vertical),
    ("FLY", StrategyType::Fly),
    ("BUTTERFLY", StrategyType::Fly),
    ("STRADDLE", StrategyType::Straddle),
    ("IRON_CONDOR", StrategyType::IronCondor),
    ("IC", StrategyType::IronCondor),
    ("CUSTOM", StrategyType::Custom),
];

impl StrategyType {
    /// All variants in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Single,
        Self::Vertical,
        Self::Fly,
        Self::Straddle,
        Self::IronCondor,
        Self::Custom,
    ];

    /// Resolve a user-supplied name, including aliases.
    ///
    /// Matching ignores case and surrounding whitespace; `-` and inner
    /// spaces are read as `_`, so `"iron condor"` resolves.
    ///
    /// # Errors
    ///
    /// Returns `UnknownStrategyType` if the name is not in the table.
    pub fn resolve(name: &str) -> Result<Self, StrategyError> {
        let normalized = normalize(name);

        NAME_TABLE
            .iter()
            .find(|(candidate, _)| *candidate == normalized)
            .map(|(_, ty)| *ty)
            .ok_or_else(|| StrategyError::unknown_type(name))
    }

    /// Canonical upper-snake name ("IRON_CONDOR").
    #[must_use]
    pub const fn canonical_name(&self) -> &'static str {
        match self {
            Self::Single => "SINGLE",
            Self::Vertical => "VERTICAL",
            Self::Fly => "FLY",
            Self::Straddle => "STRADDLE",
            Self::IronCondor => "IRON_CONDOR",
            Self::Custom => "CUSTOM",
        }
    }

    /// Names that resolve to this type besides the canonical one.
    #[must_use]
    pub fn aliases(&self) -> Vec<&'static str> {
        NAME_TABLE
            .iter()
            .filter(|(name, ty)| ty == self && *name != self.canonical_name())
            .map(|(name, _)| *name)
            .collect()
    }

    /// Expected number of legs, or `None` for `Custom`.
    #[must_use]
    pub const fn expected_leg_count(&self) -> Option<usize> {
        match self {
            Self::Single => Some(1),
            Self::Vertical | Self::Straddle => Some(2),
            Self::Fly => Some(3),
            Self::IronCondor => Some(4),
            Self::Custom => None,
        }
    }

    /// Check a leg count against the expected shape.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLegs` when the count differs from
    /// [`expected_leg_count`](Self::expected_leg_count).
    pub fn check_leg_count(&self, count: usize) -> Result<(), StrategyError> {
        match self.expected_leg_count() {
            Some(expected) if expected != count => Err(StrategyError::invalid_legs(format!(
                "{self} expects {expected} leg(s), got {count}"
            ))),
            _ => Ok(()),
        }
    }
}

fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl FromStr for StrategyType {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}
