//! Strategy composition configuration.

use serde::{Deserialize, Serialize};

use crate::domain::strategy::LegCountPolicy;

/// Strategy composition configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StrategiesConfig {
    /// What to do when a strategy's legs do not match its type.
    #[serde(default)]
    pub leg_count_policy: LegCountPolicy,
}
