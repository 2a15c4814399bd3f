//! Pricing model configuration.

use serde::{Deserialize, Serialize};

/// Pricing model configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Risk-free rate (annualized, fraction).
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,
    /// Days per year when converting day counts to year fractions.
    #[serde(default = "default_day_count_basis")]
    pub day_count_basis: u32,
    /// Volatility used when a quote does not supply one.
    #[serde(default = "default_volatility")]
    pub default_volatility: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: default_risk_free_rate(),
            day_count_basis: default_day_count_basis(),
            default_volatility: default_volatility(),
        }
    }
}

const fn default_risk_free_rate() -> f64 {
    0.05
}

const fn default_day_count_basis() -> u32 {
    365
}

const fn default_volatility() -> f64 {
    0.20
}
