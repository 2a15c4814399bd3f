//! Black-Scholes valuation for European options.
//!
//! ```text
//! d1 = (ln(S/K) + (r + σ²/2)·t) / (σ·√t)
//! d2 = d1 − σ·√t
//! C  = S·N(d1) − K·e^(−r·t)·N(d2)
//! P  = K·e^(−r·t)·N(−d2) − S·N(−d1)
//! ```
//!
//! No dividend yield; the model prices forward from a given volatility.

// Black-Scholes uses standard mathematical notation (s, k, t, r, sigma)
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::distribution::norm_cdf;
use crate::domain::notation::ParsedOption;
use crate::domain::shared::{Money, OptionRight};

// ============================================================================
// Error Types
// ============================================================================

/// Errors from option pricing.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PricingError {
    /// An input is non-finite or outside the model's domain.
    #[error("Invalid input: {field} {message}")]
    InvalidInput {
        /// Offending parameter.
        field: &'static str,
        /// What was wrong with it.
        message: String,
    },
}

impl PricingError {
    fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            message: message.into(),
        }
    }
}

// ============================================================================
// Inputs
// ============================================================================

/// Parameters for a single Black-Scholes valuation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingInputs {
    /// Current underlying price.
    pub spot: f64,
    /// Strike price.
    pub strike: f64,
    /// Time to expiration in years (30 days = 30/365).
    pub time_to_expiry_years: f64,
    /// Annualized volatility as a fraction (0.20 = 20%).
    pub volatility: f64,
    /// Annualized risk-free rate as a fraction (0.05 = 5%).
    pub risk_free_rate: f64,
    /// Call or put.
    pub right: OptionRight,
}

impl PricingInputs {
    /// Build inputs for a parsed contract.
    ///
    /// # Errors
    ///
    /// Returns error if the spot or strike cannot be represented as `f64`.
    pub fn for_parsed(
        option: &ParsedOption,
        spot: Decimal,
        volatility: f64,
        risk_free_rate: f64,
        day_count_basis: u32,
    ) -> Result<Self, PricingError> {
        Ok(Self {
            spot: decimal_to_f64("spot", spot)?,
            strike: decimal_to_f64("strike", option.strike())?,
            time_to_expiry_years: option.time_to_expiry_years(day_count_basis),
            volatility,
            risk_free_rate,
            right: option.right(),
        })
    }

    /// Reject inputs the closed form cannot handle (log and division by √t).
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first offending parameter.
    pub fn validate(&self) -> Result<(), PricingError> {
        let strictly_positive = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("time_to_expiry_years", self.time_to_expiry_years),
            ("volatility", self.volatility),
        ];

        for (field, value) in strictly_positive {
            if !value.is_finite() {
                return Err(PricingError::invalid(field, format!("must be finite, got {value}")));
            }
            if value <= 0.0 {
                return Err(PricingError::invalid(field, format!("must be positive, got {value}")));
            }
        }

        if !self.risk_free_rate.is_finite() {
            return Err(PricingError::invalid(
                "risk_free_rate",
                format!("must be finite, got {}", self.risk_free_rate),
            ));
        }

        Ok(())
    }
}

fn decimal_to_f64(field: &'static str, value: Decimal) -> Result<f64, PricingError> {
    value
        .to_f64()
        .ok_or_else(|| PricingError::invalid(field, format!("{value} is not representable")))
}

// ============================================================================
// Pricer
// ============================================================================

/// Black-Scholes option pricer.
///
/// Stateless; safe to share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholes;

impl BlackScholes {
    /// Theoretical value rounded to cents.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` before computing if any parameter is out of domain.
    pub fn price(&self, inputs: &PricingInputs) -> Result<Money, PricingError> {
        let value = self.theoretical_value(inputs)?;
        Money::try_from_f64(value)
            .map_err(|e| PricingError::invalid("price", e.to_string()))
    }

    /// Unrounded theoretical value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` before computing if any parameter is out of domain.
    pub fn theoretical_value(&self, inputs: &PricingInputs) -> Result<f64, PricingError> {
        inputs.validate()?;

        let PricingInputs {
            spot: s,
            strike: k,
            time_to_expiry_years: t,
            volatility: sigma,
            risk_free_rate: r,
            right,
        } = *inputs;

        let (d1, d2) = d1_d2(s, k, t, r, sigma);
        let discounted_strike = k * (-r * t).exp();

        let value = match right {
            OptionRight::Call => s * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
            OptionRight::Put => discounted_strike * norm_cdf(-d2) - s * norm_cdf(-d1),
        };

        Ok(value)
    }

    /// Price a parsed contract.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the derived inputs are out of domain
    /// (e.g. zero days to expiration).
    pub fn price_parsed(
        &self,
        option: &ParsedOption,
        spot: Decimal,
        volatility: f64,
        risk_free_rate: f64,
        day_count_basis: u32,
    ) -> Result<Money, PricingError> {
        let inputs =
            PricingInputs::for_parsed(option, spot, volatility, risk_free_rate, day_count_basis)?;
        self.price(&inputs)
    }
}

/// Price from raw parameters with a `"call"` / `"put"` contract type.
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown contract type or out-of-domain inputs.
pub fn price(
    spot: f64,
    strike: f64,
    time_to_expiry_years: f64,
    volatility: f64,
    risk_free_rate: f64,
    contract_type: &str,
) -> Result<Money, PricingError> {
    let right = contract_type
        .parse::<OptionRight>()
        .map_err(|e| PricingError::invalid("contract_type", e.to_string()))?;

    BlackScholes.price(&PricingInputs {
        spot,
        strike,
        time_to_expiry_years,
        volatility,
        risk_free_rate,
        right,
    })
}

/// Black-Scholes d1 and d2.
fn d1_d2(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> (f64, f64) {
    let vol_sqrt_t = sigma * t.sqrt();
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}
