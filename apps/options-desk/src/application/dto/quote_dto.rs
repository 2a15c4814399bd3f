//! Quote DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::notation::ParsedOption;

/// Theoretical price of a parsed contract with the inputs used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteDto {
    /// The contract.
    pub contract: ParsedOption,
    /// Underlying spot.
    pub spot: Decimal,
    /// Volatility used.
    pub volatility: f64,
    /// Risk-free rate used.
    pub risk_free_rate: f64,
    /// Year fraction used.
    pub time_to_expiry_years: f64,
    /// Theoretical price, rounded to cents.
    pub price: Decimal,
}
