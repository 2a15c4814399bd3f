//! Shorthand contract notation parser.
//!
//! Grammar (case-insensitive, whitespace separated):
//!
//! ```text
//! TICKER STRIKE[C|P] DAYS[D]
//! ```
//!
//! - `NVDA 150c 30d`: NVDA call, $150 strike, 30 days
//! - `AAPL 200p 45`: AAPL put, $200 strike, 45 days
//! - `TSLA 300 20d`: TSLA call (default), $300 strike, 20 days
//!
//! Tokens after the third are ignored.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::errors::{NotationError, NotationField};
use super::parsed_option::ParsedOption;
use crate::domain::shared::{OptionRight, Ticker};

/// Separators accepted between contracts in [`parse_notation_list`].
const CONTRACT_SEPARATORS: [char; 3] = [',', ';', '\n'];

/// Parse a single contract from shorthand notation.
///
/// # Errors
///
/// Returns `MalformedNotation` when fewer than three tokens are present and
/// `NumericFormat` when the strike or day count is not a number.
pub fn parse_notation(input: &str) -> Result<ParsedOption, NotationError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();

    let [ticker, strike, days, ..] = tokens.as_slice() else {
        return Err(NotationError::MalformedNotation {
            input: input.trim().to_string(),
            tokens: tokens.len(),
        });
    };

    let (strike, right) = parse_strike(strike)?;
    let days = parse_days(days)?;

    Ok(ParsedOption::new(Ticker::new(*ticker), strike, right, days))
}

/// Parse several contracts separated by `,`, `;`, or newlines.
///
/// Blank segments are skipped, so trailing separators are harmless.
///
/// # Errors
///
/// Returns the first contract's parse error.
pub fn parse_notation_list(input: &str) -> Result<Vec<ParsedOption>, NotationError> {
    input
        .split(CONTRACT_SEPARATORS)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse_notation)
        .collect()
}

/// Split `150c` / `200P` / `300` into strike and right. No suffix means call.
fn parse_strike(token: &str) -> Result<(Decimal, OptionRight), NotationError> {
    let upper = token.to_ascii_uppercase();

    let (digits, right) = if let Some(prefix) = upper.strip_suffix('C') {
        (prefix, OptionRight::Call)
    } else if let Some(prefix) = upper.strip_suffix('P') {
        (prefix, OptionRight::Put)
    } else {
        (upper.as_str(), OptionRight::Call)
    };

    let strike = Decimal::from_str(digits).map_err(|_| NotationError::NumericFormat {
        field: NotationField::Strike,
        value: token.to_string(),
    })?;

    Ok((strike, right))
}

/// Parse `30d` / `30D` / `30` into a day count.
fn parse_days(token: &str) -> Result<i32, NotationError> {
    let digits = token
        .strip_suffix(['D', 'd'])
        .unwrap_or(token);

    digits
        .parse::<i32>()
        .map_err(|_| NotationError::NumericFormat {
            field: NotationField::Days,
            value: token.to_string(),
        })
}

impl FromStr for ParsedOption {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_notation(s)
    }
}
