//! Parsed Option Value Object

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{DomainError, OptionRight, Ticker};

/// A contract specification produced from shorthand notation.
///
/// Immutable: fields are only set by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedOption {
    ticker: Ticker,
    strike: Decimal,
    right: OptionRight,
    days_to_expiration: i32,
}

impl ParsedOption {
    pub(super) const fn new(
        ticker: Ticker,
        strike: Decimal,
        right: OptionRight,
        days_to_expiration: i32,
    ) -> Self {
        Self {
            ticker,
            strike,
            right,
            days_to_expiration,
        }
    }

    /// Underlying ticker, uppercased.
    #[must_use]
    pub const fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Strike price.
    #[must_use]
    pub const fn strike(&self) -> Decimal {
        self.strike
    }

    /// Call or put.
    #[must_use]
    pub const fn right(&self) -> OptionRight {
        self.right
    }

    /// Calendar days until expiration.
    #[must_use]
    pub const fn days_to_expiration(&self) -> i32 {
        self.days_to_expiration
    }

    /// Time to expiration as a year fraction on the given day-count basis.
    #[must_use]
    pub fn time_to_expiry_years(&self, day_count_basis: u32) -> f64 {
        f64::from(self.days_to_expiration) / f64::from(day_count_basis)
    }

    /// Expiration date counted from `today`.
    ///
    /// # Errors
    ///
    /// Returns error if the resulting date falls outside the calendar range.
    pub fn expiration(&self, today: NaiveDate) -> Result<NaiveDate, DomainError> {
        expiration_after(today, self.days_to_expiration)
    }
}

/// Calendar date `days` after `today` (before it, for negative counts).
///
/// # Errors
///
/// Returns error if the resulting date falls outside the calendar range.
pub fn expiration_after(today: NaiveDate, days: i32) -> Result<NaiveDate, DomainError> {
    let span = Days::new(u64::from(days.unsigned_abs()));
    let expiration = if days >= 0 {
        today.checked_add_days(span)
    } else {
        today.checked_sub_days(span)
    };

    expiration.ok_or_else(|| DomainError::InvalidValue {
        field: "days".to_string(),
        message: format!("{days} days from {today} is out of range"),
    })
}
