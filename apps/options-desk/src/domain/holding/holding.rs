//! Holding Entity
//!
//! A single option contract tracked outside any strategy.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::HoldingError;
use crate::domain::notation::ParsedOption;
use crate::domain::shared::{HoldingId, Money, OptionRight, Ticker, Timestamp, UserId};

/// Fields for a new holding.
#[derive(Debug, Clone)]
pub struct NewHolding {
    /// Owning user.
    pub user_id: UserId,
    /// Underlying ticker.
    pub ticker: Ticker,
    /// Call or put.
    pub right: OptionRight,
    /// Strike price.
    pub strike: Decimal,
    /// Expiration date.
    pub expiration: NaiveDate,
    /// Price paid per contract.
    pub buy_price: Money,
}

/// A single-contract position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    id: HoldingId,
    user_id: UserId,
    ticker: Ticker,
    right: OptionRight,
    strike: Decimal,
    expiration: NaiveDate,
    buy_price: Money,
    added_at: Timestamp,
}

impl Holding {
    /// Create a holding with a generated id.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHolding` for a malformed ticker, non-positive strike,
    /// or negative buy price.
    pub fn new(fields: NewHolding) -> Result<Self, HoldingError> {
        fields
            .ticker
            .validate()
            .map_err(|e| HoldingError::InvalidHolding {
                message: e.to_string(),
            })?;

        if fields.strike <= Decimal::ZERO {
            return Err(HoldingError::InvalidHolding {
                message: format!("strike must be positive, got {}", fields.strike),
            });
        }

        if fields.buy_price.is_negative() {
            return Err(HoldingError::InvalidHolding {
                message: format!("buy price must not be negative, got {}", fields.buy_price),
            });
        }

        Ok(Self {
            id: HoldingId::generate(),
            user_id: fields.user_id,
            ticker: fields.ticker,
            right: fields.right,
            strike: fields.strike,
            expiration: fields.expiration,
            buy_price: fields.buy_price,
            added_at: Timestamp::now(),
        })
    }

    /// Create a holding from parsed notation; expiration is `today` plus the
    /// notation's day count.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHolding` if the expiration is out of range or the
    /// fields fail validation.
    pub fn from_notation(
        user_id: UserId,
        option: &ParsedOption,
        today: NaiveDate,
        buy_price: Money,
    ) -> Result<Self, HoldingError> {
        let expiration = option
            .expiration(today)
            .map_err(|e| HoldingError::InvalidHolding {
                message: e.to_string(),
            })?;

        Self::new(NewHolding {
            user_id,
            ticker: option.ticker().clone(),
            right: option.right(),
            strike: option.strike(),
            expiration,
            buy_price,
        })
    }

    /// Holding ID.
    #[must_use]
    pub const fn id(&self) -> &HoldingId {
        &self.id
    }

    /// Owning user.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Underlying ticker.
    #[must_use]
    pub const fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Call or put.
    #[must_use]
    pub const fn right(&self) -> OptionRight {
        self.right
    }

    /// Strike price.
    #[must_use]
    pub const fn strike(&self) -> Decimal {
        self.strike
    }

    /// Expiration date.
    #[must_use]
    pub const fn expiration(&self) -> NaiveDate {
        self.expiration
    }

    /// Price paid per contract.
    #[must_use]
    pub const fn buy_price(&self) -> Money {
        self.buy_price
    }

    /// When the holding was recorded.
    #[must_use]
    pub const fn added_at(&self) -> Timestamp {
        self.added_at
    }

    /// Calendar days from `today` to expiration; negative once expired.
    #[must_use]
    pub fn days_to_expiration(&self, today: NaiveDate) -> i64 {
        (self.expiration - today).num_days()
    }

    /// True while the contract has not yet expired on `today`.
    #[must_use]
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        self.expiration >= today
    }
}
