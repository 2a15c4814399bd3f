//! Strategy Leg Value Object

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::notation::ParsedOption;
use crate::domain::shared::{DomainError, Money, OptionRight, StrategyId};
use crate::domain::strategy::errors::StrategyError;

/// Position side (long or short), derived from the sign of a leg's quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSide {
    /// Long position (bought).
    Long,
    /// Short position (sold/written).
    Short,
}

/// Leg fields supplied by a caller, before the owning strategy exists.
///
/// Only [`Strategy::open`](crate::domain::strategy::Strategy::open) turns
/// drafts into [`Leg`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegDraft {
    /// Call or put.
    pub right: OptionRight,
    /// Strike price.
    pub strike: Decimal,
    /// Expiration date.
    pub expiration: NaiveDate,
    /// Per-contract premium paid or received.
    pub premium: Money,
    /// Signed contract count: positive is long, negative is short.
    pub quantity: i32,
}

impl LegDraft {
    /// Draft a leg from parsed notation, dating expiry from `today`.
    ///
    /// # Errors
    ///
    /// Returns error if the expiration date is out of calendar range.
    pub fn from_parsed(
        option: &ParsedOption,
        today: NaiveDate,
        premium: Money,
        quantity: i32,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            right: option.right(),
            strike: option.strike(),
            expiration: option.expiration(today)?,
            premium,
            quantity,
        })
    }

    /// Validate the draft fields.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLegs` for a zero quantity, non-positive strike,
    /// or negative premium.
    pub fn validate(&self) -> Result<(), StrategyError> {
        if self.quantity == 0 {
            return Err(StrategyError::invalid_legs("quantity must be non-zero"));
        }

        if self.strike <= Decimal::ZERO {
            return Err(StrategyError::invalid_legs(format!(
                "strike must be positive, got {}",
                self.strike
            )));
        }

        if self.premium.is_negative() {
            return Err(StrategyError::invalid_legs(format!(
                "premium must not be negative, got {}",
                self.premium
            )));
        }

        Ok(())
    }
}

/// A single contract inside a strategy.
///
/// `strategy_id` names the owning strategy; it is a lookup key, not an
/// ownership edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    strategy_id: StrategyId,
    right: OptionRight,
    strike: Decimal,
    expiration: NaiveDate,
    premium: Money,
    quantity: i32,
}

impl Leg {
    pub(in crate::domain::strategy) fn attach(draft: LegDraft, strategy_id: StrategyId) -> Self {
        Self {
            strategy_id,
            right: draft.right,
            strike: draft.strike,
            expiration: draft.expiration,
            premium: draft.premium,
            quantity: draft.quantity,
        }
    }

    /// ID of the owning strategy.
    #[must_use]
    pub const fn strategy_id(&self) -> &StrategyId {
        &self.strategy_id
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

    /// Per-contract premium.
    #[must_use]
    pub const fn premium(&self) -> Money {
        self.premium
    }

    /// Signed quantity.
    #[must_use]
    pub const fn quantity(&self) -> i32 {
        self.quantity
    }

    /// Long or short.
    #[must_use]
    pub const fn side(&self) -> PositionSide {
        if self.quantity < 0 {
            PositionSide::Short
        } else {
            PositionSide::Long
        }
    }

    /// Premium times signed quantity: positive is paid, negative is received.
    #[must_use]
    pub fn premium_flow(&self) -> Money {
        self.premium * self.quantity
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:+} {} {} {} @ {}",
            self.quantity, self.strike, self.right, self.expiration, self.premium
        )
    }
}
