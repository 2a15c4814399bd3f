//! Strategy DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{OptionRight, Timestamp};
use crate::domain::strategy::{Leg, PositionSide, Strategy, StrategyStatus, StrategyType};

/// DTO representing a leg.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegDto {
    /// Owning strategy.
    pub strategy_id: String,
    /// Call or put.
    pub right: OptionRight,
    /// Strike.
    pub strike: Decimal,
    /// Expiration.
    pub expiration: NaiveDate,
    /// Premium per contract.
    pub premium: Decimal,
    /// Signed quantity.
    pub quantity: i32,
    /// Long or short.
    pub side: PositionSide,
}

impl From<&Leg> for LegDto {
    fn from(leg: &Leg) -> Self {
        Self {
            strategy_id: leg.strategy_id().to_string(),
            right: leg.right(),
            strike: leg.strike(),
            expiration: leg.expiration(),
            premium: leg.premium().amount(),
            quantity: leg.quantity(),
            side: leg.side(),
        }
    }
}

/// DTO representing a strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyDto {
    /// Strategy ID.
    pub strategy_id: String,
    /// User ID.
    pub user_id: String,
    /// Canonical type.
    pub strategy_type: StrategyType,
    /// Ticker.
    pub ticker: String,
    /// Net cost as supplied; positive debit, negative credit.
    pub net_cost: Option<Decimal>,
    /// Sum of signed leg premiums.
    pub implied_net_premium: Decimal,
    /// Status.
    pub status: StrategyStatus,
    /// Legs.
    pub legs: Vec<LegDto>,
    /// Opened at.
    pub opened_at: Timestamp,
    /// Closed at.
    pub closed_at: Option<Timestamp>,
}

impl From<&Strategy> for StrategyDto {
    fn from(strategy: &Strategy) -> Self {
        Self {
            strategy_id: strategy.id().to_string(),
            user_id: strategy.user_id().to_string(),
            strategy_type: strategy.strategy_type(),
            ticker: strategy.ticker().to_string(),
            net_cost: strategy.net_cost().map(|m| m.amount()),
            implied_net_premium: strategy.implied_net_premium().amount(),
            status: strategy.status(),
            legs: strategy.legs().iter().map(LegDto::from).collect(),
            opened_at: strategy.opened_at(),
            closed_at: strategy.closed_at(),
        }
    }
}

/// Resolution result for a strategy name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyTypeDto {
    /// Name as supplied.
    pub input: String,
    /// Canonical type.
    pub strategy_type: StrategyType,
    /// Expected legs, `None` when unconstrained.
    pub expected_legs: Option<usize>,
    /// Other accepted names for this type.
    pub aliases: Vec<String>,
}

impl StrategyTypeDto {
    /// Describe a resolved type.
    #[must_use]
    pub fn new(input: impl Into<String>, strategy_type: StrategyType) -> Self {
        Self {
            input: input.into(),
            strategy_type,
            expected_legs: strategy_type.expected_leg_count(),
            aliases: strategy_type
                .aliases()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}
