//! Holding DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::holding::Holding;
use crate::domain::shared::OptionRight;

/// DTO representing a holding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldingDto {
    /// Holding ID.
    pub holding_id: String,
    /// User ID.
    pub user_id: String,
    /// Ticker.
    pub ticker: String,
    /// Call or put.
    pub right: OptionRight,
    /// Strike.
    pub strike: Decimal,
    /// Expiration.
    pub expiration: NaiveDate,
    /// Price paid.
    pub buy_price: Decimal,
}

impl From<&Holding> for HoldingDto {
    fn from(holding: &Holding) -> Self {
        Self {
            holding_id: holding.id().to_string(),
            user_id: holding.user_id().to_string(),
            ticker: holding.ticker().to_string(),
            right: holding.right(),
            strike: holding.strike(),
            expiration: holding.expiration(),
            buy_price: holding.buy_price().amount(),
        }
    }
}

/// Roll-up of a user's book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummaryDto {
    /// User ID.
    pub user_id: String,
    /// Date the activity checks ran against.
    pub as_of: NaiveDate,
    /// Open strategy count.
    pub open_strategies: usize,
    /// Closed strategy count.
    pub closed_strategies: usize,
    /// Sum of known net costs over open strategies.
    pub open_net_cost: Decimal,
    /// Open strategies whose net cost is unknown.
    pub open_strategies_without_net_cost: usize,
    /// Holding count.
    pub holdings: usize,
    /// Holdings not yet expired.
    pub active_holdings: usize,
}
