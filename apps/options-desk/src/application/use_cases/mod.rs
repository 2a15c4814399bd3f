//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod manage_holdings;
#[cfg(test)]
pub(crate) mod mocks;
mod open_strategy;
mod portfolio_query;
mod quote_option;
mod strategy_lifecycle;

pub use manage_holdings::{AddHoldingCommand, ManageHoldingsUseCase};
pub use open_strategy::{LegInput, MarketSnapshot, OpenStrategyCommand, OpenStrategyUseCase};
pub use portfolio_query::PortfolioQueryUseCase;
pub use quote_option::QuoteOptionUseCase;
pub use strategy_lifecycle::StrategyLifecycleUseCase;
