//! Data Transfer Objects (DTOs)
//!
//! Serializable views returned at the CLI boundary.

mod holding_dto;
mod quote_dto;
mod strategy_dto;

pub use holding_dto::{HoldingDto, PortfolioSummaryDto};
pub use quote_dto::QuoteDto;
pub use strategy_dto::{LegDto, StrategyDto, StrategyTypeDto};
