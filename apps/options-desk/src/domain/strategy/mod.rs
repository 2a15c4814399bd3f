//! Strategy Bounded Context
//!
//! Composes option legs into strategy aggregates and tracks their
//! open/closed lifecycle.
//!
//! # Key Concepts
//!
//! - **Strategy Aggregate**: owns its legs; built in one step by `Strategy::open`
//! - **Strategy Type**: canonical shape resolved from names and aliases
//! - **Leg-Count Policy**: whether the expected leg count is enforced

pub mod aggregate;
pub mod errors;
pub mod repository;
pub mod value_objects;

pub use aggregate::{OpenStrategyParams, Strategy};
pub use errors::StrategyError;
pub use repository::StrategyRepository;
pub use value_objects::{
    Leg, LegCountPolicy, LegDraft, PositionSide, StrategyStatus, StrategyType,
};
