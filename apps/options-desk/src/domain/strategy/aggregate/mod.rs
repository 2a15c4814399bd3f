//! Strategy aggregate.

mod strategy;

pub use strategy::{OpenStrategyParams, Strategy};
