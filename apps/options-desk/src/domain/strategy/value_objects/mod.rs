//! Strategy value objects.

mod leg;
mod leg_count_policy;
mod strategy_status;
mod strategy_type;

pub use leg::{Leg, LegDraft, PositionSide};
pub use leg_count_policy::LegCountPolicy;
pub use strategy_status::StrategyStatus;
pub use strategy_type::StrategyType;
