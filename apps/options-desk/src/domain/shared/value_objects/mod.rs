//! Shared Value Objects
//!
//! Immutable domain types used across bounded contexts.
//! Value objects are compared by value, not identity.

mod identifiers;
mod money;
mod option_right;
mod ticker;
mod timestamp;

pub use identifiers::{HoldingId, StrategyId, UserId};
pub use money::{CENT_ROUNDING, CENT_SCALE, Money};
pub use option_right::OptionRight;
pub use ticker::Ticker;
pub use timestamp::Timestamp;
