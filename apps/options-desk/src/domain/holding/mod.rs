//! Holdings Bounded Context
//!
//! Single option contracts a user tracks outside of any strategy.

pub mod errors;
mod holding;
pub mod repository;

pub use errors::HoldingError;
pub use holding::{Holding, NewHolding};
pub use repository::HoldingRepository;
