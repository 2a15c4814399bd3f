//! Infrastructure Configuration
//!
//! Dependency injection wiring.

mod container;

pub use container::{Container, InMemoryContainer};
