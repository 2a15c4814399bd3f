//! Domain Layer
//!
//! Pure business logic with no infrastructure dependencies.
//!
//! # Bounded Contexts
//!
//! - **Notation**: shorthand contract grammar (`NVDA 150c 30d`)
//! - **Strategy**: multi-leg strategy aggregates and their lifecycle
//! - **Holding**: single-contract positions
//!
//! # Shared Kernel
//!
//! Common value objects used across all bounded contexts.

pub mod holding;
pub mod notation;
pub mod shared;
pub mod strategy;
