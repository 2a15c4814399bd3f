//! Infrastructure Layer
//!
//! Adapters behind the domain ports.
//!
//! # Structure
//!
//! - `persistence`: In-memory strategy and holding repositories
//! - `config`: Dependency injection container

pub mod config;
pub mod persistence;

pub use config::{Container, InMemoryContainer};
pub use persistence::{InMemoryHoldingRepository, InMemoryStrategyRepository};
