//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Ports**: Interfaces for external systems other than storage
//! - **Use Cases**: Open, close/reopen, query, holdings, quotes
//! - **DTOs**: Serializable views for the CLI boundary

pub mod dto;
pub mod ports;
pub mod use_cases;

pub use dto::*;
pub use ports::*;
pub use use_cases::*;
