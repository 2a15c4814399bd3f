//! Notation Bounded Context
//!
//! Turns shorthand contract notation ("NVDA 150c 30d") into structured
//! contract specifications. Pure: no I/O, no state.

pub mod errors;
mod parsed_option;
mod parser;

pub use errors::{NotationError, NotationField};
pub use parsed_option::{ParsedOption, expiration_after};
pub use parser::{parse_notation, parse_notation_list};
