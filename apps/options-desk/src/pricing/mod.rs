//! Options pricing.
//!
//! This module provides:
//! - Black-Scholes valuation for European calls and puts
//! - A fixed-coefficient `erf` / normal CDF approximation
//!
//! # Example
//!
//! ```
//! use options_desk::pricing::price;
//!
//! let call = price(100.0, 100.0, 30.0 / 365.0, 0.20, 0.05, "call")?;
//! assert!(call.is_positive());
//! # Ok::<(), options_desk::pricing::PricingError>(())
//! ```

mod black_scholes;
mod distribution;

pub use black_scholes::{BlackScholes, PricingError, PricingInputs, price};
pub use distribution::{erf, norm_cdf};
