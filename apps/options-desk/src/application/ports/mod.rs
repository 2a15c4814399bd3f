//! Application Ports (Driven)
//!
//! Repository ports live with their aggregates in the domain layer; the
//! ports here cover the remaining outside-world dependencies.

mod clock_port;

pub use clock_port::{ClockPort, FixedClock, SystemClock};
