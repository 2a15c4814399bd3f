//! Clock Port (Driven Port)
//!
//! Source of "today" for expiration arithmetic.

use chrono::{NaiveDate, Utc};

/// Port for reading the current calendar date.
pub trait ClockPort: Send + Sync {
    /// Today's date.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation (UTC).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    /// Create a clock that always reports `date`.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl ClockPort for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
