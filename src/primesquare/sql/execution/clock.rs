//! Clock capability for audit timestamps.
//!
//! The guarded update path stamps `last_seen_date` with the current
//! processing time. The time source is injected rather than read from the
//! ambient environment so the procedure stays deterministic under test.

use chrono::{NaiveDateTime, Utc};

/// Source of the current processing time
pub trait Clock: Send + Sync {
    /// Current timestamp at the moment of the call
    fn now(&self) -> NaiveDateTime;
}

/// Wall-clock time source for production use
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

/// Fixed time source for deterministic tests
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: NaiveDateTime,
}

impl FixedClock {
    /// Create a clock frozen at the given instant
    pub fn new(instant: NaiveDateTime) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.instant
    }
}
