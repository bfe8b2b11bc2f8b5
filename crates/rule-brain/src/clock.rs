//! Wall-clock abstraction for time-of-day response filtering.

use chrono::Timelike;

/// Supplies the current hour of day (0-23).
///
/// Abstracted so tests can pin the time of day.
pub trait Clock: Send + Sync {
    /// Current hour of day, local time.
    fn hour(&self) -> u32;
}

/// The real local-time clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn hour(&self) -> u32 {
        chrono::Local::now().hour()
    }
}

/// A clock pinned to a fixed hour, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    hour: u32,
}

impl FixedClock {
    /// Create a clock pinned to the given hour (0-23).
    pub fn new(hour: u32) -> Self {
        Self { hour: hour % 24 }
    }
}

impl Clock for FixedClock {
    fn hour(&self) -> u32 {
        self.hour
    }
}
