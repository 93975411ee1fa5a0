//! Timestamps and the logical clock.
//!
//! All entity timestamps are plain milliseconds since the Unix epoch,
//! anchored to a fixed demo epoch rather than the real wall clock. The
//! reference data set must be byte-identical for a given seed no matter
//! which day the process starts on, so nothing in the data model ever
//! reads real time.

use serde::{Deserialize, Serialize};

/// Milliseconds in one second.
pub const SECOND_MS: u64 = 1_000;
/// Milliseconds in one day.
pub const DAY_MS: u64 = 86_400_000;
/// Milliseconds in one (365-day) year.
pub const YEAR_MS: u64 = 365 * DAY_MS;

/// The instant "now" means inside the demo universe: 2025-06-15T00:00:00Z.
///
/// Seeded fixtures generate timestamps below this point; entities created
/// through the API at runtime are stamped at or after it.
pub const DEMO_EPOCH: Timestamp = Timestamp(1_749_945_600_000);

/// A point in time, in milliseconds since the Unix epoch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Milliseconds since the Unix epoch.
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// The timestamp `ms` milliseconds earlier, saturating at zero.
    #[must_use]
    pub const fn minus(self, ms: u64) -> Self {
        Self(self.0.saturating_sub(ms))
    }

    /// The timestamp `ms` milliseconds later.
    #[must_use]
    pub const fn plus(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }
}

/// Logical clock for runtime-created entities.
///
/// Time only advances when an operation asks for a fresh timestamp, so
/// "now" is a deterministic function of how many entities have been
/// created, never of the real system clock. The store owns exactly one
/// of these.
#[derive(Debug, Clone)]
pub struct Clock {
    current: Timestamp,
    step_ms: u64,
}

impl Clock {
    /// Milliseconds added per tick.
    pub const DEFAULT_STEP_MS: u64 = SECOND_MS;

    /// Create a clock starting at `start`.
    #[must_use]
    pub const fn new(start: Timestamp) -> Self {
        Self {
            current: start,
            step_ms: Self::DEFAULT_STEP_MS,
        }
    }

    /// Advance by one step and return the new "now".
    pub const fn tick(&mut self) -> Timestamp {
        self.current = self.current.plus(self.step_ms);
        self.current
    }

    /// The current time without advancing it.
    #[must_use]
    pub const fn current(&self) -> Timestamp {
        self.current
    }

    /// Reset the clock to `start`.
    pub const fn reset(&mut self, start: Timestamp) {
        self.current = start;
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(DEMO_EPOCH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_advances_monotonically() {
        let mut clock = Clock::new(Timestamp(1_000));
        let a = clock.tick();
        let b = clock.tick();
        assert!(b > a);
        assert_eq!(b.as_millis() - a.as_millis(), Clock::DEFAULT_STEP_MS);
    }

    #[test]
    fn test_clock_is_deterministic() {
        let mut one = Clock::default();
        let mut two = Clock::default();
        for _ in 0..50 {
            assert_eq!(one.tick(), two.tick());
        }
    }

    #[test]
    fn test_reset_rewinds() {
        let mut clock = Clock::default();
        clock.tick();
        clock.reset(DEMO_EPOCH);
        assert_eq!(clock.current(), DEMO_EPOCH);
    }

    #[test]
    fn test_minus_saturates() {
        assert_eq!(Timestamp(5).minus(10), Timestamp(0));
    }
}
