//! Trailing-window interval filtering for reading sequences.

use std::fmt::{Debug, Formatter};

use chrono::{DateTime, Duration, Utc};

use crate::domain::Reading;

/// A closed time interval.
///
/// Both ends are inclusive: a reading stamped exactly at `start` or `end`
/// is inside the interval.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct ReadingInterval {
    /// Inclusive.
    pub start: DateTime<Utc>,
    /// Inclusive.
    pub end: DateTime<Utc>,
}

impl Debug for ReadingInterval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}..={:?}", self.start, self.end)
    }
}

impl ReadingInterval {
    /// Creates an interval from inclusive bounds.
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// The trailing calendar week ending at `now`: `[now − 7 days, now]`.
    pub fn previous_week(now: DateTime<Utc>) -> Self {
        Self {
            start: now - Duration::days(7),
            end: now,
        }
    }

    /// Whether `time` falls inside the interval.
    pub fn contains(self, time: DateTime<Utc>) -> bool {
        self.start <= time && time <= self.end
    }

    /// Restricts `readings` to samples inside the interval.
    ///
    /// Preserves input order; an empty result is not an error.
    pub fn filter(self, readings: &[Reading]) -> Vec<Reading> {
        readings
            .iter()
            .copied()
            .filter(|r| self.contains(r.time))
            .collect()
    }
}
