//! Countdown gate: decides whether the begin control or the countdown is shown.

use chrono::{DateTime, Utc};

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Time left until the target, split into truncated whole units.
///
/// `millis` holds the sub-second remainder so `total_millis` reproduces the
/// exact difference the reading was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub millis: i64,
}

impl Remaining {
    /// Decompose a positive millisecond difference.
    #[must_use]
    pub fn from_millis(total: i64) -> Self {
        let total = total.max(0);
        Self {
            days: total / MILLIS_PER_DAY,
            hours: (total % MILLIS_PER_DAY) / MILLIS_PER_HOUR,
            minutes: (total % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE,
            seconds: (total % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND,
            millis: total % MILLIS_PER_SECOND,
        }
    }

    #[must_use]
    pub fn total_millis(&self) -> i64 {
        self.days * MILLIS_PER_DAY
            + self.hours * MILLIS_PER_HOUR
            + self.minutes * MILLIS_PER_MINUTE
            + self.seconds * MILLIS_PER_SECOND
            + self.millis
    }
}

/// Result of a single gate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownReading {
    Running(Remaining),
    Elapsed,
}

impl CountdownReading {
    #[must_use]
    pub fn is_elapsed(&self) -> bool {
        matches!(self, Self::Elapsed)
    }

    #[must_use]
    pub fn remaining(&self) -> Option<Remaining> {
        match self {
            Self::Running(remaining) => Some(*remaining),
            Self::Elapsed => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownGate {
    target: DateTime<Utc>,
}

impl CountdownGate {
    #[must_use]
    pub fn new(target: DateTime<Utc>) -> Self {
        Self { target }
    }

    /// Evaluate the gate at `now`. Elapsed once `target - now <= 0`.
    #[must_use]
    pub fn evaluate(&self, now: DateTime<Utc>) -> CountdownReading {
        let left = (self.target - now).num_milliseconds();
        if left <= 0 {
            CountdownReading::Elapsed
        } else {
            CountdownReading::Running(Remaining::from_millis(left))
        }
    }
}
