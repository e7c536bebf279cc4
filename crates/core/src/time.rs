use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

/// A simple clock abstraction so the countdown can be driven deterministically.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    Default,
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Returns a clock fixed at the given timestamp.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::Default => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// If this is a fixed clock, advance it by the given duration.
    ///
    /// Has no effect on `Clock::Default`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    #[error("invalid target date-time: {raw}")]
    InvalidTarget { raw: String },

    #[error("target date-time {raw} does not exist in the local time zone")]
    NonexistentLocalTime { raw: String },
}

/// Parse a countdown target.
///
/// Accepts RFC 3339 (`2024-07-21T12:00:00Z`, `2024-07-21T12:00:00+02:00`) or a
/// naive date-time (`2024-07-21T12:00:00`) which is read as local time.
///
/// # Errors
///
/// Returns `TimeError::InvalidTarget` if neither form parses, or
/// `TimeError::NonexistentLocalTime` if a naive value falls into a DST gap.
pub fn parse_target(raw: &str) -> Result<DateTime<Utc>, TimeError> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M"))
        .map_err(|_| TimeError::InvalidTarget {
            raw: raw.to_string(),
        })?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| TimeError::NonexistentLocalTime {
            raw: raw.to_string(),
        })
}

/// Deterministic timestamp for tests (2024-07-21T12:00:00Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_721_563_200;

/// Returns a deterministic `DateTime<Utc>` for tests.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

/// Returns a `Clock` fixed at the deterministic test timestamp.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}
