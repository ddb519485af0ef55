use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Timestamp
/// (naive wall-clock, in milliseconds)
///
/// Calendar-day filter semantics are probed at millisecond boundaries, so
/// the resolution is fixed at milliseconds rather than seconds.
///

#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const EPOCH: Self = Self(0);
    pub const MIN: Self = Self(i64::MIN);
    pub const MAX: Self = Self(i64::MAX);

    /// Construct from milliseconds since the epoch.
    #[must_use]
    pub const fn from_millis(ms: i64) -> Self {
        Self(ms)
    }

    /// Milliseconds since the epoch.
    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Construct from a naive date-time, truncating below milliseconds.
    #[must_use]
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Self(dt.and_utc().timestamp_millis())
    }

    /// The first instant of the given calendar day.
    #[must_use]
    pub fn start_of_day(day: NaiveDate) -> Self {
        Self::from_naive(day.and_time(NaiveTime::MIN))
    }

    #[must_use]
    /// Current wall-clock timestamp in milliseconds.
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// The naive date-time this timestamp denotes, when representable.
    #[must_use]
    pub fn to_naive(self) -> Option<NaiveDateTime> {
        DateTime::from_timestamp_millis(self.0).map(|dt| dt.naive_utc())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_naive() {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.3f")),
            None => write!(f, "{}ms", self.0),
        }
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(dt: NaiveDateTime) -> Self {
        Self::from_naive(dt)
    }
}
