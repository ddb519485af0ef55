//! Module: grid::datetime
//! Responsibility: parsing grid date strings into calendar days and
//! producing day-boundary timestamps.
//!
//! Accepted shapes, tried in order:
//!   1. `2025-10-10`                   (pure calendar date)
//!   2. `2025-10-10T14:30[:59[.123]]`  (ISO date-time, fraction optional)
//!   3. `2025-10-10 14:30:59.123`      (space-separated, milliseconds)
//!   4. `2025-10-10 14:30:59`          (space-separated, no milliseconds)
//!
//! Anything else fails the parse and the caller must treat the whole
//! descriptor as a no-op, never as an error.

use crate::types::Timestamp;
use chrono::{NaiveDate, NaiveDateTime};

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.3f",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a grid date string to its calendar day; time parts are dropped.
#[must_use]
pub(crate) fn parse_grid_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(day) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(day);
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|dt| dt.date())
}

/// First instant of the day after `day`, when representable.
#[must_use]
pub(crate) fn next_day_start(day: NaiveDate) -> Option<Timestamp> {
    day.succ_opt().map(Timestamp::start_of_day)
}
