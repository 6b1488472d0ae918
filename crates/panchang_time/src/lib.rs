//! Instants, local calendar days, and clock formatting.
//!
//! This crate provides:
//! - The fixed Indian Standard Time offset used for panchang display
//! - RFC 3339 instant parsing into UTC
//! - `DayWindow`, the inclusive local-day boundary used for overlap tests
//! - Duration helpers that express spans in fractional minutes
//! - 12-hour clock formatting (`TimeLocale`)
//!
//! All instants are `DateTime<Utc>`; local time only enters through a
//! `FixedOffset` when a calendar day or a display string is needed.

pub mod clock;
pub mod day;
pub mod error;

use chrono::{DateTime, Duration, FixedOffset, Offset, Utc};

pub use clock::{TimeLocale, format_clock, format_clock_range};
pub use day::DayWindow;
pub use error::TimeError;

/// Milliseconds in one minute.
pub const MILLIS_PER_MINUTE: f64 = 60_000.0;

/// Nanoseconds in one minute.
const NANOS_PER_MINUTE: f64 = 60_000_000_000.0;

/// Indian Standard Time offset from UTC, in minutes (+05:30).
pub const IST_OFFSET_MINUTES: i32 = 330;

/// Indian Standard Time as a fixed offset.
pub fn ist() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_MINUTES * 60).unwrap_or_else(|| Utc.fix())
}

/// Build a fixed offset from a whole number of minutes east of UTC.
///
/// Offsets must lie strictly within ±24 hours.
pub fn offset_from_minutes(minutes: i32) -> Result<FixedOffset, TimeError> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(TimeError::InvalidOffset(minutes))
}

/// Parse an RFC 3339 timestamp (`2025-10-02T06:00:00+05:30`) into UTC.
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>, TimeError> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| TimeError::Parse {
            input: s.to_string(),
            reason: e.to_string(),
        })
}

/// Length of `[start, end]` in fractional minutes (negative if inverted).
pub fn minutes_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / MILLIS_PER_MINUTE
}

/// Shift an instant by a fractional number of minutes.
///
/// The shift is applied at nanosecond resolution. Returns `None` if the
/// offset is not finite or the result leaves chrono's representable range.
pub fn add_minutes(instant: DateTime<Utc>, minutes: f64) -> Option<DateTime<Utc>> {
    if !minutes.is_finite() {
        return None;
    }
    let nanos = (minutes * NANOS_PER_MINUTE).round();
    if nanos.abs() >= i64::MAX as f64 {
        return None;
    }
    instant.checked_add_signed(Duration::nanoseconds(nanos as i64))
}
