//! Error types for instant parsing and local-day construction.

use chrono::NaiveDate;

/// Errors from instant parsing, offsets, or local-day boundaries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Instant text is not valid RFC 3339.
    #[error("cannot parse instant {input:?}: {reason}")]
    Parse { input: String, reason: String },
    /// UTC offset in minutes is outside ±24 hours.
    #[error("UTC offset of {0} minutes is out of range")]
    InvalidOffset(i32),
    /// Local midnight or end-of-day cannot be represented for this date.
    #[error("day boundary for {0} is not representable")]
    DayBoundary(NaiveDate),
}
