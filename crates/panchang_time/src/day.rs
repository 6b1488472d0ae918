//! Local calendar-day windows.
//!
//! A panchang "day" for display purposes is the civil day in the observer's
//! time zone: `[00:00:00.000, 23:59:59.999]` local. Both bounds are stored
//! as UTC instants and both are inclusive.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone, Utc};

use crate::error::TimeError;

/// Inclusive boundary of one local calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    /// Local calendar date.
    pub date: NaiveDate,
    /// Time zone the day is expressed in.
    pub offset: FixedOffset,
    /// Local 00:00:00.000, as UTC.
    pub start: DateTime<Utc>,
    /// Local 23:59:59.999, as UTC.
    pub end: DateTime<Utc>,
}

impl DayWindow {
    /// Build the window for `date` in the given time zone.
    pub fn new(date: NaiveDate, offset: FixedOffset) -> Result<Self, TimeError> {
        let bound = |h, m, s, ms| {
            date.and_hms_milli_opt(h, m, s, ms)
                .and_then(|naive| offset.from_local_datetime(&naive).single())
                .map(|local| local.with_timezone(&Utc))
                .ok_or(TimeError::DayBoundary(date))
        };
        Ok(Self {
            date,
            offset,
            start: bound(0, 0, 0, 0)?,
            end: bound(23, 59, 59, 999)?,
        })
    }

    /// Window for the local day containing `instant`.
    pub fn containing(instant: DateTime<Utc>, offset: FixedOffset) -> Result<Self, TimeError> {
        Self::new(instant.with_timezone(&offset).date_naive(), offset)
    }

    /// Whether `instant` lies within the day, bounds included.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }

    /// Local noon, the centre of the day.
    pub fn noon(&self) -> DateTime<Utc> {
        self.start + Duration::hours(12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ist;

    fn oct(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, day).unwrap()
    }

    #[test]
    fn ist_day_starts_previous_utc_evening() {
        let w = DayWindow::new(oct(3), ist()).unwrap();
        assert_eq!(w.start, Utc.with_ymd_and_hms(2025, 10, 2, 18, 30, 0).unwrap());
        assert_eq!(
            w.end,
            Utc.with_ymd_and_hms(2025, 10, 3, 18, 29, 59).unwrap() + Duration::milliseconds(999)
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        let w = DayWindow::new(oct(3), ist()).unwrap();
        assert!(w.contains(w.start));
        assert!(w.contains(w.end));
        assert!(!w.contains(w.start - Duration::milliseconds(1)));
        assert!(!w.contains(w.end + Duration::milliseconds(1)));
    }

    #[test]
    fn containing_uses_local_date() {
        // 20:00 UTC on Oct 2 is 01:30 IST on Oct 3.
        let t = Utc.with_ymd_and_hms(2025, 10, 2, 20, 0, 0).unwrap();
        let w = DayWindow::containing(t, ist()).unwrap();
        assert_eq!(w.date, oct(3));
        assert!(w.contains(t));
    }

    #[test]
    fn noon_is_local_midday() {
        let w = DayWindow::new(oct(3), ist()).unwrap();
        assert_eq!(w.noon(), Utc.with_ymd_and_hms(2025, 10, 3, 6, 30, 0).unwrap());
    }
}
