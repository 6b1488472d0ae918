//! Types for nakshatra spans and Varjyam results.

use chrono::{DateTime, Utc};
use panchang_time::{DayWindow, minutes_between};
use serde::Serialize;

use crate::nakshatra::Nakshatra;

/// One nakshatra's active interval as reported by an ephemeris provider.
///
/// `name` is kept as reported; it is resolved only when a Varjyam is
/// computed from the span.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NakshatraSpan {
    /// Nakshatra name, any supported spelling.
    pub name: String,
    /// Start of the nakshatra (UTC).
    pub start: DateTime<Utc>,
    /// End of the nakshatra (UTC).
    pub end: DateTime<Utc>,
}

impl NakshatraSpan {
    pub fn new(name: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    /// Span length in minutes.
    pub fn duration_minutes(&self) -> f64 {
        minutes_between(self.start, self.end)
    }

    /// Whether `end > start`.
    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }
}

/// A single Varjyam interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VarjyamPeriod {
    /// Start of Varjyam (UTC).
    pub start: DateTime<Utc>,
    /// End of Varjyam (UTC), never past the source nakshatra's end.
    pub end: DateTime<Utc>,
    /// Nakshatra the period was derived from.
    pub nakshatra: Nakshatra,
}

impl VarjyamPeriod {
    /// Period length in minutes.
    pub fn duration_minutes(&self) -> f64 {
        minutes_between(self.start, self.end)
    }

    /// Whether the period touches `day`.
    ///
    /// True when either endpoint lies in the day, or the period covers the
    /// whole day.
    pub fn overlaps(&self, day: &DayWindow) -> bool {
        day.contains(self.start)
            || day.contains(self.end)
            || (self.start <= day.start && self.end >= day.end)
    }
}

/// Varjyam periods of one nakshatra.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarjyamResult {
    /// Periods ordered by start.
    pub periods: Vec<VarjyamPeriod>,
    /// Sum of period lengths in minutes.
    pub total_duration_minutes: f64,
    /// Source nakshatra.
    pub nakshatra: Nakshatra,
}

impl VarjyamResult {
    /// Build a result, summing the period lengths.
    pub fn from_periods(nakshatra: Nakshatra, periods: Vec<VarjyamPeriod>) -> Self {
        let total_duration_minutes = periods.iter().map(VarjyamPeriod::duration_minutes).sum();
        Self {
            periods,
            total_duration_minutes,
            nakshatra,
        }
    }

    /// Start of the earliest period.
    pub fn first_start(&self) -> Option<DateTime<Utc>> {
        self.periods.iter().map(|p| p.start).min()
    }
}
