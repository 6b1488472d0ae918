//! Varjyam periods that touch one local calendar day.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use panchang_time::DayWindow;
use tracing::debug;

use crate::config::VarjyamConfig;
use crate::nakshatra::Nakshatra;
use crate::varjyam::varjyam_period;
use crate::varjyam_types::{NakshatraSpan, VarjyamPeriod, VarjyamResult};

/// Varjyam results overlapping `day`, one per nakshatra, ordered by the
/// start of each result's first period.
///
/// Spans whose Varjyam cannot be computed are skipped. Periods that agree
/// with an earlier one to the minute (same nakshatra, same floored start
/// and end) are dropped. An empty list is a normal outcome.
pub fn calculate_daily_varjyam(spans: &[NakshatraSpan], day: &DayWindow) -> Vec<VarjyamResult> {
    calculate_daily_varjyam_with(spans, day, &VarjyamConfig::default())
}

/// [`calculate_daily_varjyam`] with explicit length scaling.
pub fn calculate_daily_varjyam_with(
    spans: &[NakshatraSpan],
    day: &DayWindow,
    config: &VarjyamConfig,
) -> Vec<VarjyamResult> {
    let mut seen: HashSet<(Nakshatra, i64, i64)> = HashSet::new();
    let mut groups: Vec<(Nakshatra, Vec<VarjyamPeriod>)> = Vec::new();

    for span in spans {
        let Some(nakshatra) = Nakshatra::resolve(&span.name) else {
            debug!(name = %span.name, "unknown nakshatra name, span skipped");
            continue;
        };
        let Some(period) = varjyam_period(nakshatra, span.start, span.end, config) else {
            debug!(%nakshatra, start = %span.start, end = %span.end, "no varjyam for span");
            continue;
        };
        if !period.overlaps(day) {
            continue;
        }
        let key = (nakshatra, floor_minute(period.start), floor_minute(period.end));
        if !seen.insert(key) {
            debug!(%nakshatra, start = %period.start, "duplicate varjyam period dropped");
            continue;
        }
        match groups.iter_mut().find(|(n, _)| *n == nakshatra) {
            Some((_, periods)) => periods.push(period),
            None => groups.push((nakshatra, vec![period])),
        }
    }

    let mut results: Vec<VarjyamResult> = groups
        .into_iter()
        .map(|(nakshatra, mut periods)| {
            periods.sort_by_key(|p| p.start);
            VarjyamResult::from_periods(nakshatra, periods)
        })
        .collect();
    results.sort_by_key(VarjyamResult::first_start);

    debug!(date = %day.date, results = results.len(), "daily varjyam aggregated");
    results
}

/// Whole minutes since the Unix epoch, rounded toward negative infinity.
fn floor_minute(t: DateTime<Utc>) -> i64 {
    t.timestamp_millis().div_euclid(60_000)
}
