//! Varjyam window within a single nakshatra span.
//!
//! Varjyam starts `fraction * D` into a nakshatra of length `D`, where the
//! fraction comes from the ghatika table, and lasts `D / 1440 * 96`
//! minutes. The end is clamped to the nakshatra's own end.
//!
//! Every failure (unknown name, unparseable instant, `end <= start`,
//! out-of-range arithmetic) yields `None`.

use chrono::{DateTime, Utc};
use panchang_time::{add_minutes, minutes_between, parse_instant};

use crate::config::VarjyamConfig;
use crate::nakshatra::Nakshatra;
use crate::varjyam_table::varjyam_fraction;
use crate::varjyam_types::{NakshatraSpan, VarjyamPeriod, VarjyamResult};

/// Varjyam for a named nakshatra spanning `[start, end]`.
pub fn calculate_varjyam(
    name: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Option<VarjyamResult> {
    calculate_varjyam_with(name, start, end, &VarjyamConfig::default())
}

/// [`calculate_varjyam`] with explicit length scaling.
pub fn calculate_varjyam_with(
    name: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    config: &VarjyamConfig,
) -> Option<VarjyamResult> {
    let nakshatra = Nakshatra::resolve(name)?;
    let period = varjyam_period(nakshatra, start, end, config)?;
    Some(VarjyamResult::from_periods(nakshatra, vec![period]))
}

/// [`calculate_varjyam`] over RFC 3339 timestamps.
pub fn calculate_varjyam_str(name: &str, start: &str, end: &str) -> Option<VarjyamResult> {
    let start = parse_instant(start).ok()?;
    let end = parse_instant(end).ok()?;
    calculate_varjyam(name, start, end)
}

/// Varjyam of a provider span.
pub fn varjyam_for_span(span: &NakshatraSpan, config: &VarjyamConfig) -> Option<VarjyamResult> {
    calculate_varjyam_with(&span.name, span.start, span.end, config)
}

/// The Varjyam period of `nakshatra` over `[start, end]`.
pub fn varjyam_period(
    nakshatra: Nakshatra,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    config: &VarjyamConfig,
) -> Option<VarjyamPeriod> {
    if end <= start {
        return None;
    }
    let duration = minutes_between(start, end);
    let length = config.varjyam_minutes(duration);
    if !(length.is_finite() && length >= 0.0) {
        return None;
    }

    let offset = duration * varjyam_fraction(nakshatra);
    let varjyam_start = add_minutes(start, offset)?;
    let varjyam_end = add_minutes(varjyam_start, length)?.min(end);

    Some(VarjyamPeriod {
        start: varjyam_start,
        end: varjyam_end,
        nakshatra,
    })
}
