//! Display strings for Varjyam periods.

use chrono::FixedOffset;
use panchang_time::{TimeLocale, format_clock_range, ist};

use crate::varjyam_types::{VarjyamPeriod, VarjyamResult};

/// `"hh:mm am - hh:mm am"` in Indian Standard Time.
///
/// `locale` is a BCP 47 tag: `en-US` gives uppercase `AM`/`PM`, anything
/// else the `en-IN` lowercase form.
pub fn format_varjyam_time(period: &VarjyamPeriod, locale: &str) -> String {
    format_varjyam_time_in(period, TimeLocale::from_tag(locale), ist())
}

/// [`format_varjyam_time`] in an explicit time zone.
pub fn format_varjyam_time_in(
    period: &VarjyamPeriod,
    locale: TimeLocale,
    offset: FixedOffset,
) -> String {
    format_clock_range(period.start, period.end, offset, locale)
}

/// One line per period: `"Ashwini: 02:00 am - 03:36 am"`.
pub fn format_varjyam_result(
    result: &VarjyamResult,
    locale: TimeLocale,
    offset: FixedOffset,
) -> String {
    result
        .periods
        .iter()
        .map(|p| format!("{}: {}", result.nakshatra, format_varjyam_time_in(p, locale, offset)))
        .collect::<Vec<_>>()
        .join("\n")
}
