//! Discovering nakshatra spans around a day by sampling a provider.
//!
//! The provider is sampled every `step_hours` across a `window_hours`
//! window centred on local noon of the target day. Distinct spans are kept
//! and sorted by start. A failed sample is logged and skipped; it never
//! aborts the sweep.
//!
//! A fixed-step sweep can step over a nakshatra shorter than the step.
//! With `refine_gaps` enabled, whenever one span ends before the next one
//! starts, the provider is probed at the earlier span's end, up to
//! `max_gap_probes` times.

use std::collections::HashSet;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use panchang_time::DayWindow;
use tracing::{debug, warn};

use crate::config::{MAX_WINDOW_HOURS, PanchangConfig, ScanConfig};
use crate::daily::calculate_daily_varjyam_with;
use crate::error::{ProviderError, VedicError};
use crate::varjyam_types::{NakshatraSpan, VarjyamResult};

/// Source of the nakshatra active at an instant.
pub trait NakshatraProvider {
    /// The span containing `instant`.
    fn nakshatra_at(&self, instant: DateTime<Utc>) -> Result<NakshatraSpan, ProviderError>;
}

impl<F> NakshatraProvider for F
where
    F: Fn(DateTime<Utc>) -> Result<NakshatraSpan, ProviderError>,
{
    fn nakshatra_at(&self, instant: DateTime<Utc>) -> Result<NakshatraSpan, ProviderError> {
        self(instant)
    }
}

/// Sample instants of the regular sweep, in ascending order.
///
/// The window is clamped to [`MAX_WINDOW_HOURS`].
pub fn sample_instants(day: &DayWindow, config: &ScanConfig) -> Vec<DateTime<Utc>> {
    if config.step_hours == 0 {
        return Vec::new();
    }
    let window = config.window_hours.min(MAX_WINDOW_HOURS);
    let step = i64::from(config.step_hours);
    let first = day.noon() - Duration::minutes(i64::from(window) * 30);
    (0..=window / config.step_hours)
        .map(|k| first + Duration::hours(step * i64::from(k)))
        .collect()
}

/// Distinct nakshatra spans around `day`, sorted by start.
pub fn scan_nakshatra_spans<P>(
    provider: &P,
    day: &DayWindow,
    config: &ScanConfig,
) -> Vec<NakshatraSpan>
where
    P: NakshatraProvider + ?Sized,
{
    let mut spans = Vec::new();
    let mut failures = 0usize;
    for at in sample_instants(day, config) {
        if !sample(provider, at, &mut spans) {
            failures += 1;
        }
    }
    sort_spans(&mut spans);

    if config.refine_gaps {
        refine_gaps(provider, &mut spans, config.max_gap_probes);
    }

    debug!(
        date = %day.date,
        spans = spans.len(),
        failures,
        "nakshatra scan complete"
    );
    spans
}

/// Scan the provider around `date` and aggregate the day's Varjyam.
pub fn daily_varjyam_for_date<P>(
    provider: &P,
    date: NaiveDate,
    config: &PanchangConfig,
) -> Result<Vec<VarjyamResult>, VedicError>
where
    P: NakshatraProvider + ?Sized,
{
    let day = DayWindow::new(date, config.offset()?)?;
    let spans = scan_nakshatra_spans(provider, &day, &config.scan);
    Ok(calculate_daily_varjyam_with(&spans, &day, &config.varjyam))
}

/// Query one instant; returns `false` if the sample was unusable.
fn sample<P>(provider: &P, at: DateTime<Utc>, spans: &mut Vec<NakshatraSpan>) -> bool
where
    P: NakshatraProvider + ?Sized,
{
    match provider.nakshatra_at(at) {
        Ok(span) if span.is_valid() => {
            if !spans.contains(&span) {
                spans.push(span);
            }
            true
        }
        Ok(span) => {
            warn!(
                %at,
                name = %span.name,
                start = %span.start,
                end = %span.end,
                "provider returned an empty or inverted span, sample skipped"
            );
            false
        }
        Err(e) => {
            warn!(%at, error = %e, "nakshatra sample failed, skipped");
            false
        }
    }
}

fn refine_gaps<P>(provider: &P, spans: &mut Vec<NakshatraSpan>, max_probes: usize)
where
    P: NakshatraProvider + ?Sized,
{
    let mut probed: HashSet<DateTime<Utc>> = HashSet::new();
    while probed.len() < max_probes {
        let gap = spans
            .windows(2)
            .map(|w| (w[0].end, w[1].start))
            .find(|&(end, next)| end < next && !probed.contains(&end));
        let Some((at, next)) = gap else {
            return;
        };
        debug!(%at, %next, "probing gap between nakshatra spans");
        probed.insert(at);
        sample(provider, at, spans);
        sort_spans(spans);
    }
    debug!(max_probes, "gap probe budget exhausted");
}

fn sort_spans(spans: &mut [NakshatraSpan]) {
    spans.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| a.end.cmp(&b.end))
            .then_with(|| a.name.cmp(&b.name))
    });
}
