use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchang_time::{DayWindow, ist};
use panchang_vedic::{
    Nakshatra, NakshatraSpan, PanchangConfig, ProviderError, calculate_daily_varjyam,
    calculate_varjyam, daily_varjyam_for_date,
};

/// Contiguous 23-hour spans cycling through the 27 nakshatras.
fn synthetic_span(at: DateTime<Utc>) -> Result<NakshatraSpan, ProviderError> {
    let epoch = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let len = Duration::hours(23);
    let k = (at - epoch).num_seconds().div_euclid(len.num_seconds());
    let start = epoch + len * k as i32;
    let n = Nakshatra::all()[k.rem_euclid(27) as usize];
    Ok(NakshatraSpan::new(n.name(), start, start + len))
}

fn single_span_bench(c: &mut Criterion) {
    let s = Utc.with_ymd_and_hms(2025, 10, 2, 0, 30, 0).unwrap();
    let e = s + Duration::minutes(1_381);

    let mut group = c.benchmark_group("varjyam");
    group.bench_function("canonical_name", |b| {
        b.iter(|| calculate_varjyam(black_box("Krittika"), s, e))
    });
    group.bench_function("alias_name", |b| {
        b.iter(|| calculate_varjyam(black_box("Poorva-Bhadra"), s, e))
    });
    group.finish();
}

fn daily_bench(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2025, 10, 3).unwrap();
    let day = DayWindow::new(date, ist()).unwrap();
    let spans: Vec<_> = (0..9)
        .filter_map(|k| synthetic_span(day.noon() + Duration::hours(6 * k - 24)).ok())
        .collect();
    let config = PanchangConfig::default();

    let mut group = c.benchmark_group("daily");
    group.bench_function("aggregate", |b| {
        b.iter(|| calculate_daily_varjyam(black_box(&spans), &day))
    });
    group.bench_function("scan_and_aggregate", |b| {
        b.iter(|| daily_varjyam_for_date(&synthetic_span, black_box(date), &config))
    });
    group.finish();
}

criterion_group!(benches, single_span_bench, daily_bench);
criterion_main!(benches);
