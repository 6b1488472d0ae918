//! Varjyam: the inauspicious window inside each nakshatra.
//!
//! This crate provides:
//! - The 27 nakshatras with a transliteration-tolerant name resolver
//! - The compiled-in ghatika table of Varjyam start fractions
//! - Single-span Varjyam calculation (`calculate_varjyam`)
//! - Per-day aggregation of Varjyam periods from sampled spans
//! - A provider-driven scan that discovers the spans around a date
//! - TOML configuration and display formatting
//!
//! Unresolvable input yields `None` rather than an error.

pub mod config;
pub mod daily;
pub mod error;
pub mod format;
pub mod nakshatra;
pub mod scan;
pub mod varjyam;
pub mod varjyam_table;
pub mod varjyam_types;

pub use config::{MAX_WINDOW_HOURS, PanchangConfig, ScanConfig, VarjyamConfig};
pub use daily::{calculate_daily_varjyam, calculate_daily_varjyam_with};
pub use error::{ConfigError, ProviderError, VedicError};
pub use format::{format_varjyam_result, format_varjyam_time, format_varjyam_time_in};
pub use nakshatra::{ALL_NAKSHATRAS_27, NAKSHATRA_ALIASES, Nakshatra, normalize_nakshatra_name};
pub use scan::{NakshatraProvider, daily_varjyam_for_date, sample_instants, scan_nakshatra_spans};
pub use varjyam::{
    calculate_varjyam, calculate_varjyam_str, calculate_varjyam_with, varjyam_for_span,
    varjyam_period,
};
pub use varjyam_table::{
    GHATIKAS_PER_DAY, REFERENCE_DURATION_MINUTES, REFERENCE_VARJYAM_MINUTES, varjyam_fraction,
    varjyam_fraction_for_name, varjyam_fraction_table, varjyam_start_ghatika,
};
pub use varjyam_types::{NakshatraSpan, VarjyamPeriod, VarjyamResult};
