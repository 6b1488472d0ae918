//! Error types for Varjyam configuration and provider-driven scans.
//!
//! Unresolvable Varjyam input (unknown name, inverted span) is not an
//! error: those calls return `None`.

use chrono::{DateTime, Utc};
use panchang_time::TimeError;

/// Errors from the panchang pipeline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from instant parsing or day-boundary construction.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Invalid or unreadable configuration.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// Name does not resolve to any of the 27 nakshatras.
    #[error("unknown nakshatra: {0:?}")]
    UnknownNakshatra(String),
}

/// Failure of a single ephemeris sample.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// The provider has no data for this instant.
    #[error("instant {0} is outside the provider range")]
    OutOfRange(DateTime<Utc>),
    /// Any other provider failure.
    #[error("ephemeris provider failed: {0}")]
    Failed(String),
}

/// Configuration loading and validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File could not be read.
    #[error("cannot read {path}: {reason}")]
    Io { path: String, reason: String },
    /// TOML did not match the expected schema.
    #[error("invalid TOML: {0}")]
    Parse(String),
    /// A field failed validation.
    #[error("{field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unknown_nakshatra() {
        let e = VedicError::UnknownNakshatra("abhijit".into());
        assert_eq!(e.to_string(), "unknown nakshatra: \"abhijit\"");
    }

    #[test]
    fn display_invalid_field() {
        let e = ConfigError::Invalid {
            field: "scan.step_hours",
            reason: "must be positive".into(),
        };
        assert_eq!(e.to_string(), "scan.step_hours: must be positive");
    }

    #[test]
    fn config_error_converts() {
        let e: VedicError = ConfigError::Parse("x".into()).into();
        assert!(matches!(e, VedicError::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn errors_are_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<VedicError>();
        assert_impl::<ProviderError>();
        assert_impl::<ConfigError>();
    }
}
