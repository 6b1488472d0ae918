//! TOML configuration for the Varjyam pipeline.
//!
//! Every field has a default, so an empty file is valid:
//!
//! ```toml
//! utc_offset_minutes = 330
//!
//! [varjyam]
//! reference_duration_minutes = 1440.0
//! reference_varjyam_minutes = 96.0
//!
//! [scan]
//! window_hours = 48
//! step_hours = 6
//! refine_gaps = true
//! max_gap_probes = 8
//! ```

use std::path::Path;

use chrono::FixedOffset;
use panchang_time::{IST_OFFSET_MINUTES, offset_from_minutes};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;
use crate::varjyam_table::{REFERENCE_DURATION_MINUTES, REFERENCE_VARJYAM_MINUTES};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanchangConfig {
    /// Local time zone for day boundaries, minutes east of UTC.
    pub utc_offset_minutes: i32,
    /// Varjyam length scaling.
    pub varjyam: VarjyamConfig,
    /// Provider sampling.
    pub scan: ScanConfig,
}

impl Default for PanchangConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: IST_OFFSET_MINUTES,
            varjyam: VarjyamConfig::default(),
            scan: ScanConfig::default(),
        }
    }
}

/// Varjyam length is `span / reference_duration * reference_varjyam`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VarjyamConfig {
    pub reference_duration_minutes: f64,
    pub reference_varjyam_minutes: f64,
}

impl Default for VarjyamConfig {
    fn default() -> Self {
        Self {
            reference_duration_minutes: REFERENCE_DURATION_MINUTES,
            reference_varjyam_minutes: REFERENCE_VARJYAM_MINUTES,
        }
    }
}

impl VarjyamConfig {
    /// Varjyam length for a nakshatra of `duration_minutes`.
    pub fn varjyam_minutes(&self, duration_minutes: f64) -> f64 {
        duration_minutes / self.reference_duration_minutes * self.reference_varjyam_minutes
    }
}

/// Widest accepted scan window (one week).
pub const MAX_WINDOW_HOURS: u32 = 7 * 24;

/// Sampling of the nakshatra provider around a target day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Total window, centred on local noon of the target day.
    pub window_hours: u32,
    /// Spacing between samples.
    pub step_hours: u32,
    /// Probe the provider at the end of a span when the next span does not
    /// start there.
    pub refine_gaps: bool,
    /// Upper bound on extra probes per scan.
    pub max_gap_probes: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            window_hours: 48,
            step_hours: 6,
            refine_gaps: true,
            max_gap_probes: 8,
        }
    }
}

impl PanchangConfig {
    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?;
        info!(path = %path.display(), "loaded panchang config");
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.offset()?;
        let v = &self.varjyam;
        for (field, value) in [
            ("varjyam.reference_duration_minutes", v.reference_duration_minutes),
            ("varjyam.reference_varjyam_minutes", v.reference_varjyam_minutes),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {value}"),
                });
            }
        }
        if self.scan.step_hours == 0 {
            return Err(ConfigError::Invalid {
                field: "scan.step_hours",
                reason: "must be positive".into(),
            });
        }
        if self.scan.window_hours > MAX_WINDOW_HOURS {
            return Err(ConfigError::Invalid {
                field: "scan.window_hours",
                reason: format!(
                    "{} exceeds the maximum of {MAX_WINDOW_HOURS}",
                    self.scan.window_hours
                ),
            });
        }
        if self.scan.step_hours > self.scan.window_hours {
            return Err(ConfigError::Invalid {
                field: "scan.step_hours",
                reason: format!(
                    "{} exceeds scan.window_hours = {}",
                    self.scan.step_hours, self.scan.window_hours
                ),
            });
        }
        Ok(())
    }

    /// Configured time zone.
    pub fn offset(&self) -> Result<FixedOffset, ConfigError> {
        offset_from_minutes(self.utc_offset_minutes).map_err(|e| ConfigError::Invalid {
            field: "utc_offset_minutes",
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let c = PanchangConfig::from_toml_str("").unwrap();
        assert_eq!(c, PanchangConfig::default());
        assert_eq!(c.utc_offset_minutes, 330);
        assert_eq!(c.scan.window_hours, 48);
        assert_eq!(c.scan.step_hours, 6);
        assert!((c.varjyam.varjyam_minutes(720.0) - 48.0).abs() < 1e-12);
    }

    #[test]
    fn partial_override() {
        let c = PanchangConfig::from_toml_str(
            "utc_offset_minutes = -300\n[scan]\nstep_hours = 3\nrefine_gaps = false\n",
        )
        .unwrap();
        assert_eq!(c.utc_offset_minutes, -300);
        assert_eq!(c.scan.step_hours, 3);
        assert!(!c.scan.refine_gaps);
        assert_eq!(c.scan.window_hours, 48);
        assert_eq!(c.offset().unwrap().local_minus_utc(), -300 * 60);
    }

    #[test]
    fn unknown_field_rejected() {
        let err = PanchangConfig::from_toml_str("[scan]\nstride = 2\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_step_rejected() {
        let err = PanchangConfig::from_toml_str("[scan]\nstep_hours = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "scan.step_hours", .. }));
    }

    #[test]
    fn step_larger_than_window_rejected() {
        let err = PanchangConfig::from_toml_str("[scan]\nwindow_hours = 4\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "scan.step_hours", .. }));
    }

    #[test]
    fn oversized_window_rejected() {
        let huge = "[scan]\nwindow_hours = 4000000000\nstep_hours = 1\n";
        let err = PanchangConfig::from_toml_str(huge).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "scan.window_hours", .. }));
        let week = format!("[scan]\nwindow_hours = {MAX_WINDOW_HOURS}\nstep_hours = 1\n");
        assert!(PanchangConfig::from_toml_str(&week).is_ok());
    }

    #[test]
    fn negative_reference_rejected() {
        let err = PanchangConfig::from_toml_str("[varjyam]\nreference_varjyam_minutes = -1.0\n")
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { field: "varjyam.reference_varjyam_minutes", .. }
        ));
    }

    #[test]
    fn out_of_range_offset_rejected() {
        let err = PanchangConfig::from_toml_str("utc_offset_minutes = 1440\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "utc_offset_minutes", .. }));
    }

    #[test]
    fn load_missing_file() {
        let err = PanchangConfig::load(Path::new("/nonexistent/panchang.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_from_disk() {
        let path = std::env::temp_dir().join(format!("panchang_cfg_{}.toml", std::process::id()));
        std::fs::write(&path, "[varjyam]\nreference_varjyam_minutes = 90.0\n").unwrap();
        let c = PanchangConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert!((c.varjyam.reference_varjyam_minutes - 90.0).abs() < 1e-12);
    }
}
