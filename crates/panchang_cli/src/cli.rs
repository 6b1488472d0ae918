use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use panchang_time::parse_instant;
use panchang_vedic::NakshatraSpan;

/// Varjyam and geodetic frame calculator.
#[derive(Parser)]
#[command(name = "panchang", version, about = "Varjyam and geodetic frame calculator")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Varjyam window of one nakshatra span
    Varjyam(VarjyamArgs),
    /// Varjyam periods touching one local calendar day
    Daily(DailyArgs),
    /// Geodetic latitude/longitude/height to ECEF
    Geodetic(GeodeticArgs),
    /// ECEF to geodetic latitude/longitude/height
    Ecef(EcefArgs),
    /// Local ENU/NED offset and look angles of a target from a reference
    Enu(EnuArgs),
}

#[derive(clap::Args)]
pub struct VarjyamArgs {
    /// Nakshatra name (any common spelling)
    pub nakshatra: String,
    /// Nakshatra start, RFC 3339
    #[arg(long, value_parser = parse_instant_arg)]
    pub start: DateTime<Utc>,
    /// Nakshatra end, RFC 3339
    #[arg(long, value_parser = parse_instant_arg)]
    pub end: DateTime<Utc>,
    /// Clock locale: en-IN (am/pm) or en-US (AM/PM)
    #[arg(long, default_value = "en-IN")]
    pub locale: String,
}

#[derive(clap::Args)]
pub struct DailyArgs {
    /// Local calendar date (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,
    /// Nakshatra span as NAME,START,END (repeatable)
    #[arg(long = "span", value_parser = parse_span_arg, required = true)]
    pub spans: Vec<NakshatraSpan>,
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Clock locale: en-IN (am/pm) or en-US (AM/PM)
    #[arg(long, default_value = "en-IN")]
    pub locale: String,
}

#[derive(clap::Args)]
pub struct GeodeticArgs {
    /// Geodetic latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,
    /// Height above the WGS84 ellipsoid in meters
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub height: f64,
}

#[derive(clap::Args)]
pub struct EcefArgs {
    /// X in meters
    #[arg(allow_negative_numbers = true)]
    pub x: f64,
    /// Y in meters
    #[arg(allow_negative_numbers = true)]
    pub y: f64,
    /// Z in meters
    #[arg(allow_negative_numbers = true)]
    pub z: f64,
}

#[derive(clap::Args)]
pub struct EnuArgs {
    /// Reference latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub ref_lat: f64,
    /// Reference longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub ref_lon: f64,
    /// Reference height in meters
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub ref_height: f64,
    /// Target latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,
    /// Target longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,
    /// Target height in meters
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub height: f64,
}

fn parse_instant_arg(s: &str) -> Result<DateTime<Utc>, String> {
    parse_instant(s).map_err(|e| e.to_string())
}

/// `NAME,START,END` with RFC 3339 instants.
fn parse_span_arg(s: &str) -> Result<NakshatraSpan, String> {
    let mut parts = s.rsplitn(3, ',');
    let (Some(end), Some(start), Some(name)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected NAME,START,END, got {s:?}"));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err("empty nakshatra name".into());
    }
    Ok(NakshatraSpan::new(
        name,
        parse_instant_arg(start)?,
        parse_instant_arg(end)?,
    ))
}
