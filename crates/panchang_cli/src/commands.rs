use anyhow::{Context, Result, bail};
use panchang_frames::ItrfCoord;
use panchang_time::{DayWindow, TimeLocale};
use panchang_vedic::{
    PanchangConfig, calculate_daily_varjyam_with, calculate_varjyam, format_varjyam_result,
    format_varjyam_time,
};
use tracing::info;

use crate::cli::{DailyArgs, EcefArgs, EnuArgs, GeodeticArgs, VarjyamArgs};

pub fn varjyam(args: VarjyamArgs) -> Result<()> {
    let Some(result) = calculate_varjyam(&args.nakshatra, args.start, args.end) else {
        bail!(
            "no varjyam for {:?}: unknown nakshatra or end is not after start",
            args.nakshatra
        );
    };
    for p in &result.periods {
        println!(
            "{}: {} ({:.1} min)",
            result.nakshatra,
            format_varjyam_time(p, &args.locale),
            p.duration_minutes()
        );
        println!("  start {}", p.start.to_rfc3339());
        println!("  end   {}", p.end.to_rfc3339());
    }
    Ok(())
}

pub fn daily(args: DailyArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => PanchangConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PanchangConfig::default(),
    };
    let offset = config.offset()?;
    let day = DayWindow::new(args.date, offset)?;
    let locale = TimeLocale::from_tag(&args.locale);
    info!(
        date = %day.date,
        spans = args.spans.len(),
        locale = locale.tag(),
        "aggregating daily varjyam"
    );

    let results = calculate_daily_varjyam_with(&args.spans, &day, &config.varjyam);
    if results.is_empty() {
        println!("No varjyam on {}", args.date);
        return Ok(());
    }
    for r in &results {
        println!("{}", format_varjyam_result(r, locale, offset));
    }
    Ok(())
}

pub fn geodetic(args: GeodeticArgs) -> Result<()> {
    let p = ItrfCoord::from_geodetic_deg(args.lat, args.lon, args.height);
    println!("x = {:.4} m", p.itrf[0]);
    println!("y = {:.4} m", p.itrf[1]);
    println!("z = {:.4} m", p.itrf[2]);
    Ok(())
}

pub fn ecef(args: EcefArgs) -> Result<()> {
    let p = ItrfCoord::new(args.x, args.y, args.z);
    if p.norm() == 0.0 {
        bail!("the origin has no geodetic position");
    }
    let g = p.to_geodetic();
    println!("latitude            = {:.9} deg", g.latitude_deg);
    println!("longitude           = {:.9} deg", g.longitude_deg);
    println!("height              = {:.4} m", g.height_m);
    println!(
        "geocentric latitude = {:.9} deg",
        p.geocentric_latitude().to_degrees()
    );
    Ok(())
}

pub fn enu(args: EnuArgs) -> Result<()> {
    let reference = ItrfCoord::from_geodetic_deg(args.ref_lat, args.ref_lon, args.ref_height);
    let target = ItrfCoord::from_geodetic_deg(args.lat, args.lon, args.height);
    let [e, n, u] = target.to_enu(&reference);
    let [nn, ne, nd] = target.to_ned(&reference);
    let look = reference.look_at(&target);

    println!("ENU = [{e:.4}, {n:.4}, {u:.4}] m");
    println!("NED = [{nn:.4}, {ne:.4}, {nd:.4}] m");
    println!(
        "azimuth {:.4} deg, elevation {:.4} deg, range {:.4} m{}",
        look.azimuth_deg,
        look.elevation_deg,
        look.range_m,
        if look.is_above_horizon(0.0) { "" } else { " (below horizon)" }
    );
    Ok(())
}
