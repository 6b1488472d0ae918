//! Local horizon coordinates: azimuth, elevation, slant range.
//!
//! Built on the East-North-Up frame of an observer. Azimuth is measured
//! from north through east. Used by sun/moon visibility checks.

use serde::Serialize;

use crate::itrf::ItrfCoord;

/// Direction and distance of a target as seen from an observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizonCoords {
    /// Azimuth in degrees, range [0, 360), north = 0, east = 90.
    pub azimuth_deg: f64,
    /// Elevation above the local horizontal plane in degrees, [-90, 90].
    pub elevation_deg: f64,
    /// Straight-line distance in meters.
    pub range_m: f64,
}

impl HorizonCoords {
    /// Whether the target is at or above `min_elevation_deg`.
    pub fn is_above_horizon(&self, min_elevation_deg: f64) -> bool {
        self.elevation_deg >= min_elevation_deg
    }
}

/// Convert an ENU vector (meters) to horizon coordinates.
///
/// A zero vector maps to all-zero coordinates.
pub fn enu_to_horizon(enu: &[f64; 3]) -> HorizonCoords {
    let [e, n, u] = *enu;
    let r = (e * e + n * n + u * u).sqrt();

    if r == 0.0 {
        return HorizonCoords {
            azimuth_deg: 0.0,
            elevation_deg: 0.0,
            range_m: 0.0,
        };
    }

    HorizonCoords {
        azimuth_deg: e.atan2(n).to_degrees().rem_euclid(360.0),
        elevation_deg: (u / r).asin().to_degrees(),
        range_m: r,
    }
}

impl ItrfCoord {
    /// Where `target` appears from this observer.
    pub fn look_at(&self, target: &ItrfCoord) -> HorizonCoords {
        enu_to_horizon(&target.to_enu(self))
    }
}
