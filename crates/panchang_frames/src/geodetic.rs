//! Geodetic position record (WGS84 latitude, longitude, height).

use serde::Serialize;

/// Observer position on or above the WGS84 ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeodeticCoords {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: (-180, 180].
    pub longitude_deg: f64,
    /// Height above the ellipsoid in meters.
    pub height_m: f64,
}

impl GeodeticCoords {
    pub fn new(latitude_deg: f64, longitude_deg: f64, height_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            height_m,
        }
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ItrfCoord;

    #[test]
    fn radians_accessors() {
        let g = GeodeticCoords::new(90.0, -180.0, 0.0);
        assert!((g.latitude_rad() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
        assert!((g.longitude_rad() + std::f64::consts::PI).abs() < 1e-15);
    }

    #[test]
    fn through_itrf_and_back() {
        let g = GeodeticCoords::new(13.0827, 80.2707, 6.7);
        let back = ItrfCoord::from(g).to_geodetic();
        assert!((back.latitude_deg - g.latitude_deg).abs() < 1e-8);
        assert!((back.longitude_deg - g.longitude_deg).abs() < 1e-9);
        assert!((back.height_m - g.height_m).abs() < 1e-4);
    }
}
