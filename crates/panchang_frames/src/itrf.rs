//! Earth-fixed (ITRF/ECEF) positions and WGS84 geodetic conversion.
//!
//! `ItrfCoord` stores a Cartesian position in meters. Geodetic latitude,
//! longitude, and height are derived on each call, never cached.
//!
//! Latitude recovery uses Bowring's iteration on the parametric latitude.
//! It is best effort within [`LATITUDE_MAX_ITER`] iterations: if the
//! tolerance is not met by then the current estimate is returned as-is.
//!
//! The origin is not guarded. `geocentric_latitude()` yields NaN there.

use std::f64::consts::FRAC_PI_2;

use serde::Serialize;
use tracing::trace;

use crate::geodetic::GeodeticCoords;
use crate::quaternion::Quaternion;

/// WGS84 semi-major axis in meters.
pub const WGS84_A: f64 = 6_378_137.0;

/// WGS84 flattening.
pub const WGS84_F: f64 = 0.003352810664747;

/// Convergence tolerance on parametric latitude, radians.
pub const LATITUDE_TOLERANCE_RAD: f64 = 1e-6;

/// Iteration cap for the latitude solver.
pub const LATITUDE_MAX_ITER: usize = 5;

/// First eccentricity squared, `1 - (1-f)^2`.
const WGS84_E2: f64 = 1.0 - (1.0 - WGS84_F) * (1.0 - WGS84_F);

/// Earth-fixed Cartesian position in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItrfCoord {
    /// `[x, y, z]` in meters.
    pub itrf: [f64; 3],
}

impl ItrfCoord {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { itrf: [x, y, z] }
    }

    /// Position from geodetic latitude/longitude (radians) and height above
    /// the ellipsoid (meters).
    pub fn from_geodetic(lat_rad: f64, lon_rad: f64, height_m: f64) -> Self {
        let (sp, cp) = lat_rad.sin_cos();
        let (sl, cl) = lon_rad.sin_cos();
        let fac = (1.0 - WGS84_F) * (1.0 - WGS84_F);
        let c = 1.0 / (cp * cp + fac * sp * sp).sqrt();
        let s = fac * c;
        Self::new(
            (WGS84_A * c + height_m) * cp * cl,
            (WGS84_A * c + height_m) * cp * sl,
            (WGS84_A * s + height_m) * sp,
        )
    }

    /// Same as [`Self::from_geodetic`] with latitude/longitude in degrees.
    pub fn from_geodetic_deg(lat_deg: f64, lon_deg: f64, height_m: f64) -> Self {
        Self::from_geodetic(lat_deg.to_radians(), lon_deg.to_radians(), height_m)
    }

    /// Distance from the geocenter in meters.
    pub fn norm(&self) -> f64 {
        let [x, y, z] = self.itrf;
        (x * x + y * y + z * z).sqrt()
    }

    /// East-positive longitude in radians, `(-π, π]`.
    pub fn longitude(&self) -> f64 {
        self.itrf[1].atan2(self.itrf[0])
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude().to_degrees()
    }

    /// Geodetic latitude in radians (Bowring iteration).
    pub fn latitude(&self) -> f64 {
        let [x, y, z] = self.itrf;
        let one_f = 1.0 - WGS84_F;
        let ep2 = WGS84_E2 / (1.0 - WGS84_E2);
        let b = WGS84_A * one_f;
        let rho = x.hypot(y);

        let phi_from = |beta: f64| {
            let (sb, cb) = beta.sin_cos();
            (z + b * ep2 * sb * sb * sb).atan2(rho - WGS84_A * WGS84_E2 * cb * cb * cb)
        };
        let beta_from = |phi: f64| (one_f * phi.sin()).atan2(phi.cos());

        let mut beta = z.atan2(one_f * rho);
        let mut phi = phi_from(beta);
        let mut beta_next = beta_from(phi);
        let mut iter = 0;
        while (beta - beta_next).abs() > LATITUDE_TOLERANCE_RAD && iter < LATITUDE_MAX_ITER {
            beta = beta_next;
            phi = phi_from(beta);
            beta_next = beta_from(phi);
            iter += 1;
        }
        let residual = (beta - beta_next).abs();
        if residual > LATITUDE_TOLERANCE_RAD {
            trace!(residual, iterations = iter, "latitude solver hit iteration cap");
        }
        phi
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude().to_degrees()
    }

    /// Height above the WGS84 ellipsoid in meters.
    pub fn height(&self) -> f64 {
        self.height_at(self.latitude())
    }

    fn height_at(&self, lat_rad: f64) -> f64 {
        let [x, y, z] = self.itrf;
        let rho = x.hypot(y);
        let (sp, cp) = lat_rad.sin_cos();
        let n = WGS84_A / (1.0 - WGS84_E2 * sp * sp).sqrt();
        rho * cp + (z + WGS84_E2 * n * sp) * sp - n
    }

    /// Geocentric latitude `asin(z / |r|)`, radians. Not the geodetic latitude.
    pub fn geocentric_latitude(&self) -> f64 {
        (self.itrf[2] / self.norm()).asin()
    }

    /// Latitude, longitude (degrees) and height (meters) in one pass.
    pub fn to_geodetic(&self) -> GeodeticCoords {
        let lat = self.latitude();
        GeodeticCoords {
            latitude_deg: lat.to_degrees(),
            longitude_deg: self.longitude_deg(),
            height_m: self.height_at(lat),
        }
    }

    /// Rotation taking North-East-Down vectors at this point into ITRF.
    pub fn q_ned2itrf(&self) -> Quaternion {
        let lat = self.latitude();
        let lon = self.longitude();
        Quaternion::rotz(-lon) * Quaternion::roty(lat + FRAC_PI_2)
    }

    /// Rotation taking East-North-Up vectors at this point into ITRF.
    pub fn q_enu2itrf(&self) -> Quaternion {
        let lat = self.latitude();
        let lon = self.longitude();
        Quaternion::rotz(-lon - FRAC_PI_2) * Quaternion::rotx(lat - FRAC_PI_2)
    }

    /// Rotation taking ITRF vectors into East-North-Up at this point.
    ///
    /// Composed directly; equals `q_enu2itrf().conjugate()`.
    pub fn q_itrf2enu(&self) -> Quaternion {
        let lat = self.latitude();
        let lon = self.longitude();
        Quaternion::rotx(FRAC_PI_2 - lat) * Quaternion::rotz(lon + FRAC_PI_2)
    }

    /// Displacement `self - reference` in meters, ITRF axes.
    pub fn displacement_from(&self, reference: &ItrfCoord) -> [f64; 3] {
        [
            self.itrf[0] - reference.itrf[0],
            self.itrf[1] - reference.itrf[1],
            self.itrf[2] - reference.itrf[2],
        ]
    }

    /// This point in the East-North-Up frame of `reference`, meters.
    pub fn to_enu(&self, reference: &ItrfCoord) -> [f64; 3] {
        reference.q_itrf2enu().rotate(&self.displacement_from(reference))
    }

    /// This point in the North-East-Down frame of `reference`, meters.
    pub fn to_ned(&self, reference: &ItrfCoord) -> [f64; 3] {
        reference
            .q_ned2itrf()
            .conjugate()
            .rotate(&self.displacement_from(reference))
    }
}

impl From<GeodeticCoords> for ItrfCoord {
    fn from(g: GeodeticCoords) -> Self {
        Self::from_geodetic(g.latitude_rad(), g.longitude_rad(), g.height_m)
    }
}

impl From<[f64; 3]> for ItrfCoord {
    fn from(itrf: [f64; 3]) -> Self {
        Self { itrf }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS_M: f64 = 1e-6;

    fn assert_vec(a: [f64; 3], b: [f64; 3], eps: f64) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < eps, "axis {i}: {a:?} != {b:?}");
        }
    }

    #[test]
    fn equator_prime_meridian() {
        let p = ItrfCoord::from_geodetic(0.0, 0.0, 0.0);
        assert_vec(p.itrf, [WGS84_A, 0.0, 0.0], EPS_M);
    }

    #[test]
    fn north_pole_is_semi_minor_axis() {
        let p = ItrfCoord::from_geodetic_deg(90.0, 0.0, 0.0);
        let b = WGS84_A * (1.0 - WGS84_F);
        assert!((p.itrf[2] - b).abs() < EPS_M);
        assert!(p.itrf[0].abs() < 1e-6);
    }

    #[test]
    fn height_adds_along_normal_at_equator() {
        let p = ItrfCoord::from_geodetic_deg(0.0, 90.0, 1000.0);
        assert_vec(p.itrf, [0.0, WGS84_A + 1000.0, 0.0], 1e-6);
        assert!((p.height() - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn roundtrip_hyderabad() {
        let p = ItrfCoord::from_geodetic_deg(17.385, 78.4867, 542.0);
        assert!((p.latitude_deg() - 17.385).abs() < 1e-8);
        assert!((p.longitude_deg() - 78.4867).abs() < 1e-9);
        assert!((p.height() - 542.0).abs() < 1e-4);
    }

    #[test]
    fn to_geodetic_matches_individual_accessors() {
        let p = ItrfCoord::from_geodetic_deg(-33.86, 151.21, 58.0);
        let g = p.to_geodetic();
        assert_eq!(g.latitude_deg, p.latitude_deg());
        assert_eq!(g.longitude_deg, p.longitude_deg());
        assert_eq!(g.height_m, p.height());
    }

    #[test]
    fn geocentric_latitude_is_smaller_than_geodetic() {
        let p = ItrfCoord::from_geodetic_deg(45.0, 10.0, 0.0);
        let gc = p.geocentric_latitude().to_degrees();
        // Max difference ~0.19 deg at 45 deg.
        assert!(gc < 45.0 && gc > 44.7, "geocentric = {gc}");
    }

    #[test]
    fn geocentric_latitude_nan_at_origin() {
        assert!(ItrfCoord::new(0.0, 0.0, 0.0).geocentric_latitude().is_nan());
    }

    #[test]
    fn enu_axes_at_origin_of_lat_lon() {
        let r = ItrfCoord::from_geodetic(0.0, 0.0, 0.0);
        let q = r.q_enu2itrf();
        assert_vec(q.rotate(&[1.0, 0.0, 0.0]), [0.0, 1.0, 0.0], 1e-12);
        assert_vec(q.rotate(&[0.0, 1.0, 0.0]), [0.0, 0.0, 1.0], 1e-12);
        assert_vec(q.rotate(&[0.0, 0.0, 1.0]), [1.0, 0.0, 0.0], 1e-12);
    }

    #[test]
    fn ned_axes_at_origin_of_lat_lon() {
        let r = ItrfCoord::from_geodetic(0.0, 0.0, 0.0);
        let q = r.q_ned2itrf();
        assert_vec(q.rotate(&[1.0, 0.0, 0.0]), [0.0, 0.0, 1.0], 1e-12);
        assert_vec(q.rotate(&[0.0, 1.0, 0.0]), [0.0, 1.0, 0.0], 1e-12);
        assert_vec(q.rotate(&[0.0, 0.0, 1.0]), [-1.0, 0.0, 0.0], 1e-12);
    }

    #[test]
    fn direct_inverse_equals_conjugate() {
        let r = ItrfCoord::from_geodetic_deg(28.6139, 77.209, 216.0);
        let a = r.q_itrf2enu();
        let b = r.q_enu2itrf().conjugate();
        let v = [1234.0, -567.0, 89.0];
        assert_vec(a.rotate(&v), b.rotate(&v), 1e-9);
    }

    #[test]
    fn up_displacement_is_enu_up_and_ned_down() {
        let r = ItrfCoord::from_geodetic_deg(12.97, 77.59, 900.0);
        let above = ItrfCoord::from_geodetic_deg(12.97, 77.59, 1900.0);
        assert_vec(above.to_enu(&r), [0.0, 0.0, 1000.0], 1e-6);
        assert_vec(above.to_ned(&r), [0.0, 0.0, -1000.0], 1e-6);
    }

    #[test]
    fn northward_point_has_positive_north() {
        let r = ItrfCoord::from_geodetic_deg(19.07, 72.87, 0.0);
        let north = ItrfCoord::from_geodetic_deg(19.08, 72.87, 0.0);
        let enu = north.to_enu(&r);
        let ned = north.to_ned(&r);
        assert!(enu[1] > 1000.0 && enu[0].abs() < 1.0, "enu = {enu:?}");
        assert!((ned[0] - enu[1]).abs() < 1e-6);
        assert!((ned[1] - enu[0]).abs() < 1e-6);
        assert!((ned[2] + enu[2]).abs() < 1e-6);
    }

    #[test]
    fn eastward_point_has_positive_east() {
        let r = ItrfCoord::from_geodetic_deg(-23.5, 133.8, 0.0);
        let east = ItrfCoord::from_geodetic_deg(-23.5, 133.81, 0.0);
        let enu = east.to_enu(&r);
        assert!(enu[0] > 900.0 && enu[1].abs() < 5.0, "enu = {enu:?}");
    }

    #[test]
    fn self_relative_is_zero() {
        let r = ItrfCoord::from_geodetic_deg(51.5, -0.12, 11.0);
        assert_vec(r.to_enu(&r), [0.0; 3], 1e-12);
    }

    #[test]
    fn from_geodetic_coords() {
        let g = GeodeticCoords::new(10.0, 20.0, 30.0);
        let p = ItrfCoord::from(g);
        assert_eq!(p, ItrfCoord::from_geodetic_deg(10.0, 20.0, 30.0));
    }
}
