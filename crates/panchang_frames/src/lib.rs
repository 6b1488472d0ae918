//! Frame rotation and Earth-fixed coordinate helpers.
//!
//! Provides unit-quaternion rotations, WGS84 geodetic ↔ ITRF conversion,
//! local East-North-Up / North-East-Down frames, and horizon coordinates
//! for observer-relative visibility geometry.

pub mod geodetic;
pub mod horizon;
pub mod itrf;
pub mod quaternion;

pub use geodetic::GeodeticCoords;
pub use horizon::{HorizonCoords, enu_to_horizon};
pub use itrf::{ItrfCoord, LATITUDE_MAX_ITER, LATITUDE_TOLERANCE_RAD, WGS84_A, WGS84_F};
pub use quaternion::Quaternion;
