//! Unit-quaternion algebra for frame rotations.
//!
//! Components are stored as `(x, y, z, w)` with `w` the scalar part.
//!
//! Convention: `multiply(a, b)` composes so that rotating by the product
//! applies `b` first, then `a`:
//!
//! ```text
//! multiply(a, b).rotate(v) == a.rotate(b.rotate(v))
//! ```
//!
//! The axis rotations `rotx/roty/rotz(θ)` rotate the coordinate frame by θ,
//! so `rotate` turns a fixed vector by -θ about that axis. The ITRF local
//! frame quaternions in [`crate::itrf`] are composed with this convention.
//!
//! Nothing here enforces unit norm; callers supply unit quaternions when
//! they need geometric meaning.

use std::ops::{Mul, MulAssign};

use serde::Serialize;

/// Rotation quaternion `(x, y, z, w)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl Quaternion {
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// The no-op rotation.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Pure quaternion `(v, 0)`.
    const fn pure(v: &[f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2], 0.0)
    }

    /// Rotation of `angle_rad` about `axis`, using the half-angle form.
    ///
    /// The axis is normalised first; a zero axis yields the identity.
    pub fn from_axis_angle(axis: &[f64; 3], angle_rad: f64) -> Self {
        let n = (axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2]).sqrt();
        if n == 0.0 {
            return Self::identity();
        }
        let (s, c) = (angle_rad / 2.0).sin_cos();
        Self::new(s * axis[0] / n, s * axis[1] / n, s * axis[2] / n, c)
    }

    /// Rotation about the x axis.
    pub fn rotx(theta_rad: f64) -> Self {
        let (s, c) = (theta_rad / 2.0).sin_cos();
        Self::new(s, 0.0, 0.0, c)
    }

    /// Rotation about the y axis.
    pub fn roty(theta_rad: f64) -> Self {
        let (s, c) = (theta_rad / 2.0).sin_cos();
        Self::new(0.0, s, 0.0, c)
    }

    /// Rotation about the z axis.
    pub fn rotz(theta_rad: f64) -> Self {
        let (s, c) = (theta_rad / 2.0).sin_cos();
        Self::new(0.0, 0.0, s, c)
    }

    /// Composition: apply `b`, then `a`.
    ///
    /// The component layout is fixed; the frame quaternions depend on it.
    pub fn multiply(a: &Self, b: &Self) -> Self {
        Self {
            x: b.w * a.x + b.x * a.w + b.y * a.z - b.z * a.y,
            y: b.w * a.y - b.x * a.z + b.y * a.w + b.z * a.x,
            z: b.w * a.z + b.x * a.y - b.y * a.x + b.z * a.w,
            w: b.w * a.w - b.x * a.x - b.y * a.y - b.z * a.z,
        }
    }

    /// Negated vector part, same scalar part.
    pub const fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Scale to unit norm. A zero quaternion is returned unchanged.
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        if n == 0.0 {
            return *self;
        }
        Self::new(self.x / n, self.y / n, self.z / n, self.w / n)
    }

    /// Sandwich-product rotation of a 3-vector.
    pub fn rotate(&self, v: &[f64; 3]) -> [f64; 3] {
        let r = Self::multiply(self, &Self::multiply(&Self::pure(v), &self.conjugate()));
        [r.x, r.y, r.z]
    }

    /// Unit rotation axis. Defaults to `[1, 0, 0]` when the vector part is zero.
    pub fn axis(&self) -> [f64; 3] {
        let n = self.vector_norm();
        if n == 0.0 {
            return [1.0, 0.0, 0.0];
        }
        [self.x / n, self.y / n, self.z / n]
    }

    /// Rotation angle in radians, in `[0, 2π]`.
    pub fn angle(&self) -> f64 {
        2.0 * self.vector_norm().atan2(self.w)
    }

    fn vector_norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        Quaternion::multiply(&self, &rhs)
    }
}

impl MulAssign for Quaternion {
    /// In-place `self = multiply(self, rhs)`.
    fn mul_assign(&mut self, rhs: Quaternion) {
        *self = Quaternion::multiply(self, &rhs);
    }
}

impl Mul<[f64; 3]> for Quaternion {
    type Output = [f64; 3];

    fn mul(self, rhs: [f64; 3]) -> [f64; 3] {
        self.rotate(&rhs)
    }
}
