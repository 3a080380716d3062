//! # Vector3 Module
//!
//! A 3D Euclidean vector value type with Cartesian storage and setters for
//! spherical and cylindrical coordinates.
//!
//! ## Coordinate Conventions
//!
//! - **theta**: polar angle measured from the +z axis, in radians
//! - **phi**: azimuthal angle in the x-y plane measured from +x, in radians
//! - **rho / pt**: transverse radius in the x-y plane
//!
//! ## Internal Storage
//!
//! Components are stored as a `[f64; 3]` in x, y, z order. Setters overwrite
//! the stored components in place; arithmetic operators return new values.
//!
//! ## Equality
//!
//! `==` compares components exactly. Values produced through trigonometric
//! setters usually carry rounding residue (`cos(π/2)` is about `6.1e-17`),
//! so compare those with [`Vector3::approx_eq`] or the `approx` macros.
//!
//! ## Examples
//!
//! ```rust
//! use tools::geometry::Vector3;
//! use std::f64::consts::PI;
//!
//! let v = Vector3::new(0.0, 3.0, 4.0);
//! assert_eq!(v.mag(), 5.0);
//! assert_eq!(v.mag2(), 25.0);
//!
//! let mut w = Vector3::default();
//! w.set_mag_theta_phi(1.0, PI / 2.0, PI / 2.0);
//! assert!(w.approx_eq(&Vector3::new(0.0, 1.0, 0.0)));
//! ```

use crate::errors::{Result, ToolsError};
use crate::math;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Index, Mul, Sub};

/// Three-dimensional Euclidean vector
///
/// Plain value type: copies are independent, and the zero vector (the
/// default) is a valid state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector3 {
    v: [f64; 3],
}

impl Vector3 {
    /// Creates a vector from its Cartesian components
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tools::geometry::Vector3;
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.x(), 1.0);
    /// assert_eq!(v.y(), 2.0);
    /// assert_eq!(v.z(), 3.0);
    /// ```
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { v: [x, y, z] }
    }

    /// The origin
    pub const fn zeros() -> Self {
        Vector3 { v: [0.0; 3] }
    }

    /// X component
    #[inline]
    pub fn x(&self) -> f64 {
        self.v[0]
    }

    /// Y component
    #[inline]
    pub fn y(&self) -> f64 {
        self.v[1]
    }

    /// Z component
    #[inline]
    pub fn z(&self) -> f64 {
        self.v[2]
    }

    /// Bounds-checked component access: 0, 1 and 2 map to x, y and z
    ///
    /// # Errors
    ///
    /// Returns [`ToolsError::IndexOutOfRange`] for any index above 2.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tools::geometry::Vector3;
    /// use tools::errors::ToolsError;
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.at(2), Ok(3.0));
    /// assert_eq!(v.at(3), Err(ToolsError::IndexOutOfRange { index: 3 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<f64> {
        self.v.get(index).copied().ok_or_else(|| {
            log::debug!("Vector3 component index {} out of range", index);
            ToolsError::IndexOutOfRange { index }
        })
    }

    /// Components as an `[x, y, z]` array
    pub fn as_array(&self) -> [f64; 3] {
        self.v
    }

    /// Converts to a nalgebra `Vector3<f64>`
    pub fn to_nalgebra(&self) -> nalgebra::Vector3<f64> {
        nalgebra::Vector3::new(self.v[0], self.v[1], self.v[2])
    }

    /// Euclidean norm, same as [`Vector3::mag`]
    pub fn norm(&self) -> f64 {
        math::norm2(self.v)
    }

    /// Magnitude: `sqrt(x² + y² + z²)`
    pub fn mag(&self) -> f64 {
        math::norm2(self.v)
    }

    /// Squared magnitude, avoids the square root
    pub fn mag2(&self) -> f64 {
        math::sum2(self.v)
    }

    /// Transverse radius in the x-y plane
    pub fn perp(&self) -> f64 {
        self.v[0].hypot(self.v[1])
    }

    /// Squared transverse radius
    pub fn perp2(&self) -> f64 {
        math::sum2([self.v[0], self.v[1]])
    }

    /// Polar angle from +z in `[0, π]`
    ///
    /// Zero for the zero vector, whatever the signs of its zeros.
    pub fn theta(&self) -> f64 {
        if self.mag2() == 0.0 {
            return 0.0;
        }
        self.perp().atan2(self.v[2])
    }

    /// Azimuthal angle from +x in `(-π, π]`
    ///
    /// Zero on the z axis. A negative-zero y on the -x half axis gives π,
    /// not -π.
    pub fn phi(&self) -> f64 {
        if self.v[0] == 0.0 && self.v[1] == 0.0 {
            return 0.0;
        }
        let phi = self.v[1].atan2(self.v[0]);
        if phi == -math::PI {
            math::PI
        } else {
            phi
        }
    }

    /// Dot product, also available as `a * b`
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.v[0] * other.v[0] + self.v[1] * other.v[1] + self.v[2] * other.v[2]
    }

    /// Sets the x component
    pub fn set_x(&mut self, x: f64) {
        self.v[0] = x;
    }

    /// Sets the y component
    pub fn set_y(&mut self, y: f64) {
        self.v[1] = y;
    }

    /// Sets the z component
    pub fn set_z(&mut self, z: f64) {
        self.v[2] = z;
    }

    /// Sets all three Cartesian components
    pub fn set_xyz(&mut self, x: f64, y: f64, z: f64) {
        self.v = [x, y, z];
    }

    /// Sets the vector from spherical coordinates
    ///
    /// The magnitude is taken as `|mag|`.
    ///
    /// # Mathematical Conversion
    ///
    /// - `x = |mag| * sin(theta) * cos(phi)`
    /// - `y = |mag| * sin(theta) * sin(phi)`
    /// - `z = |mag| * cos(theta)`
    pub fn set_mag_theta_phi(&mut self, mag: f64, theta: f64, phi: f64) {
        let amag = mag.abs();
        let rho = amag * theta.sin();
        self.v = [rho * phi.cos(), rho * phi.sin(), amag * theta.cos()];
    }

    /// Sets the vector from a transverse radius and the two angles
    ///
    /// # Mathematical Conversion
    ///
    /// - `x = pt * cos(phi)`
    /// - `y = pt * sin(phi)`
    /// - `z = pt / tan(theta)`
    ///
    /// When `tan(theta)` is exactly zero (`theta == 0`), z is set to 0.
    /// Elsewhere plain float division applies, so theta near π gives a very
    /// large |z|.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tools::geometry::Vector3;
    ///
    /// let mut v = Vector3::default();
    /// v.set_pt_theta_phi(1.0, 0.0, 0.0);
    /// assert_eq!(v, Vector3::new(1.0, 0.0, 0.0));
    /// ```
    pub fn set_pt_theta_phi(&mut self, pt: f64, theta: f64, phi: f64) {
        let tan_theta = theta.tan();
        let z = if tan_theta != 0.0 {
            pt / tan_theta
        } else {
            log::trace!(
                "set_pt_theta_phi: tan(theta) is zero for theta={}, z set to 0",
                theta
            );
            0.0
        };
        self.v = [pt * phi.cos(), pt * phi.sin(), z];
    }

    /// Sets the vector from cylindrical coordinates
    pub fn set_rho_phi_z(&mut self, rho: f64, phi: f64, z: f64) {
        self.v = [rho * phi.cos(), rho * phi.sin(), z];
    }

    /// Rotates about the x axis by `angle` radians
    pub fn rotate_x(&mut self, angle: f64) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        let [_, y, z] = self.v;
        self.v[1] = y * cos - z * sin;
        self.v[2] = z * cos + y * sin;
        self
    }

    /// Rotates about the y axis by `angle` radians
    pub fn rotate_y(&mut self, angle: f64) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        let [x, _, z] = self.v;
        self.v[2] = z * cos - x * sin;
        self.v[0] = x * cos + z * sin;
        self
    }

    /// Rotates about the z axis by `angle` radians
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tools::geometry::Vector3;
    /// use std::f64::consts::PI;
    ///
    /// let mut v = Vector3::new(1.0, 0.0, 0.0);
    /// v.rotate_z(PI / 2.0);
    /// assert!(v.approx_eq(&Vector3::new(0.0, 1.0, 0.0)));
    /// ```
    pub fn rotate_z(&mut self, angle: f64) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        let [x, y, _] = self.v;
        self.v[0] = x * cos - y * sin;
        self.v[1] = y * cos + x * sin;
        self
    }

    /// Scales the vector to unit magnitude
    ///
    /// The zero vector has no direction and is left unchanged.
    pub fn unit(&mut self) -> &mut Self {
        let mag = self.mag();
        if mag == 0.0 {
            log::trace!("unit() called on the zero vector, left unchanged");
        } else {
            self.v.iter_mut().for_each(|c| *c /= mag);
        }
        self
    }

    /// Component-wise tolerant comparison using [`math::equals`]
    pub fn approx_eq(&self, other: &Vector3) -> bool {
        self.v
            .iter()
            .zip(other.v.iter())
            .all(|(a, b)| math::equals(*a, *b))
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;

    /// Subscript access; panics for an index above 2, see [`Vector3::at`]
    fn index(&self, index: usize) -> &f64 {
        match self.v.get(index) {
            Some(c) => c,
            None => panic!("{}", ToolsError::IndexOutOfRange { index }),
        }
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(v: [f64; 3]) -> Self {
        Vector3 { v }
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.v
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(vec: nalgebra::Vector3<f64>) -> Self {
        Vector3::new(vec.x, vec.y, vec.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        v.to_nalgebra()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.v[0], self.v[1], self.v[2])
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.v[0] + other.v[0],
            self.v[1] + other.v[1],
            self.v[2] + other.v[2],
        )
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.v[0] - other.v[0],
            self.v[1] - other.v[1],
            self.v[2] - other.v[2],
        )
    }
}

// Vector * Vector is the dot product
impl Mul for Vector3 {
    type Output = f64;

    fn mul(self, other: Vector3) -> f64 {
        self.dot(&other)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, scalar: f64) -> Vector3 {
        Vector3::new(scalar * self.v[0], scalar * self.v[1], scalar * self.v[2])
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        v * self
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, scalar: f64) -> Vector3 {
        Vector3::new(self.v[0] / scalar, self.v[1] / scalar, self.v[2] / scalar)
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.v
            .iter()
            .zip(other.v.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.v
            .iter()
            .zip(other.v.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl UlpsEq for Vector3 {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.v
            .iter()
            .zip(other.v.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}
