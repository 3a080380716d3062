//! # Random Vector Sampling
//!
//! Distributions producing random [`Vector3`] values: isotropic directions,
//! points in a ball, in a cylinder along any axis, and in a box.
//!
//! Every sampler implements [`rand::distributions::Distribution<Vector3>`],
//! so it works with any `Rng`, including seeded generators for reproducible
//! runs.
//!
//! ## Examples
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::{Rng, SeedableRng};
//! use tools::geometry::random::{Cuboid, Direction};
//! use tools::Vector3;
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let dir: Vector3 = rng.sample(Direction);
//! assert!((dir.mag() - 1.0).abs() < 1e-12);
//!
//! let p = rng.sample(Cuboid::new(2.0, 2.0, 2.0));
//! assert!(p.x().abs() <= 1.0 && p.y().abs() <= 1.0 && p.z().abs() <= 1.0);
//! ```

use super::Vector3;
use crate::math::{PI_OVER_2, TWO_PI};
use rand::distributions::Distribution;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Coordinate axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    #[default]
    Z,
}

/// Isotropic unit vector
///
/// theta is drawn as `acos(1 - 2u)` and phi as `2πu`, so directions are
/// uniform over the unit sphere.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Direction;

impl Distribution<Vector3> for Direction {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector3 {
        let theta = (1.0 - 2.0 * rng.gen::<f64>()).acos();
        let phi = TWO_PI * rng.gen::<f64>();
        let mut v = Vector3::default();
        v.set_mag_theta_phi(1.0, theta, phi);
        v
    }
}

/// Point uniformly distributed inside a ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Ball radius
    pub radius: f64,
    /// Ball center
    pub center: Vector3,
}

impl Sphere {
    /// Ball of radius `radius` centered on the origin
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            center: Vector3::default(),
        }
    }

    /// Moves the ball to `center`
    pub fn with_center(mut self, center: Vector3) -> Self {
        self.center = center;
        self
    }
}

impl Distribution<Vector3> for Sphere {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector3 {
        // Cube root of a uniform variate keeps the density uniform in volume
        let r = (rng.gen::<f64>() * self.radius.powi(3)).cbrt();
        self.center + r * Direction.sample(rng)
    }
}

/// Point inside a cylinder
///
/// The radial distance is uniform in `[0, rho)`, the azimuth uniform in
/// `[0, 2π)` and the longitudinal coordinate uniform in `[-half_height,
/// half_height)`. The cylinder axis is `axis`; for [`Axis::X`] the sample is
/// rotated by π/2 about y, for [`Axis::Y`] by π/2 about x.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cylinder {
    /// Radius
    pub rho: f64,
    /// Half of the length along the axis
    pub half_height: f64,
    /// Center of the cylinder
    pub center: Vector3,
    /// Axis of revolution
    pub axis: Axis,
}

impl Cylinder {
    /// Cylinder along z, centered on the origin
    pub fn new(rho: f64, half_height: f64) -> Self {
        Self {
            rho,
            half_height,
            center: Vector3::default(),
            axis: Axis::Z,
        }
    }

    pub fn with_center(mut self, center: Vector3) -> Self {
        self.center = center;
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }
}

impl Distribution<Vector3> for Cylinder {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector3 {
        let mut v = Vector3::default();
        v.set_rho_phi_z(
            self.rho * rng.gen::<f64>(),
            TWO_PI * rng.gen::<f64>(),
            self.half_height * (2.0 * rng.gen::<f64>() - 1.0),
        );
        match self.axis {
            Axis::X => {
                v.rotate_y(PI_OVER_2);
            }
            Axis::Y => {
                v.rotate_x(PI_OVER_2);
            }
            Axis::Z => {}
        }
        v + self.center
    }
}

/// Point uniformly distributed inside an axis-aligned box
///
/// `a`, `b` and `c` are the full side lengths along x, y and z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cuboid {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub center: Vector3,
}

impl Cuboid {
    /// Box centered on the origin
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self {
            a,
            b,
            c,
            center: Vector3::default(),
        }
    }

    pub fn with_center(mut self, center: Vector3) -> Self {
        self.center = center;
        self
    }
}

impl Distribution<Vector3> for Cuboid {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector3 {
        let mut v = Vector3::default();
        v.set_x(self.a * (rng.gen::<f64>() - 0.5));
        v.set_y(self.b * (rng.gen::<f64>() - 0.5));
        v.set_z(self.c * (rng.gen::<f64>() - 0.5));
        v + self.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SAMPLES: usize = 2000;
    const TOL: f64 = 1e-12;

    #[test]
    fn test_direction_is_unit() {
        let mut rng = StdRng::seed_from_u64(42);
        for dir in Direction.sample_iter(&mut rng).take(SAMPLES) {
            assert_relative_eq!(dir.mag(), 1.0, epsilon = TOL);
        }
    }

    #[test]
    fn test_direction_is_isotropic() {
        let mut rng = StdRng::seed_from_u64(3);
        let n = 20_000;
        let mean = Direction
            .sample_iter(&mut rng)
            .take(n)
            .fold(Vector3::default(), |acc, v| acc + v)
            / n as f64;
        // Mean of isotropic unit vectors goes to zero as 1/sqrt(n)
        assert!(mean.mag() < 0.05, "mean direction {}", mean);

        let up = Direction
            .sample_iter(&mut rng)
            .take(n)
            .filter(|v| v.z() > 0.0)
            .count();
        let fraction = up as f64 / n as f64;
        assert!((fraction - 0.5).abs() < 0.02, "upper fraction {}", fraction);
    }

    #[test]
    fn test_sphere_within_radius() {
        let mut rng = StdRng::seed_from_u64(7);
        let center = Vector3::new(1.0, -2.0, 3.0);
        let ball = Sphere::new(2.5).with_center(center);
        for p in ball.sample_iter(&mut rng).take(SAMPLES) {
            assert!((p - center).mag() <= 2.5 + TOL);
        }
    }

    #[test]
    fn test_sphere_fills_volume() {
        let mut rng = StdRng::seed_from_u64(11);
        let ball = Sphere::new(1.0);
        let n = 20_000;
        let inner = ball
            .sample_iter(&mut rng)
            .take(n)
            .filter(|p| p.mag() < 0.5)
            .count();
        // Inner half radius holds 1/8 of the volume
        let fraction = inner as f64 / n as f64;
        assert!((fraction - 0.125).abs() < 0.015, "inner fraction {}", fraction);
    }

    #[test]
    fn test_cylinder_along_z_within_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        let center = Vector3::new(0.0, 0.0, 10.0);
        let cyl = Cylinder::new(2.0, 0.5).with_center(center);
        for p in cyl.sample_iter(&mut rng).take(SAMPLES) {
            let local = p - center;
            assert!(local.perp() <= 2.0 + TOL);
            assert!(local.z().abs() <= 0.5);
        }
    }

    #[test]
    fn test_cylinder_along_x_and_y_within_bounds() {
        let mut rng = StdRng::seed_from_u64(9);

        let cyl = Cylinder::new(1.0, 4.0).with_axis(Axis::X);
        for p in cyl.sample_iter(&mut rng).take(SAMPLES) {
            assert!(p.x().abs() <= 4.0 + TOL);
            assert!(p.y().hypot(p.z()) <= 1.0 + TOL);
        }

        let cyl = Cylinder::new(1.0, 4.0).with_axis(Axis::Y);
        for p in cyl.sample_iter(&mut rng).take(SAMPLES) {
            assert!(p.y().abs() <= 4.0 + TOL);
            assert!(p.x().hypot(p.z()) <= 1.0 + TOL);
        }
    }

    #[test]
    fn test_cylinder_spans_its_length() {
        let mut rng = StdRng::seed_from_u64(13);
        let cyl = Cylinder::new(1.0, 4.0).with_axis(Axis::X);
        let max_x = cyl
            .sample_iter(&mut rng)
            .take(SAMPLES)
            .map(|p| p.x().abs())
            .fold(0.0, f64::max);
        assert!(max_x > 3.5);
    }

    #[test]
    fn test_cuboid_within_bounds() {
        let mut rng = StdRng::seed_from_u64(17);
        let center = Vector3::new(-1.0, 0.5, 2.0);
        let cuboid = Cuboid::new(2.0, 4.0, 0.2).with_center(center);
        for p in cuboid.sample_iter(&mut rng).take(SAMPLES) {
            let local = p - center;
            assert!(local.x().abs() <= 1.0 + TOL);
            assert!(local.y().abs() <= 2.0 + TOL);
            assert!(local.z().abs() <= 0.1 + TOL);
        }
    }

    #[test]
    fn test_seeded_samples_are_reproducible() {
        let a: Vec<Vector3> = Direction
            .sample_iter(StdRng::seed_from_u64(99))
            .take(10)
            .collect();
        let b: Vec<Vector3> = Direction
            .sample_iter(StdRng::seed_from_u64(99))
            .take(10)
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_default_axis_is_z() {
        assert_eq!(Axis::default(), Axis::Z);
        assert_eq!(Cylinder::new(1.0, 1.0).axis, Axis::Z);
    }
}
