//! Mathematical constants

use std::f64::consts;

// Circle
/// Pi
pub const PI: f64 = consts::PI;
/// 2 * Pi
pub const TWO_PI: f64 = 2.0 * PI;
/// Pi squared
pub const PI_SQ: f64 = PI * PI;
/// Pi / 2
pub const PI_OVER_2: f64 = PI / 2.0;
/// Pi / 4
pub const PI_OVER_4: f64 = PI / 4.0;
/// 1 / Pi
pub const INV_PI: f64 = 1.0 / PI;

// Angles
/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / PI;
/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = PI / 180.0;

// Roots
/// Square root of 2
pub const SQRT_2: f64 = consts::SQRT_2;

// Comparison
/// Absolute and relative tolerance used by [`equals`](super::equals)
pub const EQUALS_EPSILON: f64 = 1e-12;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pi_value() {
        assert_eq!(PI, 3.141592653589793);
        assert_eq!(TWO_PI, 6.283185307179586);
        assert_eq!(PI_OVER_2 * 2.0, PI);
        assert_eq!(PI_OVER_4 * 4.0, PI);
    }

    #[test]
    fn test_angle_factors() {
        assert!((180.0 * DEG_TO_RAD - PI).abs() < 1e-15);
        assert!((PI * RAD_TO_DEG - 180.0).abs() < 1e-12);
        assert!((RAD_TO_DEG * DEG_TO_RAD - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_derived_constants() {
        assert!((PI_SQ - 9.869604401089358).abs() < 1e-14);
        assert!((INV_PI * PI - 1.0).abs() < 1e-15);
        assert!((SQRT_2 * SQRT_2 - 2.0).abs() < 1e-15);
    }
}
