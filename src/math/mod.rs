//! # Math Helpers
//!
//! Small numeric helpers shared by the geometry types: squares and cubes,
//! integer powers, sums of squares, Euclidean norms and a tolerant float
//! comparison.
//!
//! The sum/norm helpers accept any iterable of primitive numbers and always
//! compute in `f64`, so mixed integer inputs never overflow during squaring.
//!
//! ## Examples
//!
//! ```rust
//! use tools::math::{norm2, pow_n, sum2};
//!
//! assert_eq!(sum2([10, 1]), 101.0);
//! assert_eq!(norm2([3, 4]), 5.0);
//! assert_eq!(pow_n(2u64, 10), 1024);
//! ```

pub mod constants;

pub use constants::*;

use num_traits::{AsPrimitive, One};
use std::ops::{Mul, MulAssign};

/// Square of a value
pub fn sq<T>(val: T) -> T
where
    T: Mul<Output = T> + Copy,
{
    val * val
}

/// Square of a value, alias of [`sq`]
pub fn square<T>(val: T) -> T
where
    T: Mul<Output = T> + Copy,
{
    sq(val)
}

/// Cube of a value
pub fn cube<T>(val: T) -> T
where
    T: Mul<Output = T> + Copy,
{
    val * val * val
}

/// Raises `base` to a non-negative integer power by repeated squaring
///
/// `pow_n(x, 0)` is one for every `x`, including zero.
///
/// # Examples
///
/// ```rust
/// use tools::math::pow_n;
///
/// assert_eq!(pow_n(10, 6), 1_000_000);
/// assert_eq!(pow_n(0, 0), 1);
/// assert_eq!(pow_n(1.5f64, 2), 2.25);
/// ```
pub fn pow_n<T>(mut base: T, mut exp: u32) -> T
where
    T: One + MulAssign + Copy,
{
    let mut result = T::one();
    while exp > 0 {
        if exp & 1 == 1 {
            result *= base;
        }
        exp >>= 1;
        if exp > 0 {
            base *= base;
        }
    }
    result
}

/// Sum of squares, computed in `f64`
///
/// An empty input sums to zero.
pub fn sum2<I>(values: I) -> f64
where
    I: IntoIterator,
    I::Item: AsPrimitive<f64>,
{
    values
        .into_iter()
        .map(|v| {
            let v: f64 = v.as_();
            v * v
        })
        .sum()
}

/// Euclidean norm: the square root of the sum of squares
///
/// # Examples
///
/// ```rust
/// use tools::math::{norm2, SQRT_2};
///
/// assert_eq!(norm2([0, 10]), 10.0);
/// assert_eq!(norm2([1.0, 1.0]), SQRT_2);
/// ```
pub fn norm2<I>(values: I) -> f64
where
    I: IntoIterator,
    I::Item: AsPrimitive<f64>,
{
    sum2(values).sqrt()
}

/// Difference of squares `a² - b²`, computed in `f64`
pub fn diff2<A, B>(a: A, b: B) -> f64
where
    A: AsPrimitive<f64>,
    B: AsPrimitive<f64>,
{
    let a: f64 = a.as_();
    let b: f64 = b.as_();
    a * a - b * b
}

/// Tolerant float comparison
///
/// Two values are equal when their absolute difference, or their difference
/// relative to the larger magnitude, is within [`EQUALS_EPSILON`].
pub fn equals(a: f64, b: f64) -> bool {
    approx::relative_eq!(a, b, epsilon = EQUALS_EPSILON, max_relative = EQUALS_EPSILON)
}
