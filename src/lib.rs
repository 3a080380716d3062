//! Tools: small numeric and geometry utilities
//!
//! This crate provides a 3D vector value type with spherical and cylindrical
//! setters, a handful of math helpers (constants, powers, sums of squares and
//! norms) and a crate-wide error type.
//!
//! ```rust
//! use tools::{math, Vector3};
//!
//! let a = Vector3::new(1.0, 2.0, 3.0);
//! let b = Vector3::new(0.0, 3.0, 4.0);
//! assert_eq!(a * b, 18.0);
//! assert_eq!(b.mag(), math::norm2([0, 3, 4]));
//! ```

pub mod errors;
pub mod geometry;
pub mod math;

// Re-export commonly used types
pub use errors::{Result, ToolsError};
pub use geometry::Vector3;
