//! Geometry value types and random sampling

pub mod random;
pub mod vector3;

pub use random::Axis;
pub use vector3::Vector3;
