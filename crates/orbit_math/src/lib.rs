//! SIMD-backed vectors, points and quaternions.

#[macro_use]
mod macros;

pub mod consts;
pub mod format;
pub mod host_info;
pub mod point;
pub mod quaternion;
pub mod random;
pub mod vector;

pub use format::ParseError;
pub use point::{IPoint2, IPoint3, UPoint2};
pub use quaternion::Quaternion;
pub use vector::{Vector2, Vector3, Vector4};
