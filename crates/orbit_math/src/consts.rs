//! Numeric constants.

pub use std::f32::consts::*;

pub const TWO_PI: f32 = TAU;

/// Default tolerance for the near-zero tests and snapping on the float
/// vector types.
pub const NEAR_ZERO_EPSILON: f32 = 0.00005;

/// A unit quaternion whose real part has a magnitude at or above this value
/// rotates by less than about 0.23 degrees and is treated as having no
/// rotation to apply.
pub const NEGLIGIBLE_ROTATION_W: f32 = 0.999998;
