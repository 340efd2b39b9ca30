//! Quaternions.

use crate::{
    consts::NEGLIGIBLE_ROTATION_W,
    vector::{Vector2, Vector3, Vector4},
};
use bytemuck::{Pod, Zeroable};
use core::fmt;

/// A quaternion `w + xi + yj + zk`, used to represent rotations.
///
/// A rotation by angle `θ` around the unit axis `n` is stored as
/// `w = cos(θ/2)` and `(x, y, z) = sin(θ/2) n`. The unit norm is maintained by
/// the rotation constructors but not enforced, so values built from raw
/// components or accumulated through many compositions may drift. Use
/// [`Self::normalize`] to correct drift and [`Self::validate`] to recover from
/// NaN.
///
/// The components are stored in a 128-bit SIMD register, in the lane order
/// `x, y, z, w`.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, PartialEq, Zeroable, Pod)]
pub struct Quaternion {
    inner: glam::Quat,
}

impl Quaternion {
    /// Creates a quaternion with the given imaginary (`x`, `y`, `z`) and real
    /// (`w`) components.
    #[inline]
    pub const fn from_xyzw(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::wrap(glam::Quat::from_xyzw(x, y, z, w))
    }

    /// Creates a quaternion with the given real part and imaginary parts.
    #[inline]
    pub fn from_parts(real: f32, imag: Vector3) -> Self {
        Self::from_xyzw(imag.x(), imag.y(), imag.z(), real)
    }

    /// Creates a quaternion whose `x`, `y`, `z` and `w` components are the
    /// corresponding lanes of the given vector.
    #[inline]
    pub fn from_vector4(vector: &Vector4) -> Self {
        Self::wrap(glam::Quat::from_vec4(vector.unwrap()))
    }

    /// Creates the identity quaternion, representing no rotation.
    #[inline]
    pub const fn identity() -> Self {
        Self::wrap(glam::Quat::IDENTITY)
    }

    /// Creates a quaternion representing a zero rotation around the given
    /// axis. If the axis has zero length, the result will be NaN.
    #[inline]
    pub fn from_axis(axis: &Vector3) -> Self {
        Self::from_axis_angle(axis, 0.0)
    }

    /// Creates a quaternion representing a rotation of `angle` radians around
    /// the given axis. The axis is normalized first, so if it has zero length
    /// the result will be NaN.
    #[inline]
    pub fn from_axis_angle(axis: &Vector3, angle: f32) -> Self {
        let (sin_half_angle, cos_half_angle) = (0.5 * angle).sin_cos();
        Self::from_parts(cos_half_angle, axis.normalized() * sin_half_angle)
    }

    /// Creates a quaternion from Euler angles in radians. The rotation is
    /// applied as `roll` around the z-axis, then `pitch` around the x-axis,
    /// then `yaw` around the y-axis.
    #[inline]
    pub fn from_pitch_yaw_roll(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self::wrap(glam::Quat::from_euler(glam::EulerRot::YXZ, yaw, pitch, roll))
    }

    /// Creates a quaternion from the Euler angles `(pitch, yaw, roll)` in the
    /// components of the given vector. See [`Self::from_pitch_yaw_roll`].
    #[inline]
    pub fn from_euler_angles(pitch_yaw_roll: &Vector3) -> Self {
        Self::from_pitch_yaw_roll(pitch_yaw_roll.x(), pitch_yaw_roll.y(), pitch_yaw_roll.z())
    }

    /// Creates a quaternion from the columns of a pure rotation matrix.
    #[inline]
    pub fn from_rotation_matrix_columns(columns: &[Vector3; 3]) -> Self {
        let matrix =
            glam::Mat3A::from_cols(columns[0].unwrap(), columns[1].unwrap(), columns[2].unwrap());
        Self::wrap(glam::Quat::from_mat3a(&matrix))
    }

    /// Creates the quaternion representing the shortest-arc rotation that
    /// takes the direction of `from` to the direction of `to`. The vectors
    /// need not have unit length, but if either has zero length the result
    /// will be NaN.
    #[inline]
    pub fn rotation_between(from: &Vector3, to: &Vector3) -> Self {
        Self::wrap(glam::Quat::from_rotation_arc(
            from.normalized().into(),
            to.normalized().into(),
        ))
    }

    /// The real component.
    #[inline]
    pub fn w(&self) -> f32 {
        self.inner.w
    }

    /// The first imaginary component.
    #[inline]
    pub fn x(&self) -> f32 {
        self.inner.x
    }

    /// The second imaginary component.
    #[inline]
    pub fn y(&self) -> f32 {
        self.inner.y
    }

    /// The third imaginary component.
    #[inline]
    pub fn z(&self) -> f32 {
        self.inner.z
    }

    /// The real part of the quaternion.
    #[inline]
    pub fn real(&self) -> f32 {
        self.w()
    }

    /// The imaginary part of the quaternion.
    #[inline]
    pub fn imag(&self) -> Vector3 {
        Vector3::new(self.x(), self.y(), self.z())
    }

    /// The components as a vector with lanes `x, y, z, w`.
    #[inline]
    pub fn to_vector4(&self) -> Vector4 {
        Vector4::wrap(glam::Vec4::from(self.inner))
    }

    /// The rotation axis, obtained by normalizing the imaginary part. For the
    /// identity rotation there is no axis and the result will be NaN, and
    /// close to it the axis is numerically unstable.
    #[inline]
    pub fn axis(&self) -> Vector3 {
        self.imag().normalized()
    }

    /// The rotation axis, or [`None`] if the imaginary part is zero.
    #[inline]
    pub fn try_axis(&self) -> Option<Vector3> {
        self.imag().try_normalized()
    }

    /// Computes `atan2(|(x, y, z)|, w)`. For a unit quaternion this is half the
    /// rotation angle, in the range `[0, π]`. Not interchangeable with
    /// [`Self::angle_quaternion`].
    #[inline]
    pub fn angle_euler(&self) -> f32 {
        self.imag().norm().atan2(self.w())
    }

    /// Computes the rotation angle `2 acos(w)` in radians, in the range
    /// `[0, 2π]`. Rotations built from an angle in `[0, π]` give that angle
    /// back.
    #[inline]
    pub fn angle_quaternion(&self) -> f32 {
        2.0 * self.w().clamp(-1.0, 1.0).acos()
    }

    /// Computes the Euler angles `(pitch, yaw, roll)` of the rotation, using
    /// the convention of [`Self::from_pitch_yaw_roll`].
    #[inline]
    pub fn euler_angles(&self) -> Vector3 {
        let (yaw, pitch, roll) = self.inner.to_euler(glam::EulerRot::YXZ);
        Vector3::new(pitch, yaw, roll)
    }

    /// Computes the columns of the rotation matrix corresponding to this unit
    /// quaternion.
    #[inline]
    pub fn rotation_matrix_columns(&self) -> [Vector3; 3] {
        let matrix = glam::Mat3A::from_quat(self.inner);
        [
            Vector3::wrap(matrix.x_axis),
            Vector3::wrap(matrix.y_axis),
            Vector3::wrap(matrix.z_axis),
        ]
    }

    /// Computes the conjugate `w - xi - yj - zk`. For a unit quaternion this
    /// is the inverse.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::wrap(self.inner.conjugate())
    }

    /// Computes the multiplicative inverse, the conjugate divided by the
    /// squared norm. The zero quaternion has no inverse and gives NaN.
    #[inline]
    pub fn inverse(&self) -> Self {
        let conjugate = glam::Vec4::from(self.inner.conjugate());
        Self::wrap(glam::Quat::from_vec4(conjugate / self.inner.length_squared()))
    }

    /// Computes the norm of the quaternion seen as a 4-vector.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.inner.length()
    }

    /// Computes the dot product with another quaternion seen as 4-vectors.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.inner.dot(other.inner)
    }

    /// Computes the unit quaternion in the same direction. The zero quaternion
    /// gives NaN.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::wrap(self.inner.normalize())
    }

    /// Normalizes the quaternion in place.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Whether any component is NaN.
    #[inline]
    pub fn has_nan(&self) -> bool {
        self.inner.is_nan()
    }

    /// Whether the quaternion represents a rotation large enough to be worth
    /// applying, that is, `|w|` is below
    /// [`NEGLIGIBLE_ROTATION_W`](crate::consts::NEGLIGIBLE_ROTATION_W). This is
    /// a control flow hook for skipping tiny rotations, not a validity test.
    #[inline]
    pub fn has_rotation(&self) -> bool {
        self.w().abs() < NEGLIGIBLE_ROTATION_W
    }

    /// Whether the rotation is too small to be worth applying. The negation of
    /// [`Self::has_rotation`].
    #[inline]
    pub fn is_negligible(&self) -> bool {
        !self.has_rotation()
    }

    /// Rotates the given vector.
    #[inline]
    pub fn rotate_vector(&self, vector: &Vector3) -> Vector3 {
        Vector3::wrap(self.inner.mul_vec3a(vector.unwrap()))
    }

    /// Rotates the given 2D vector as a 3D vector with zero z-component, and
    /// discards the z-component of the result.
    #[inline]
    pub fn rotate_vector2(&self, vector: &Vector2) -> Vector2 {
        self.rotate_vector(&vector.extended(0.0)).xy()
    }

    /// Returns the rotation around the same axis with the angle multiplied by
    /// `factor`. A rotation without an axis stays the identity.
    pub fn scaled_angle(&self, factor: f32) -> Self {
        match self.try_axis() {
            Some(axis) => Self::from_axis_angle(&axis, factor * self.angle_quaternion()),
            None => Self::identity(),
        }
    }

    /// Resets the quaternion to the identity if any component is NaN.
    ///
    /// Accumulated floating point error is better handled by occasionally
    /// calling [`Self::normalize`] than by rebuilding the rotation from its
    /// axis and angle, which reintroduces the same error.
    pub fn validate(&mut self) {
        if self.has_nan() {
            orbit_log::debug!("Resetting NaN quaternion {self:?} to identity");
            *self = Self::identity();
        }
    }

    /// Assigns the given quaternion and validates the result.
    #[inline]
    pub fn set(&mut self, quaternion: &Self) {
        *self = *quaternion;
        self.validate();
    }

    /// Replaces this rotation with the rotation of `angle` radians around the
    /// given axis.
    #[inline]
    pub fn set_axis_angle(&mut self, axis: &Vector3, angle: f32) {
        *self = Self::from_axis_angle(axis, angle);
    }

    /// Replaces the rotation axis, keeping the rotation angle.
    #[inline]
    pub fn set_axis(&mut self, axis: &Vector3) {
        self.set_axis_angle(axis, self.angle_quaternion());
    }

    /// Replaces the rotation angle, keeping the rotation axis.
    #[inline]
    pub fn set_angle(&mut self, angle: f32) {
        self.set_axis_angle(&self.axis(), angle);
    }

    /// Replaces this rotation with the one given by the Euler angles
    /// `(pitch, yaw, roll)`.
    #[inline]
    pub fn set_euler_angles(&mut self, pitch_yaw_roll: &Vector3) {
        *self = Self::from_euler_angles(pitch_yaw_roll);
    }

    /// Replaces this rotation with the shortest-arc rotation from `from` to
    /// `to`.
    #[inline]
    pub fn set_rotation_between(&mut self, from: &Vector3, to: &Vector3) {
        *self = Self::rotation_between(from, to);
    }

    /// Computes the angular velocity that takes the `previous` orientation to
    /// this one over `delta_time`, following the shortest path. The result
    /// is the rotation axis scaled by the angular speed.
    pub fn angular_velocity(&self, previous: &Self, delta_time: f32) -> Vector3 {
        let mut delta = self * previous.inverse();
        if delta.w() < 0.0 {
            delta = -delta;
        }
        match delta.try_axis() {
            Some(axis) => axis * (delta.angle_quaternion() / delta_time),
            None => Vector3::zeros(),
        }
    }

    #[inline]
    pub(crate) const fn wrap(inner: glam::Quat) -> Self {
        Self { inner }
    }

    #[inline]
    pub(crate) const fn unwrap(self) -> glam::Quat {
        self.inner
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<glam::Quat> for Quaternion {
    #[inline]
    fn from(quaternion: glam::Quat) -> Self {
        Self::wrap(quaternion)
    }
}

impl From<Quaternion> for glam::Quat {
    #[inline]
    fn from(quaternion: Quaternion) -> Self {
        quaternion.unwrap()
    }
}

// `A * B` rotates by `B` first and then by `A`. The additive operators are
// aliases for composing with the rotation or its inverse.

impl_binop!(Mul, mul, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::wrap(a.inner * b.inner)
});

impl_binop!(Add, add, Quaternion, Quaternion, Quaternion, |a, b| {
    a * b
});

impl_binop!(Div, div, Quaternion, Quaternion, Quaternion, |a, b| {
    a * b.inverse()
});

impl_binop!(Sub, sub, Quaternion, Quaternion, Quaternion, |a, b| {
    a / b
});

impl_binop!(Mul, mul, Quaternion, f32, Quaternion, |a, b| {
    a.scaled_angle(*b)
});

impl_binop!(Mul, mul, Quaternion, Vector3, Vector3, |a, b| {
    a.rotate_vector(b)
});

impl_binop!(Mul, mul, Quaternion, Vector2, Vector2, |a, b| {
    a.rotate_vector2(b)
});

impl_binop_assign!(MulAssign, mul_assign, Quaternion, Quaternion, |a, b| {
    *a = *a * b;
});

impl_binop_assign!(AddAssign, add_assign, Quaternion, Quaternion, |a, b| {
    *a = *a * b;
});

impl_binop_assign!(DivAssign, div_assign, Quaternion, Quaternion, |a, b| {
    *a = *a / b;
});

impl_binop_assign!(SubAssign, sub_assign, Quaternion, Quaternion, |a, b| {
    *a = *a / b;
});

impl_unary_op!(Neg, neg, Quaternion, Quaternion, |val| {
    Quaternion::wrap(-val.inner)
});

impl_abs_diff_eq!(Quaternion, |a, b, epsilon| {
    a.inner.abs_diff_eq(b.inner, epsilon)
});

impl_relative_eq!(Quaternion, |a, b, epsilon, max_relative| {
    ::approx::RelativeEq::relative_eq(&a.inner, &b.inner, epsilon, max_relative)
});

impl fmt::Debug for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quaternion")
            .field("w", &self.inner.w)
            .field("x", &self.inner.x)
            .field("y", &self.inner.y)
            .field("z", &self.inner.z)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::consts::{FRAC_PI_2, FRAC_PI_4, PI, TWO_PI};
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    const EPSILON: f32 = 1e-6;

    prop_compose! {
        fn orientation_strategy()(
            rotation_roll in 0.0..TWO_PI,
            rotation_pitch in -FRAC_PI_2..FRAC_PI_2,
            rotation_yaw in 0.0..TWO_PI,
        ) -> Quaternion {
            Quaternion::from_pitch_yaw_roll(rotation_pitch, rotation_yaw, rotation_roll)
        }
    }

    prop_compose! {
        fn vector_strategy(max_coord: f32)(
            x in -max_coord..max_coord,
            y in -max_coord..max_coord,
            z in -max_coord..max_coord,
        ) -> Vector3 {
            Vector3::new(x, y, z)
        }
    }

    #[test]
    fn default_quaternion_is_identity() {
        let q = Quaternion::default();
        assert_eq!(q, Quaternion::identity());
        assert_eq!(q.w(), 1.0);
        assert!(q.imag().is_zero());
        assert!(q.is_negligible());
        assert!(!q.has_rotation());
    }

    #[test]
    fn axis_and_angle_round_trip() {
        let q = Quaternion::from_axis_angle(&Vector3::unit_z(), FRAC_PI_2);
        assert_abs_diff_eq!(q.axis(), Vector3::unit_z(), epsilon = EPSILON);
        assert_abs_diff_eq!(q.angle_quaternion(), FRAC_PI_2, epsilon = 1e-5);
        assert_abs_diff_eq!(q.norm(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn angle_conventions_differ() {
        let q = Quaternion::from_axis_angle(&Vector3::unit_x(), FRAC_PI_2);
        assert_abs_diff_eq!(q.angle_euler(), FRAC_PI_4, epsilon = 1e-5);
        assert_abs_diff_eq!(q.angle_quaternion(), FRAC_PI_2, epsilon = 1e-5);
    }

    #[test]
    fn axis_is_renormalized_from_unnormalized_input() {
        let q = Quaternion::from_axis_angle(&Vector3::new(0.0, 3.0, 0.0), 1.0);
        assert_abs_diff_eq!(q.axis(), Vector3::unit_y(), epsilon = EPSILON);
        assert_abs_diff_eq!(q.angle_quaternion(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn rotating_unit_x_by_quarter_turn_around_z_gives_unit_y() {
        let q = Quaternion::from_axis_angle(&Vector3::unit_z(), FRAC_PI_2);
        assert_abs_diff_eq!(q * Vector3::unit_x(), Vector3::unit_y(), epsilon = EPSILON);
        assert_abs_diff_eq!(
            q.rotate_vector(&Vector3::unit_y()),
            -Vector3::unit_x(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn rotating_vector2_discards_z_component() {
        let q = Quaternion::from_axis_angle(&Vector3::unit_z(), FRAC_PI_2);
        assert_abs_diff_eq!(q * Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0), epsilon = EPSILON);

        let tilt = Quaternion::from_axis_angle(&Vector3::unit_x(), FRAC_PI_2);
        assert_abs_diff_eq!(
            tilt * Vector2::new(0.0, 1.0),
            Vector2::new(0.0, 0.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn composition_applies_right_operand_first() {
        let around_z = Quaternion::from_axis_angle(&Vector3::unit_z(), FRAC_PI_2);
        let around_x = Quaternion::from_axis_angle(&Vector3::unit_x(), FRAC_PI_2);
        let v = Vector3::unit_y();

        let composed = around_z * around_x;
        assert_abs_diff_eq!(
            composed * v,
            around_z * (around_x * v),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(composed * v, Vector3::unit_z(), epsilon = EPSILON);
        assert_abs_diff_eq!((around_x * around_z) * v, -Vector3::unit_x(), epsilon = EPSILON);
    }

    #[test]
    fn additive_operators_compose_rotations() {
        let a = Quaternion::from_axis_angle(&Vector3::unit_z(), 0.3);
        let b = Quaternion::from_axis_angle(&Vector3::unit_y(), 1.1);

        assert_eq!(a + b, a * b);
        assert_eq!(a - b, a * b.inverse());
        assert_eq!(a / b, a * b.inverse());
        assert_abs_diff_eq!(a - a, Quaternion::identity(), epsilon = EPSILON);

        let mut c = a;
        c += b;
        assert_eq!(c, a * b);
        c -= b;
        assert_abs_diff_eq!(c, a, epsilon = EPSILON);
        c *= &b;
        c /= b;
        assert_abs_diff_eq!(c, a, epsilon = EPSILON);
    }

    #[test]
    fn quaternion_inverse_undoes_rotation() {
        let q = Quaternion::from_pitch_yaw_roll(0.4, -1.2, 2.0);
        let v = Vector3::new(1.0, -2.0, 3.0);
        assert_abs_diff_eq!(q * q.inverse() * v, v, epsilon = 1e-5);
        assert_abs_diff_eq!(q.inverse().inverse(), q, epsilon = EPSILON);
        assert_abs_diff_eq!(q.inverse(), q.conjugate(), epsilon = EPSILON);
    }

    #[test]
    fn inverse_of_non_unit_quaternion_is_multiplicative_inverse() {
        let q = Quaternion::from_xyzw(1.0, 2.0, 0.0, 2.0);
        assert_abs_diff_eq!(q * q.inverse(), Quaternion::identity(), epsilon = EPSILON);
    }

    #[test]
    fn negated_quaternion_represents_same_rotation() {
        let q = Quaternion::from_axis_angle(&Vector3::new(1.0, 1.0, 0.0), 0.8);
        let v = Vector3::new(0.5, 2.0, -1.0);
        let negated = -q;
        assert_eq!(negated.w(), -q.w());
        assert_eq!(negated.imag(), -q.imag());
        assert_abs_diff_eq!(negated * v, q * v, epsilon = 1e-5);
    }

    #[test]
    fn scaling_quaternion_scales_rotation_angle() {
        let q = Quaternion::from_axis_angle(&Vector3::unit_z(), 1.0);
        let half = q * 0.5;
        assert_abs_diff_eq!(half.angle_quaternion(), 0.5, epsilon = 1e-5);
        assert_abs_diff_eq!(half.axis(), Vector3::unit_z(), epsilon = EPSILON);
        assert_eq!(Quaternion::identity() * 2.0, Quaternion::identity());
    }

    #[test]
    fn rotation_from_zero_axis_is_nan() {
        assert!(Quaternion::from_axis_angle(&Vector3::zeros(), 1.0).has_nan());
        assert!(Quaternion::from_axis(&Vector3::zeros()).has_nan());
        assert_abs_diff_eq!(
            Quaternion::from_axis(&Vector3::unit_x()),
            Quaternion::identity(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn validating_nan_quaternion_resets_to_identity() {
        let mut q = Quaternion::from_axis_angle(&Vector3::zeros(), 1.0);
        q.validate();
        assert_eq!(q, Quaternion::identity());

        let valid = Quaternion::from_axis_angle(&Vector3::unit_y(), 0.7);
        let mut r = valid;
        r.validate();
        assert_eq!(r, valid);

        let mut s = valid;
        s.set(&Quaternion::from_xyzw(f32::NAN, 0.0, 0.0, 1.0));
        assert_eq!(s, Quaternion::identity());
    }

    #[test]
    fn tiny_rotations_are_negligible() {
        assert!(Quaternion::from_axis_angle(&Vector3::unit_x(), 1e-4).is_negligible());
        assert!(Quaternion::from_axis_angle(&Vector3::unit_x(), 0.1).has_rotation());
        assert!(Quaternion::from_axis_angle(&Vector3::unit_x(), TWO_PI - 1e-4).is_negligible());
    }

    #[test]
    fn yaw_rotates_around_y_axis() {
        let q = Quaternion::from_pitch_yaw_roll(0.0, FRAC_PI_2, 0.0);
        assert_abs_diff_eq!(q * Vector3::unit_z(), Vector3::unit_x(), epsilon = EPSILON);
    }

    #[test]
    fn pitch_and_roll_rotate_around_x_and_z_axes() {
        let pitch = Quaternion::from_pitch_yaw_roll(FRAC_PI_2, 0.0, 0.0);
        assert_abs_diff_eq!(pitch * Vector3::unit_y(), Vector3::unit_z(), epsilon = EPSILON);

        let roll = Quaternion::from_pitch_yaw_roll(0.0, 0.0, FRAC_PI_2);
        assert_abs_diff_eq!(roll * Vector3::unit_x(), Vector3::unit_y(), epsilon = EPSILON);
    }

    #[test]
    fn euler_angles_round_trip() {
        let angles = Vector3::new(0.3, -0.5, 0.7);
        let q = Quaternion::from_euler_angles(&angles);
        assert_abs_diff_eq!(q.euler_angles(), angles, epsilon = 1e-5);

        let mut r = Quaternion::identity();
        r.set_euler_angles(&angles);
        assert_eq!(r, q);
    }

    #[test]
    fn rotation_between_vectors_maps_from_onto_to() {
        let from = Vector3::new(1.0, 0.0, 0.0);
        let to = Vector3::new(0.0, 2.0, 0.0);
        let q = Quaternion::rotation_between(&from, &to);
        assert_abs_diff_eq!(q * from, Vector3::unit_y(), epsilon = EPSILON);
        assert_abs_diff_eq!(q.angle_quaternion(), FRAC_PI_2, epsilon = 1e-5);
    }

    #[test]
    fn rotation_between_opposite_vectors_is_half_turn() {
        let from = Vector3::new(0.0, 0.0, 3.0);
        let to = Vector3::new(0.0, 0.0, -1.0);
        let mut q = Quaternion::identity();
        q.set_rotation_between(&from, &to);
        assert_abs_diff_eq!(q * Vector3::unit_z(), -Vector3::unit_z(), epsilon = 1e-5);
        assert_abs_diff_eq!(q.angle_quaternion(), PI, epsilon = 1e-3);
    }

    #[test]
    fn rotation_matrix_columns_are_rotated_axes() {
        let q = Quaternion::from_axis_angle(&Vector3::unit_z(), FRAC_PI_2);
        let [x_axis, y_axis, z_axis] = q.rotation_matrix_columns();
        assert_abs_diff_eq!(x_axis, Vector3::unit_y(), epsilon = EPSILON);
        assert_abs_diff_eq!(y_axis, -Vector3::unit_x(), epsilon = EPSILON);
        assert_abs_diff_eq!(z_axis, Vector3::unit_z(), epsilon = EPSILON);
    }

    #[test]
    fn quaternion_from_its_rotation_matrix_rotates_identically() {
        let q = Quaternion::from_pitch_yaw_roll(0.2, 1.3, -0.6);
        let r = Quaternion::from_rotation_matrix_columns(&q.rotation_matrix_columns());
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_abs_diff_eq!(r * v, q * v, epsilon = 1e-5);
    }

    #[test]
    fn setting_axis_keeps_angle_and_setting_angle_keeps_axis() {
        let mut q = Quaternion::from_axis_angle(&Vector3::unit_x(), 0.6);
        q.set_axis(&Vector3::unit_y());
        assert_abs_diff_eq!(q.axis(), Vector3::unit_y(), epsilon = 1e-5);
        assert_abs_diff_eq!(q.angle_quaternion(), 0.6, epsilon = 1e-5);

        q.set_angle(1.2);
        assert_abs_diff_eq!(q.axis(), Vector3::unit_y(), epsilon = 1e-5);
        assert_abs_diff_eq!(q.angle_quaternion(), 1.2, epsilon = 1e-5);
    }

    #[test]
    fn angular_velocity_is_axis_times_angle_over_time() {
        let previous = Quaternion::from_axis_angle(&Vector3::unit_x(), 0.2);
        let step = Quaternion::from_axis_angle(&Vector3::unit_z(), 0.5);
        let current = step * previous;
        assert_abs_diff_eq!(
            current.angular_velocity(&previous, 0.25),
            Vector3::new(0.0, 0.0, 2.0),
            epsilon = 1e-4
        );
        assert!(
            Quaternion::identity()
                .angular_velocity(&Quaternion::identity(), 0.25)
                .is_zero()
        );
    }

    #[test]
    fn normalizing_quaternion_gives_unit_norm() {
        let mut q = Quaternion::from_xyzw(1.0, 1.0, 1.0, 1.0);
        q.normalize();
        assert_abs_diff_eq!(q.norm(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(q.to_vector4(), Vector4::same(0.5), epsilon = EPSILON);
    }

    #[test]
    fn quaternion_round_trips_through_vector4() {
        let v = Vector4::new(0.1, 0.2, 0.3, 0.9);
        let q = Quaternion::from_vector4(&v);
        assert_eq!(q.w(), 0.9);
        assert_eq!(q.imag(), Vector3::new(0.1, 0.2, 0.3));
        assert_eq!(q.to_vector4(), v);
        assert_eq!(Quaternion::from_parts(0.9, Vector3::new(0.1, 0.2, 0.3)), q);
    }

    proptest! {
        #[test]
        fn composing_with_inverse_leaves_vector_unchanged(
            q in orientation_strategy(),
            v in vector_strategy(1e2),
        ) {
            assert_abs_diff_eq!(q * q.inverse() * v, v, epsilon = 1e-3);
        }

        #[test]
        fn double_inverse_gives_same_quaternion(q in orientation_strategy()) {
            assert_abs_diff_eq!(q.inverse().inverse(), q, epsilon = 1e-5);
        }

        #[test]
        fn rotation_preserves_vector_length(
            q in orientation_strategy(),
            v in vector_strategy(1e2),
        ) {
            assert_abs_diff_eq!((q * v).norm(), v.norm(), epsilon = 1e-3);
        }
    }
}
