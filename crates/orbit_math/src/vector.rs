//! Vectors.

use bytemuck::{Pod, Zeroable};
use core::fmt;

/// A 2-dimensional vector.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector2 {
    inner: glam::Vec2,
}

/// A 3-dimensional vector.
///
/// The components are stored in a 128-bit SIMD register for efficient
/// computation. That leads to an extra 4 bytes in size and 16-byte alignment.
/// The first two lanes hold the same components as the corresponding
/// [`Vector2`], see [`Self::xy`] and [`Self::from_xy`].
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    inner: glam::Vec3A,
}

/// A 4-dimensional vector.
///
/// The components are stored in a 128-bit SIMD register for efficient
/// computation. That leads to an alignment of 16 bytes. This is also the
/// storage of a [`Quaternion`](crate::quaternion::Quaternion).
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector4 {
    inner: glam::Vec4,
}

impl Vector2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self::wrap(glam::Vec2::new(x, y))
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::wrap(glam::Vec2::ZERO)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::wrap(glam::Vec2::splat(value))
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::wrap(glam::Vec2::X)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::wrap(glam::Vec2::Y)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.inner.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.inner.y
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.inner.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.inner.y
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: f32) -> Vector3 {
        Vector3::new(self.x(), self.y(), z)
    }

    /// Computes the normalized version of the vector. If the vector has zero
    /// length, the result will be non-finite.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::wrap(self.inner.normalize())
    }

    /// Computes the normalized version of the vector, or returns [`None`] if
    /// the vector has zero or non-finite length.
    #[inline]
    pub fn try_normalized(&self) -> Option<Self> {
        self.inner.try_normalize().map(Self::wrap)
    }

    /// Normalizes the vector in place. If the vector has zero length, the
    /// components will be non-finite.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.inner.length()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.inner.length_squared()
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        let dot = self.inner.dot(other.inner);
        debug_assert!(!dot.is_nan(), "dot product of {self:?} and {other:?} is NaN");
        dot
    }

    /// Computes the 2D cross product `x1 * y2 - y1 * x2` of this vector with
    /// another. This is the z-component of the 3D cross product of the two
    /// vectors extended with zero z-components.
    #[inline]
    pub fn perp_dot(&self, other: &Self) -> f32 {
        self.inner.perp_dot(other.inner)
    }

    /// Computes the 2D cross product of this vector with another, replicated
    /// into both components. Swapping the operands negates the result. For a
    /// vector perpendicular to this one, use [`Self::perpendicular`].
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::same(self.perp_dot(other))
    }

    /// Returns the vector rotated 90 degrees counterclockwise.
    #[inline]
    pub fn perpendicular(&self) -> Self {
        Self::wrap(self.inner.perp())
    }

    /// Projects this vector onto the direction of `target`. Returns the zero
    /// vector if `target` can not be normalized.
    #[inline]
    pub fn project_onto(&self, target: &Self) -> Self {
        let direction = target.normalized();
        if direction.has_nan() {
            Self::zeros()
        } else {
            direction * self.dot(&direction)
        }
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x()), f(self.y()))
    }

    #[inline]
    pub(crate) const fn wrap(inner: glam::Vec2) -> Self {
        Self { inner }
    }

    #[inline]
    pub(crate) const fn unwrap(self) -> glam::Vec2 {
        self.inner
    }
}

impl_float_lanes!(Vector2, Vec2, 2);

impl From<glam::Vec2> for Vector2 {
    #[inline]
    fn from(vector: glam::Vec2) -> Self {
        Self::wrap(vector)
    }
}

impl From<Vector2> for glam::Vec2 {
    #[inline]
    fn from(vector: Vector2) -> Self {
        vector.unwrap()
    }
}

impl fmt::Debug for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector2")
            .field("x", &self.inner.x)
            .field("y", &self.inner.y)
            .finish()
    }
}

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self::wrap(glam::Vec3A::new(x, y, z))
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::wrap(glam::Vec3A::ZERO)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::wrap(glam::Vec3A::splat(value))
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::wrap(glam::Vec3A::X)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::wrap(glam::Vec3A::Y)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::wrap(glam::Vec3A::Z)
    }

    /// Creates a vector from the given 2D vector and z-component.
    #[inline]
    pub const fn from_xy(xy: Vector2, z: f32) -> Self {
        xy.extended(z)
    }

    /// The x-component.
    #[inline]
    pub fn x(&self) -> f32 {
        self.inner.x
    }

    /// The y-component.
    #[inline]
    pub fn y(&self) -> f32 {
        self.inner.y
    }

    /// The z-component.
    #[inline]
    pub fn z(&self) -> f32 {
        self.inner.z
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub fn x_mut(&mut self) -> &mut f32 {
        &mut self.inner.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub fn y_mut(&mut self) -> &mut f32 {
        &mut self.inner.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub fn z_mut(&mut self) -> &mut f32 {
        &mut self.inner.z
    }

    /// The 2D vector containing the x- and y-components of this vector.
    #[inline]
    pub fn xy(&self) -> Vector2 {
        Vector2::new(self.x(), self.y())
    }

    /// The 2D vector containing the x- and z-components of this vector.
    #[inline]
    pub fn xz(&self) -> Vector2 {
        Vector2::new(self.x(), self.z())
    }

    /// The 2D vector containing the y- and z-components of this vector.
    #[inline]
    pub fn yz(&self) -> Vector2 {
        Vector2::new(self.y(), self.z())
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub fn extended(&self, w: f32) -> Vector4 {
        Vector4::wrap(self.inner.extend(w))
    }

    /// Computes the normalized version of the vector. If the vector has zero
    /// length, the result will be non-finite.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::wrap(self.inner.normalize())
    }

    /// Computes the normalized version of the vector, or returns [`None`] if
    /// the vector has zero or non-finite length.
    #[inline]
    pub fn try_normalized(&self) -> Option<Self> {
        self.inner.try_normalize().map(Self::wrap)
    }

    /// Normalizes the vector in place. If the vector has zero length, the
    /// components will be non-finite.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.inner.length()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.inner.length_squared()
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        let dot = self.inner.dot(other.inner);
        debug_assert!(!dot.is_nan(), "dot product of {self:?} and {other:?} is NaN");
        dot
    }

    /// Computes the right-handed cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::wrap(self.inner.cross(other.inner))
    }

    /// Projects this vector onto the direction of `target`. Returns the zero
    /// vector if `target` can not be normalized.
    #[inline]
    pub fn project_onto(&self, target: &Self) -> Self {
        let direction = target.normalized();
        if direction.has_nan() {
            Self::zeros()
        } else {
            direction * self.dot(&direction)
        }
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x()), f(self.y()), f(self.z()))
    }

    #[inline]
    pub(crate) const fn wrap(inner: glam::Vec3A) -> Self {
        Self { inner }
    }

    #[inline]
    pub(crate) const fn unwrap(self) -> glam::Vec3A {
        self.inner
    }
}

impl_float_lanes!(Vector3, Vec3A, 3);

impl From<Vector2> for Vector3 {
    /// Widens the vector with a zero z-component.
    #[inline]
    fn from(vector: Vector2) -> Self {
        vector.extended(0.0)
    }
}

impl From<glam::Vec3A> for Vector3 {
    #[inline]
    fn from(vector: glam::Vec3A) -> Self {
        Self::wrap(vector)
    }
}

impl From<glam::Vec3> for Vector3 {
    #[inline]
    fn from(vector: glam::Vec3) -> Self {
        Self::wrap(vector.into())
    }
}

impl From<Vector3> for glam::Vec3A {
    #[inline]
    fn from(vector: Vector3) -> Self {
        vector.unwrap()
    }
}

impl From<Vector3> for glam::Vec3 {
    #[inline]
    fn from(vector: Vector3) -> Self {
        vector.unwrap().into()
    }
}

impl fmt::Debug for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector3")
            .field("x", &self.inner.x)
            .field("y", &self.inner.y)
            .field("z", &self.inner.z)
            .finish()
    }
}

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::wrap(glam::Vec4::new(x, y, z, w))
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::wrap(glam::Vec4::ZERO)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::wrap(glam::Vec4::splat(value))
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::wrap(glam::Vec4::X)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::wrap(glam::Vec4::Y)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::wrap(glam::Vec4::Z)
    }

    /// The w-axis unit vector.
    #[inline]
    pub const fn unit_w() -> Self {
        Self::wrap(glam::Vec4::W)
    }

    /// Creates a vector from the given 3D vector and w-component.
    #[inline]
    pub fn from_xyz(xyz: Vector3, w: f32) -> Self {
        xyz.extended(w)
    }

    /// Creates a vector from the given 2D vector and z- and w-components.
    #[inline]
    pub const fn from_xy(xy: Vector2, z: f32, w: f32) -> Self {
        Self::new(xy.x(), xy.y(), z, w)
    }

    /// The x-component.
    #[inline]
    pub fn x(&self) -> f32 {
        self.inner.x
    }

    /// The y-component.
    #[inline]
    pub fn y(&self) -> f32 {
        self.inner.y
    }

    /// The z-component.
    #[inline]
    pub fn z(&self) -> f32 {
        self.inner.z
    }

    /// The w-component.
    #[inline]
    pub fn w(&self) -> f32 {
        self.inner.w
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub fn x_mut(&mut self) -> &mut f32 {
        &mut self.inner.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub fn y_mut(&mut self) -> &mut f32 {
        &mut self.inner.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub fn z_mut(&mut self) -> &mut f32 {
        &mut self.inner.z
    }

    /// A mutable reference to the w-component.
    #[inline]
    pub fn w_mut(&mut self) -> &mut f32 {
        &mut self.inner.w
    }

    /// The 2D vector containing the x- and y-components of this vector.
    #[inline]
    pub fn xy(&self) -> Vector2 {
        Vector2::new(self.x(), self.y())
    }

    /// The 3D vector containing the x-, y- and z-components of this vector.
    #[inline]
    pub fn xyz(&self) -> Vector3 {
        Vector3::new(self.x(), self.y(), self.z())
    }

    /// Computes the normalized version of the vector. If the vector has zero
    /// length, the result will be non-finite.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::wrap(self.inner.normalize())
    }

    /// Computes the normalized version of the vector, or returns [`None`] if
    /// the vector has zero or non-finite length.
    #[inline]
    pub fn try_normalized(&self) -> Option<Self> {
        self.inner.try_normalize().map(Self::wrap)
    }

    /// Normalizes the vector in place. If the vector has zero length, the
    /// components will be non-finite.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.inner.length()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.inner.length_squared()
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        let dot = self.inner.dot(other.inner);
        debug_assert!(!dot.is_nan(), "dot product of {self:?} and {other:?} is NaN");
        dot
    }

    /// Computes the 4D cross product of this vector with `b` and `c`: the
    /// vector orthogonal to all three whose components are the signed 3x3
    /// minors of the matrix with the three vectors as rows. Swapping any two
    /// of the operands negates the result.
    pub fn cross(&self, b: &Self, c: &Self) -> Self {
        let (x1, y1, z1, w1) = (self.x(), self.y(), self.z(), self.w());
        let (x2, y2, z2, w2) = (b.x(), b.y(), b.z(), b.w());
        let (x3, y3, z3, w3) = (c.x(), c.y(), c.z(), c.w());

        let zw = z2 * w3 - w2 * z3;
        let yw = y2 * w3 - w2 * y3;
        let yz = y2 * z3 - z2 * y3;
        let xw = x2 * w3 - w2 * x3;
        let xz = x2 * z3 - z2 * x3;
        let xy = x2 * y3 - y2 * x3;

        Self::new(
            zw * y1 - yw * z1 + yz * w1,
            -zw * x1 + xw * z1 - xz * w1,
            yw * x1 - xw * y1 + xy * w1,
            -yz * x1 + xz * y1 - xy * z1,
        )
    }

    /// Projects this vector onto the direction of `target`. Returns the zero
    /// vector if `target` can not be normalized.
    #[inline]
    pub fn project_onto(&self, target: &Self) -> Self {
        let direction = target.normalized();
        if direction.has_nan() {
            Self::zeros()
        } else {
            direction * self.dot(&direction)
        }
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x()), f(self.y()), f(self.z()), f(self.w()))
    }

    #[inline]
    pub(crate) const fn wrap(inner: glam::Vec4) -> Self {
        Self { inner }
    }

    #[inline]
    pub(crate) const fn unwrap(self) -> glam::Vec4 {
        self.inner
    }
}

impl_float_lanes!(Vector4, Vec4, 4);

impl From<Vector2> for Vector4 {
    /// Widens the vector with zero z- and w-components.
    #[inline]
    fn from(vector: Vector2) -> Self {
        Self::from_xy(vector, 0.0, 0.0)
    }
}

impl From<Vector3> for Vector4 {
    /// Widens the vector with a zero w-component.
    #[inline]
    fn from(vector: Vector3) -> Self {
        vector.extended(0.0)
    }
}

impl From<glam::Vec4> for Vector4 {
    #[inline]
    fn from(vector: glam::Vec4) -> Self {
        Self::wrap(vector)
    }
}

impl From<Vector4> for glam::Vec4 {
    #[inline]
    fn from(vector: Vector4) -> Self {
        vector.unwrap()
    }
}

impl fmt::Debug for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector4")
            .field("x", &self.inner.x)
            .field("y", &self.inner.y)
            .field("z", &self.inner.z)
            .field("w", &self.inner.w)
            .finish()
    }
}
