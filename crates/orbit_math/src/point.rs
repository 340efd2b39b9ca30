//! Integer points.
//!
//! These are plain lane-by-lane integer tuples. Unlike the float vectors they
//! carry no validity notion: their "truthiness" is whether any lane is
//! non-zero. Arithmetic wraps around on overflow, also in debug builds.

use crate::vector::{Vector2, Vector3};
use bytemuck::{Pod, Zeroable};
use core::fmt;

/// A 2-dimensional point with unsigned integer coordinates.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Zeroable, Pod)]
pub struct UPoint2 {
    inner: glam::UVec2,
}

/// A 2-dimensional point with signed integer coordinates.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Zeroable, Pod)]
pub struct IPoint2 {
    inner: glam::IVec2,
}

/// A 3-dimensional point with signed integer coordinates.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Zeroable, Pod)]
pub struct IPoint3 {
    inner: glam::IVec3,
}

macro_rules! impl_integer_point {
    ($t:ident, $glam:ident, $scalar:ty, $vector:ident, $n:literal) => {
        impl $t {
            /// Creates a new point with all zeros.
            #[inline]
            pub const fn zeros() -> Self {
                Self::wrap(glam::$glam::ZERO)
            }

            /// Creates a new point with the same value for all coordinates.
            #[inline]
            pub const fn same(value: $scalar) -> Self {
                Self::wrap(glam::$glam::splat(value))
            }

            /// Converts the given float vector by truncating each component
            /// toward zero. Components outside the range of the integer type
            /// saturate, and NaN becomes zero.
            #[inline]
            pub fn from_vector_truncated(vector: &$vector) -> Self {
                Self::from(vector.to_array().map(|value| value as $scalar))
            }

            /// Whether every coordinate is zero.
            #[inline]
            pub fn is_zero(&self) -> bool {
                self.inner == glam::$glam::ZERO
            }

            /// Whether any coordinate is non-zero.
            #[inline]
            pub fn is_nonzero(&self) -> bool {
                !self.is_zero()
            }

            /// Sets every coordinate to zero.
            #[inline]
            pub fn set_zero(&mut self) {
                *self = Self::zeros();
            }

            /// Whether every coordinate is smaller than the corresponding
            /// coordinate of `other`.
            #[inline]
            pub fn all_lt(&self, other: &Self) -> bool {
                self.inner.cmplt(other.inner).all()
            }

            /// Whether every coordinate is smaller than or equal to the
            /// corresponding coordinate of `other`.
            #[inline]
            pub fn all_le(&self, other: &Self) -> bool {
                self.inner.cmple(other.inner).all()
            }

            /// Whether every coordinate is larger than the corresponding
            /// coordinate of `other`.
            #[inline]
            pub fn all_gt(&self, other: &Self) -> bool {
                self.inner.cmpgt(other.inner).all()
            }

            /// Whether every coordinate is larger than or equal to the
            /// corresponding coordinate of `other`.
            #[inline]
            pub fn all_ge(&self, other: &Self) -> bool {
                self.inner.cmpge(other.inner).all()
            }

            /// Returns a point where each coordinate is the minimum of the
            /// corresponding coordinate in this and another point.
            #[inline]
            pub fn component_min(&self, other: &Self) -> Self {
                Self::wrap(self.inner.min(other.inner))
            }

            /// Returns a point where each coordinate is the maximum of the
            /// corresponding coordinate in this and another point.
            #[inline]
            pub fn component_max(&self, other: &Self) -> Self {
                Self::wrap(self.inner.max(other.inner))
            }

            /// Replaces each coordinate with the minimum of itself and the
            /// corresponding coordinate of `other`.
            #[inline]
            pub fn min_assign(&mut self, other: &Self) {
                *self = self.component_min(other);
            }

            /// Replaces each coordinate with the maximum of itself and the
            /// corresponding coordinate of `other`.
            #[inline]
            pub fn max_assign(&mut self, other: &Self) {
                *self = self.component_max(other);
            }

            /// Clamps each coordinate to the range given by the corresponding
            /// coordinates of `min` and `max`.
            #[inline]
            pub fn clamped(&self, min: &Self, max: &Self) -> Self {
                self.component_max(min).component_min(max)
            }

            /// Computes the Euclidean length of the point seen as a vector from
            /// the origin.
            #[inline]
            pub fn magnitude(&self) -> f32 {
                $vector::from(*self).norm()
            }

            /// Returns the coordinates as an array.
            #[inline]
            pub fn to_array(&self) -> [$scalar; $n] {
                self.inner.to_array()
            }

            #[inline]
            pub(crate) const fn wrap(inner: glam::$glam) -> Self {
                Self { inner }
            }
        }

        impl From<[$scalar; $n]> for $t {
            #[inline]
            fn from(array: [$scalar; $n]) -> Self {
                Self::wrap(glam::$glam::from_array(array))
            }
        }

        impl From<$t> for [$scalar; $n] {
            #[inline]
            fn from(point: $t) -> Self {
                point.to_array()
            }
        }

        impl From<$t> for $vector {
            #[inline]
            fn from(point: $t) -> Self {
                $vector::from(point.to_array().map(|value| value as f32))
            }
        }

        impl_wrapping_lanewise_arithmetic!($t, $glam, $scalar);

        impl_binop!(Add, add, $t, f32, $t, |a, b| {
            $t::from_vector_truncated(&($vector::from(*a) + *b))
        });
        impl_binop!(Sub, sub, $t, f32, $t, |a, b| {
            $t::from_vector_truncated(&($vector::from(*a) - *b))
        });
        impl_binop!(Mul, mul, $t, f32, $t, |a, b| {
            $t::from_vector_truncated(&($vector::from(*a) * *b))
        });
        impl_binop!(Div, div, $t, f32, $t, |a, b| {
            $t::from_vector_truncated(&($vector::from(*a) / *b))
        });

        impl_binop_assign!(AddAssign, add_assign, $t, f32, |a, b| {
            *a = *a + *b;
        });
        impl_binop_assign!(SubAssign, sub_assign, $t, f32, |a, b| {
            *a = *a - *b;
        });
        impl_binop_assign!(MulAssign, mul_assign, $t, f32, |a, b| {
            *a = *a * *b;
        });
        impl_binop_assign!(DivAssign, div_assign, $t, f32, |a, b| {
            *a = *a / *b;
        });

        impl ::std::ops::Index<usize> for $t {
            type Output = $scalar;

            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                &self.inner[index]
            }
        }

        impl ::std::ops::IndexMut<usize> for $t {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut self.inner[index]
            }
        }
    };
}

impl UPoint2 {
    /// Creates a new point with the given coordinates.
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self::wrap(glam::UVec2::new(x, y))
    }

    /// The x-coordinate.
    #[inline]
    pub const fn x(&self) -> u32 {
        self.inner.x
    }

    /// The y-coordinate.
    #[inline]
    pub const fn y(&self) -> u32 {
        self.inner.y
    }

    /// A mutable reference to the x-coordinate.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut u32 {
        &mut self.inner.x
    }

    /// A mutable reference to the y-coordinate.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut u32 {
        &mut self.inner.y
    }
}

impl_integer_point!(UPoint2, UVec2, u32, Vector2, 2);

impl From<IPoint2> for UPoint2 {
    /// Reinterprets the coordinates as unsigned, so negative values wrap.
    #[inline]
    fn from(point: IPoint2) -> Self {
        Self::wrap(point.inner.as_uvec2())
    }
}

impl fmt::Debug for UPoint2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UPoint2")
            .field("x", &self.inner.x)
            .field("y", &self.inner.y)
            .finish()
    }
}

impl IPoint2 {
    /// Creates a new point with the given coordinates.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self::wrap(glam::IVec2::new(x, y))
    }

    /// The x-coordinate.
    #[inline]
    pub const fn x(&self) -> i32 {
        self.inner.x
    }

    /// The y-coordinate.
    #[inline]
    pub const fn y(&self) -> i32 {
        self.inner.y
    }

    /// A mutable reference to the x-coordinate.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut i32 {
        &mut self.inner.x
    }

    /// A mutable reference to the y-coordinate.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut i32 {
        &mut self.inner.y
    }

    /// Returns a point with the absolute value of each coordinate.
    /// `i32::MIN` has no positive counterpart and is returned unchanged.
    #[inline]
    pub fn abs(&self) -> Self {
        Self::from(self.to_array().map(i32::wrapping_abs))
    }

    /// Replaces each coordinate with its absolute value.
    #[inline]
    pub fn make_abs(&mut self) {
        *self = self.abs();
    }
}

impl_integer_point!(IPoint2, IVec2, i32, Vector2, 2);

impl_unary_op!(Neg, neg, IPoint2, IPoint2, |val| {
    IPoint2::wrap(glam::IVec2::ZERO.wrapping_sub(val.inner))
});

impl From<UPoint2> for IPoint2 {
    /// Reinterprets the coordinates as signed, so values above `i32::MAX`
    /// wrap.
    #[inline]
    fn from(point: UPoint2) -> Self {
        Self::wrap(point.inner.as_ivec2())
    }
}

impl fmt::Debug for IPoint2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IPoint2")
            .field("x", &self.inner.x)
            .field("y", &self.inner.y)
            .finish()
    }
}

impl IPoint3 {
    /// Creates a new point with the given coordinates.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self::wrap(glam::IVec3::new(x, y, z))
    }

    /// The x-coordinate.
    #[inline]
    pub const fn x(&self) -> i32 {
        self.inner.x
    }

    /// The y-coordinate.
    #[inline]
    pub const fn y(&self) -> i32 {
        self.inner.y
    }

    /// The z-coordinate.
    #[inline]
    pub const fn z(&self) -> i32 {
        self.inner.z
    }

    /// A mutable reference to the x-coordinate.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut i32 {
        &mut self.inner.x
    }

    /// A mutable reference to the y-coordinate.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut i32 {
        &mut self.inner.y
    }

    /// A mutable reference to the z-coordinate.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut i32 {
        &mut self.inner.z
    }

    /// The 2D point containing the x- and y-coordinates of this point.
    #[inline]
    pub const fn xy(&self) -> IPoint2 {
        IPoint2::new(self.x(), self.y())
    }

    /// Returns a point with the absolute value of each coordinate.
    /// `i32::MIN` has no positive counterpart and is returned unchanged.
    #[inline]
    pub fn abs(&self) -> Self {
        Self::from(self.to_array().map(i32::wrapping_abs))
    }

    /// Replaces each coordinate with its absolute value.
    #[inline]
    pub fn make_abs(&mut self) {
        *self = self.abs();
    }
}

impl_integer_point!(IPoint3, IVec3, i32, Vector3, 3);

impl_unary_op!(Neg, neg, IPoint3, IPoint3, |val| {
    IPoint3::wrap(glam::IVec3::ZERO.wrapping_sub(val.inner))
});

impl fmt::Debug for IPoint3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IPoint3")
            .field("x", &self.inner.x)
            .field("y", &self.inner.y)
            .field("z", &self.inner.z)
            .finish()
    }
}
