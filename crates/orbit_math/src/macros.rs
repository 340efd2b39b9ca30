//! Utility macros.

macro_rules! impl_binop {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<'a> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                (&self).$method()
            }
        }
    };
}

macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                self.$method(&rhs);
            }
        }
    };
}

/// Implements the four arithmetic operators and their assigning forms for a
/// type wrapping a glam type in an `inner` field, both lane by lane against
/// the same type and with the given scalar broadcast to every lane.
macro_rules! impl_lanewise_arithmetic {
    ($t:ident, $scalar:ty) => {
        impl_binop!(Add, add, $t, $t, $t, |a, b| { $t::wrap(a.inner + b.inner) });
        impl_binop!(Sub, sub, $t, $t, $t, |a, b| { $t::wrap(a.inner - b.inner) });
        impl_binop!(Mul, mul, $t, $t, $t, |a, b| { $t::wrap(a.inner * b.inner) });
        impl_binop!(Div, div, $t, $t, $t, |a, b| { $t::wrap(a.inner / b.inner) });

        impl_binop!(Add, add, $t, $scalar, $t, |a, b| { $t::wrap(a.inner + *b) });
        impl_binop!(Sub, sub, $t, $scalar, $t, |a, b| { $t::wrap(a.inner - *b) });
        impl_binop!(Mul, mul, $t, $scalar, $t, |a, b| { $t::wrap(a.inner * *b) });
        impl_binop!(Div, div, $t, $scalar, $t, |a, b| { $t::wrap(a.inner / *b) });

        impl_binop!(Mul, mul, $scalar, $t, $t, |a, b| { $t::wrap(*a * b.inner) });

        impl_binop_assign!(AddAssign, add_assign, $t, $t, |a, b| {
            a.inner += b.inner;
        });
        impl_binop_assign!(SubAssign, sub_assign, $t, $t, |a, b| {
            a.inner -= b.inner;
        });
        impl_binop_assign!(MulAssign, mul_assign, $t, $t, |a, b| {
            a.inner *= b.inner;
        });
        impl_binop_assign!(DivAssign, div_assign, $t, $t, |a, b| {
            a.inner /= b.inner;
        });

        impl_binop_assign!(AddAssign, add_assign, $t, $scalar, |a, b| {
            a.inner += *b;
        });
        impl_binop_assign!(SubAssign, sub_assign, $t, $scalar, |a, b| {
            a.inner -= *b;
        });
        impl_binop_assign!(MulAssign, mul_assign, $t, $scalar, |a, b| {
            a.inner *= *b;
        });
        impl_binop_assign!(DivAssign, div_assign, $t, $scalar, |a, b| {
            a.inner /= *b;
        });
    };
}

/// Like `impl_lanewise_arithmetic!`, but for integer types whose lanes wrap
/// around on overflow in every build profile.
macro_rules! impl_wrapping_lanewise_arithmetic {
    ($t:ident, $glam:ident, $scalar:ty) => {
        impl_binop!(Add, add, $t, $t, $t, |a, b| {
            $t::wrap(a.inner.wrapping_add(b.inner))
        });
        impl_binop!(Sub, sub, $t, $t, $t, |a, b| {
            $t::wrap(a.inner.wrapping_sub(b.inner))
        });
        impl_binop!(Mul, mul, $t, $t, $t, |a, b| {
            $t::wrap(a.inner.wrapping_mul(b.inner))
        });
        impl_binop!(Div, div, $t, $t, $t, |a, b| {
            $t::wrap(a.inner.wrapping_div(b.inner))
        });

        impl_binop!(Add, add, $t, $scalar, $t, |a, b| {
            $t::wrap(a.inner.wrapping_add(glam::$glam::splat(*b)))
        });
        impl_binop!(Sub, sub, $t, $scalar, $t, |a, b| {
            $t::wrap(a.inner.wrapping_sub(glam::$glam::splat(*b)))
        });
        impl_binop!(Mul, mul, $t, $scalar, $t, |a, b| {
            $t::wrap(a.inner.wrapping_mul(glam::$glam::splat(*b)))
        });
        impl_binop!(Div, div, $t, $scalar, $t, |a, b| {
            $t::wrap(a.inner.wrapping_div(glam::$glam::splat(*b)))
        });

        impl_binop!(Mul, mul, $scalar, $t, $t, |a, b| {
            $t::wrap(glam::$glam::splat(*a).wrapping_mul(b.inner))
        });

        impl_binop_assign!(AddAssign, add_assign, $t, $t, |a, b| {
            *a = *a + b;
        });
        impl_binop_assign!(SubAssign, sub_assign, $t, $t, |a, b| {
            *a = *a - b;
        });
        impl_binop_assign!(MulAssign, mul_assign, $t, $t, |a, b| {
            *a = *a * b;
        });
        impl_binop_assign!(DivAssign, div_assign, $t, $t, |a, b| {
            *a = *a / b;
        });

        impl_binop_assign!(AddAssign, add_assign, $t, $scalar, |a, b| {
            *a = *a + b;
        });
        impl_binop_assign!(SubAssign, sub_assign, $t, $scalar, |a, b| {
            *a = *a - b;
        });
        impl_binop_assign!(MulAssign, mul_assign, $t, $scalar, |a, b| {
            *a = *a * b;
        });
        impl_binop_assign!(DivAssign, div_assign, $t, $scalar, |a, b| {
            *a = *a / b;
        });
    };
}

macro_rules! impl_abs_diff_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident| $body:block) => {
        impl ::approx::AbsDiffEq for $t {
            type Epsilon = f32;

            fn default_epsilon() -> Self::Epsilon {
                f32::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                $body
            }
        }
    };
}

macro_rules! impl_relative_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident, $arg4:ident| $body:block) => {
        impl ::approx::RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                f32::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                let $arg4 = max_relative;
                $body
            }
        }
    };
}

/// Implements the functionality shared by all the float vector types: lane
/// validity, zero tests, lane-wise comparisons and per-lane math functions.
/// The type must wrap a glam vector in an `inner` field and provide `wrap`,
/// `mapped`, `same` and `zeros`.
macro_rules! impl_float_lanes {
    ($t:ident, $glam:ident, $n:literal) => {
        impl $t {
            /// The number of lanes in the vector.
            pub const LANES: usize = $n;

            /// Whether no component is NaN or infinite.
            #[inline]
            pub fn is_valid(&self) -> bool {
                self.inner.is_finite()
            }

            /// Whether any component is NaN or infinite.
            #[inline]
            pub fn is_invalid(&self) -> bool {
                !self.is_valid()
            }

            /// Whether any component is NaN.
            #[inline]
            pub fn has_nan(&self) -> bool {
                self.inner.is_nan()
            }

            /// Whether every component is exactly zero. Negative zero counts
            /// as zero.
            #[inline]
            pub fn is_zero(&self) -> bool {
                self.inner.cmpeq(Self::zeros().inner).all()
            }

            /// Whether the magnitude of every component is at most `epsilon`.
            #[inline]
            pub fn is_zero_or_near_zero(&self, epsilon: f32) -> bool {
                self.inner.abs().cmple(Self::same(epsilon).inner).all()
            }

            /// Like [`Self::is_zero_or_near_zero`] with the default
            /// [`NEAR_ZERO_EPSILON`](crate::consts::NEAR_ZERO_EPSILON).
            #[inline]
            pub fn is_near_zero(&self) -> bool {
                self.is_zero_or_near_zero($crate::consts::NEAR_ZERO_EPSILON)
            }

            /// Sets every component to zero.
            #[inline]
            pub fn set_zero(&mut self) {
                *self = Self::zeros();
            }

            /// Sets each component whose magnitude is below `epsilon` to zero,
            /// leaving the other components untouched.
            #[inline]
            pub fn set_zero_if_near(&mut self, epsilon: f32) {
                let near = self.inner.abs().cmplt(Self::same(epsilon).inner);
                self.inner = <glam::$glam>::select(near, Self::zeros().inner, self.inner);
            }

            /// Returns a copy of the vector with the near-zero components
            /// snapped to zero, using the default
            /// [`NEAR_ZERO_EPSILON`](crate::consts::NEAR_ZERO_EPSILON).
            #[inline]
            pub fn snap_near_zero(&self) -> Self {
                let mut snapped = *self;
                snapped.set_zero_if_near($crate::consts::NEAR_ZERO_EPSILON);
                snapped
            }

            /// Whether every component is smaller than the corresponding
            /// component of `other`.
            #[inline]
            pub fn all_lt(&self, other: &Self) -> bool {
                self.inner.cmplt(other.inner).all()
            }

            /// Whether every component is smaller than or equal to the
            /// corresponding component of `other`.
            #[inline]
            pub fn all_le(&self, other: &Self) -> bool {
                self.inner.cmple(other.inner).all()
            }

            /// Whether every component is larger than the corresponding
            /// component of `other`.
            #[inline]
            pub fn all_gt(&self, other: &Self) -> bool {
                self.inner.cmpgt(other.inner).all()
            }

            /// Whether every component is larger than or equal to the
            /// corresponding component of `other`.
            #[inline]
            pub fn all_ge(&self, other: &Self) -> bool {
                self.inner.cmpge(other.inner).all()
            }

            /// Computes the sum of the components.
            #[inline]
            pub fn component_sum(&self) -> f32 {
                self.inner.element_sum()
            }

            /// Computes `a * b + c` lane by lane.
            #[inline]
            pub fn mul_add(a: &Self, b: &Self, c: &Self) -> Self {
                Self::wrap(a.inner.mul_add(b.inner, c.inner))
            }

            /// Computes the componentwise mean of the given vectors.
            ///
            /// The slice must not be empty. This is checked in debug builds,
            /// while release builds return NaN components.
            pub fn average(vectors: &[Self]) -> Self {
                debug_assert!(!vectors.is_empty(), "averaging an empty slice of vectors");
                let sum = vectors.iter().fold(Self::zeros(), |sum, vector| sum + vector);
                sum / (vectors.len() as f32)
            }

            /// Computes the componentwise mean of the given vectors, or
            /// returns [`None`] if the slice is empty.
            pub fn try_average(vectors: &[Self]) -> Option<Self> {
                if vectors.is_empty() {
                    None
                } else {
                    Some(Self::average(vectors))
                }
            }

            /// Divides each component by the given scalar, or returns [`None`]
            /// if the scalar is zero.
            #[inline]
            pub fn try_div(&self, divisor: f32) -> Option<Self> {
                if divisor == 0.0 {
                    None
                } else {
                    Some(self / divisor)
                }
            }

            /// Returns a vector with the square root of each component.
            #[inline]
            pub fn sqrt(&self) -> Self {
                self.mapped(f32::sqrt)
            }

            /// Returns a vector with the reciprocal of each component.
            #[inline]
            pub fn recip(&self) -> Self {
                Self::wrap(self.inner.recip())
            }

            /// Returns a vector with the reciprocal square root of each
            /// component.
            #[inline]
            pub fn recip_sqrt(&self) -> Self {
                self.mapped(|value| value.sqrt().recip())
            }

            /// Returns a vector with each component rounded down.
            #[inline]
            pub fn floor(&self) -> Self {
                Self::wrap(self.inner.floor())
            }

            /// Returns a vector with each component rounded up.
            #[inline]
            pub fn ceil(&self) -> Self {
                Self::wrap(self.inner.ceil())
            }

            /// Returns a vector with each component rounded to the nearest
            /// integer, with ties going to the even integer.
            #[inline]
            pub fn round(&self) -> Self {
                self.mapped(f32::round_ties_even)
            }

            /// Returns a vector with the absolute value of each component.
            #[inline]
            pub fn abs(&self) -> Self {
                Self::wrap(self.inner.abs())
            }

            /// Replaces each component with its absolute value.
            #[inline]
            pub fn make_abs(&mut self) {
                self.inner = self.inner.abs();
            }

            /// Returns a vector with `e` raised to the power of each
            /// component.
            #[inline]
            pub fn exp(&self) -> Self {
                self.mapped(f32::exp)
            }

            /// Raises each component to the power of the corresponding
            /// component of `exponents`.
            #[inline]
            pub fn powf(&self, exponents: &Self) -> Self {
                let mut result = *self;
                for lane in 0..$n {
                    result[lane] = self[lane].powf(exponents[lane]);
                }
                result
            }

            /// Returns a vector where each component is the minimum of the
            /// corresponding component in this and another vector.
            #[inline]
            pub fn component_min(&self, other: &Self) -> Self {
                Self::wrap(self.inner.min(other.inner))
            }

            /// Returns a vector where each component is the maximum of the
            /// corresponding component in this and another vector.
            #[inline]
            pub fn component_max(&self, other: &Self) -> Self {
                Self::wrap(self.inner.max(other.inner))
            }

            /// Returns the smallest component in the vector.
            #[inline]
            pub fn min_component(&self) -> f32 {
                self.inner.min_element()
            }

            /// Returns the largest component in the vector.
            #[inline]
            pub fn max_component(&self) -> f32 {
                self.inner.max_element()
            }

            /// Clamps each component to the range given by the corresponding
            /// components of `min` and `max`.
            #[inline]
            pub fn clamped(&self, min: &Self, max: &Self) -> Self {
                self.component_max(min).component_min(max)
            }

            /// Linearly interpolates between this vector (`t = 0`) and `other`
            /// (`t = 1`).
            #[inline]
            pub fn lerp(&self, other: &Self, t: f32) -> Self {
                Self::wrap(self.inner.lerp(other.inner, t))
            }

            /// Linearly interpolates lane by lane, using the corresponding
            /// component of `t` as the interpolation parameter.
            #[inline]
            pub fn lerp_lanes(&self, other: &Self, t: &Self) -> Self {
                Self::wrap(self.inner + (other.inner - self.inner) * t.inner)
            }

            /// Creates a vector from the first lanes of the given slice.
            ///
            /// # Panics
            /// If the slice has fewer elements than the vector has lanes.
            #[inline]
            pub fn from_slice(slice: &[f32]) -> Self {
                assert!(
                    slice.len() >= $n,
                    "slice of length {} is too short for a {}-lane vector",
                    slice.len(),
                    $n
                );
                Self::wrap(<glam::$glam>::from_slice(slice))
            }

            /// Creates a vector from the first lanes of the given slice, or
            /// returns [`None`] if the slice is too short.
            #[inline]
            pub fn try_from_slice(slice: &[f32]) -> Option<Self> {
                (slice.len() >= $n).then(|| Self::wrap(<glam::$glam>::from_slice(slice)))
            }

            /// Returns the components as an array.
            #[inline]
            pub fn to_array(&self) -> [f32; $n] {
                self.inner.to_array()
            }
        }

        impl From<[f32; $n]> for $t {
            #[inline]
            fn from(array: [f32; $n]) -> Self {
                Self::wrap(<glam::$glam>::from_array(array))
            }
        }

        impl From<$t> for [f32; $n] {
            #[inline]
            fn from(vector: $t) -> Self {
                vector.to_array()
            }
        }

        impl From<[i32; $n]> for $t {
            #[inline]
            fn from(array: [i32; $n]) -> Self {
                Self::from(array.map(|value| value as f32))
            }
        }

        impl From<[u32; $n]> for $t {
            #[inline]
            fn from(array: [u32; $n]) -> Self {
                Self::from(array.map(|value| value as f32))
            }
        }

        impl_lanewise_arithmetic!($t, f32);

        impl_unary_op!(Neg, neg, $t, $t, |val| { $t::wrap(-val.inner) });

        impl ::std::ops::Index<usize> for $t {
            type Output = f32;

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

        impl_abs_diff_eq!($t, |a, b, epsilon| {
            a.inner.abs_diff_eq(b.inner, epsilon)
        });

        impl_relative_eq!($t, |a, b, epsilon, max_relative| {
            ::approx::RelativeEq::relative_eq(&a.inner, &b.inner, epsilon, max_relative)
        });
    };
}
