//! Random scalars and vectors drawn from an explicitly passed generator.

use crate::vector::{Vector2, Vector3, Vector4};
use rand::Rng;

/// Draws a uniformly distributed number in `[-1, 1]`.
#[inline]
pub fn random_signed_unit<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random_range(-1.0..=1.0)
}

/// Draws a uniformly distributed number between `min` and `max`, computed as
/// `(max - min) * r + min` for `r` in `[0, 1)`. The bounds may be given in
/// either order, and equal bounds give that value back.
#[inline]
pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    let r: f32 = rng.random();
    (max - min) * r + min
}

impl Vector2 {
    /// Draws each component independently with [`random_in_range`] between
    /// the corresponding components of `min` and `max`.
    pub fn random_in_box<R: Rng + ?Sized>(rng: &mut R, min: &Self, max: &Self) -> Self {
        Self::new(
            random_in_range(rng, min.x(), max.x()),
            random_in_range(rng, min.y(), max.y()),
        )
    }
}

impl Vector3 {
    /// Draws each component independently with [`random_in_range`] between
    /// the corresponding components of `min` and `max`.
    pub fn random_in_box<R: Rng + ?Sized>(rng: &mut R, min: &Self, max: &Self) -> Self {
        Self::new(
            random_in_range(rng, min.x(), max.x()),
            random_in_range(rng, min.y(), max.y()),
            random_in_range(rng, min.z(), max.z()),
        )
    }
}

impl Vector4 {
    /// Draws each component independently with [`random_in_range`] between
    /// the corresponding components of `min` and `max`.
    pub fn random_in_box<R: Rng + ?Sized>(rng: &mut R, min: &Self, max: &Self) -> Self {
        Self::new(
            random_in_range(rng, min.x(), max.x()),
            random_in_range(rng, min.y(), max.y()),
            random_in_range(rng, min.z(), max.z()),
            random_in_range(rng, min.w(), max.w()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn signed_unit_samples_stay_in_closed_unit_interval() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..1000 {
            let value = random_signed_unit(&mut rng);
            assert!((-1.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn signed_unit_samples_cover_both_signs() {
        let mut rng = StdRng::seed_from_u64(1);
        let samples: Vec<f32> = (0..1000).map(|_| random_signed_unit(&mut rng)).collect();
        assert!(samples.iter().any(|&value| value < -0.5));
        assert!(samples.iter().any(|&value| value > 0.5));
    }

    #[test]
    fn range_samples_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..1000 {
            let value = random_in_range(&mut rng, -3.0, 5.0);
            assert!((-3.0..=5.0).contains(&value));
        }
    }

    #[test]
    fn range_samples_with_swapped_bounds_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let value = random_in_range(&mut rng, 2.0, -1.0);
            assert!((-1.0..=2.0).contains(&value));
        }
    }

    #[test]
    fn range_with_equal_bounds_gives_bound() {
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(random_in_range(&mut rng, 1.5, 1.5), 1.5);
    }

    #[test]
    fn seeded_generators_give_reproducible_vectors() {
        let min = Vector3::new(-1.0, 0.0, 10.0);
        let max = Vector3::new(1.0, 2.0, 20.0);
        let a = Vector3::random_in_box(&mut StdRng::seed_from_u64(42), &min, &max);
        let b = Vector3::random_in_box(&mut StdRng::seed_from_u64(42), &min, &max);
        assert_eq!(a, b);
    }

    #[test]
    fn random_vectors_stay_inside_box() {
        let mut rng = StdRng::seed_from_u64(5);

        let min2 = Vector2::new(-1.0, 3.0);
        let max2 = Vector2::new(0.0, 4.0);
        let min3 = Vector3::new(-5.0, -5.0, 0.0);
        let max3 = Vector3::new(5.0, -4.0, 0.5);
        let min4 = Vector4::new(0.0, 1.0, 2.0, 3.0);
        let max4 = Vector4::new(1.0, 2.0, 3.0, 4.0);

        for _ in 0..200 {
            let v2 = Vector2::random_in_box(&mut rng, &min2, &max2);
            assert!(v2.all_ge(&min2) && v2.all_le(&max2));

            let v3 = Vector3::random_in_box(&mut rng, &min3, &max3);
            assert!(v3.all_ge(&min3) && v3.all_le(&max3));

            let v4 = Vector4::random_in_box(&mut rng, &min4, &max4);
            assert!(v4.all_ge(&min4) && v4.all_le(&max4));
        }
    }

    #[test]
    fn degenerate_box_gives_its_corner() {
        let mut rng = StdRng::seed_from_u64(6);
        let corner = Vector2::new(0.25, -7.0);
        assert_eq!(Vector2::random_in_box(&mut rng, &corner, &corner), corner);
    }
}
