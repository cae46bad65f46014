//! Pure 2D vector fields and their composition.

use crate::Vector2D;
use std::sync::Arc;

type FieldFn = dyn Fn(f64, f64) -> Vector2D + Send + Sync;

/// A pure mapping from a plot-space point to a [`Vector2D`].
///
/// Fields are cheap to clone (the function is reference counted) and never
/// carry mutable state, so evaluating the same point twice always yields the
/// same vector. Composition builds a new field rather than changing either input.
#[derive(Clone)]
pub struct VectorField2D {
    func: Arc<FieldFn>,
}

impl VectorField2D {
    /// Wrap a function as a field.
    pub fn new(func: impl Fn(f64, f64) -> Vector2D + Send + Sync + 'static) -> Self {
        Self {
            func: Arc::new(func),
        }
    }

    /// The zero field, neutral element of [`add`](Self::add).
    pub fn zero() -> Self {
        Self::new(|_, _| Vector2D::ZERO)
    }

    /// A field with the same vector everywhere.
    pub fn uniform(vector: Vector2D) -> Self {
        Self::new(move |_, _| vector)
    }

    /// Evaluate the field at a plot-space point.
    #[inline]
    pub fn at(&self, x: f64, y: f64) -> Vector2D {
        (self.func)(x, y)
    }

    /// Pointwise sum of two fields.
    pub fn add(&self, other: &VectorField2D) -> Self {
        let a = Arc::clone(&self.func);
        let b = Arc::clone(&other.func);
        Self::new(move |x, y| a(x, y).plus(b(x, y)))
    }

    /// Pointwise scaling by `n`.
    pub fn multiply(&self, n: f64) -> Self {
        let f = Arc::clone(&self.func);
        Self::new(move |x, y| f(x, y).times(n))
    }

    /// Sum any number of fields; an empty input yields the zero field.
    pub fn sum(fields: impl IntoIterator<Item = VectorField2D>) -> Self {
        let fields: Vec<Arc<FieldFn>> = fields.into_iter().map(|f| f.func).collect();
        Self::new(move |x, y| {
            fields
                .iter()
                .fold(Vector2D::ZERO, |acc, f| acc.plus(f(x, y)))
        })
    }
}

impl Default for VectorField2D {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Debug for VectorField2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorField2D").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[(f64, f64)] = &[
        (0.0, 0.0),
        (1.0, -2.0),
        (-3.5, 0.25),
        (10.0, 10.0),
        (-0.1, 7.0),
    ];

    fn swirl() -> VectorField2D {
        VectorField2D::new(|x, y| Vector2D::new(y, -x))
    }

    fn ramp() -> VectorField2D {
        VectorField2D::new(|x, y| Vector2D::new(x * x, x + y))
    }

    #[test]
    fn test_add_is_pointwise_sum() {
        let sum = swirl().add(&ramp());
        for &(x, y) in SAMPLES {
            assert_eq!(sum.at(x, y), swirl().at(x, y).plus(ramp().at(x, y)));
        }
    }

    #[test]
    fn test_add_commutes() {
        let ab = swirl().add(&ramp());
        let ba = ramp().add(&swirl());
        for &(x, y) in SAMPLES {
            assert_eq!(ab.at(x, y), ba.at(x, y));
        }
    }

    #[test]
    fn test_add_associates() {
        let c = VectorField2D::uniform(Vector2D::new(0.3, 0.7));
        let left = swirl().add(&ramp()).add(&c);
        let right = swirl().add(&ramp().add(&c));
        for &(x, y) in SAMPLES {
            let (l, r) = (left.at(x, y), right.at(x, y));
            assert!((l.x - r.x).abs() < 1e-12);
            assert!((l.y - r.y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_is_neutral() {
        let f = ramp().add(&VectorField2D::zero());
        for &(x, y) in SAMPLES {
            assert_eq!(f.at(x, y), ramp().at(x, y));
        }
    }

    #[test]
    fn test_multiply_scales() {
        let f = swirl().multiply(-2.5);
        for &(x, y) in SAMPLES {
            assert_eq!(f.at(x, y), swirl().at(x, y).times(-2.5));
        }
    }

    #[test]
    fn test_sum_matches_chained_add() {
        let sum = VectorField2D::sum([swirl(), ramp(), swirl()]);
        let chained = swirl().add(&ramp()).add(&swirl());
        for &(x, y) in SAMPLES {
            assert_eq!(sum.at(x, y), chained.at(x, y));
        }
        assert_eq!(VectorField2D::sum([]).at(1.0, 1.0), Vector2D::ZERO);
    }
}
