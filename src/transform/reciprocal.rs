//! Reciprocal warp for axes that show `1/x`.

use num_traits::Float;

use crate::error::{Error, Result};
use crate::transform::Transform;

/// Maps a value to its reciprocal.
///
/// The warp is its own inverse. Values at or below zero have no reciprocal
/// on the positive branch, so they are substituted with a small positive
/// epsilon before dividing instead of being masked. That keeps every input
/// mapped, at the cost of pinning non-positive values to `1/eps`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseTransform<D: Float> {
    eps: D,
}

impl<D: Float> InverseTransform<D> {
    /// Creates the transform with the default epsilon of `1e-2`.
    pub fn new() -> Self {
        Self {
            eps: D::from(1e-2).unwrap(),
        }
    }

    /// Creates the transform substituting `eps` for non-positive values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReciprocalEpsilon`] unless `eps` is positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use skala::transform::{InverseTransform, Transform};
    ///
    /// let t = InverseTransform::new_with_eps(0.5).unwrap();
    /// assert_eq!(t.forward(4.0), Some(0.25));
    /// assert_eq!(t.forward(-3.0), Some(2.0));
    /// ```
    pub fn new_with_eps(eps: D) -> Result<Self> {
        if !(eps > D::zero()) {
            return Err(Error::ReciprocalEpsilon {
                eps: eps.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self { eps })
    }

    /// Substitute used in place of non-positive values.
    pub fn eps(&self) -> D {
        self.eps
    }
}

impl<D: Float> Default for InverseTransform<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Float> Transform<D> for InverseTransform<D> {
    fn forward(&self, value: D) -> Option<D> {
        let v = if value <= D::zero() { self.eps } else { value };
        Some(v.recip())
    }

    fn inverse(&self, value: D) -> Option<D> {
        self.forward(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reciprocal_is_its_own_inverse_on_positive_values() {
        let t = InverseTransform::new();
        for &v in &[0.25, 1.0, 2.0, 8.0, 1e6] {
            let w = t.forward(v).unwrap();
            assert_eq!(t.inverse(w), Some(v), "value {v}");
        }
    }

    #[test]
    fn non_positive_values_use_the_epsilon_substitute() {
        let t = InverseTransform::new();
        assert_eq!(t.forward(0.0), Some(100.0));
        assert_eq!(t.forward(-17.0), Some(100.0));
        let custom = InverseTransform::new_with_eps(0.25).unwrap();
        assert_eq!(custom.forward(-1.0), Some(4.0));
    }

    #[test]
    fn rejects_a_non_positive_epsilon() {
        assert!(matches!(
            InverseTransform::new_with_eps(0.0),
            Err(Error::ReciprocalEpsilon { .. })
        ));
        assert!(matches!(
            InverseTransform::new_with_eps(-0.1),
            Err(Error::ReciprocalEpsilon { .. })
        ));
    }
}
