//! Compress or remove an interior interval of the axis.

use num_traits::Float;

use crate::error::{Error, Result};
use crate::transform::Transform;

/// Accelerates traversal of the interval `[lower, upper]`, or removes the
/// interval entirely.
///
/// Values at or below `lower` map to themselves. With a finite acceleration
/// `s`, the interval occupies `1/s` of its width in warped space and values
/// at or above `upper` shift down by the width saved. With infinite
/// acceleration the interval collapses onto `lower` and everything above
/// closes the gap completely.
///
/// An acceleration below 1 works in reverse: the interval is stretched and
/// values above it shift up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutoffTransform<D: Float> {
    lower: D,
    upper: D,
    accel: D,
}

impl<D: Float> CutoffTransform<D> {
    /// Creates a transform that removes `(lower, upper]` from the axis.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CutoffBounds`] unless `lower < upper`.
    ///
    /// # Examples
    ///
    /// ```
    /// use skala::transform::{CutoffTransform, Transform};
    ///
    /// let jump = CutoffTransform::new(10.0, 90.0).unwrap();
    /// assert_eq!(jump.forward(95.0), Some(15.0));
    /// assert_eq!(jump.inverse(15.0), Some(95.0));
    /// ```
    pub fn new(lower: D, upper: D) -> Result<Self> {
        Self::new_with_accel(lower, upper, D::infinity())
    }

    /// Creates a transform that traverses `[lower, upper]` at `accel` times
    /// the usual rate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CutoffBounds`] unless `lower < upper`, and
    /// [`Error::CutoffAcceleration`] unless `accel` is positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use skala::transform::{CutoffTransform, Transform};
    ///
    /// let t = CutoffTransform::new_with_accel(0.0, 10.0, 5.0).unwrap();
    /// assert_eq!(t.forward(10.0), Some(2.0));
    /// assert_eq!(t.forward(12.0), Some(4.0));
    /// ```
    pub fn new_with_accel(lower: D, upper: D, accel: D) -> Result<Self> {
        if !(lower < upper) {
            return Err(Error::CutoffBounds {
                lower: lower.to_f64().unwrap_or(f64::NAN),
                upper: upper.to_f64().unwrap_or(f64::NAN),
            });
        }
        if !(accel > D::zero()) {
            return Err(Error::CutoffAcceleration {
                accel: accel.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self { lower, upper, accel })
    }

    /// Lower edge of the affected interval.
    pub fn lower(&self) -> D {
        self.lower
    }

    /// Upper edge of the affected interval.
    pub fn upper(&self) -> D {
        self.upper
    }

    /// Acceleration factor, infinite for a hard gap.
    pub fn accel(&self) -> D {
        self.accel
    }

    /// Width removed from warped space. Equals the full interval width when
    /// the acceleration is infinite.
    fn gap(&self) -> D {
        let width = self.upper - self.lower;
        if self.accel.is_infinite() {
            width
        } else {
            width * (D::one() - self.accel.recip())
        }
    }
}

impl<D: Float> Transform<D> for CutoffTransform<D> {
    fn forward(&self, value: D) -> Option<D> {
        if value <= self.lower {
            Some(value)
        } else if value >= self.upper {
            Some(value - self.gap())
        } else if self.accel.is_infinite() {
            Some(self.lower)
        } else {
            Some(self.lower + (value - self.lower) / self.accel)
        }
    }

    fn inverse(&self, value: D) -> Option<D> {
        if value <= self.lower {
            Some(value)
        } else if self.accel.is_infinite() {
            Some(value + self.gap())
        } else if value >= self.upper - self.gap() {
            Some(value + self.gap())
        } else {
            Some(self.lower + (value - self.lower) * self.accel)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hard_gap_removes_the_interval() {
        let t = CutoffTransform::new(2.0, 5.0).unwrap();
        assert_eq!(t.forward(1.0), Some(1.0));
        assert_eq!(t.forward(2.0), Some(2.0));
        assert_eq!(t.forward(3.5), Some(2.0));
        assert_eq!(t.forward(5.0), Some(2.0));
        assert_eq!(t.forward(8.0), Some(5.0));
    }

    #[test]
    fn hard_gap_round_trips_outside_the_interval() {
        let t = CutoffTransform::new(2.0, 5.0).unwrap();
        for &v in &[-3.0, 0.0, 2.0, 5.5, 6.5, 80.0] {
            let w = t.forward(v).unwrap();
            assert_eq!(t.inverse(w), Some(v), "value {v}");
        }
    }

    #[test]
    fn acceleration_compresses_the_interior() {
        let t = CutoffTransform::new_with_accel(2.0, 5.0, 2.0).unwrap();
        assert_eq!(t.forward(2.0), Some(2.0));
        assert_eq!(t.forward(3.0), Some(2.5));
        assert_eq!(t.forward(5.0), Some(3.5));
        assert_eq!(t.forward(7.0), Some(5.5));
    }

    #[test]
    fn acceleration_round_trips_exactly_on_simple_values() {
        let t = CutoffTransform::new_with_accel(2.0, 5.0, 2.0).unwrap();
        for &v in &[-1.0, 2.0, 2.5, 3.0, 4.0, 5.0, 9.0] {
            let w = t.forward(v).unwrap();
            assert_eq!(t.inverse(w), Some(v), "value {v}");
        }
    }

    #[test]
    fn deceleration_stretches_the_interior() {
        let t = CutoffTransform::new_with_accel(2.0, 5.0, 0.5).unwrap();
        assert_eq!(t.forward(3.0), Some(4.0));
        assert_eq!(t.forward(5.0), Some(8.0));
        assert_eq!(t.forward(6.0), Some(9.0));
        let w = t.forward(4.0).unwrap();
        assert_eq!(t.inverse(w), Some(4.0));
    }

    #[test]
    fn rejects_misordered_bounds_and_bad_acceleration() {
        assert!(matches!(
            CutoffTransform::new(5.0, 2.0),
            Err(Error::CutoffBounds { .. })
        ));
        assert!(matches!(
            CutoffTransform::new(3.0, 3.0),
            Err(Error::CutoffBounds { .. })
        ));
        assert!(matches!(
            CutoffTransform::new_with_accel(1.0, 2.0, 0.0),
            Err(Error::CutoffAcceleration { .. })
        ));
        assert!(matches!(
            CutoffTransform::new_with_accel(1.0, 2.0, -2.0),
            Err(Error::CutoffAcceleration { .. })
        ));
    }
}
