//! Latitude warps for geographic axes.

use num_traits::Float;

use crate::error::{Error, Result};
use crate::transform::Transform;

/// The Mercator projection applied to latitudes in degrees.
///
/// Maps a latitude to `ln|tan(y) + sec(y)|` with `y` in radians. The
/// projection diverges towards the poles, so latitudes beyond a threshold
/// are masked rather than mapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MercatorLatitudeTransform<D: Float> {
    thresh: D,
}

impl<D: Float> MercatorLatitudeTransform<D> {
    /// Creates the projection with the default 85 degree threshold.
    pub fn new() -> Self {
        Self {
            thresh: D::from(85.0).unwrap(),
        }
    }

    /// Creates the projection masking latitudes beyond `thresh` degrees.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MercatorThreshold`] when `thresh` reaches 90
    /// degrees, where the projection diverges.
    ///
    /// # Examples
    ///
    /// ```
    /// use skala::transform::{MercatorLatitudeTransform, Transform};
    ///
    /// let mercator = MercatorLatitudeTransform::new_with_threshold(80.0).unwrap();
    /// assert_eq!(mercator.forward(0.0), Some(0.0));
    /// assert_eq!(mercator.forward(84.0), None);
    /// ```
    pub fn new_with_threshold(thresh: D) -> Result<Self> {
        if thresh >= D::from(90.0).unwrap() {
            return Err(Error::MercatorThreshold {
                thresh: thresh.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self { thresh })
    }

    /// Largest latitude magnitude the projection maps, in degrees.
    pub fn thresh(&self) -> D {
        self.thresh
    }
}

impl<D: Float> Default for MercatorLatitudeTransform<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Float> Transform<D> for MercatorLatitudeTransform<D> {
    fn forward(&self, value: D) -> Option<D> {
        if !self.in_domain(value) {
            return None;
        }
        let rad = value.to_radians();
        Some((rad.tan() + rad.cos().recip()).abs().ln())
    }

    fn inverse(&self, value: D) -> Option<D> {
        Some(value.sinh().atan().to_degrees())
    }

    fn in_domain(&self, value: D) -> bool {
        value.abs() <= self.thresh
    }

    fn limit(&self, vmin: D, vmax: D) -> (D, D) {
        (vmin.max(-self.thresh), vmax.min(self.thresh))
    }
}

/// The sine of a latitude in degrees.
///
/// An equal-area vertical coordinate: bands of equal surface area on the
/// globe occupy equal lengths of the axis. Defined on the full `[-90, 90]`
/// range.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SineLatitudeTransform;

impl SineLatitudeTransform {
    pub fn new() -> Self {
        Self
    }
}

impl<D: Float> Transform<D> for SineLatitudeTransform {
    fn forward(&self, value: D) -> Option<D> {
        if !self.in_domain(value) {
            return None;
        }
        Some(value.to_radians().sin())
    }

    /// Clamps to `[-1, 1]` before inverting, so warped values nudged out of
    /// range by rounding still map back to a pole.
    fn inverse(&self, value: D) -> Option<D> {
        let one = D::one();
        Some(value.max(-one).min(one).asin().to_degrees())
    }

    fn in_domain(&self, value: D) -> bool {
        value.abs() <= D::from(90.0).unwrap()
    }

    fn limit(&self, vmin: D, vmax: D) -> (D, D) {
        let ninety = D::from(90.0).unwrap();
        (vmin.max(-ninety), vmax.min(ninety))
    }
}
