//! Scale specifications and the dispatch that builds a live scale.
//!
//! [`ScaleSpec`] is a plain value describing which scale to use and with
//! which parameters, suitable for configuration files and chart state. The
//! [`scale`] function turns one into a boxed [`Scale`] over `f64`.

use tracing::debug;

use super::{Cutoff, Inverse, Linear, Logarithmic, MercatorLatitude, Scale, SineLatitude};
use crate::error::{Error, Result};

const SCALE_NAMES: &str = "linear, log, sine, mercator, inverse";

/// Description of a scale as a plain value.
///
/// Construct one directly for full control over the parameters, or through
/// [`ScaleSpec::parse`] from one of the recognized names. With the `serde`
/// feature the spec round-trips through configuration formats.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScaleSpec {
    /// Evenly spread domain, see [`Linear`].
    #[default]
    Linear,
    /// Ratio-spread domain, see [`Logarithmic`].
    Log { base: f64 },
    /// Equal-area latitude axis, see [`SineLatitude`].
    Sine,
    /// Mercator-projected latitude axis, see [`MercatorLatitude`].
    Mercator { thresh: f64 },
    /// Reciprocal axis, see [`Inverse`].
    Inverse { eps: f64 },
    /// Axis with an interior interval compressed or removed, see
    /// [`Cutoff`]. `accel` of `None` removes the interval entirely.
    Cutoff {
        lower: f64,
        upper: f64,
        accel: Option<f64>,
    },
}

impl ScaleSpec {
    /// Resolves a scale name to a spec with default parameters.
    ///
    /// Recognized names are `linear`, `log` (base 10), `sine`, `mercator`
    /// (85 degree threshold) and `inverse` (epsilon `1e-2`). The cutoff
    /// scale has no name because it cannot work without explicit bounds;
    /// construct [`ScaleSpec::Cutoff`] directly instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownScale`] for any other name; the message
    /// lists the valid options.
    ///
    /// # Examples
    ///
    /// ```
    /// use skala::scale::ScaleSpec;
    ///
    /// assert_eq!(ScaleSpec::parse("log").unwrap(), ScaleSpec::Log { base: 10.0 });
    /// assert!(ScaleSpec::parse("sqrt").is_err());
    /// ```
    pub fn parse(name: &str) -> Result<Self> {
        let spec = match name {
            "linear" => Self::Linear,
            "log" => Self::Log { base: 10.0 },
            "sine" => Self::Sine,
            "mercator" => Self::Mercator { thresh: 85.0 },
            "inverse" => Self::Inverse { eps: 1e-2 },
            _ => {
                return Err(Error::UnknownScale {
                    name: name.to_owned(),
                    options: SCALE_NAMES.to_owned(),
                })
            }
        };
        debug!(scale = %name, "resolved scale name");
        Ok(spec)
    }
}

/// Builds the scale a spec describes, with the given domain.
///
/// The returned scale works on `f64` and carries its kind's default locator
/// and formatter. The domain is clamped to whatever the scale can represent,
/// exactly as the concrete constructors do.
///
/// # Errors
///
/// Returns the constructor's validation error when the spec's parameters
/// cannot describe a working scale: mis-ordered cutoff bounds, a
/// non-positive cutoff acceleration, a Mercator threshold at the pole, or a
/// non-positive reciprocal epsilon.
///
/// # Examples
///
/// ```
/// use skala::{Scale, scale::{scale, ScaleSpec}};
///
/// let spec = ScaleSpec::parse("linear").unwrap();
/// let axis = scale(spec, 0.0, 10.0).unwrap();
/// assert_eq!(axis.normalize(&2.5), 0.25);
/// ```
pub fn scale(
    spec: ScaleSpec,
    min: f64,
    max: f64,
) -> Result<Box<dyn Scale<Domain = f64, Normalized = f64>>> {
    let built: Box<dyn Scale<Domain = f64, Normalized = f64>> = match spec {
        ScaleSpec::Linear => Box::new(Linear::<f64>::new(min, max)),
        ScaleSpec::Log { base } => Box::new(Logarithmic::<f64>::new(base, min, max)),
        ScaleSpec::Sine => Box::new(SineLatitude::<f64>::new(min, max)),
        ScaleSpec::Mercator { thresh } => Box::new(MercatorLatitude::<f64>::new_with_threshold(
            min, max, thresh,
        )?),
        ScaleSpec::Inverse { eps } => Box::new(Inverse::<f64>::new_with_eps(min, max, eps)?),
        ScaleSpec::Cutoff {
            lower,
            upper,
            accel,
        } => match accel {
            Some(accel) => Box::new(Cutoff::<f64>::new_with_accel(min, max, lower, upper, accel)?),
            None => Box::new(Cutoff::<f64>::new(min, max, lower, upper)?),
        },
    };
    Ok(built)
}
