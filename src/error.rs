//! Error types for scale, locator, and formatter construction.
//!
//! Every failure in this crate is a constructor or dispatch failure: a
//! parameter that cannot describe a working scale, or a name that does not
//! resolve. Errors are raised synchronously at construction time; the
//! mapping and formatting paths themselves never fail.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing scales, locators, or formatters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A Mercator latitude threshold at or beyond the pole. The projection
    /// diverges at 90 degrees, so the threshold must stay strictly below it.
    #[error("mercator threshold must be below 90 degrees, got {thresh}")]
    MercatorThreshold { thresh: f64 },

    /// Cutoff bounds out of order. The transform needs a non-empty interval
    /// to compress or collapse.
    #[error("cutoff bounds must satisfy lower < upper, got lower {lower} and upper {upper}")]
    CutoffBounds { lower: f64, upper: f64 },

    /// A non-positive cutoff acceleration. Values above 1 compress the
    /// interval, values below 1 stretch it, but zero and negatives describe
    /// no mapping at all.
    #[error("cutoff acceleration must be positive, got {accel}")]
    CutoffAcceleration { accel: f64 },

    /// A non-positive substitute epsilon for the reciprocal transform.
    #[error("reciprocal epsilon must be positive, got {eps}")]
    ReciprocalEpsilon { eps: f64 },

    /// A scale name that is not in the registry.
    #[error("unknown scale \"{name}\": options are {options}")]
    UnknownScale { name: String, options: String },

    /// A locator name that is not in the registry.
    #[error("unknown locator \"{name}\": options are {options}")]
    UnknownLocator { name: String, options: String },

    /// A formatter name that is not in the registry.
    #[error("unknown formatter \"{name}\": options are {options}")]
    UnknownFormatter { name: String, options: String },
}
