//! Invertible warps applied to axis domain values.
//!
//! A [`Transform`] maps domain values into a warped space where the axis
//! behaves linearly, and back again. The [`crate::scale::Warped`] scale
//! normalizes by passing the domain endpoints and the value through
//! [`Transform::forward`] and interpolating between the warped endpoints.
//!
//! Transforms are partial: [`Transform::forward`] returns `None` for values
//! the warp is undefined on (for example latitudes beyond the Mercator
//! threshold). Masked values stay unmapped rather than being clamped, so a
//! caller can distinguish "off the axis" from "at the edge".

mod cutoff;
mod latitude;
mod reciprocal;

pub use cutoff::CutoffTransform;
pub use latitude::{MercatorLatitudeTransform, SineLatitudeTransform};
pub use reciprocal::InverseTransform;

use num_traits::Float;

/// An invertible mapping between domain space and warped space.
///
/// Implementations operate elementwise on scalar values. `forward` and
/// `inverse` are inverses of each other wherever both are defined: for any
/// `v` with `forward(v) == Some(w)` outside a collapsed or masked region,
/// `inverse(w)` recovers `v` up to floating point error.
pub trait Transform<D: Float> {
    /// Maps a domain value into warped space.
    ///
    /// Returns `None` when the value lies outside the region the warp is
    /// defined on.
    fn forward(&self, value: D) -> Option<D>;

    /// Maps a warped value back into domain space.
    ///
    /// Returns `None` when the warped value has no preimage.
    fn inverse(&self, value: D) -> Option<D>;

    /// Whether `forward` is defined at `value`.
    fn in_domain(&self, _value: D) -> bool {
        true
    }

    /// Clamps a domain range to the region the warp is defined on.
    ///
    /// Scales call this before normalizing so that pan and zoom cannot
    /// drag the visible range into masked territory. The default keeps
    /// the range unchanged.
    fn limit(&self, vmin: D, vmax: D) -> (D, D) {
        (vmin, vmax)
    }

    /// Whether the transform treats each coordinate independently.
    fn is_separable(&self) -> bool {
        true
    }

    /// Whether the transform has a usable inverse.
    fn has_inverse(&self) -> bool {
        true
    }
}
