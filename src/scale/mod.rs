//! Scales map domain values to normalized `[0, 1]` space and back.
//!
//! A [`Scale`] owns a domain `[min, max]` and defines how values inside it
//! spread across the unit interval: [`Linear`] evenly, [`Logarithmic`] by
//! ratio, and [`Warped`] through an arbitrary invertible
//! [`Transform`](crate::transform::Transform). Scales also know how to pan
//! and zoom their domain and which ticks and labels suit it, so an axis can
//! be driven entirely through this trait.
//!
//! Normalized space is deliberately unclamped. Values outside the domain map
//! below 0 or above 1, which lets a renderer decide whether to cull, clip,
//! or draw out-of-range data.

pub mod linear;
pub mod log;
pub mod spec;
pub mod tick_iter;
pub mod util;
pub mod warped;

pub use linear::Linear;
pub use log::Logarithmic;
pub use spec::{scale, ScaleSpec};
pub use tick_iter::TickIter;
pub use warped::{Cutoff, Inverse, MercatorLatitude, SineLatitude, Warped};

use num_traits::Float;

use crate::format::{Formatter, ScalarFormatter};

/// A single tick mark on an axis.
///
/// `level` 0 is a major tick; higher levels are progressively finer
/// subdivisions. Renderers typically draw level 0 with labels and level 1
/// as shorter unlabeled marks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick<D> {
    /// Position of the tick in domain space.
    pub value: D,
    /// Subdivision depth, 0 for major ticks.
    pub level: u8,
}

/// Maps between a domain `[min, max]` and normalized `[0, 1]` space.
///
/// The fallible `_opt` methods return `None` when a value cannot be mapped,
/// either because a numeric conversion between the domain and normalized
/// types fails or because the scale masks the value (a non-positive input
/// on a logarithmic scale, a latitude beyond the Mercator threshold). Each
/// has a panicking convenience wrapper for callers that know their values
/// are representable.
///
/// # Examples
///
/// ```
/// use skala::{Scale, scale::Linear};
///
/// let scale: Linear<f64> = Linear::new(0.0, 100.0);
/// assert_eq!(scale.normalize(&25.0), 0.25);
/// assert_eq!(scale.denormalize(0.5), 50.0);
/// ```
pub trait Scale {
    /// Numeric type of domain values.
    type Domain: Float;
    /// Numeric type of normalized values.
    type Normalized: Float;

    /// Current domain as `(min, max)`.
    fn domain(&self) -> (&Self::Domain, &Self::Domain);

    /// Replaces the domain.
    ///
    /// Scales with a restricted domain clamp the new range to what they can
    /// represent, see [`Scale::limit_domain`].
    fn set_domain(&mut self, min: Self::Domain, max: Self::Domain);

    /// Maps a domain value to normalized space.
    ///
    /// Out-of-domain values map below 0 or above 1 rather than clamping.
    /// Returns `None` when the value is masked or a conversion fails.
    fn normalize_opt(&self, value: &Self::Domain) -> Option<Self::Normalized>;

    /// Maps a normalized value back to domain space.
    fn denormalize_opt(&self, t: Self::Normalized) -> Option<Self::Domain>;

    /// Shifts the domain by `delta_norm` of its current extent.
    fn pan_opt(&mut self, delta_norm: Self::Normalized) -> Option<()>;

    /// Scales the domain extent by `1 / factor` around an anchor.
    ///
    /// The anchor is a normalized position that stays fixed while the rest
    /// of the domain stretches or shrinks; `None` means the center. A factor
    /// above 1 zooms in. Returns `None` for non-positive factors.
    fn zoom_opt(
        &mut self,
        factor: Self::Normalized,
        anchor_norm: Option<Self::Normalized>,
    ) -> Option<()>;

    /// Iterator over the ticks for the current domain.
    fn tick_iter(&self) -> TickIter<Self::Domain>;

    /// Grows the domain to include `[other_min, other_max]`.
    fn extend_domain(&mut self, other_min: &Self::Domain, other_max: &Self::Domain);

    /// Whether the scale can map `value` at all.
    fn is_valid_domain_value(&self, value: &Self::Domain) -> bool;

    /// Clamps a proposed domain to the range the scale can represent.
    ///
    /// The default accepts any range unchanged.
    fn limit_domain(
        &self,
        vmin: Self::Domain,
        vmax: Self::Domain,
    ) -> (Self::Domain, Self::Domain) {
        (vmin, vmax)
    }

    /// Formatter suited to this scale's ticks.
    ///
    /// The default formats plain numbers; scales with specialised labels
    /// (degrees, reciprocals) override it.
    fn default_formatter(&self) -> Box<dyn Formatter> {
        Box::new(ScalarFormatter::default())
    }

    /// Maps a domain value to normalized space.
    ///
    /// # Panics
    ///
    /// Panics when the value is masked by the scale or a numeric conversion
    /// fails. Use [`Scale::normalize_opt`] to handle those cases.
    fn normalize(&self, value: &Self::Domain) -> Self::Normalized {
        self.normalize_opt(value).unwrap()
    }

    /// Maps a normalized value back to domain space.
    ///
    /// # Panics
    ///
    /// Panics when the value cannot be mapped. Use
    /// [`Scale::denormalize_opt`] to handle that case.
    fn denormalize(&self, t: Self::Normalized) -> Self::Domain {
        self.denormalize_opt(t).unwrap()
    }

    /// Shifts the domain by `delta_norm` of its current extent.
    ///
    /// # Panics
    ///
    /// Panics when the shift cannot be computed. Use [`Scale::pan_opt`] to
    /// handle that case.
    fn pan(&mut self, delta_norm: Self::Normalized) {
        self.pan_opt(delta_norm).unwrap()
    }

    /// Scales the domain extent by `1 / factor` around an anchor.
    ///
    /// # Panics
    ///
    /// Panics for non-positive factors and when the new domain cannot be
    /// computed. Use [`Scale::zoom_opt`] to handle those cases.
    fn zoom(&mut self, factor: Self::Normalized, anchor_norm: Option<Self::Normalized>) {
        self.zoom_opt(factor, anchor_norm).unwrap()
    }

    /// Collects [`Scale::tick_iter`] into a vector.
    fn ticks(&self) -> Vec<Tick<Self::Domain>> {
        self.tick_iter().collect()
    }
}
