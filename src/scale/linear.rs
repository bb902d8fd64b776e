use num_traits::Float;

use super::{Scale, TickIter};
use crate::locate::{AutoLocator, Locator};

/// Scale with an affine mapping between the domain and `[0, 1]`.
///
/// The workhorse axis: a value's normalized position is simply its offset
/// into the domain divided by the span. `D` is the domain type and `N` the
/// normalized type, both typically `f32` or `f64`.
///
/// The endpoints are stored exactly as given, so a reversed axis is just
/// `new(100.0, 0.0)`. Nothing is clamped: a value outside the domain
/// normalizes below 0 or above 1 and the renderer decides what to do
/// with it.
///
/// # Examples
///
/// ```rust
/// use skala::{Scale, scale::Linear};
///
/// let scale = Linear::<f64, f64>::new(0.0, 100.0);
///
/// assert_eq!(scale.normalize(&50.0), 0.5);
/// assert_eq!(scale.denormalize(0.25), 25.0);
///
/// // Out-of-domain values pass through unclamped.
/// assert_eq!(scale.normalize(&150.0), 1.5);
/// assert_eq!(scale.normalize(&-50.0), -0.5);
/// ```
///
/// Pan shifts the domain by a fraction of its span; zoom shrinks it around
/// an anchor:
///
/// ```rust
/// use skala::{Scale, scale::Linear};
///
/// let mut scale = Linear::<f64, f64>::new(0.0, 100.0);
/// scale.pan(0.2);
/// assert_eq!(scale.domain(), (&20.0, &120.0));
///
/// let mut scale = Linear::<f64, f64>::new(0.0, 100.0);
/// scale.zoom(2.0, Some(0.25));
/// assert_eq!(scale.domain(), (&12.5, &62.5));
/// ```
///
/// A reversed domain flips the axis:
///
/// ```rust
/// use skala::{Scale, scale::Linear};
///
/// let scale = Linear::<f64, f64>::new(100.0, 0.0);
/// assert_eq!(scale.normalize(&100.0), 0.0);
/// assert_eq!(scale.normalize(&0.0), 1.0);
/// ```
///
/// The domain and normalized types can differ, e.g. an `f64` domain
/// rendered through `f32` screen math:
///
/// ```rust
/// use skala::{Scale, scale::Linear};
///
/// let scale = Linear::<f64, f32>::new(0.0, 100.0);
/// let normalized: f32 = scale.normalize(&50.0);
/// assert_eq!(normalized, 0.5f32);
/// ```
pub struct Linear<D, N = f64>
where
    D: Float,
    N: Float,
{
    min: D,
    max: D,
    locator: Box<dyn Locator<D>>,
    _phantom: std::marker::PhantomData<N>,
}

impl<D, N> Linear<D, N>
where
    D: Float + 'static,
    N: Float + 'static,
{
    /// Creates a linear scale over `[min, max]`.
    ///
    /// Ticks come from an [`AutoLocator`], which picks a round step for
    /// whatever range the domain currently covers.
    ///
    /// ```
    /// use skala::{Scale, scale::Linear};
    ///
    /// let scale = Linear::<f64, f64>::new(0.0, 100.0);
    /// assert_eq!(scale.domain(), (&0.0, &100.0));
    /// ```
    pub fn new(min: D, max: D) -> Self {
        Self::new_with_locator(min, max, AutoLocator::new())
    }

    /// Like [`Linear::new`] but with an explicit tick locator.
    ///
    /// ```
    /// use skala::{Scale, locate::MultipleLocator, scale::Linear};
    ///
    /// let scale = Linear::<f64, f64>::new_with_locator(0.0, 100.0, MultipleLocator::new(25.0));
    /// let values: Vec<f64> = scale.ticks().iter().map(|t| t.value).collect();
    /// assert_eq!(values, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    /// ```
    pub fn new_with_locator<L>(min: D, max: D, locator: L) -> Self
    where
        L: Locator<D> + 'static,
    {
        Self {
            min,
            max,
            locator: Box::new(locator),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Replaces the tick locator.
    ///
    /// ```
    /// use skala::{Scale, locate::FixedLocator, scale::Linear};
    ///
    /// let scale = Linear::<f64, f64>::new(0.0, 100.0)
    ///     .with_locator(FixedLocator::new(vec![5.0, 95.0]));
    /// assert_eq!(scale.ticks().len(), 2);
    /// ```
    pub fn with_locator<L>(mut self, locator: L) -> Self
    where
        L: Locator<D> + 'static,
    {
        self.locator = Box::new(locator);
        self
    }
}

impl<D, N> Scale for Linear<D, N>
where
    D: Float,
    N: Float,
{
    type Domain = D;
    type Normalized = N;

    fn domain(&self) -> (&D, &D) {
        (&self.min, &self.max)
    }

    fn set_domain(&mut self, min: D, max: D) {
        self.min = min;
        self.max = max;
    }

    fn normalize_opt(&self, value: &D) -> Option<N> {
        let span = self.max - self.min;
        if span == D::zero() {
            return Some(N::zero());
        }

        let offset_n: N = N::from(*value - self.min)?;
        let span_n: N = N::from(span)?;

        // No clamping: out-of-domain values land below 0 or above 1.
        Some(offset_n / span_n)
    }

    fn denormalize_opt(&self, t: N) -> Option<D> {
        let span = self.max - self.min;
        let span_n: N = N::from(span)?;
        let scaled = t * span_n;
        let scaled_d: D = D::from(scaled)?;
        Some(self.min + scaled_d)
    }

    fn pan_opt(&mut self, delta_norm: N) -> Option<()> {
        let span_n: N = N::from(self.max - self.min)?;
        let shift: D = D::from(span_n * delta_norm)?;

        self.min = self.min + shift;
        self.max = self.max + shift;
        Some(())
    }

    fn zoom_opt(&mut self, factor: N, anchor_norm: Option<N>) -> Option<()> {
        if factor <= N::zero() {
            return None;
        }

        let one = N::one();
        let half = one / (one + one);
        let anchor_norm = anchor_norm.unwrap_or(half);

        let anchor_val = self.denormalize_opt(anchor_norm)?;

        let span_n: N = N::from(self.max - self.min)?;
        let new_span_n = span_n / factor;

        // The anchor keeps its normalized position in the new span.
        let left_shift: D = D::from(new_span_n * anchor_norm)?;
        let right_shift: D = D::from(new_span_n * (one - anchor_norm))?;

        self.min = anchor_val - left_shift;
        self.max = anchor_val + right_shift;
        Some(())
    }

    fn tick_iter(&self) -> TickIter<D> {
        self.locator.tick_values(&self.min, &self.max)
    }

    fn extend_domain(&mut self, other_min: &D, other_max: &D) {
        if other_min < &self.min {
            self.min = *other_min;
        }
        if other_max > &self.max {
            self.max = *other_max;
        }
    }

    fn is_valid_domain_value(&self, _value: &D) -> bool {
        // Linear scale accepts any value in the numeric type.
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locate::{FixedLocator, MultipleLocator};

    #[test]
    fn test_linear_normalize_f64() {
        let scale = Linear::<f64, f64>::new(0.0, 100.0);

        assert_eq!(scale.normalize(&0.0), 0.0);
        assert_eq!(scale.normalize(&50.0), 0.5);
        assert_eq!(scale.normalize(&100.0), 1.0);
        assert_eq!(scale.normalize(&25.0), 0.25);
        assert_eq!(scale.normalize(&75.0), 0.75);
    }

    #[test]
    fn test_linear_normalize_f32() {
        let scale = Linear::<f32, f32>::new(0.0, 100.0);

        assert_eq!(scale.normalize(&0.0), 0.0);
        assert_eq!(scale.normalize(&50.0), 0.5);
        assert_eq!(scale.normalize(&100.0), 1.0);
    }

    #[test]
    fn test_linear_denormalize() {
        let scale = Linear::<f64, f64>::new(0.0, 100.0);

        assert_eq!(scale.denormalize(0.0), 0.0);
        assert_eq!(scale.denormalize(0.5), 50.0);
        assert_eq!(scale.denormalize(1.0), 100.0);
    }

    #[test]
    fn test_linear_reversed() {
        // Endpoints given high-to-low flip the axis.
        let scale = Linear::<f64, f64>::new(100.0, 0.0);

        assert_eq!(scale.normalize(&100.0), 0.0);
        assert_eq!(scale.normalize(&50.0), 0.5);
        assert_eq!(scale.normalize(&0.0), 1.0);
    }

    #[test]
    fn test_linear_pan() {
        let mut scale = Linear::<f64, f64>::new(0.0, 100.0);

        // 10% of a 100-unit span is 10 units.
        scale.pan(0.1);

        let (min, max) = scale.domain();
        assert_eq!(*min, 10.0);
        assert_eq!(*max, 110.0);
    }

    #[test]
    fn test_linear_zoom_in() {
        let mut scale = Linear::<f64, f64>::new(0.0, 100.0);

        scale.zoom(2.0, Some(0.5));

        let (min, max) = scale.domain();
        assert_eq!(*min, 25.0);
        assert_eq!(*max, 75.0);
    }

    #[test]
    fn test_linear_zoom_out() {
        let mut scale = Linear::<f64, f64>::new(0.0, 100.0);

        // A factor below 1 widens the domain.
        scale.zoom(0.5, Some(0.5));

        let (min, max) = scale.domain();
        assert_eq!(*min, -50.0);
        assert_eq!(*max, 150.0);
    }

    #[test]
    fn test_linear_ticks_basic() {
        let scale = Linear::<f64, f64>::new(0.0, 100.0);
        let ticks = scale.ticks();

        assert!(!ticks.is_empty());

        // The round domain endpoints show up as major ticks.
        let major_values: Vec<_> = ticks
            .iter()
            .filter(|t| t.level == 0)
            .map(|t| t.value)
            .collect();
        assert!(major_values.contains(&0.0));
        assert!(major_values.contains(&100.0));
    }

    #[test]
    fn test_linear_ticks_f32() {
        let scale = Linear::<f32, f32>::new(0.0, 100.0);
        let ticks = scale.ticks();

        assert!(!ticks.is_empty());
        for pair in ticks.windows(2) {
            assert!(pair[0].value <= pair[1].value);
        }
    }

    #[test]
    fn test_linear_ticks_remain_within_domain() {
        let scale = Linear::<f64, f64>::new(13.2, 47.8);
        let (min, max) = scale.domain();

        for tick in scale.ticks() {
            assert!(
                tick.value >= *min && tick.value <= *max,
                "tick {} outside domain [{}, {}]",
                tick.value,
                min,
                max
            );
        }
    }

    #[test]
    fn test_linear_ticks_do_not_overlap_levels() {
        let scale = Linear::<f64, f64>::new(13.2, 47.8);
        let mut seen: Vec<(f64, u8)> = Vec::new();

        for tick in scale.ticks() {
            if let Some((_, prev_level)) = seen.iter().find(|(v, _)| *v == tick.value) {
                assert_eq!(
                    *prev_level, tick.level,
                    "tick value {} emitted at both level {} and {}",
                    tick.value, prev_level, tick.level
                );
            } else {
                seen.push((tick.value, tick.level));
            }
        }
    }

    #[test]
    fn test_linear_custom_locator() {
        let scale = Linear::<f64, f64>::new_with_locator(0.0, 10.0, MultipleLocator::new(2.5));
        let values: Vec<f64> = scale.ticks().iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
    }

    #[test]
    fn test_linear_with_locator() {
        let scale =
            Linear::<f64, f64>::new(0.0, 100.0).with_locator(FixedLocator::new(vec![5.0, 95.0]));

        let values: Vec<f64> = scale.ticks().iter().map(|t| t.value).collect();
        assert_eq!(values, vec![5.0, 95.0]);
    }

    #[test]
    fn test_linear_extend_domain() {
        let mut scale = Linear::<f64, f64>::new(10.0, 20.0);

        scale.extend_domain(&0.0, &30.0);

        let (min, max) = scale.domain();
        assert_eq!(*min, 0.0);
        assert_eq!(*max, 30.0);
    }

    #[test]
    fn test_linear_mixed_types() {
        // f64 domain with an f32 normalized side.
        let scale = Linear::<f64, f32>::new(0.0, 100.0);

        let normalized: f32 = scale.normalize(&50.0);
        assert_eq!(normalized, 0.5f32);

        let denormalized: f64 = scale.denormalize(0.5f32);
        assert_eq!(denormalized, 50.0);
    }
}
