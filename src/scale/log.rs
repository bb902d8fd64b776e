use num_traits::Float;

use super::{Scale, TickIter};
use crate::format::{Formatter, LogFormatter};
use crate::locate::{Locator, LogLocator};

/// Scale whose normalized position grows with the logarithm of the value.
///
/// Equal steps in normalized space correspond to equal ratios in the
/// domain, so 1 → 10 covers the same distance as 10 → 100. That makes this
/// the scale of choice for data spread over several orders of magnitude.
/// The base is configurable (usually 10, sometimes e) and feeds both the
/// mapping and the default [`LogLocator`].
///
/// `D` is the domain type and `N` the normalized type, both typically
/// `f32` or `f64`.
///
/// Only values above zero have a logarithm. Zero and negative inputs are
/// masked: `is_valid_domain_value` reports `false` for them and
/// `normalize_opt` returns `None`.
///
/// # Examples
///
/// ```rust
/// use skala::{Scale, scale::Logarithmic};
///
/// let scale = Logarithmic::<f64, f64>::new(10.0, 1.0, 1000.0);
///
/// assert_eq!(scale.normalize(&1.0), 0.0);
/// assert_eq!(scale.normalize(&1000.0), 1.0);
///
/// // 10 = 10^1 sits a third of the way between 10^0 and 10^3.
/// assert!((scale.normalize(&10.0) - 0.333).abs() < 0.01);
/// assert!((scale.normalize(&100.0) - 0.666).abs() < 0.01);
/// ```
///
/// Pan and zoom act on the exponents, so they keep ratios rather than
/// differences:
///
/// ```rust
/// use skala::{Scale, scale::Logarithmic};
///
/// let mut scale = Logarithmic::<f64, f64>::new(10.0, 1.0, 100.0);
/// scale.pan(0.1);
/// let (min, max) = scale.domain();
/// assert!((max / min - 100.0).abs() < 0.1);
///
/// // Zooming at the center keeps the geometric center in place.
/// let mut scale = Logarithmic::<f64, f64>::new(10.0, 1.0, 100.0);
/// scale.zoom(2.0, Some(0.5));
/// let (min, max) = scale.domain();
/// assert!(((min * max).sqrt() - 10.0).abs() < 0.1);
/// ```
///
/// The default locator puts major ticks on powers of the base and minor
/// ticks on the integer multiples in between:
///
/// ```rust
/// use skala::{Scale, scale::Logarithmic};
///
/// let scale = Logarithmic::<f64, f64>::new(10.0, 1.0, 1000.0);
/// let majors: Vec<_> = scale
///     .ticks()
///     .iter()
///     .filter(|t| t.level == 0)
///     .map(|t| t.value)
///     .collect();
/// assert_eq!(majors, vec![1.0, 10.0, 100.0, 1000.0]);
/// ```
///
/// Masking of non-positive inputs:
///
/// ```rust
/// use skala::{Scale, scale::Logarithmic};
///
/// let scale = Logarithmic::<f64, f64>::new(10.0, 1.0, 100.0);
/// assert!(scale.is_valid_domain_value(&0.001));
/// assert!(!scale.is_valid_domain_value(&0.0));
/// assert_eq!(scale.normalize_opt(&-5.0), None);
/// ```
pub struct Logarithmic<D, N = f64>
where
    D: Float,
    N: Float,
{
    base: D,
    min: D,
    max: D,
    locator: Box<dyn Locator<D>>,
    _phantom: std::marker::PhantomData<N>,
}

impl<D, N> Logarithmic<D, N>
where
    D: Float + 'static,
    N: Float + 'static,
{
    /// Creates a logarithmic scale over `[min, max]` with the given base.
    ///
    /// Ticks come from a [`LogLocator`] with the same base: majors on
    /// powers of the base, minors in between.
    ///
    /// Both endpoints must be positive.
    ///
    /// ```
    /// use skala::{Scale, scale::Logarithmic};
    ///
    /// let scale = Logarithmic::<f64, f64>::new(10.0, 1.0, 1000.0);
    /// assert_eq!(scale.domain(), (&1.0, &1000.0));
    ///
    /// // Base e works the same way.
    /// let e = std::f64::consts::E;
    /// let scale = Logarithmic::<f64, f64>::new(e, 1.0, 100.0);
    /// ```
    pub fn new(base: D, min: D, max: D) -> Self {
        Self::new_with_locator(base, min, max, LogLocator::new(base))
    }

    /// Like [`Logarithmic::new`] but with an explicit tick locator.
    ///
    /// ```
    /// use skala::{Scale, locate::NullLocator, scale::Logarithmic};
    ///
    /// let scale = Logarithmic::<f64, f64>::new_with_locator(10.0, 1.0, 1000.0, NullLocator);
    /// assert!(scale.ticks().is_empty());
    /// ```
    pub fn new_with_locator<L>(base: D, min: D, max: D, locator: L) -> Self
    where
        L: Locator<D> + 'static,
    {
        Self {
            base,
            min,
            max,
            locator: Box::new(locator),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Replaces the tick locator.
    pub fn with_locator<L>(mut self, locator: L) -> Self
    where
        L: Locator<D> + 'static,
    {
        self.locator = Box::new(locator);
        self
    }

    /// The logarithm base.
    pub fn base(&self) -> D {
        self.base
    }
}

impl<D, N> Scale for Logarithmic<D, N>
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
        let (min, max) = self.limit_domain(min, max);
        self.min = min;
        self.max = max;
    }

    fn normalize_opt(&self, value: &D) -> Option<N> {
        // Non-positive values have no logarithm; mask them.
        if !self.is_valid_domain_value(value) {
            return None;
        }

        let ln_min = self.min.ln();
        let ln_max = self.max.ln();
        let span_d = ln_max - ln_min;
        if span_d == D::zero() {
            return Some(N::zero());
        }

        let offset_d = value.ln() - ln_min;

        let offset_n: N = N::from(offset_d)?;
        let span_n: N = N::from(span_d)?;

        Some(offset_n / span_n)
    }

    fn denormalize_opt(&self, t: N) -> Option<D> {
        let ln_min = self.min.ln();
        let ln_max = self.max.ln();
        let span_d = ln_max - ln_min;
        let span_n: N = N::from(span_d)?;

        let scaled_n = t * span_n;
        let scaled_d: D = D::from(scaled_n)?;
        let ln_v = ln_min + scaled_d;

        Some(ln_v.exp())
    }

    fn pan_opt(&mut self, delta_norm: N) -> Option<()> {
        // Shift min and max by the same amount in log space so the ratio
        // between them survives the pan.
        let ln_min = self.min.ln();
        let ln_max = self.max.ln();

        let ln_span_n: N = N::from(ln_max - ln_min)?;
        let ln_shift: D = D::from(ln_span_n * delta_norm)?;

        self.min = (ln_min + ln_shift).exp();
        self.max = (ln_max + ln_shift).exp();
        Some(())
    }

    fn zoom_opt(&mut self, factor: N, anchor_norm: Option<N>) -> Option<()> {
        if factor <= N::zero() {
            return None;
        }

        let one = N::one();
        let half = one / (one + one);
        let anchor_norm = anchor_norm.unwrap_or(half);

        // Shrink the span in log space around the anchor exponent.
        let ln_min = self.min.ln();
        let ln_max = self.max.ln();

        let ln_span_n: N = N::from(ln_max - ln_min)?;
        let new_ln_span_n = ln_span_n / factor;

        let anchor_offset: D = D::from(ln_span_n * anchor_norm)?;
        let ln_anchor = ln_min + anchor_offset;

        // The anchor keeps its normalized position in the new span.
        let left_shift: D = D::from(new_ln_span_n * anchor_norm)?;
        let right_shift: D = D::from(new_ln_span_n * (one - anchor_norm))?;

        self.min = (ln_anchor - left_shift).exp();
        self.max = (ln_anchor + right_shift).exp();
        Some(())
    }

    fn tick_iter(&self) -> TickIter<D> {
        self.locator.tick_values(&self.min, &self.max)
    }

    fn extend_domain(&mut self, other_min: &D, other_max: &D) {
        // Only extend with valid (positive) values.
        if self.is_valid_domain_value(other_min) && other_min < &self.min {
            self.min = *other_min;
        }
        if self.is_valid_domain_value(other_max) && other_max > &self.max {
            self.max = *other_max;
        }
    }

    fn is_valid_domain_value(&self, value: &D) -> bool {
        // For logarithmic, only values > 0 are valid.
        *value > D::zero()
    }

    fn limit_domain(&self, vmin: D, vmax: D) -> (D, D) {
        // A log domain cannot include zero; snap non-positive endpoints to
        // the smallest positive value.
        let floor = D::min_positive_value();
        (
            if vmin > D::zero() { vmin } else { floor },
            if vmax > D::zero() { vmax } else { floor },
        )
    }

    fn default_formatter(&self) -> Box<dyn Formatter> {
        Box::new(LogFormatter::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locate::FixedLocator;

    #[test]
    fn test_log_normalize_base10() {
        let scale = Logarithmic::<f64, f64>::new(10.0, 1.0, 100.0);

        assert_eq!(scale.normalize(&1.0), 0.0);
        assert_eq!(scale.normalize(&100.0), 1.0);

        // 10^1 is halfway between 10^0 and 10^2.
        let mid = scale.normalize(&10.0);
        assert!((mid - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_log_normalize_base_e() {
        let scale = Logarithmic::<f64, f64>::new(std::f64::consts::E, 1.0, std::f64::consts::E);

        assert_eq!(scale.normalize(&1.0), 0.0);
        assert!((scale.normalize(&std::f64::consts::E) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_log_denormalize() {
        let scale = Logarithmic::<f64, f64>::new(10.0, 1.0, 100.0);

        assert!((scale.denormalize(0.0) - 1.0).abs() < 1e-10);
        assert!((scale.denormalize(0.5) - 10.0).abs() < 1e-10);
        assert!((scale.denormalize(1.0) - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_log_normalize_f32() {
        let scale = Logarithmic::<f32, f32>::new(10.0, 1.0, 100.0);

        assert_eq!(scale.normalize(&1.0), 0.0);
        assert_eq!(scale.normalize(&100.0), 1.0);

        let mid = scale.normalize(&10.0);
        assert!((mid - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_log_masks_invalid_values() {
        let scale = Logarithmic::<f64, f64>::new(10.0, 1.0, 100.0);

        // Zero and negative values have no logarithm
        assert_eq!(scale.normalize_opt(&0.0), None);
        assert_eq!(scale.normalize_opt(&-10.0), None);
    }

    #[test]
    fn test_log_is_valid_domain_value() {
        let scale = Logarithmic::<f64, f64>::new(10.0, 1.0, 100.0);

        assert!(scale.is_valid_domain_value(&1.0));
        assert!(scale.is_valid_domain_value(&10.0));
        assert!(!scale.is_valid_domain_value(&0.0));
        assert!(!scale.is_valid_domain_value(&-5.0));
    }

    #[test]
    fn test_log_pan() {
        let mut scale = Logarithmic::<f64, f64>::new(10.0, 1.0, 100.0);

        // Log span is 2 decades, so a 10% pan shifts by 0.2 decades:
        // [10^0.2, 10^2.2] ≈ [1.585, 158.49].
        scale.pan(0.1);

        let (min, max) = scale.domain();
        assert!((*min - 1.585).abs() < 0.01);
        assert!((*max - 158.49).abs() < 0.01);

        // The min/max ratio survives the pan.
        assert!((*max / *min - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_log_zoom_in() {
        let mut scale = Logarithmic::<f64, f64>::new(10.0, 1.0, 100.0);

        // Halving 2 decades around the center anchor (10^1) gives
        // [10^0.5, 10^1.5].
        scale.zoom(2.0, Some(0.5));

        let (min, max) = scale.domain();
        assert!((*min - 3.162).abs() < 0.01);
        assert!((*max - 31.623).abs() < 0.01);

        // Geometric center stays put; the ratio shrinks to its square root.
        assert!(((*min * *max).sqrt() - 10.0).abs() < 0.01);
        assert!((*max / *min - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_log_zoom_out() {
        let mut scale = Logarithmic::<f64, f64>::new(10.0, 10.0, 100.0);

        // Doubling 1 decade around 10^1.5 gives [10^0.5, 10^2.5].
        scale.zoom(0.5, Some(0.5));

        let (min, max) = scale.domain();
        assert!((*min - 3.162).abs() < 0.01);
        assert!((*max - 316.23).abs() < 0.01);

        // Geometric center stays put; the ratio squares.
        let original_center = (10.0 * 100.0_f64).sqrt();
        assert!(((*min * *max).sqrt() - original_center).abs() < 0.1);
        assert!((*max / *min - 100.0).abs() < 0.1);
    }

    #[test]
    fn test_log_ticks_base10() {
        let scale = Logarithmic::<f64, f64>::new(10.0, 1.0, 1000.0);
        let major_values: Vec<_> = scale
            .ticks()
            .iter()
            .filter(|t| t.level == 0)
            .map(|t| t.value)
            .collect();

        for expected in [1.0, 10.0, 100.0, 1000.0] {
            assert!(
                major_values.iter().any(|&v| (v - expected).abs() < 1e-6),
                "no major tick near {expected}"
            );
        }
    }

    #[test]
    fn test_log_ticks_with_minors() {
        let scale = Logarithmic::<f64, f64>::new(10.0, 1.0, 100.0);
        let ticks = scale.ticks();

        assert!(ticks.iter().any(|t| t.level == 0));

        // Minors land on integer multiples of each decade.
        let minor_values: Vec<_> = ticks
            .iter()
            .filter(|t| t.level == 1)
            .map(|t| t.value)
            .collect();
        assert!(!minor_values.is_empty());
        assert!(minor_values.iter().any(|&v| (v - 2.0).abs() < 1e-6));
        assert!(minor_values.iter().any(|&v| (v - 20.0).abs() < 1e-6));
    }

    #[test]
    fn test_log_ticks_sorted() {
        let scale = Logarithmic::<f64, f64>::new(10.0, 1.0, 100.0);
        let ticks = scale.ticks();

        for pair in ticks.windows(2) {
            assert!(pair[0].value <= pair[1].value);
        }
    }

    #[test]
    fn test_log_ticks_reversed_domain() {
        let scale = Logarithmic::<f64, f64>::new(10.0, 100.0, 1.0);
        let ticks = scale.ticks();

        assert!(!ticks.is_empty());

        let majors: Vec<_> = ticks.iter().filter(|t| t.level == 0).collect();
        assert!(majors.iter().any(|t| (t.value - 1.0).abs() < 1e-6));
        assert!(majors.iter().any(|t| (t.value - 10.0).abs() < 1e-6));
        assert!(majors.iter().any(|t| (t.value - 100.0).abs() < 1e-6));
    }

    #[test]
    fn test_log_custom_locator() {
        let scale = Logarithmic::<f64, f64>::new_with_locator(
            10.0,
            1.0,
            100.0,
            FixedLocator::new(vec![1.0, 100.0]),
        );

        let ticks = scale.ticks();
        assert_eq!(ticks.len(), 2);
        assert!((ticks[0].value - 1.0).abs() < 1e-6);
        assert!((ticks[1].value - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_log_extend_domain() {
        let mut scale = Logarithmic::<f64, f64>::new(10.0, 10.0, 100.0);

        scale.extend_domain(&1.0, &1000.0);

        assert_eq!(scale.domain(), (&1.0, &1000.0));
    }

    #[test]
    fn test_log_extend_domain_invalid() {
        let mut scale = Logarithmic::<f64, f64>::new(10.0, 10.0, 100.0);

        // The non-positive end is ignored, the valid end still extends.
        scale.extend_domain(&0.0, &1000.0);

        assert_eq!(scale.domain(), (&10.0, &1000.0));
    }

    #[test]
    fn test_log_limit_domain() {
        let scale = Logarithmic::<f64, f64>::new(10.0, 1.0, 100.0);

        let (lo, hi) = scale.limit_domain(-5.0, 1000.0);
        assert_eq!(lo, f64::MIN_POSITIVE);
        assert_eq!(hi, 1000.0);

        // Valid ranges pass through unchanged
        assert_eq!(scale.limit_domain(0.1, 10.0), (0.1, 10.0));
    }

    #[test]
    fn test_log_set_domain_clamps_to_positive() {
        let mut scale = Logarithmic::<f64, f64>::new(10.0, 1.0, 100.0);

        scale.set_domain(-2.0, 50.0);

        let (min, max) = scale.domain();
        assert_eq!(*min, f64::MIN_POSITIVE);
        assert_eq!(*max, 50.0);
    }

    #[test]
    fn test_log_default_formatter() {
        let scale = Logarithmic::<f64, f64>::new(10.0, 1.0, 1e6);
        let fmt = scale.default_formatter();

        assert_eq!(fmt.format(100.0, 0), "100");
        assert_eq!(fmt.format(100_000.0, 0), "1e5");
    }

    #[test]
    fn test_log_mixed_types() {
        // f64 domain with an f32 normalized side.
        let scale = Logarithmic::<f64, f32>::new(10.0, 1.0, 100.0);

        let normalized: f32 = scale.normalize(&10.0);
        assert!((normalized - 0.5).abs() < 1e-6);

        let denormalized: f64 = scale.denormalize(0.5f32);
        assert!((denormalized - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_log_ticks_remain_within_domain() {
        let scale = Logarithmic::<f64, f64>::new(10.0, 1.3, 347.0);
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
    fn test_log_ticks_do_not_overlap_levels() {
        let scale = Logarithmic::<f64, f64>::new(10.0, 1.3, 347.0);
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
}
