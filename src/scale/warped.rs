use num_traits::Float;

use super::{Scale, TickIter};
use crate::error::Result;
use crate::format::{CoordinateFormatter, Formatter, ScalarFormatter, SciFormatter};
use crate::locate::{AutoLocator, FixedLocator, Locator, LogLocator, MultipleLocator};
use crate::transform::{
    CutoffTransform, InverseTransform, MercatorLatitudeTransform, SineLatitudeTransform, Transform,
};

type FormatterFactory = Box<dyn Fn() -> Box<dyn Formatter>>;

/// Removes a band of the axis, see [`CutoffTransform`].
pub type Cutoff<D, N = f64> = Warped<CutoffTransform<D>, D, N>;

/// Mercator-projected latitude axis, see [`MercatorLatitudeTransform`].
pub type MercatorLatitude<D, N = f64> = Warped<MercatorLatitudeTransform<D>, D, N>;

/// Sine-projected latitude axis, see [`SineLatitudeTransform`].
pub type SineLatitude<D, N = f64> = Warped<SineLatitudeTransform, D, N>;

/// Reciprocal axis, see [`InverseTransform`].
pub type Inverse<D, N = f64> = Warped<InverseTransform<D>, D, N>;

/// Warped scale: normalizes linearly in the space of an arbitrary [`Transform`].
///
/// `Warped` generalizes [`Logarithmic`](super::Logarithmic): where that scale
/// maps through `ln`, this one maps through any invertible transform. Domain
/// values pass through [`Transform::forward`], are interpolated linearly
/// between the transformed endpoints, and come back through
/// [`Transform::inverse`]. Pan and zoom likewise operate in transformed
/// space, so they preserve whatever structure the transform encodes.
///
/// The concrete aliases [`Cutoff`], [`MercatorLatitude`], [`SineLatitude`]
/// and [`Inverse`] pair a transform with the locator and formatter that suit
/// it; [`Warped::from_transform`] itself defaults to the [`AutoLocator`] and
/// plain number labels.
///
/// # Masked values
///
/// A transform may be undefined for part of the numeric type (latitudes
/// beyond the Mercator threshold, for example). Such values are masked:
/// `normalize_opt` returns `None` for them, and domains set through
/// [`Scale::set_domain`] or the constructors are clamped to the transform's
/// valid span.
///
/// # Examples
///
/// ```rust
/// use skala::{Scale, scale::Cutoff};
///
/// // Cut the band (4, 6] out of a [0, 10] axis.
/// let scale = Cutoff::<f64>::new(0.0, 10.0, 4.0, 6.0).unwrap();
///
/// // The remaining 8 units spread evenly over [0, 1]
/// assert_eq!(scale.normalize(&2.0), 0.25);
/// assert_eq!(scale.normalize(&8.0), 0.75);
/// assert_eq!(scale.denormalize(0.25), 2.0);
/// ```
///
/// ```rust
/// use skala::{Scale, scale::MercatorLatitude};
///
/// let scale = MercatorLatitude::<f64>::new(-80.0, 80.0);
///
/// // The equator sits at the middle of the axis
/// let mid = scale.normalize(&0.0);
/// assert!((mid - 0.5).abs() < 1e-12);
///
/// // Latitudes past the projection threshold are masked
/// assert_eq!(scale.normalize_opt(&86.0), None);
/// ```
pub struct Warped<T, D, N = f64>
where
    T: Transform<D>,
    D: Float,
    N: Float,
{
    transform: T,
    min: D,
    max: D,
    locator: Box<dyn Locator<D>>,
    formatter: FormatterFactory,
    _phantom: std::marker::PhantomData<N>,
}

impl<T, D, N> Warped<T, D, N>
where
    T: Transform<D>,
    D: Float + 'static,
    N: Float + 'static,
{
    /// Creates a warped scale over `transform` with the given domain.
    ///
    /// The domain is clamped to the transform's valid span. Ticks come from
    /// the [`AutoLocator`] and labels from a plain [`ScalarFormatter`];
    /// override either with [`Warped::with_locator`] and
    /// [`Warped::with_formatter`].
    pub fn from_transform(transform: T, min: D, max: D) -> Self {
        let (min, max) = transform.limit(min, max);
        Self {
            transform,
            min,
            max,
            locator: Box::new(AutoLocator::new()),
            formatter: Box::new(|| Box::new(ScalarFormatter::new())),
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

    /// Replaces the formatter reported by
    /// [`default_formatter`](Scale::default_formatter).
    ///
    /// The factory is called each time a formatter is requested.
    pub fn with_formatter<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Box<dyn Formatter> + 'static,
    {
        self.formatter = Box::new(factory);
        self
    }

    /// The transform behind this scale.
    pub fn transform(&self) -> &T {
        &self.transform
    }
}

impl<D, N> Warped<CutoffTransform<D>, D, N>
where
    D: Float + 'static,
    N: Float + 'static,
{
    /// Cutoff scale that removes `(lower, upper]` from the axis entirely.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CutoffBounds`](crate::Error::CutoffBounds) when
    /// `lower` is not below `upper`.
    pub fn new(min: D, max: D, lower: D, upper: D) -> Result<Self> {
        Ok(Warped::from_transform(
            CutoffTransform::new(lower, upper)?,
            min,
            max,
        ))
    }

    /// Cutoff scale that compresses `(lower, upper]` by `accel` instead of
    /// removing it.
    ///
    /// # Errors
    ///
    /// Returns an error when `lower` is not below `upper` or `accel` is not
    /// positive.
    pub fn new_with_accel(min: D, max: D, lower: D, upper: D, accel: D) -> Result<Self> {
        Ok(Warped::from_transform(
            CutoffTransform::new_with_accel(lower, upper, accel)?,
            min,
            max,
        ))
    }
}

impl<D, N> Warped<MercatorLatitudeTransform<D>, D, N>
where
    D: Float + 'static,
    N: Float + 'static,
{
    /// Mercator latitude scale with the standard 85-degree threshold.
    ///
    /// The domain is clamped to the threshold, ticks fall every 20 degrees,
    /// and labels carry a degree sign.
    pub fn new(min: D, max: D) -> Self {
        Self::with_transform(MercatorLatitudeTransform::new(), min, max)
    }

    /// Mercator latitude scale with a custom cutoff threshold in degrees.
    ///
    /// # Errors
    ///
    /// Returns an error when `thresh` is not below 90 degrees.
    pub fn new_with_threshold(min: D, max: D, thresh: D) -> Result<Self> {
        Ok(Self::with_transform(
            MercatorLatitudeTransform::new_with_threshold(thresh)?,
            min,
            max,
        ))
    }

    fn with_transform(transform: MercatorLatitudeTransform<D>, min: D, max: D) -> Self {
        Warped::from_transform(transform, min, max)
            .with_locator(MultipleLocator::new(D::from(20.0).unwrap()))
            .with_formatter(|| Box::new(CoordinateFormatter::new(true)))
    }
}

impl<D, N> Warped<SineLatitudeTransform, D, N>
where
    D: Float + 'static,
    N: Float + 'static,
{
    /// Sine latitude scale covering at most `[-90, 90]` degrees.
    ///
    /// Ticks sit at the fixed latitudes -80, -60, ..., 80 and labels carry
    /// a degree sign.
    pub fn new(min: D, max: D) -> Self {
        let latitudes: Vec<D> = (-4..=4).map(|i| D::from(i * 20).unwrap()).collect();
        Warped::from_transform(SineLatitudeTransform::new(), min, max)
            .with_locator(FixedLocator::new(latitudes))
            .with_formatter(|| Box::new(CoordinateFormatter::new(true)))
    }
}

impl<D, N> Warped<InverseTransform<D>, D, N>
where
    D: Float + 'static,
    N: Float + 'static,
{
    /// Reciprocal scale: equal axis distances represent equal differences
    /// in `1 / value`.
    ///
    /// Ticks sit at powers of ten without minors and labels use scientific
    /// notation.
    pub fn new(min: D, max: D) -> Self {
        Self::with_transform(InverseTransform::new(), min, max)
    }

    /// Reciprocal scale with a custom epsilon substituted for non-positive
    /// values.
    ///
    /// # Errors
    ///
    /// Returns an error when `eps` is not positive.
    pub fn new_with_eps(min: D, max: D, eps: D) -> Result<Self> {
        Ok(Self::with_transform(
            InverseTransform::new_with_eps(eps)?,
            min,
            max,
        ))
    }

    fn with_transform(transform: InverseTransform<D>, min: D, max: D) -> Self {
        Warped::from_transform(transform, min, max)
            .with_locator(LogLocator::majors_only(D::from(10.0).unwrap()))
            .with_formatter(|| Box::new(SciFormatter::new()))
    }
}

impl<T, D, N> Scale for Warped<T, D, N>
where
    T: Transform<D>,
    D: Float,
    N: Float,
{
    type Domain = D;
    type Normalized = N;

    fn domain(&self) -> (&D, &D) {
        (&self.min, &self.max)
    }

    fn set_domain(&mut self, min: D, max: D) {
        let (min, max) = self.transform.limit(min, max);
        self.min = min;
        self.max = max;
    }

    fn normalize_opt(&self, value: &D) -> Option<N> {
        let fmin = self.transform.forward(self.min)?;
        let fmax = self.transform.forward(self.max)?;
        let span = fmax - fmin;
        if span == D::zero() {
            return Some(N::zero());
        }

        let fval = self.transform.forward(*value)?;
        let offset_n: N = N::from(fval - fmin)?;
        let span_n: N = N::from(span)?;

        Some(offset_n / span_n)
    }

    fn denormalize_opt(&self, t: N) -> Option<D> {
        let fmin = self.transform.forward(self.min)?;
        let fmax = self.transform.forward(self.max)?;
        let span_n: N = N::from(fmax - fmin)?;

        let scaled: D = D::from(t * span_n)?;
        self.transform.inverse(fmin + scaled)
    }

    fn pan_opt(&mut self, delta_norm: N) -> Option<()> {
        // Shift in transformed space so the pan respects the warp.
        let fmin = self.transform.forward(self.min)?;
        let fmax = self.transform.forward(self.max)?;
        let span_n: N = N::from(fmax - fmin)?;
        let shift: D = D::from(span_n * delta_norm)?;

        let new_min = self.transform.inverse(fmin + shift)?;
        let new_max = self.transform.inverse(fmax + shift)?;

        // The inverse can overshoot the transform's valid span (panning a
        // Mercator axis into the pole); clamp the result.
        let (new_min, new_max) = self.transform.limit(new_min, new_max);
        self.min = new_min;
        self.max = new_max;
        Some(())
    }

    fn zoom_opt(&mut self, factor: N, anchor_norm: Option<N>) -> Option<()> {
        if factor <= N::zero() {
            return None;
        }

        let one = N::one();
        let two = one + one;
        let half = one / two;
        let anchor_norm = anchor_norm.unwrap_or(half);

        let fmin = self.transform.forward(self.min)?;
        let fmax = self.transform.forward(self.max)?;
        let span_n: N = N::from(fmax - fmin)?;
        let new_span_n = span_n / factor;

        // Anchor position in transformed space.
        let anchor_offset: D = D::from(span_n * anchor_norm)?;
        let f_anchor = fmin + anchor_offset;

        let left_shift: D = D::from(new_span_n * anchor_norm)?;
        let right_shift: D = D::from(new_span_n * (one - anchor_norm))?;

        let new_min = self.transform.inverse(f_anchor - left_shift)?;
        let new_max = self.transform.inverse(f_anchor + right_shift)?;

        let (new_min, new_max) = self.transform.limit(new_min, new_max);
        self.min = new_min;
        self.max = new_max;
        Some(())
    }

    fn tick_iter(&self) -> TickIter<D> {
        self.locator.tick_values(&self.min, &self.max)
    }

    fn extend_domain(&mut self, other_min: &D, other_max: &D) {
        // Only extend with values the transform can represent.
        if self.transform.in_domain(*other_min) && other_min < &self.min {
            self.min = *other_min;
        }
        if self.transform.in_domain(*other_max) && other_max > &self.max {
            self.max = *other_max;
        }
    }

    fn is_valid_domain_value(&self, value: &D) -> bool {
        self.transform.in_domain(*value)
    }

    fn limit_domain(&self, vmin: D, vmax: D) -> (D, D) {
        self.transform.limit(vmin, vmax)
    }

    fn default_formatter(&self) -> Box<dyn Formatter> {
        (self.formatter)()
    }
}
