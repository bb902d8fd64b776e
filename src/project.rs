//! Conversion between chart coordinates and screen pixels.
//!
//! A [`Projection`] ties an x scale and a y scale to a [`ScreenRect`] and
//! converts [`PlotPoint`]s and [`PlotRect`]s to [`ScreenPoint`]s and back.
//! The scales are held as trait objects, so any [`Scale`] can drive either
//! axis and a logarithmic or warped axis needs no special handling here.
//!
//! Chart y grows upward while screen y grows downward from the top-left
//! origin; every y conversion folds in that flip.
//!
//! # Examples
//!
//! ```rust
//! use skala::{Projection, scale::Linear, ScreenRect, ScreenPoint, PlotPoint};
//!
//! let screen = ScreenRect { x: 0.0, y: 0.0, width: 800.0, height: 600.0 };
//! let x_scale = Linear::<f64, f32>::new(0.0, 100.0);
//! let y_scale = Linear::<f64, f32>::new(0.0, 50.0);
//! let projection = Projection::new(&screen, &x_scale, &y_scale);
//!
//! // The center of the data lands in the center of the screen.
//! let px = projection.chart_to_screen(&PlotPoint::new(50.0, 25.0));
//! assert_eq!((px.x, px.y), (400.0, 300.0));
//!
//! // A mouse position converts back to data coordinates.
//! let data = projection.screen_to_chart(&ScreenPoint::new(200.0, 450.0));
//! assert_eq!((data.x, data.y), (25.0, 12.5));
//! ```
//!
//! The y flip in isolation:
//!
//! ```rust
//! use skala::{Projection, scale::Linear, ScreenRect, PlotPoint};
//!
//! let screen = ScreenRect { x: 0.0, y: 0.0, width: 800.0, height: 600.0 };
//! let x_scale = Linear::<f64, f32>::new(0.0, 100.0);
//! let y_scale = Linear::<f64, f32>::new(0.0, 50.0);
//! let projection = Projection::new(&screen, &x_scale, &y_scale);
//!
//! // Chart y = 0 is the bottom edge of the screen area.
//! assert_eq!(projection.chart_to_screen(&PlotPoint::new(0.0, 0.0)).y, 600.0);
//! // Chart y = 50 is the top edge.
//! assert_eq!(projection.chart_to_screen(&PlotPoint::new(0.0, 50.0)).y, 0.0);
//! ```

use num_traits::Float;

use crate::scale::{Scale, util::sorted_pair};

/// A pixel-space rectangle, positioned by its top-left corner.
#[derive(Debug, Clone, Copy)]
pub struct ScreenRect<S = f32> {
    /// Left edge in pixels.
    pub x: S,
    /// Top edge in pixels.
    pub y: S,
    /// Width in pixels.
    pub width: S,
    /// Height in pixels.
    pub height: S,
}

/// A pixel-space point.
#[derive(Debug, Clone, Copy)]
pub struct ScreenPoint<S = f32> {
    /// Horizontal pixel position.
    pub x: S,
    /// Vertical pixel position.
    pub y: S,
}

impl<S> ScreenPoint<S> {
    /// Creates a point from pixel coordinates.
    pub const fn new(x: S, y: S) -> Self {
        Self { x, y }
    }
}

/// A point in chart space, in domain units.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlotPoint<D = f64> {
    /// Position on the x axis, in domain units.
    pub x: D,
    /// Position on the y axis, in domain units.
    pub y: D,
}

impl<D> PlotPoint<D> {
    /// Creates a point from data coordinates.
    pub const fn new(x: D, y: D) -> Self {
        Self { x, y }
    }
}

/// A rectangle in chart space, positioned by its bottom-left corner.
///
/// Width and height may be negative, for example when a drag selection
/// runs right-to-left; projection and containment sort the endpoints.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlotRect<D = f64> {
    /// Origin on the x axis, in domain units.
    pub x: D,
    /// Origin on the y axis, in domain units.
    pub y: D,
    /// Horizontal extent, possibly negative.
    pub width: D,
    /// Vertical extent, possibly negative.
    pub height: D,
}

impl<D: Copy> PlotRect<D> {
    /// The left edge.
    pub const fn min_x(&self) -> D {
        self.x
    }

    /// The bottom edge.
    pub const fn min_y(&self) -> D {
        self.y
    }
}

impl<D: Float> PlotRect<D> {
    /// Builds the rectangle spanned by two opposite corners.
    ///
    /// The corners may be given in any order; the spans come out
    /// non-negative.
    ///
    /// ```
    /// use skala::{PlotPoint, PlotRect};
    ///
    /// let rect = PlotRect::from_points(
    ///     PlotPoint::new(50.0, 80.0),
    ///     PlotPoint::new(10.0, 20.0),
    /// );
    /// assert_eq!((rect.x, rect.y), (10.0, 20.0));
    /// assert_eq!((rect.width, rect.height), (40.0, 60.0));
    /// ```
    pub fn from_points(p1: PlotPoint<D>, p2: PlotPoint<D>) -> Self {
        let (x_min, x_max) = sorted_pair(p1.x, p2.x);
        let (y_min, y_max) = sorted_pair(p1.y, p2.y);

        let width = x_max - x_min;
        let height = y_max - y_min;

        Self {
            x: x_min,
            y: y_min,
            width,
            height,
        }
    }

    /// Builds a rectangle of the given size around a center point.
    ///
    /// ```
    /// use skala::{PlotPoint, PlotRect};
    ///
    /// let rect = PlotRect::from_center(PlotPoint::new(50.0, 50.0), 100.0, 200.0);
    /// assert_eq!((rect.x, rect.y), (0.0, -50.0));
    /// assert_eq!((rect.width, rect.height), (100.0, 200.0));
    /// ```
    pub fn from_center(center: PlotPoint<D>, width: D, height: D) -> Self {
        let half_width = width / D::from(2).unwrap();
        let half_height = height / D::from(2).unwrap();

        Self {
            x: center.x - half_width,
            y: center.y - half_height,
            width,
            height,
        }
    }

    /// The right edge, `x + width`.
    pub fn max_x(&self) -> D {
        self.x + self.width
    }

    /// The top edge, `y + height`.
    pub fn max_y(&self) -> D {
        self.y + self.height
    }

    /// Whether the point lies inside the rectangle, edges included.
    pub fn contains(&self, point: &PlotPoint<D>) -> bool {
        self.contains_x(&point.x) && self.contains_y(&point.y)
    }

    /// Whether `value` lies within the horizontal extent.
    ///
    /// The endpoints are sorted first, so negative widths work too.
    pub fn contains_x(&self, value: &D) -> bool {
        let (min_x, max_x) = sorted_pair(self.x, self.x + self.width);
        value >= &min_x && value <= &max_x
    }

    /// Whether `value` lies within the vertical extent.
    pub fn contains_y(&self, value: &D) -> bool {
        let (min_y, max_y) = sorted_pair(self.y, self.y + self.height);
        value >= &min_y && value <= &max_y
    }
}


/// Converts between chart coordinates and a screen rectangle.
///
/// The conversion goes domain → normalized `[0, 1]` → pixels; the first
/// step belongs to the scales and the second is an affine map onto the
/// screen rectangle with the y axis flipped. `D` is the domain type, `N`
/// the scales' normalized type, and `S` the pixel type.
///
/// Each conversion comes in two flavors: the `_opt` variant returns `None`
/// when a scale masks the value or a numeric conversion fails, and the
/// plain variant panics in those cases.
///
/// # Examples
///
/// ```rust
/// use skala::{Projection, scale::Linear, ScreenRect, PlotPoint, ScreenPoint};
///
/// let screen = ScreenRect { x: 0.0, y: 0.0, width: 800.0, height: 600.0 };
/// let x_scale = Linear::<f64, f32>::new(0.0, 100.0);
/// let y_scale = Linear::<f64, f32>::new(0.0, 50.0);
/// let projection = Projection::new(&screen, &x_scale, &y_scale);
///
/// let px = projection.chart_to_screen(&PlotPoint::new(50.0, 25.0));
/// assert_eq!((px.x, px.y), (400.0, 300.0));
///
/// let back = projection.screen_to_chart(&ScreenPoint::new(400.0, 300.0));
/// assert_eq!((back.x, back.y), (50.0, 25.0));
/// ```
///
/// Single coordinates convert too:
///
/// ```rust
/// use skala::{Projection, scale::Linear, ScreenRect};
///
/// let screen = ScreenRect { x: 0.0, y: 0.0, width: 800.0, height: 600.0 };
/// let x_scale = Linear::<f64, f32>::new(0.0, 100.0);
/// let y_scale = Linear::<f64, f32>::new(0.0, 50.0);
/// let projection = Projection::new(&screen, &x_scale, &y_scale);
///
/// assert_eq!(projection.x_to_screen(&75.0), 600.0);
/// assert_eq!(projection.y_from_screen(&150.0), 37.5);
/// ```
#[derive(Clone, Copy)]
pub struct Projection<'a, D = f64, N = f32, S = f32> {
    screen_rect: &'a ScreenRect<S>,
    x_scale: &'a dyn Scale<Domain = D, Normalized = N>,
    y_scale: &'a dyn Scale<Domain = D, Normalized = N>,
}

impl<'a, D, N, S> Projection<'a, D, N, S> {
    /// Creates a projection from the screen rectangle and one scale per axis.
    pub const fn new(
        screen_rect: &'a ScreenRect<S>,
        x_scale: &'a dyn Scale<Domain = D, Normalized = N>,
        y_scale: &'a dyn Scale<Domain = D, Normalized = N>,
    ) -> Self {
        Self {
            screen_rect,
            x_scale,
            y_scale,
        }
    }

    /// The screen rectangle this projection targets.
    pub const fn screen_bounds(&self) -> &ScreenRect<S> {
        self.screen_rect
    }
}

impl<'a, D, N, S> Projection<'a, D, N, S>
where
    N: Float,
    S: Float,
    D: Float,
{
    /// The chart-space rectangle covered by the two scale domains.
    pub fn plot_bounds(&self) -> PlotRect<D> {
        let (&x_min, &x_max) = self.x_scale.domain();
        let (&y_min, &y_max) = self.y_scale.domain();
        PlotRect {
            x: x_min,
            y: y_min,
            width: (x_min - x_max).abs(),
            height: (y_min - y_max).abs(),
        }
    }

    /// Converts a pixel position to chart coordinates.
    pub fn screen_to_chart_opt(&self, screen_point: &ScreenPoint<S>) -> Option<PlotPoint<D>> {
        let cx = self.x_from_screen_opt(&screen_point.x)?;
        let cy = self.y_from_screen_opt(&screen_point.y)?;

        Some(PlotPoint::new(cx, cy))
    }

    /// Converts a pixel position to chart coordinates, panicking on failure.
    pub fn screen_to_chart(&self, screen_point: &ScreenPoint<S>) -> PlotPoint<D> {
        self.screen_to_chart_opt(screen_point).unwrap()
    }

    /// Converts a chart point to a pixel position.
    pub fn chart_to_screen_opt(&self, plot_point: &PlotPoint<D>) -> Option<ScreenPoint<S>> {
        let sx = self.x_to_screen_opt(&plot_point.x)?;
        let sy = self.y_to_screen_opt(&plot_point.y)?;

        Some(ScreenPoint::new(sx, sy))
    }

    /// Converts a chart point to a pixel position, panicking on failure.
    pub fn chart_to_screen(&self, plot_point: &PlotPoint<D>) -> ScreenPoint<S> {
        self.chart_to_screen_opt(plot_point).unwrap()
    }

    /// Converts a chart x value to a screen x coordinate.
    pub fn x_to_screen_opt(&self, plot_x: &D) -> Option<S> {
        let norm_x: N = self.x_scale.normalize_opt(plot_x)?;
        let screen_x: S = S::from(norm_x)?;
        Some(self.screen_rect.x + screen_x * self.screen_rect.width)
    }

    /// Converts a chart x value to a screen x coordinate, panicking on failure.
    pub fn x_to_screen(&self, plot_x: &D) -> S {
        self.x_to_screen_opt(plot_x).unwrap()
    }

    /// Converts a chart y value to a screen y coordinate, flipping the axis.
    pub fn y_to_screen_opt(&self, plot_y: &D) -> Option<S> {
        let norm_y: N = self.y_scale.normalize_opt(plot_y)?;
        let screen_norm_y: S = S::from(norm_y)?;

        let inverted = S::one() - screen_norm_y;

        Some(self.screen_rect.y + inverted * self.screen_rect.height)
    }

    /// Converts a chart y value to a screen y coordinate, panicking on failure.
    pub fn y_to_screen(&self, plot_y: &D) -> S {
        self.y_to_screen_opt(plot_y).unwrap()
    }

    /// Converts a screen x coordinate to a chart x value.
    pub fn x_from_screen_opt(&self, screen_x: &S) -> Option<D> {
        let norm_x_screen = (*screen_x - self.screen_rect.x) / self.screen_rect.width;
        let norm_x: N = N::from(norm_x_screen)?;
        self.x_scale.denormalize_opt(norm_x)
    }

    /// Converts a screen x coordinate to a chart x value, panicking on failure.
    pub fn x_from_screen(&self, screen_x: &S) -> D {
        self.x_from_screen_opt(screen_x).unwrap()
    }

    /// Converts a screen y coordinate to a chart y value, flipping the axis.
    pub fn y_from_screen_opt(&self, screen_y: &S) -> Option<D> {
        let norm_y_raw = (*screen_y - self.screen_rect.y) / self.screen_rect.height;
        let norm_y_screen = S::one() - norm_y_raw;

        let norm_y: N = N::from(norm_y_screen)?;
        self.y_scale.denormalize_opt(norm_y)
    }

    /// Converts a screen y coordinate to a chart y value, panicking on failure.
    pub fn y_from_screen(&self, screen_y: &S) -> D {
        self.y_from_screen_opt(screen_y).unwrap()
    }

    /// Converts a screen rectangle to a chart rectangle.
    ///
    /// The result always has non-negative width and height, whichever way
    /// the input rectangle was oriented.
    pub fn screen_to_chart_rect_opt(&self, screen_rect: ScreenRect<S>) -> Option<PlotRect<D>> {
        let first = self.screen_to_chart_opt(&ScreenPoint::new(screen_rect.x, screen_rect.y))?;
        let second = self.screen_to_chart_opt(&ScreenPoint::new(
            screen_rect.x + screen_rect.width,
            screen_rect.y + screen_rect.height,
        ))?;

        let (x_min, x_max) = sorted_pair(first.x, second.x);
        let (y_min, y_max) = sorted_pair(first.y, second.y);

        Some(PlotRect {
            x: x_min,
            y: y_min,
            width: x_max - x_min,
            height: y_max - y_min,
        })
    }

    /// Converts a screen rectangle to a chart rectangle, panicking on failure.
    pub fn screen_to_chart_rect(&self, screen_rect: ScreenRect<S>) -> PlotRect<D> {
        self.screen_to_chart_rect_opt(screen_rect).unwrap()
    }

    /// Converts a chart rectangle to a screen rectangle.
    ///
    /// Both endpoints of each axis go through the scale, then the sorted
    /// normalized pair becomes the screen extent. Negative input spans
    /// therefore come out as positive screen spans.
    pub fn chart_to_screen_rect_opt(&self, plot_rect: PlotRect<D>) -> Option<ScreenRect<S>> {
        let x_end = plot_rect.x + plot_rect.width;
        let y_end = plot_rect.y + plot_rect.height;

        let x_start_norm = self.x_scale.normalize_opt(&plot_rect.x)?;
        let x_end_norm = self.x_scale.normalize_opt(&x_end)?;
        let (left_norm, right_norm) = sorted_pair(x_start_norm, x_end_norm);
        let width_norm = right_norm - left_norm;

        let y_start_norm = self.y_scale.normalize_opt(&plot_rect.y)?;
        let y_end_norm = self.y_scale.normalize_opt(&y_end)?;
        let (bottom_norm, top_norm) = sorted_pair(y_start_norm, y_end_norm);
        let height_norm = top_norm - bottom_norm;

        let screen_x = self.screen_rect.x + S::from(left_norm)? * self.screen_rect.width;
        let screen_width = S::from(width_norm)? * self.screen_rect.width;

        let screen_y =
            self.screen_rect.y + (S::one() - S::from(top_norm)?) * self.screen_rect.height;
        let screen_height = S::from(height_norm)? * self.screen_rect.height;

        Some(ScreenRect {
            x: screen_x,
            y: screen_y,
            width: screen_width,
            height: screen_height,
        })
    }

    /// Projects a rectangle from chart coordinates to screen coordinates.
    pub fn chart_to_screen_rect(&self, plot_rect: PlotRect<D>) -> ScreenRect<S> {
        self.chart_to_screen_rect_opt(plot_rect).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::{Cutoff, Linear, MercatorLatitude};

    #[test]
    fn chart_rect_to_screen_rect_positive_spans() {
        let x_scale = Linear::<f64, f32>::new(100.0f64, 200.0);
        let y_scale = Linear::<f64, f32>::new(-50.0f64, 50.0);
        let projection = Projection::new(
            &ScreenRect {
                x: 10.0f32,
                y: 20.0f32,
                width: 800.0f32,
                height: 400.0f32,
            },
            &x_scale,
            &y_scale,
        );

        let plot_rect = PlotRect {
            x: 120.0,
            y: -10.0,
            width: 30.0,
            height: 20.0,
        };

        let screen_rect = projection.chart_to_screen_rect(plot_rect);

        assert!((screen_rect.x - 170.0).abs() < 1e-4);
        assert!((screen_rect.width - 240.0).abs() < 1e-4);
        assert!((screen_rect.y - 180.0).abs() < 1e-4);
        assert!((screen_rect.height - 80.0).abs() < 1e-4);
    }

    #[test]
    fn chart_rect_to_screen_rect_negative_spans() {
        let x_scale = Linear::<f64, f32>::new(100.0f64, 200.0);
        let y_scale = Linear::<f64, f32>::new(-50.0f64, 50.0);
        let projection = Projection::new(
            &ScreenRect {
                x: 10.0f32,
                y: 20.0f32,
                width: 800.0f32,
                height: 400.0f32,
            },
            &x_scale,
            &y_scale,
        );

        let plot_rect = PlotRect {
            x: 180.0,
            y: 30.0,
            width: -40.0,
            height: -20.0,
        };

        let screen_rect = projection.chart_to_screen_rect(plot_rect);

        assert!((screen_rect.x - 330.0).abs() < 1e-4);
        assert!((screen_rect.width - 320.0).abs() < 1e-4);
        assert!((screen_rect.y - 100.0).abs() < 1e-4);
        assert!((screen_rect.height - 80.0).abs() < 1e-4);
    }

    #[test]
    fn screen_rect_to_chart_rect_positive_spans() {
        let x_scale = Linear::<f64, f32>::new(100.0f64, 200.0);
        let y_scale = Linear::<f64, f32>::new(-50.0f64, 50.0);
        let projection = Projection::new(
            &ScreenRect {
                x: 10.0f32,
                y: 20.0f32,
                width: 800.0f32,
                height: 400.0f32,
            },
            &x_scale,
            &y_scale,
        );

        let selected = ScreenRect {
            x: 210.0,
            y: 70.0,
            width: 200.0,
            height: 100.0,
        };

        let chart_rect = projection.screen_to_chart_rect(selected);

        assert!((chart_rect.x - 125.0).abs() < 1e-8);
        assert!((chart_rect.width - 25.0).abs() < 1e-8);
        assert!((chart_rect.y - 12.5).abs() < 1e-8);
        assert!((chart_rect.height - 25.0).abs() < 1e-8);
    }

    #[test]
    fn screen_rect_to_chart_rect_negative_spans() {
        let x_scale = Linear::<f64, f32>::new(100.0f64, 200.0);
        let y_scale = Linear::<f64, f32>::new(-50.0f64, 50.0);
        let projection = Projection::new(
            &ScreenRect {
                x: 10.0f32,
                y: 20.0f32,
                width: 800.0f32,
                height: 400.0f32,
            },
            &x_scale,
            &y_scale,
        );

        let selected = ScreenRect {
            x: 500.0,
            y: 240.0,
            width: -100.0,
            height: -120.0,
        };

        let chart_rect = projection.screen_to_chart_rect(selected);

        assert!((chart_rect.x - 148.75).abs() < 1e-6);
        assert!((chart_rect.width - 12.5).abs() < 1e-6);
        assert!((chart_rect.y + 5.0).abs() < 1e-6);
        assert!((chart_rect.height - 30.0).abs() < 1e-6);
    }

    #[test]
    fn projection_through_a_warped_scale() {
        let x_scale = Linear::<f64, f32>::new(0.0, 10.0);
        let y_scale = Cutoff::<f64, f32>::new(0.0, 10.0, 4.0, 6.0).unwrap();
        let screen = ScreenRect {
            x: 0.0f32,
            y: 0.0f32,
            width: 100.0f32,
            height: 80.0f32,
        };
        let projection = Projection::new(&screen, &x_scale, &y_scale);

        // y = 8 sits at 0.75 on the cutoff axis; the screen y inverts that
        let point = projection.chart_to_screen(&PlotPoint::new(5.0, 8.0));
        assert!((point.x - 50.0).abs() < 1e-4);
        assert!((point.y - 20.0).abs() < 1e-4);

        let back = projection.screen_to_chart(&ScreenPoint::new(50.0, 60.0));
        assert!((back.x - 5.0).abs() < 1e-6);
        assert!((back.y - 2.0).abs() < 1e-6);
    }

    #[test]
    fn projection_masks_unmappable_values() {
        let x_scale = Linear::<f64, f32>::new(0.0, 10.0);
        let y_scale = MercatorLatitude::<f64, f32>::new(-80.0, 80.0);
        let screen = ScreenRect {
            x: 0.0f32,
            y: 0.0f32,
            width: 100.0f32,
            height: 80.0f32,
        };
        let projection = Projection::new(&screen, &x_scale, &y_scale);

        assert!(projection
            .chart_to_screen_opt(&PlotPoint::new(5.0, 89.0))
            .is_none());
        assert!(projection
            .chart_to_screen_opt(&PlotPoint::new(5.0, 45.0))
            .is_some());
    }
}
