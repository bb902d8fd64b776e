//! Axis mathematics for charting
//!
//! `skala` provides the mathematical foundations of a chart axis: mapping
//! data values to screen coordinates, choosing where tick marks land, and
//! producing their labels. It draws nothing; it computes the numbers a
//! renderer needs.
//!
//! # Core Concepts
//!
//! ## Scales
//!
//! Scales map data values (domain) to a normalized [0, 1] range. They support:
//! - Linear, logarithmic, and warped mappings
//! - Pan and zoom operations
//! - Tick generation through an exchangeable locator
//! - Bidirectional mapping (normalize and denormalize)
//!
//! Available scale types:
//! - [`scale::Linear`] - Affine mapping for linear data
//! - [`scale::Logarithmic`] - Logarithmic mapping for exponential data
//! - [`scale::Warped`] - Mapping through any invertible
//!   [`transform::Transform`], with ready-made aliases [`scale::Cutoff`],
//!   [`scale::MercatorLatitude`], [`scale::SineLatitude`] and
//!   [`scale::Inverse`]
//!
//! A scale can also be chosen at runtime from a [`scale::ScaleSpec`] value,
//! which is how configuration-driven charts pick their axes.
//!
//! ## Ticks and Labels
//!
//! Tick placement lives in [`locate`] and labeling in [`format`]. Every
//! scale carries a default locator and formatter suited to it, and both can
//! be swapped: locators through the scale's `with_locator` builder,
//! formatters by constructing one directly or through
//! [`format::formatter`].
//!
//! ## Projection
//!
//! The [`Projection`] type connects scales to screen rectangles, converting
//! between:
//! - [`PlotPoint`] - Data values in chart space
//! - [`ScreenPoint`] - Pixel coordinates in screen space
//!
//! It handles y-axis inversion (screen coordinates typically increase
//! downward, while chart coordinates increase upward).
//!
//! # Examples
//!
//! ## Basic Linear Scale
//!
//! ```rust
//! use skala::{Scale, scale::Linear};
//!
//! // Create a scale mapping [0.0, 100.0] to [0.0, 1.0]
//! let scale = Linear::<f64, f64>::new(0.0, 100.0);
//!
//! // Normalize values to [0.0, 1.0]
//! assert_eq!(scale.normalize(&0.0), 0.0);
//! assert_eq!(scale.normalize(&50.0), 0.5);
//! assert_eq!(scale.normalize(&100.0), 1.0);
//!
//! // Denormalize back to domain
//! assert_eq!(scale.denormalize(0.5), 50.0);
//! ```
//!
//! ## Pan and Zoom
//!
//! ```rust
//! use skala::{Scale, scale::Linear};
//!
//! let mut scale = Linear::<f64, f64>::new(0.0, 100.0);
//!
//! // Pan by 10% (shifts by 10 units)
//! scale.pan(0.1);
//! assert_eq!(scale.domain(), (&10.0, &110.0));
//!
//! // Zoom in by 2x at center
//! let mut scale = Linear::<f64, f64>::new(0.0, 100.0);
//! scale.zoom(2.0, Some(0.5));
//! assert_eq!(scale.domain(), (&25.0, &75.0));
//! ```
//!
//! ## Warped Axes
//!
//! ```rust
//! use skala::{Scale, scale::Cutoff};
//!
//! // Cut the uninteresting band (4, 6] out of the axis entirely
//! let scale = Cutoff::<f64>::new(0.0, 10.0, 4.0, 6.0).unwrap();
//! assert_eq!(scale.normalize(&2.0), 0.25);
//! assert_eq!(scale.normalize(&8.0), 0.75);
//! ```
//!
//! ## Choosing a Scale at Runtime
//!
//! ```rust
//! use skala::{Scale, scale::{scale, ScaleSpec}};
//!
//! let spec = ScaleSpec::parse("log").unwrap();
//! let axis = scale(spec, 1.0, 1000.0).unwrap();
//! assert_eq!(axis.domain(), (&1.0, &1000.0));
//! ```
//!
//! ## Ticks and Labels
//!
//! ```rust
//! use skala::{Scale, scale::Linear};
//! use skala::format::formatter;
//!
//! let scale = Linear::<f64, f64>::new(0.0, 100.0);
//! let percent = formatter("percent").unwrap();
//!
//! let labels: Vec<String> = scale
//!     .ticks()
//!     .iter()
//!     .enumerate()
//!     .filter(|(_, tick)| tick.level == 0)
//!     .map(|(index, tick)| percent.format(tick.value, index))
//!     .collect();
//! assert_eq!(labels.len(), 11);
//! assert_eq!(labels[0], "0%");
//! assert_eq!(labels[10], "100%");
//! ```
//!
//! ## Coordinate Projection
//!
//! ```rust
//! use skala::{Projection, scale::Linear, ScreenRect, PlotPoint};
//!
//! let x_scale = Linear::<f64, f32>::new(0.0, 100.0);
//! let y_scale = Linear::<f64, f32>::new(0.0, 50.0);
//! let screen = ScreenRect { x: 0.0, y: 0.0, width: 800.0, height: 400.0 };
//!
//! let projection = Projection::new(&screen, &x_scale, &y_scale);
//!
//! // Convert plot coordinates to screen pixels
//! let plot_point = PlotPoint::new(50.0, 25.0);
//! let screen_point = projection.chart_to_screen(&plot_point);
//! // screen_point is at (400.0, 200.0) - center of screen
//! ```

pub mod error;
pub mod format;
pub mod locate;
pub mod project;
pub mod scale;
pub mod transform;

pub use error::{Error, Result};
pub use num_traits::Float;
pub use project::{PlotPoint, PlotRect, Projection, ScreenPoint, ScreenRect};
pub use scale::{Scale, Tick, TickIter};
