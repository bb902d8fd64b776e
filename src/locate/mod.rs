//! Tick locators choose where ticks land for a domain range.
//!
//! A [`Locator`] turns a range `[vmin, vmax]` into a stream of
//! [`Tick`](crate::scale::Tick)s. Scales carry a boxed locator and delegate
//! [`tick_iter`](crate::scale::Scale::tick_iter) to it, so swapping tick
//! placement never means swapping the scale.
//!
//! The [`locator`] function builds one from a loose description: a number
//! for multiples, a list for fixed positions, or a registry name.

pub mod auto;
pub mod date;
pub mod fixed;
pub mod log;

pub use auto::{AutoLocator, AutoMinorLocator, LinearLocator, MaxNLocator, MultipleLocator};
pub use date::{AutoDateLocator, DateLocator, DateUnit};
pub use fixed::{FixedLocator, NullLocator};
pub use log::LogLocator;

use num_traits::Float;
use tracing::debug;

use crate::error::{Error, Result};
use crate::scale::{util, TickIter};

const LOCATOR_NAMES: &str = "none, null, auto, minor, maxn, linear, log, \
                             multiple, date, second, minute, hour, day, week, month, year";

/// Chooses tick positions for a range.
pub trait Locator<D: Float> {
    /// Ticks covering `[vmin, vmax]`. The order of the two endpoints does
    /// not matter.
    fn tick_values(&self, vmin: &D, vmax: &D) -> TickIter<D>;

    /// Repairs a degenerate range before tick selection.
    ///
    /// The default expands empty or near-empty ranges by 5 percent of the
    /// endpoint magnitude and leaves healthy ranges untouched.
    fn view_limits(&self, vmin: D, vmax: D) -> (D, D) {
        util::nonsingular(vmin, vmax, D::from(0.05).unwrap())
    }
}

/// Input accepted by [`locator`].
pub enum LocatorSpec<D: Float> {
    /// The default locator for a plain numeric axis.
    Auto,
    /// Ticks on multiples of the given step.
    Step(D),
    /// Ticks at exactly the given positions.
    Positions(Vec<D>),
    /// A registry name, see [`locator`] for the list.
    Name(String),
    /// A ready-made locator, passed through unchanged.
    Custom(Box<dyn Locator<D>>),
}

impl<D: Float> From<&str> for LocatorSpec<D> {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl<D: Float> From<String> for LocatorSpec<D> {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

// A blanket `impl<D: Float> From<D>` would collide with the string impls
// above under coherence, so the step conversion is spelled out per float
// type instead.
macro_rules! step_spec_from {
    ($($t:ty),+) => {$(
        impl From<$t> for LocatorSpec<$t> {
            fn from(step: $t) -> Self {
                Self::Step(step)
            }
        }
    )+};
}

step_spec_from!(f32, f64);

impl<D: Float> From<Vec<D>> for LocatorSpec<D> {
    fn from(positions: Vec<D>) -> Self {
        Self::Positions(positions)
    }
}

impl<D: Float> From<Box<dyn Locator<D>>> for LocatorSpec<D> {
    fn from(custom: Box<dyn Locator<D>>) -> Self {
        Self::Custom(custom)
    }
}

/// Builds a locator from a loose description.
///
/// [`LocatorSpec::Auto`] gives the default [`AutoLocator`]. A number gives
/// a [`MultipleLocator`] on its multiples, a list a [`FixedLocator`] at
/// those positions. A name resolves through the registry: `none`, `null`,
/// `auto`, `minor`, `maxn`, `linear`, `log`, `multiple`, `date`, `second`,
/// `minute`, `hour`, `day`, `week`, `month`, `year`.
///
/// # Errors
///
/// Returns [`Error::UnknownLocator`] for a name outside the registry; the
/// message lists the valid names.
///
/// # Examples
///
/// ```
/// use skala::locate::locator;
///
/// let halves = locator::<f64, _>(0.5).unwrap();
/// let ticks: Vec<f64> = halves.tick_values(&0.0, &2.0).map(|t| t.value).collect();
/// assert_eq!(ticks, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
///
/// assert!(locator::<f64, _>("spiral").is_err());
/// ```
pub fn locator<D, S>(spec: S) -> Result<Box<dyn Locator<D>>>
where
    D: Float + 'static,
    S: Into<LocatorSpec<D>>,
{
    match spec.into() {
        LocatorSpec::Auto => Ok(Box::new(AutoLocator::new())),
        LocatorSpec::Step(step) => Ok(Box::new(MultipleLocator::new(step))),
        LocatorSpec::Positions(positions) => Ok(Box::new(FixedLocator::new(positions))),
        LocatorSpec::Name(name) => {
            let built = locator_by_name(&name)?;
            debug!(locator = %name, "resolved locator name");
            Ok(built)
        }
        LocatorSpec::Custom(custom) => Ok(custom),
    }
}

fn locator_by_name<D: Float + 'static>(name: &str) -> Result<Box<dyn Locator<D>>> {
    let ten = || D::from(10.0).unwrap();
    let built: Box<dyn Locator<D>> = match name {
        "none" | "null" => Box::new(NullLocator::new()),
        "auto" => Box::new(AutoLocator::new()),
        "minor" => Box::new(AutoMinorLocator::new()),
        "maxn" => Box::new(MaxNLocator::default()),
        "linear" => Box::new(LinearLocator::default()),
        "log" => Box::new(LogLocator::new(ten())),
        "multiple" => Box::new(MultipleLocator::new(D::one())),
        "date" => Box::new(AutoDateLocator::new()),
        "second" => Box::new(DateLocator::new(DateUnit::Second, 1)),
        "minute" => Box::new(DateLocator::new(DateUnit::Minute, 1)),
        "hour" => Box::new(DateLocator::new(DateUnit::Hour, 1)),
        "day" => Box::new(DateLocator::new(DateUnit::Day, 1)),
        "week" => Box::new(DateLocator::new(DateUnit::Week, 1)),
        "month" => Box::new(DateLocator::new(DateUnit::Month, 1)),
        "year" => Box::new(DateLocator::new(DateUnit::Year, 1)),
        _ => {
            return Err(Error::UnknownLocator {
                name: name.to_owned(),
                options: LOCATOR_NAMES.to_owned(),
            })
        }
    };
    Ok(built)
}
