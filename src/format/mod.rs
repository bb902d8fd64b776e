//! Tick label formatters.
//!
//! A [`Formatter`] turns a tick value into its label text. Formatters are
//! independent of scales and locators; a scale only suggests one through
//! [`default_formatter`](crate::scale::Scale::default_formatter).
//!
//! The [`formatter`] function builds one from a loose description: a number
//! for decimal precision, a label list, a strftime pattern, a closure, or a
//! registry name.

pub mod coordinate;
pub mod date;
pub mod fraction;
pub mod number;

pub use coordinate::CoordinateFormatter;
pub use date::{AutoDateFormatter, DateFormatter};
pub use fraction::FracFormatter;
pub use number::{
    EngFormatter, LogFormatter, PercentFormatter, ScalarFormatter, SciFormatter, SigFigFormatter,
};

use tracing::debug;

use crate::error::{Error, Result};

const FORMATTER_NAMES: &str = "none, null, scalar, log, sci, sigfig, eng, percent, \
                               $, pi, e, deg, lat, lon, deglat, deglon, date";

/// Produces the label text for a tick.
pub trait Formatter {
    /// Label for the tick at `value`. `index` is the tick's position in the
    /// tick sequence; most formatters use only the value. An empty string
    /// means the tick is drawn unlabeled.
    fn format(&self, value: f64, index: usize) -> String;
}

/// Produces no labels at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFormatter;

impl NullFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for NullFormatter {
    fn format(&self, _value: f64, _index: usize) -> String {
        String::new()
    }
}

/// Labels ticks by their position in the tick sequence.
///
/// The `index`-th tick gets the `index`-th label; ticks beyond the list are
/// unlabeled. Pair it with a
/// [`FixedLocator`](crate::locate::FixedLocator) holding the matching
/// positions.
#[derive(Debug, Clone, Default)]
pub struct FixedFormatter {
    labels: Vec<String>,
}

impl FixedFormatter {
    pub fn new<I, T>(labels: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }
}

impl Formatter for FixedFormatter {
    fn format(&self, _value: f64, index: usize) -> String {
        self.labels.get(index).cloned().unwrap_or_default()
    }
}

/// Wraps a closure as a formatter.
pub struct FuncFormatter {
    func: Box<dyn Fn(f64, usize) -> String>,
}

impl FuncFormatter {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(f64, usize) -> String + 'static,
    {
        Self {
            func: Box::new(func),
        }
    }
}

impl Formatter for FuncFormatter {
    fn format(&self, value: f64, index: usize) -> String {
        (self.func)(value, index)
    }
}

/// Input accepted by [`formatter`].
pub enum FormatterSpec {
    /// The default [`ScalarFormatter`].
    Auto,
    /// A [`ScalarFormatter`] with the given decimal precision.
    Precision(usize),
    /// A [`FixedFormatter`] labeling ticks by position.
    Labels(Vec<String>),
    /// A [`DateFormatter`] with a strftime pattern.
    Pattern(String),
    /// A registry name, see [`formatter`] for the list.
    Name(String),
    /// A closure receiving `(value, index)`.
    Func(Box<dyn Fn(f64, usize) -> String>),
    /// A ready-made formatter, passed through unchanged.
    Custom(Box<dyn Formatter>),
}

impl From<&str> for FormatterSpec {
    fn from(text: &str) -> Self {
        // A percent sign marks a strftime pattern rather than a name.
        if text.contains('%') {
            Self::Pattern(text.to_owned())
        } else {
            Self::Name(text.to_owned())
        }
    }
}

impl From<String> for FormatterSpec {
    fn from(text: String) -> Self {
        if text.contains('%') {
            Self::Pattern(text)
        } else {
            Self::Name(text)
        }
    }
}

impl From<usize> for FormatterSpec {
    fn from(precision: usize) -> Self {
        Self::Precision(precision)
    }
}

impl From<Vec<String>> for FormatterSpec {
    fn from(labels: Vec<String>) -> Self {
        Self::Labels(labels)
    }
}

impl From<Vec<&str>> for FormatterSpec {
    fn from(labels: Vec<&str>) -> Self {
        Self::Labels(labels.into_iter().map(str::to_owned).collect())
    }
}

impl From<Box<dyn Formatter>> for FormatterSpec {
    fn from(custom: Box<dyn Formatter>) -> Self {
        Self::Custom(custom)
    }
}

impl<F> From<F> for FormatterSpec
where
    F: Fn(f64, usize) -> String + 'static,
{
    fn from(func: F) -> Self {
        Self::Func(Box::new(func))
    }
}

/// Builds a formatter from a loose description.
///
/// [`FormatterSpec::Auto`] gives the trimming [`ScalarFormatter`]. A number
/// sets its decimal precision, a string list labels ticks by position, a
/// string containing `%` is a strftime date pattern, and a closure is used
/// as-is. Any other string resolves through the registry: `none`, `null`,
/// `scalar`, `log`, `sci`, `sigfig`, `eng`, `percent`, `$`, `pi`, `e`,
/// `deg`, `lat`, `lon`, `deglat`, `deglon`, `date`.
///
/// # Errors
///
/// Returns [`Error::UnknownFormatter`] for a name outside the registry; the
/// message lists the valid names.
///
/// # Examples
///
/// ```
/// use skala::format::formatter;
///
/// let plain = formatter(3_usize).unwrap();
/// assert_eq!(plain.format(2.25, 0), "2.25");
///
/// let degrees = formatter("deglat").unwrap();
/// assert_eq!(degrees.format(-30.0, 0), "30°S");
///
/// assert!(formatter("roman").is_err());
/// ```
pub fn formatter<S: Into<FormatterSpec>>(spec: S) -> Result<Box<dyn Formatter>> {
    match spec.into() {
        FormatterSpec::Auto => Ok(Box::new(ScalarFormatter::new())),
        FormatterSpec::Precision(precision) => {
            Ok(Box::new(ScalarFormatter::new_with_precision(precision)))
        }
        FormatterSpec::Labels(labels) => Ok(Box::new(FixedFormatter::new(labels))),
        FormatterSpec::Pattern(pattern) => Ok(Box::new(DateFormatter::new(pattern))),
        FormatterSpec::Name(name) => {
            let built = formatter_by_name(&name)?;
            debug!(formatter = %name, "resolved formatter name");
            Ok(built)
        }
        FormatterSpec::Func(func) => Ok(Box::new(FuncFormatter { func })),
        FormatterSpec::Custom(custom) => Ok(custom),
    }
}

fn formatter_by_name(name: &str) -> Result<Box<dyn Formatter>> {
    let built: Box<dyn Formatter> = match name {
        "none" | "null" => Box::new(NullFormatter::new()),
        "scalar" => Box::new(ScalarFormatter::new()),
        "log" => Box::new(LogFormatter::new()),
        "sci" => Box::new(SciFormatter::new()),
        "sigfig" => Box::new(SigFigFormatter::new(3)),
        "eng" => Box::new(EngFormatter::new()),
        "percent" => Box::new(PercentFormatter::new()),
        "$" => Box::new(ScalarFormatter::money()),
        "pi" => Box::new(FracFormatter::pi()),
        "e" => Box::new(FracFormatter::e()),
        "deg" => Box::new(CoordinateFormatter::new(true)),
        "lat" => Box::new(CoordinateFormatter::lat()),
        "lon" => Box::new(CoordinateFormatter::lon()),
        "deglat" => Box::new(CoordinateFormatter::deglat()),
        "deglon" => Box::new(CoordinateFormatter::deglon()),
        "date" => Box::new(DateFormatter::new("%Y-%m-%d")),
        _ => {
            return Err(Error::UnknownFormatter {
                name: name.to_owned(),
                options: FORMATTER_NAMES.to_owned(),
            })
        }
    };
    Ok(built)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_spec_builds_a_scalar_formatter() {
        let built = formatter(4_usize).unwrap();
        assert_eq!(built.format(0.12345, 0), "0.1235");
        assert_eq!(built.format(1.0, 0), "1");
    }

    #[test]
    fn label_list_spec_formats_by_tick_index() {
        let built = formatter(vec!["low", "mid", "high"]).unwrap();
        assert_eq!(built.format(0.0, 0), "low");
        assert_eq!(built.format(17.3, 2), "high");
        assert_eq!(built.format(0.0, 3), "");
    }

    #[test]
    fn pattern_spec_formats_dates() {
        let built = formatter("%Y-%m-%d").unwrap();
        assert_eq!(built.format(0.0, 0), "1970-01-01");
    }

    #[test]
    fn closure_spec_is_called_with_value_and_index() {
        let built = formatter(|value: f64, index: usize| format!("{index}:{value}")).unwrap();
        assert_eq!(built.format(2.5, 7), "7:2.5");
    }

    #[test]
    fn every_registry_name_resolves() {
        for name in [
            "none", "null", "scalar", "log", "sci", "sigfig", "eng", "percent", "$", "pi", "e",
            "deg", "lat", "lon", "deglat", "deglon", "date",
        ] {
            assert!(formatter(name).is_ok(), "name {name}");
        }
    }

    #[test]
    fn unknown_name_fails_and_lists_the_options() {
        let err = formatter("roman").err().unwrap();
        let text = err.to_string();
        assert!(text.contains("roman"));
        assert!(text.contains("scalar") && text.contains("deglon"));
    }

    #[test]
    fn fixed_formatter_runs_out_of_labels_gracefully() {
        let fixed = FixedFormatter::new(["a"]);
        assert_eq!(fixed.format(0.0, 0), "a");
        assert_eq!(fixed.format(0.0, 1), "");
    }
}
