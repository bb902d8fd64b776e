//! Numeric tick formatters.

use super::Formatter;

/// Fixed-point labels with the display noise stripped.
///
/// Values are formatted to `precision` decimals, then trailing zeros and a
/// trailing decimal point are removed, `-0` collapses to `0`, and the ASCII
/// hyphen becomes the Unicode minus sign. Ticks outside the configured tick
/// range (with a relative tolerance of one part in a thousand) get an empty
/// label.
///
/// # Examples
///
/// ```
/// use skala::format::{Formatter, ScalarFormatter};
///
/// let fmt = ScalarFormatter::new();
/// assert_eq!(fmt.format(2.50, 0), "2.5");
/// assert_eq!(fmt.format(-0.0001, 0), "0");
/// assert_eq!(fmt.format(-4.0, 0), "\u{2212}4");
/// ```
#[derive(Debug, Clone)]
pub struct ScalarFormatter {
    precision: usize,
    tick_lo: f64,
    tick_hi: f64,
    prefix: String,
    suffix: String,
}

impl Default for ScalarFormatter {
    fn default() -> Self {
        Self {
            precision: 2,
            tick_lo: f64::NEG_INFINITY,
            tick_hi: f64::INFINITY,
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

impl ScalarFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_precision(precision: usize) -> Self {
        Self {
            precision,
            ..Self::default()
        }
    }

    /// Dollar labels, `$2.5` style.
    pub fn money() -> Self {
        Self::new().with_prefix("$")
    }

    /// Text placed before each non-empty label.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Text placed after each non-empty label.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Only label ticks inside `[lo, hi]`.
    pub fn with_tick_range(mut self, lo: f64, hi: f64) -> Self {
        self.tick_lo = lo;
        self.tick_hi = hi;
        self
    }

    /// Only label ticks inside `[-bound, bound]`.
    pub fn with_symmetric_range(self, bound: f64) -> Self {
        let bound = bound.abs();
        self.with_tick_range(-bound, bound)
    }

    fn in_tick_range(&self, value: f64) -> bool {
        let eps = value.abs() / 1000.0;
        !(value + eps < self.tick_lo || value - eps > self.tick_hi)
    }
}

impl Formatter for ScalarFormatter {
    fn format(&self, value: f64, _index: usize) -> String {
        if !self.in_tick_range(value) {
            return String::new();
        }
        let label = trim_fixed(value, self.precision);
        if self.prefix.is_empty() && self.suffix.is_empty() {
            label
        } else {
            format!("{}{label}{}", self.prefix, self.suffix)
        }
    }
}

/// `{value:.precision}` with trailing zeros, the trailing point, and the
/// sign of negative zero removed.
fn trim_fixed(value: f64, precision: usize) -> String {
    let mut label = format!("{value:.precision$}");
    if label.contains('.') {
        label.truncate(label.trim_end_matches('0').len());
        label.truncate(label.trim_end_matches('.').len());
    }
    if label == "-0" {
        label.replace_range(..1, "");
    }
    label.replace('-', "\u{2212}")
}

/// Scientific notation, `1.5e20` style.
///
/// The mantissa is trimmed like [`ScalarFormatter`] output and zero keeps
/// the plain label `0`.
#[derive(Debug, Clone)]
pub struct SciFormatter {
    precision: usize,
}

impl Default for SciFormatter {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

impl SciFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_precision(precision: usize) -> Self {
        Self { precision }
    }
}

impl Formatter for SciFormatter {
    fn format(&self, value: f64, _index: usize) -> String {
        if value == 0.0 {
            return "0".to_owned();
        }
        let formatted = format!("{value:.precision$e}", precision = self.precision);
        let label = match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
                format!("{mantissa}e{exponent}")
            }
            None => formatted,
        };
        label.replace('-', "\u{2212}")
    }
}

/// Rounds to a fixed number of significant figures.
#[derive(Debug, Clone)]
pub struct SigFigFormatter {
    sigfigs: usize,
}

impl SigFigFormatter {
    pub fn new(sigfigs: usize) -> Self {
        Self {
            sigfigs: sigfigs.max(1),
        }
    }
}

impl Formatter for SigFigFormatter {
    fn format(&self, value: f64, _index: usize) -> String {
        if value == 0.0 || !value.is_finite() {
            return trim_fixed(value, 0);
        }
        let digits = self.sigfigs as i32;
        let magnitude = value.abs().log10().floor() as i32;
        let scale = 10f64.powi(magnitude - digits + 1);
        let rounded = (value / scale).round() * scale;
        let decimals = (digits - 1 - magnitude).max(0) as usize;
        trim_fixed(rounded, decimals)
    }
}

const ENG_PREFIXES: &[(f64, &str)] = &[
    (1e12, "T"),
    (1e9, "G"),
    (1e6, "M"),
    (1e3, "k"),
    (1.0, ""),
    (1e-3, "m"),
    (1e-6, "\u{b5}"),
    (1e-9, "n"),
];

/// Engineering notation with SI prefixes from nano through tera.
///
/// ```
/// use skala::format::{EngFormatter, Formatter};
///
/// let fmt = EngFormatter::new();
/// assert_eq!(fmt.format(1500.0, 0), "1.5k");
/// assert_eq!(fmt.format(0.02, 0), "20m");
/// ```
#[derive(Debug, Clone)]
pub struct EngFormatter {
    precision: usize,
}

impl Default for EngFormatter {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

impl EngFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_precision(precision: usize) -> Self {
        Self { precision }
    }
}

impl Formatter for EngFormatter {
    fn format(&self, value: f64, _index: usize) -> String {
        if value == 0.0 || !value.is_finite() {
            return trim_fixed(value, 0);
        }
        let abs = value.abs();
        // Below the smallest prefix the mantissa would lose its leading
        // digit, so sub-nano magnitudes fall back to scientific notation.
        match ENG_PREFIXES.iter().find(|(factor, _)| abs >= *factor) {
            Some((factor, symbol)) => {
                let label = trim_fixed(value / factor, self.precision);
                format!("{label}{symbol}")
            }
            None => SciFormatter::new_with_precision(self.precision).format(value, 0),
        }
    }
}

/// Percentages of a full-scale value.
///
/// `xmax` is the value that reads as `100%`; the default of `100` labels
/// values that are already percentages.
#[derive(Debug, Clone)]
pub struct PercentFormatter {
    xmax: f64,
    decimals: usize,
}

impl Default for PercentFormatter {
    fn default() -> Self {
        Self {
            xmax: 100.0,
            decimals: 0,
        }
    }
}

impl PercentFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_max(xmax: f64, decimals: usize) -> Self {
        Self { xmax, decimals }
    }
}

impl Formatter for PercentFormatter {
    fn format(&self, value: f64, _index: usize) -> String {
        let percent = 100.0 * value / self.xmax;
        let label = trim_fixed(percent, self.decimals);
        format!("{label}%")
    }
}

/// Decade labels for logarithmic axes.
///
/// Midrange values print as integers; values at or beyond `10^4`, or below
/// `1`, switch to scientific notation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFormatter;

impl LogFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for LogFormatter {
    fn format(&self, value: f64, index: usize) -> String {
        let abs = value.abs();
        if value != 0.0 && value.is_finite() && (abs >= 1e4 || abs < 1.0) {
            SciFormatter::new().format(value, index)
        } else {
            trim_fixed(value, 0)
        }
    }
}
