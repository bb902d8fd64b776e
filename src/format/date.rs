//! Date and time tick labels.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

use super::Formatter;
use crate::locate::DateUnit;

/// Formats tick values as UTC timestamps with a strftime pattern.
///
/// Values are Unix timestamps in seconds. An invalid pattern or an
/// out-of-range timestamp yields an empty label rather than an error.
///
/// # Examples
///
/// ```
/// use skala::format::{DateFormatter, Formatter};
///
/// let fmt = DateFormatter::new("%Y-%m-%d");
/// assert_eq!(fmt.format(0.0, 0), "1970-01-01");
/// ```
#[derive(Debug, Clone)]
pub struct DateFormatter {
    pattern: String,
}

impl DateFormatter {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Formatter for DateFormatter {
    fn format(&self, value: f64, _index: usize) -> String {
        format_timestamp(&self.pattern, value)
    }
}

/// Picks a strftime pattern from the tick unit: years print as `%Y`, months
/// as `%b %Y`, days and weeks as `%b %d`, and times of day as clock labels.
#[derive(Debug, Clone, Copy)]
pub struct AutoDateFormatter {
    unit: DateUnit,
}

impl AutoDateFormatter {
    pub fn new(unit: DateUnit) -> Self {
        Self { unit }
    }

    pub fn pattern(&self) -> &'static str {
        match self.unit {
            DateUnit::Year => "%Y",
            DateUnit::Month => "%b %Y",
            DateUnit::Week | DateUnit::Day => "%b %d",
            DateUnit::Hour | DateUnit::Minute => "%H:%M",
            DateUnit::Second => "%H:%M:%S",
        }
    }
}

impl Formatter for AutoDateFormatter {
    fn format(&self, value: f64, _index: usize) -> String {
        format_timestamp(self.pattern(), value)
    }
}

fn format_timestamp(pattern: &str, value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let Some(datetime) = DateTime::<Utc>::from_timestamp(value.floor() as i64, 0) else {
        return String::new();
    };
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return String::new();
    }
    datetime.format_with_items(items.iter()).to_string()
}
