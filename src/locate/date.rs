//! Calendar-aligned locators for axes measured in UNIX epoch seconds.
//!
//! Ticks land on calendar boundaries in UTC: whole seconds, minutes, hours,
//! midnights, Mondays, the first of a month, the first of January. The
//! domain stays a plain numeric axis; only tick placement understands
//! dates.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use num_traits::Float;

use super::Locator;
use crate::scale::{util, Tick, TickIter};

const MAX_DATE_TICKS: usize = 10_000;
const SECS_PER_DAY: i64 = 86_400;

// 1970-01-05, the first Monday after the epoch, as a day index.
const EPOCH_MONDAY: i64 = 4;

// Conservative clamp keeping timestamp arithmetic inside the range of
// representable calendar dates.
const MAX_TS: i64 = 8_000_000_000_000;

/// Calendar unit a [`DateLocator`] steps in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// Ticks on calendar boundaries of a fixed unit, every `interval` units.
///
/// Day ticks sit on UTC midnights, week ticks on Mondays, month ticks on
/// the first of the month, year ticks on the first of January. Intervals
/// align to a fixed grid (even hours, years divisible by the interval) so
/// panning the domain never shifts the grid.
///
/// # Examples
///
/// ```
/// use skala::locate::{DateLocator, DateUnit, Locator};
///
/// // 2021-01-01 00:00 UTC, one day in six hour steps.
/// let start = 1_609_459_200.0_f64;
/// let locator = DateLocator::new(DateUnit::Hour, 6);
/// let ticks: Vec<f64> = locator
///     .tick_values(&start, &(start + 86_400.0))
///     .map(|t| t.value)
///     .collect();
/// assert_eq!(ticks.len(), 5);
/// assert_eq!(ticks[1] - ticks[0], 6.0 * 3600.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DateLocator {
    unit: DateUnit,
    interval: usize,
}

impl DateLocator {
    pub fn new(unit: DateUnit, interval: usize) -> Self {
        Self {
            unit,
            interval: interval.clamp(1, 1_000_000),
        }
    }

    pub fn unit(&self) -> DateUnit {
        self.unit
    }

    pub fn interval(&self) -> usize {
        self.interval
    }
}

impl<D: Float + 'static> Locator<D> for DateLocator {
    fn tick_values(&self, vmin: &D, vmax: &D) -> TickIter<D> {
        let (lo, hi) = util::sorted_pair_refs(vmin, vmax);
        let (Some(lo), Some(hi)) = (lo.to_f64(), hi.to_f64()) else {
            return TickIter::empty();
        };
        let ticks = unit_ticks(self.unit, self.interval as i64, lo, hi);
        TickIter::from_vec(
            ticks
                .into_iter()
                .filter_map(|ts| D::from(ts).map(|value| Tick { value, level: 0 }))
                .collect(),
        )
    }
}

/// Picks a calendar unit and interval so the span gets a readable number
/// of ticks, then places them like [`DateLocator`].
///
/// The choice walks a ladder from single seconds up to decades, taking the
/// first step that yields at most `max_ticks` ticks (12 by default).
#[derive(Debug, Clone, Copy)]
pub struct AutoDateLocator {
    max_ticks: usize,
}

impl AutoDateLocator {
    pub fn new() -> Self {
        Self { max_ticks: 12 }
    }

    /// Unit and interval that would be used for a span of `span_secs`.
    ///
    /// Exposed so a label formatter can be matched to the chosen unit.
    pub fn unit_for_span(&self, span_secs: f64) -> (DateUnit, usize) {
        const LADDER: &[(DateUnit, usize)] = &[
            (DateUnit::Second, 1),
            (DateUnit::Second, 5),
            (DateUnit::Second, 15),
            (DateUnit::Second, 30),
            (DateUnit::Minute, 1),
            (DateUnit::Minute, 5),
            (DateUnit::Minute, 15),
            (DateUnit::Minute, 30),
            (DateUnit::Hour, 1),
            (DateUnit::Hour, 3),
            (DateUnit::Hour, 6),
            (DateUnit::Hour, 12),
            (DateUnit::Day, 1),
            (DateUnit::Day, 2),
            (DateUnit::Week, 1),
            (DateUnit::Week, 2),
            (DateUnit::Month, 1),
            (DateUnit::Month, 3),
            (DateUnit::Month, 6),
            (DateUnit::Year, 1),
            (DateUnit::Year, 2),
            (DateUnit::Year, 5),
            (DateUnit::Year, 10),
        ];

        let budget = self.max_ticks as f64;
        for &(unit, interval) in LADDER {
            if span_secs / approx_step_secs(unit, interval) <= budget {
                return (unit, interval);
            }
        }

        // Beyond the ladder: whole years on a nice step.
        let years = span_secs / approx_step_secs(DateUnit::Year, 1);
        let step = util::nice_step(years / budget);
        (DateUnit::Year, step.ceil() as usize)
    }
}

impl Default for AutoDateLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Float + 'static> Locator<D> for AutoDateLocator {
    fn tick_values(&self, vmin: &D, vmax: &D) -> TickIter<D> {
        let (lo, hi) = util::sorted_pair_refs(vmin, vmax);
        let (Some(lo), Some(hi)) = (lo.to_f64(), hi.to_f64()) else {
            return TickIter::empty();
        };
        let (unit, interval) = self.unit_for_span(hi - lo);
        DateLocator::new(unit, interval).tick_values(vmin, vmax)
    }
}

fn approx_step_secs(unit: DateUnit, interval: usize) -> f64 {
    let unit_secs = match unit {
        DateUnit::Second => 1.0,
        DateUnit::Minute => 60.0,
        DateUnit::Hour => 3_600.0,
        DateUnit::Day => 86_400.0,
        DateUnit::Week => 604_800.0,
        // Mean Gregorian month and year
        DateUnit::Month => 2_629_746.0,
        DateUnit::Year => 31_556_952.0,
    };
    unit_secs * interval as f64
}

fn unit_ticks(unit: DateUnit, interval: i64, lo: f64, hi: f64) -> Vec<i64> {
    if !lo.is_finite() || !hi.is_finite() {
        return Vec::new();
    }
    let lo_ts = (lo.ceil() as i64).clamp(-MAX_TS, MAX_TS);
    let hi_ts = (hi.floor() as i64).clamp(-MAX_TS, MAX_TS);
    if lo_ts > hi_ts {
        return Vec::new();
    }

    let mut out = Vec::new();
    match unit {
        DateUnit::Second => aligned_seconds(lo_ts, hi_ts, interval, &mut out),
        DateUnit::Minute => aligned_seconds(lo_ts, hi_ts, 60 * interval, &mut out),
        DateUnit::Hour => aligned_seconds(lo_ts, hi_ts, 3_600 * interval, &mut out),
        DateUnit::Day => aligned_days(lo_ts, hi_ts, interval, 0, &mut out),
        DateUnit::Week => aligned_days(lo_ts, hi_ts, 7 * interval, EPOCH_MONDAY, &mut out),
        DateUnit::Month => aligned_months(lo_ts, hi_ts, interval, &mut out),
        DateUnit::Year => aligned_years(lo_ts, hi_ts, interval, &mut out),
    }
    out
}

fn aligned_seconds(lo: i64, hi: i64, step: i64, out: &mut Vec<i64>) {
    let mut t = lo - lo.rem_euclid(step);
    if t < lo {
        t += step;
    }
    while t <= hi && out.len() < MAX_DATE_TICKS {
        out.push(t);
        t += step;
    }
}

fn aligned_days(lo: i64, hi: i64, step_days: i64, anchor_day: i64, out: &mut Vec<i64>) {
    let lo_day = lo.div_euclid(SECS_PER_DAY);
    let mut day = lo_day - (lo_day - anchor_day).rem_euclid(step_days);
    let mut t = day * SECS_PER_DAY;
    while t < lo {
        day += step_days;
        t = day * SECS_PER_DAY;
    }
    while t <= hi && out.len() < MAX_DATE_TICKS {
        out.push(t);
        day += step_days;
        t = day * SECS_PER_DAY;
    }
}

fn aligned_months(lo: i64, hi: i64, interval: i64, out: &mut Vec<i64>) {
    let Some(start) = DateTime::<Utc>::from_timestamp(lo, 0) else {
        return;
    };
    let month_index = i64::from(start.year()) * 12 + i64::from(start.month0());
    let mut idx = month_index - month_index.rem_euclid(interval);
    while out.len() < MAX_DATE_TICKS {
        let Ok(year) = i32::try_from(idx.div_euclid(12)) else {
            return;
        };
        let month = idx.rem_euclid(12) as u32 + 1;
        let Some(t) = ymd_midnight(year, month, 1) else {
            return;
        };
        if t > hi {
            return;
        }
        if t >= lo {
            out.push(t);
        }
        idx += interval;
    }
}

fn aligned_years(lo: i64, hi: i64, interval: i64, out: &mut Vec<i64>) {
    let Some(start) = DateTime::<Utc>::from_timestamp(lo, 0) else {
        return;
    };
    let mut year = i64::from(start.year());
    year -= year.rem_euclid(interval);
    while out.len() < MAX_DATE_TICKS {
        let Ok(y) = i32::try_from(year) else {
            return;
        };
        let Some(t) = ymd_midnight(y, 1, 1) else {
            return;
        };
        if t > hi {
            return;
        }
        if t >= lo {
            out.push(t);
        }
        year += interval;
    }
}

fn ymd_midnight(year: i32, month: u32, day: u32) -> Option<i64> {
    Some(
        NaiveDate::from_ymd_opt(year, month, day)?
            .and_hms_opt(0, 0, 0)?
            .and_utc()
            .timestamp(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2021-01-01 00:00:00 UTC
    const JAN_2021: i64 = 1_609_459_200;

    fn collect(locator: &DateLocator, lo: f64, hi: f64) -> Vec<f64> {
        Locator::<f64>::tick_values(locator, &lo, &hi)
            .map(|t| t.value)
            .collect()
    }

    #[test]
    fn second_ticks_start_at_the_first_whole_second() {
        let ticks = collect(&DateLocator::new(DateUnit::Second, 1), 0.5, 5.5);
        assert_eq!(ticks, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn hour_ticks_align_to_even_hours() {
        let start = JAN_2021 as f64;
        let ticks = collect(&DateLocator::new(DateUnit::Hour, 6), start, start + 86_400.0);
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[0], start);
        assert_eq!(ticks[4], start + 86_400.0);
    }

    #[test]
    fn day_ticks_snap_to_utc_midnights() {
        let lo = (JAN_2021 + 3_600) as f64;
        let hi = (JAN_2021 + 4 * 86_400) as f64;
        let ticks = collect(&DateLocator::new(DateUnit::Day, 1), lo, hi);
        assert_eq!(ticks.len(), 4);
        assert_eq!(ticks[0], (JAN_2021 + 86_400) as f64);
        for pair in ticks.windows(2) {
            assert_eq!(pair[1] - pair[0], 86_400.0);
        }
    }

    #[test]
    fn week_ticks_fall_on_mondays() {
        // January 2021: Mondays on the 4th, 11th, 18th and 25th.
        let lo = JAN_2021 as f64;
        let hi = (JAN_2021 + 30 * 86_400) as f64;
        let ticks = collect(&DateLocator::new(DateUnit::Week, 1), lo, hi);
        assert_eq!(ticks.len(), 4);
        assert_eq!(ticks[0], (JAN_2021 + 3 * 86_400) as f64);
        for t in &ticks {
            let day = (*t as i64) / SECS_PER_DAY;
            assert_eq!((day - EPOCH_MONDAY).rem_euclid(7), 0, "{t} not a Monday");
        }
    }

    #[test]
    fn quarterly_ticks_land_on_quarter_months() {
        // 2020-01-01 .. 2021-01-01
        let lo = 1_577_836_800.0;
        let hi = JAN_2021 as f64;
        let ticks = collect(&DateLocator::new(DateUnit::Month, 3), lo, hi);
        assert_eq!(
            ticks,
            vec![
                1_577_836_800.0, // Jan 1
                1_585_699_200.0, // Apr 1
                1_593_561_600.0, // Jul 1
                1_601_510_400.0, // Oct 1
                JAN_2021 as f64,
            ]
        );
    }

    #[test]
    fn year_ticks_align_to_the_interval_grid() {
        // 1998-01-01 .. 2021-01-01 on five year steps
        let lo = 883_612_800.0;
        let hi = JAN_2021 as f64;
        let ticks = collect(&DateLocator::new(DateUnit::Year, 5), lo, hi);
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[0], 946_684_800.0); // 2000-01-01
        assert_eq!(ticks[4], 1_577_836_800.0); // 2020-01-01
    }

    #[test]
    fn auto_picks_a_unit_matching_the_span() {
        let auto = AutoDateLocator::new();
        assert_eq!(auto.unit_for_span(10.0), (DateUnit::Second, 1));
        assert_eq!(auto.unit_for_span(7_200.0), (DateUnit::Minute, 15));
        assert_eq!(auto.unit_for_span(31_556_952.0), (DateUnit::Month, 1));
        assert_eq!(auto.unit_for_span(10.0 * 31_556_952.0), (DateUnit::Year, 1));
    }

    #[test]
    fn auto_keeps_tick_counts_readable() {
        let auto = AutoDateLocator::new();
        for &span in &[3_600.0, 90.0 * 86_400.0, 31_556_952.0, 1.0e9] {
            let lo = JAN_2021 as f64;
            let count = Locator::<f64>::tick_values(&auto, &lo, &(lo + span)).count();
            assert!(count <= 14, "span {span} gave {count} ticks");
            assert!(count >= 2, "span {span} gave {count} ticks");
        }
    }

    #[test]
    fn empty_and_non_finite_ranges_produce_no_ticks() {
        let locator = DateLocator::new(DateUnit::Second, 1);
        assert_eq!(collect(&locator, 3.2, 3.8), Vec::<f64>::new());
        assert_eq!(collect(&locator, f64::NAN, 10.0), Vec::<f64>::new());
    }
}
