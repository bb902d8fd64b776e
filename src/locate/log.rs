//! Decade-grid locator for logarithmic axes.

use num_traits::Float;

use super::Locator;
use crate::scale::{util, Tick, TickIter};

/// Major ticks at integer powers of the base, minor ticks at integer
/// multiples within each decade.
///
/// For base 10 the minors sit at 2, 3, ... 9 times each power. Bases at or
/// below 3 have no room for integer multiples and produce majors only.
/// When the range or base cannot support a decade grid (non-positive
/// endpoints, base at or near 1) the locator degrades to ticks at the two
/// range endpoints.
///
/// # Examples
///
/// ```
/// use skala::locate::{Locator, LogLocator};
///
/// let log = LogLocator::new(10.0);
/// let majors: Vec<f64> = log
///     .tick_values(&1.0, &1000.0)
///     .filter(|t| t.level == 0)
///     .map(|t| t.value)
///     .collect();
/// assert_eq!(majors, vec![1.0, 10.0, 100.0, 1000.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LogLocator<D: Float> {
    base: D,
    include_minors: bool,
}

impl<D: Float> LogLocator<D> {
    /// Majors at powers of `base` with in-decade minors.
    pub fn new(base: D) -> Self {
        Self {
            base,
            include_minors: true,
        }
    }

    /// Majors at powers of `base` only.
    pub fn majors_only(base: D) -> Self {
        Self {
            base,
            include_minors: false,
        }
    }

    pub fn base(&self) -> D {
        self.base
    }
}

impl<D: Float + 'static> Locator<D> for LogLocator<D> {
    fn tick_values(&self, vmin: &D, vmax: &D) -> TickIter<D> {
        TickIter::new(LogTicks::new(self.base, *vmin, *vmax, self.include_minors))
    }
}

/// Exponent span `[floor(log_base(lo)), ceil(log_base(hi))]` of a range,
/// or `None` when the range or base cannot carry a decade grid.
fn exponent_range<D>(min: &D, max: &D, base: &D) -> Option<(i32, i32)>
where
    D: Float,
{
    let zero = D::zero();
    let one = D::one();
    let ten = D::from(10.0).unwrap();

    let (lo, hi) = util::sorted_pair_refs(min, max);

    // Validate inputs
    if lo <= &zero || hi <= &zero || base <= &zero {
        return None;
    }

    // Check if base is too close to 1 (use a small epsilon)
    let eps = one / ten;
    let eps_small = eps / (ten * ten);

    if (*base - one).abs() < eps_small {
        return None;
    }

    let ln_min = lo.ln();
    let ln_max = hi.ln();
    let ln_base = base.ln();

    let e_min = (ln_min / ln_base).floor();
    let e_max = (ln_max / ln_base).ceil();

    // Convert to i32 by successive addition/subtraction
    // This is a bit clunky but works without requiring a generic to_i32 method
    let mut e_min_i32 = 0i32;
    let mut counter = zero;

    if e_min >= zero {
        while counter < e_min && e_min_i32 < 1000 {
            counter = counter + one;
            e_min_i32 += 1;
        }
    } else {
        while counter > e_min && e_min_i32 > -1000 {
            counter = counter - one;
            e_min_i32 -= 1;
        }
    }

    let mut e_max_i32 = 0i32;
    let mut counter = zero;

    if e_max >= zero {
        while counter < e_max && e_max_i32 < 1000 {
            counter = counter + one;
            e_max_i32 += 1;
        }
    } else {
        while counter > e_max && e_max_i32 > -1000 {
            counter = counter - one;
            e_max_i32 -= 1;
        }
    }

    Some((e_min_i32, e_max_i32))
}

/// Integer multiples strictly between 1 and the base, used as in-decade
/// minor tick factors.
fn build_minor_multipliers<D: Float>(base: &D) -> Vec<D> {
    let one = D::one();
    let floor = base.floor();
    let mut multipliers = Vec::new();

    let mut value = one + one;
    let mut guard = 0;

    while value < floor && guard < 100 {
        multipliers.push(value);
        value = value + one;
        guard += 1;
    }

    multipliers
}

struct LogTicks<D: Float> {
    state: LogTicksState<D>,
}

enum LogTicksState<D: Float> {
    Normal(DecadeState<D>),
    Fallback(FallbackState<D>),
    Done,
}

struct DecadeState<D: Float> {
    base: D,
    domain_min: D,
    domain_max: D,
    exponent: i32,
    exponent_max: i32,
    current_decade: D,
    multipliers: Vec<D>,
    multiplier_idx: usize,
    stage: LogStage,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum LogStage {
    Major,
    Minor,
}

struct FallbackState<D: Float> {
    first: Option<D>,
    second: Option<D>,
}

impl<D: Float> LogTicks<D> {
    fn new(base: D, min: D, max: D, include_minors: bool) -> Self {
        let (domain_min, domain_max) = util::sorted_pair(min, max);

        if let Some((e_min, e_max)) = exponent_range(&domain_min, &domain_max, &base) {
            let mut multipliers = if include_minors {
                build_minor_multipliers(&base)
            } else {
                Vec::new()
            };
            multipliers.shrink_to_fit();
            let current_decade = base.powi(e_min);

            Self {
                state: LogTicksState::Normal(DecadeState {
                    base,
                    domain_min,
                    domain_max,
                    exponent: e_min,
                    exponent_max: e_max,
                    current_decade,
                    multipliers,
                    multiplier_idx: 0,
                    stage: LogStage::Major,
                }),
            }
        } else {
            Self {
                state: LogTicksState::Fallback(FallbackState {
                    first: Some(min),
                    second: Some(max),
                }),
            }
        }
    }
}

impl<D: Float> Iterator for LogTicks<D> {
    type Item = Tick<D>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            LogTicksState::Normal(state) => {
                if let Some(tick) = state.next_tick() {
                    Some(tick)
                } else {
                    self.state = LogTicksState::Done;
                    None
                }
            }
            LogTicksState::Fallback(state) => {
                if let Some(value) = state.first.take() {
                    Some(Tick { value, level: 0 })
                } else if let Some(value) = state.second.take() {
                    Some(Tick { value, level: 0 })
                } else {
                    self.state = LogTicksState::Done;
                    None
                }
            }
            LogTicksState::Done => None,
        }
    }
}

impl<D: Float> DecadeState<D> {
    fn next_tick(&mut self) -> Option<Tick<D>> {
        loop {
            if self.exponent > self.exponent_max {
                return None;
            }

            match self.stage {
                LogStage::Major => {
                    let value = self.current_decade;

                    // Prepare next stage
                    if self.multipliers.is_empty() {
                        if !self.advance_decade() {
                            // Still return current value if it was valid
                            if value >= self.domain_min && value <= self.domain_max {
                                return Some(Tick { value, level: 0 });
                            } else {
                                return None;
                            }
                        }
                    } else {
                        self.stage = LogStage::Minor;
                        self.multiplier_idx = 0;
                    }

                    if value >= self.domain_min && value <= self.domain_max {
                        return Some(Tick { value, level: 0 });
                    }
                }
                LogStage::Minor => {
                    if self.multiplier_idx >= self.multipliers.len() {
                        if !self.advance_decade() {
                            return None;
                        }
                        self.stage = LogStage::Major;
                        continue;
                    }

                    let multiplier = self.multipliers[self.multiplier_idx];
                    self.multiplier_idx += 1;
                    let value = self.current_decade * multiplier;

                    if value >= self.domain_min && value <= self.domain_max {
                        return Some(Tick { value, level: 1 });
                    }
                }
            }
        }
    }

    fn advance_decade(&mut self) -> bool {
        self.exponent += 1;
        if self.exponent > self.exponent_max {
            false
        } else {
            self.current_decade = self.base.powi(self.exponent);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(locator: &LogLocator<f64>, lo: f64, hi: f64) -> Vec<Tick<f64>> {
        locator.tick_values(&lo, &hi).collect()
    }

    #[test]
    fn base_ten_emits_majors_and_in_decade_minors() {
        let ticks = collect(&LogLocator::new(10.0), 1.0, 1000.0);

        let majors: Vec<f64> = ticks
            .iter()
            .filter(|t| t.level == 0)
            .map(|t| t.value)
            .collect();
        assert_eq!(majors, vec![1.0, 10.0, 100.0, 1000.0]);

        let minors: Vec<f64> = ticks
            .iter()
            .filter(|t| t.level == 1)
            .map(|t| t.value)
            .collect();
        assert_eq!(minors.len(), 24);
        assert!(minors.contains(&2.0));
        assert!(minors.contains(&90.0));
        assert!(minors.contains(&900.0));
    }

    #[test]
    fn majors_only_suppresses_the_minor_grid() {
        let ticks = collect(&LogLocator::majors_only(10.0), 1.0, 1000.0);
        let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![1.0, 10.0, 100.0, 1000.0]);
        assert!(ticks.iter().all(|t| t.level == 0));
    }

    #[test]
    fn partial_decades_are_clipped_to_the_range() {
        let ticks = collect(&LogLocator::new(10.0), 5.0, 500.0);

        let majors: Vec<f64> = ticks
            .iter()
            .filter(|t| t.level == 0)
            .map(|t| t.value)
            .collect();
        assert_eq!(majors, vec![10.0, 100.0]);

        for t in &ticks {
            assert!(t.value >= 5.0 && t.value <= 500.0, "{}", t.value);
        }
    }

    #[test]
    fn small_bases_have_no_minor_multipliers() {
        let ticks = collect(&LogLocator::new(2.0), 1.0, 16.0);
        let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![1.0, 2.0, 4.0, 8.0, 16.0]);
        assert!(ticks.iter().all(|t| t.level == 0));
    }

    #[test]
    fn unusable_ranges_fall_back_to_the_endpoints() {
        let ticks = collect(&LogLocator::new(10.0), 0.0, 100.0);
        let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0.0, 100.0]);

        let ticks = collect(&LogLocator::new(1.0), 1.0, 100.0);
        assert_eq!(ticks.len(), 2);
    }

    #[test]
    fn reversed_ranges_behave_like_sorted_ones() {
        let forward = collect(&LogLocator::new(10.0), 1.0, 100.0);
        let backward = collect(&LogLocator::new(10.0), 100.0, 1.0);
        let fv: Vec<f64> = forward.iter().map(|t| t.value).collect();
        let bv: Vec<f64> = backward.iter().map(|t| t.value).collect();
        assert_eq!(fv, bv);
    }
}
