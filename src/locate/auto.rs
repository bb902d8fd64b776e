//! Locators built on a clamped arithmetic sweep.
//!
//! Everything here walks an index-based grid: tick values are computed as
//! `start + step * index` rather than by accumulation, so long sweeps do
//! not drift. The grid is aligned below the range, clamped to it, and ticks
//! that land just outside snap onto the range edges within a small
//! tolerance.

use num_traits::Float;

use super::Locator;
use crate::scale::{util, Tick, TickIter};

const MAX_MINOR_TICKS: usize = 100_000;

fn auto_major_step<D: Float>(lo: D, hi: D) -> D {
    util::nice_step((hi - lo) / D::from(10.0).unwrap())
}

/// "Nice" 1-2-5 major steps near a tenth of the range, with minor ticks at
/// a tenth of the major step.
///
/// This is the default locator for plain numeric axes.
///
/// # Examples
///
/// ```
/// use skala::locate::{AutoLocator, Locator};
///
/// let auto = AutoLocator::new();
/// let majors: Vec<f64> = auto
///     .tick_values(&0.0, &100.0)
///     .filter(|t| t.level == 0)
///     .map(|t| t.value)
///     .collect();
/// assert_eq!(majors[..4], [0.0, 10.0, 20.0, 30.0]);
/// assert_eq!(majors.len(), 11);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoLocator;

impl AutoLocator {
    pub fn new() -> Self {
        Self
    }
}

impl<D: Float + 'static> Locator<D> for AutoLocator {
    fn tick_values(&self, vmin: &D, vmax: &D) -> TickIter<D> {
        let (lo, hi) = util::sorted_pair(*vmin, *vmax);
        if lo == hi {
            return TickIter::from_vec(vec![Tick { value: lo, level: 0 }]);
        }
        let minor = auto_major_step(lo, hi) / D::from(10.0).unwrap();
        TickIter::new(SweepTicks::new(lo, hi, minor, 10, false))
    }
}

/// Minor ticks only, subdividing the automatic major step.
///
/// Emits the positions between the [`AutoLocator`] majors, skipping the
/// majors themselves, for axes that draw the two levels separately.
#[derive(Debug, Clone, Copy)]
pub struct AutoMinorLocator {
    divisions: usize,
}

impl AutoMinorLocator {
    /// Five subdivisions per major interval.
    pub fn new() -> Self {
        Self { divisions: 5 }
    }

    /// Subdivides each major interval into `divisions` parts.
    pub fn new_with_divisions(divisions: usize) -> Self {
        Self {
            divisions: divisions.max(1),
        }
    }
}

impl Default for AutoMinorLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Float + 'static> Locator<D> for AutoMinorLocator {
    fn tick_values(&self, vmin: &D, vmax: &D) -> TickIter<D> {
        let (lo, hi) = util::sorted_pair(*vmin, *vmax);
        if lo == hi {
            return TickIter::empty();
        }
        let step = auto_major_step(lo, hi) / D::from(self.divisions).unwrap();
        TickIter::new(SweepTicks::new(lo, hi, step, self.divisions, true))
    }
}

/// At most `nbins` intervals on nice 1-2-5 steps.
///
/// # Examples
///
/// ```
/// use skala::locate::{Locator, MaxNLocator};
///
/// let ticks: Vec<f64> = MaxNLocator::new(5)
///     .tick_values(&0.0, &100.0)
///     .map(|t| t.value)
///     .collect();
/// assert_eq!(ticks, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MaxNLocator {
    nbins: usize,
}

impl MaxNLocator {
    pub fn new(nbins: usize) -> Self {
        Self {
            nbins: nbins.max(1),
        }
    }
}

impl Default for MaxNLocator {
    fn default() -> Self {
        Self::new(10)
    }
}

impl<D: Float + 'static> Locator<D> for MaxNLocator {
    fn tick_values(&self, vmin: &D, vmax: &D) -> TickIter<D> {
        let (lo, hi) = util::sorted_pair(*vmin, *vmax);
        if lo == hi {
            return TickIter::from_vec(vec![Tick { value: lo, level: 0 }]);
        }
        let step = util::nice_step((hi - lo) / D::from(self.nbins).unwrap());
        TickIter::new(SweepTicks::new(lo, hi, step, 1, false))
    }
}

/// Exactly `n` evenly spaced ticks from one end of the range to the other.
///
/// # Examples
///
/// ```
/// use skala::locate::{LinearLocator, Locator};
///
/// let ticks: Vec<f64> = LinearLocator::new(5)
///     .tick_values(&0.0, &1.0)
///     .map(|t| t.value)
///     .collect();
/// assert_eq!(ticks, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LinearLocator {
    n: usize,
}

impl LinearLocator {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl Default for LinearLocator {
    fn default() -> Self {
        Self::new(11)
    }
}

impl<D: Float + 'static> Locator<D> for LinearLocator {
    fn tick_values(&self, vmin: &D, vmax: &D) -> TickIter<D> {
        let (lo, hi) = util::sorted_pair(*vmin, *vmax);
        if self.n == 0 {
            return TickIter::empty();
        }
        if self.n == 1 || lo == hi {
            return TickIter::from_vec(vec![Tick { value: lo, level: 0 }]);
        }
        let span = hi - lo;
        let denom = D::from(self.n - 1).unwrap();
        let ticks = (0..self.n)
            .map(|i| {
                let value = if i + 1 == self.n {
                    hi
                } else {
                    lo + span * (D::from(i).unwrap() / denom)
                };
                Tick { value, level: 0 }
            })
            .collect();
        TickIter::from_vec(ticks)
    }
}

/// Ticks on integer multiples of a fixed step.
///
/// Multiples just outside the range snap onto its edges within a tenth of
/// the step. A step that is zero, negative, or not finite produces a single
/// tick at the low end of the range.
///
/// # Examples
///
/// ```
/// use skala::locate::{Locator, MultipleLocator};
///
/// let quarters = MultipleLocator::new(0.25);
/// let ticks: Vec<f64> = quarters.tick_values(&-0.3, &0.8).map(|t| t.value).collect();
/// assert_eq!(ticks, vec![-0.25, 0.0, 0.25, 0.5, 0.75]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MultipleLocator<D: Float> {
    step: D,
}

impl<D: Float> MultipleLocator<D> {
    pub fn new(step: D) -> Self {
        Self { step }
    }

    pub fn step(&self) -> D {
        self.step
    }
}

impl<D: Float + 'static> Locator<D> for MultipleLocator<D> {
    fn tick_values(&self, vmin: &D, vmax: &D) -> TickIter<D> {
        TickIter::new(SweepTicks::new(*vmin, *vmax, self.step, 1, false))
    }
}

/// Index-based tick sweep shared by the grid locators.
///
/// Emits `start + step * index` for ascending indices, clamped to the
/// original range. Every `major_every`-th index is a level 0 tick; the
/// rest are level 1. With `skip_majors` the level 0 positions are dropped
/// instead of emitted.
struct SweepTicks<D: Float> {
    state: SweepState<D>,
    remaining: usize,
}

enum SweepState<D: Float> {
    Single(Option<D>),
    Sweep(Sweep<D>),
    Done,
}

struct Sweep<D: Float> {
    start: D,
    end_tol: D,
    step: D,
    current_index: usize,
    clamp_min: D,
    clamp_max: D,
    epsilon: D,
    major_every: usize,
    skip_majors: bool,
    last_value: Option<D>,
}

impl<D: Float> SweepTicks<D> {
    fn new(min: D, max: D, step: D, major_every: usize, skip_majors: bool) -> Self {
        if min == max {
            return Self {
                state: SweepState::Single(Some(min)),
                remaining: 1,
            };
        }

        let (mut lo, mut hi) = util::sorted_pair(min, max);
        let clamp_min = lo;
        let clamp_max = hi;

        if !(step > D::zero()) || !step.is_finite() {
            return Self {
                state: SweepState::Single(Some(lo)),
                remaining: 1,
            };
        }

        let major_every = major_every.max(1);

        // Align the grid on major-step multiples spanning the range.
        let align = step * D::from(major_every).unwrap();
        let lo_ratio = lo / align;
        lo = lo_ratio.floor() * align;
        let hi_ratio = hi / align;
        hi = hi_ratio.ceil() * align;

        let epsilon = util::epsilon_from_step(&align);
        let end_tol = hi + epsilon;

        Self {
            state: SweepState::Sweep(Sweep {
                start: lo,
                end_tol,
                step,
                current_index: 0,
                clamp_min,
                clamp_max,
                epsilon,
                major_every,
                skip_majors,
                last_value: None,
            }),
            remaining: MAX_MINOR_TICKS,
        }
    }
}

impl<D: Float> Iterator for SweepTicks<D> {
    type Item = Tick<D>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            SweepState::Single(slot) => slot.take().map(|value| Tick { value, level: 0 }),
            SweepState::Sweep(state) => {
                while self.remaining > 0 {
                    // Derive the value from the index to avoid accumulation errors
                    let mut value =
                        state.start + state.step * D::from(state.current_index).unwrap();

                    if value > state.end_tol {
                        self.state = SweepState::Done;
                        return None;
                    }

                    self.remaining -= 1;

                    // Determine level using the index before incrementing
                    let index = state.current_index;
                    state.current_index += 1;

                    if value < state.clamp_min {
                        let diff = state.clamp_min - value;
                        if diff <= state.epsilon {
                            value = state.clamp_min;
                        } else {
                            continue;
                        }
                    } else if value > state.clamp_max {
                        let diff = value - state.clamp_max;
                        if diff <= state.epsilon {
                            value = state.clamp_max;
                        } else {
                            self.state = SweepState::Done;
                            return None;
                        }
                    }

                    let on_major = index % state.major_every == 0;
                    if state.skip_majors && on_major {
                        continue;
                    }
                    let level = if on_major { 0 } else { 1 };

                    if state.last_value.map(|last| last == value).unwrap_or(false) {
                        continue;
                    }
                    state.last_value = Some(value);

                    return Some(Tick { value, level });
                }

                self.state = SweepState::Done;
                None
            }
            SweepState::Done => None,
        }
    }
}
