//! Locators with explicitly chosen positions, or none at all.

use num_traits::Float;

use super::Locator;
use crate::scale::{Tick, TickIter};

/// Produces no ticks.
///
/// Useful for axes that are drawn but deliberately unlabeled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLocator;

impl NullLocator {
    pub fn new() -> Self {
        Self
    }
}

impl<D: Float + 'static> Locator<D> for NullLocator {
    fn tick_values(&self, _vmin: &D, _vmax: &D) -> TickIter<D> {
        TickIter::empty()
    }
}

/// Ticks at an explicit list of positions.
///
/// Positions are sorted and deduplicated at construction, NaN entries are
/// dropped. Every position is emitted on every call regardless of the
/// requested range; positions outside the current domain are the caller's
/// to cull.
///
/// # Examples
///
/// ```
/// use skala::locate::{FixedLocator, Locator};
///
/// let fixed = FixedLocator::new(vec![80.0, -80.0, 0.0, 0.0]);
/// let ticks: Vec<f64> = fixed.tick_values(&-90.0, &90.0).map(|t| t.value).collect();
/// assert_eq!(ticks, vec![-80.0, 0.0, 80.0]);
/// ```
#[derive(Debug, Clone)]
pub struct FixedLocator<D: Float> {
    positions: Vec<D>,
}

impl<D: Float> FixedLocator<D> {
    pub fn new(mut positions: Vec<D>) -> Self {
        positions.retain(|v| !v.is_nan());
        positions.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        positions.dedup_by(|a, b| a == b);
        Self { positions }
    }

    pub fn positions(&self) -> &[D] {
        &self.positions
    }
}

impl<D: Float + 'static> Locator<D> for FixedLocator<D> {
    fn tick_values(&self, _vmin: &D, _vmax: &D) -> TickIter<D> {
        TickIter::from_vec(
            self.positions
                .iter()
                .map(|&value| Tick { value, level: 0 })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_locator_is_empty() {
        let ticks: Vec<Tick<f64>> = NullLocator::new().tick_values(&0.0, &100.0).collect();
        assert!(ticks.is_empty());
    }

    #[test]
    fn fixed_positions_are_sorted_deduplicated_and_nan_free() {
        let fixed = FixedLocator::new(vec![3.0, f64::NAN, 1.0, 3.0, -2.0]);
        assert_eq!(fixed.positions(), &[-2.0, 1.0, 3.0]);
    }

    #[test]
    fn fixed_positions_ignore_the_requested_range() {
        let fixed = FixedLocator::new(vec![-500.0, 0.0, 500.0]);
        let ticks: Vec<f64> = fixed.tick_values(&-1.0, &1.0).map(|t| t.value).collect();
        assert_eq!(ticks, vec![-500.0, 0.0, 500.0]);
    }
}
