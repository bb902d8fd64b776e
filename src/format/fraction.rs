//! Fraction-of-a-constant labels.

use std::f64::consts;

use super::Formatter;

const MAX_DENOMINATOR: i64 = 1_000_000;

/// Labels values as rational multiples of a unit constant.
///
/// Each value is divided by the unit and snapped to the nearest fraction
/// with denominator at most one million, then rendered in LaTeX math mode.
///
/// # Examples
///
/// ```
/// use std::f64::consts::PI;
///
/// use skala::format::{Formatter, FracFormatter};
///
/// let fmt = FracFormatter::pi();
/// assert_eq!(fmt.format(PI, 0), r"$\pi$");
/// assert_eq!(fmt.format(2.0 * PI, 0), r"$2\pi$");
/// assert_eq!(fmt.format(-PI / 2.0, 0), r"$-\pi/2$");
/// assert_eq!(fmt.format(0.0, 0), "0");
/// ```
#[derive(Debug, Clone)]
pub struct FracFormatter {
    unit: f64,
    symbol: String,
}

impl FracFormatter {
    pub fn new(unit: f64, symbol: impl Into<String>) -> Self {
        Self {
            unit,
            symbol: symbol.into(),
        }
    }

    /// Multiples of pi, rendered with `\pi`.
    pub fn pi() -> Self {
        Self::new(consts::PI, r"\pi")
    }

    /// Multiples of Euler's number.
    pub fn e() -> Self {
        Self::new(consts::E, "e")
    }
}

impl Formatter for FracFormatter {
    fn format(&self, value: f64, _index: usize) -> String {
        let Some((numerator, denominator)) = limit_denominator(value / self.unit, MAX_DENOMINATOR)
        else {
            return String::new();
        };
        let symbol = &self.symbol;
        if numerator == 0 {
            return "0".to_owned();
        }
        if denominator == 1 {
            match numerator {
                1 => format!("${symbol}$"),
                -1 => format!("$-{symbol}$"),
                _ => format!("${numerator}{symbol}$"),
            }
        } else {
            match numerator {
                1 => format!("${symbol}/{denominator}$"),
                -1 => format!("$-{symbol}/{denominator}$"),
                _ => format!("${numerator}{symbol}/{denominator}$"),
            }
        }
    }
}

/// Closest fraction to `target` with denominator at most `max_denominator`,
/// via continued-fraction convergents. Returns `None` for values a fraction
/// cannot represent.
fn limit_denominator(target: f64, max_denominator: i64) -> Option<(i64, i64)> {
    if !target.is_finite() {
        return None;
    }
    let negative = target < 0.0;
    let target_abs = target.abs();
    if target_abs >= 9.0e15 {
        return None;
    }

    // Convergents p/q of the continued fraction of |target|.
    let (mut p0, mut q0) = (0_i64, 1_i64);
    let (mut p1, mut q1) = (1_i64, 0_i64);
    let mut remainder = target_abs;
    let mut best = (target_abs.round() as i64, 1);

    for _ in 0..64 {
        let whole = remainder.floor();
        let coefficient = whole as i64;
        let (Some(p2), Some(q2)) = (
            coefficient.checked_mul(p1).and_then(|v| v.checked_add(p0)),
            coefficient.checked_mul(q1).and_then(|v| v.checked_add(q0)),
        ) else {
            break;
        };
        if q2 > max_denominator {
            // The next convergent overshoots the denominator bound; pick the
            // better of the bounded semiconvergent and the last convergent.
            let steps = (max_denominator - q0) / q1;
            let semi = (
                steps.checked_mul(p1).and_then(|v| v.checked_add(p0)),
                steps.checked_mul(q1).and_then(|v| v.checked_add(q0)),
            );
            if let (Some(sp), Some(sq)) = semi {
                let semi_error = (sp as f64 / sq as f64 - target_abs).abs();
                let conv_error = (p1 as f64 / q1 as f64 - target_abs).abs();
                best = if semi_error < conv_error {
                    (sp, sq)
                } else {
                    (p1, q1)
                };
            }
            break;
        }
        best = (p2, q2);
        let fractional = remainder - whole;
        if fractional < 1e-12 {
            break;
        }
        (p0, q0) = (p1, q1);
        (p1, q1) = (p2, q2);
        remainder = fractional.recip();
    }

    let (numerator, denominator) = best;
    Some((if negative { -numerator } else { numerator }, denominator))
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{E, PI};

    use super::*;

    #[test]
    fn pi_multiples_render_compactly() {
        let fmt = FracFormatter::pi();
        assert_eq!(fmt.format(0.0, 0), "0");
        assert_eq!(fmt.format(PI, 0), r"$\pi$");
        assert_eq!(fmt.format(-PI, 0), r"$-\pi$");
        assert_eq!(fmt.format(2.0 * PI, 0), r"$2\pi$");
        assert_eq!(fmt.format(-3.0 * PI, 0), r"$-3\pi$");
    }

    #[test]
    fn pi_fractions_use_a_slash() {
        let fmt = FracFormatter::pi();
        assert_eq!(fmt.format(PI / 2.0, 0), r"$\pi/2$");
        assert_eq!(fmt.format(-PI / 2.0, 0), r"$-\pi/2$");
        assert_eq!(fmt.format(0.75 * PI, 0), r"$3\pi/4$");
        assert_eq!(fmt.format(PI / 3.0, 0), r"$\pi/3$");
    }

    #[test]
    fn e_unit_uses_its_own_symbol() {
        let fmt = FracFormatter::e();
        assert_eq!(fmt.format(E, 0), "$e$");
        assert_eq!(fmt.format(2.0 * E, 0), "$2e$");
        assert_eq!(fmt.format(E / 2.0, 0), "$e/2$");
    }

    #[test]
    fn denominators_stay_within_the_bound() {
        let sqrt2 = 2.0_f64.sqrt();
        let (p, q) = limit_denominator(sqrt2, MAX_DENOMINATOR).unwrap();
        assert!(q <= MAX_DENOMINATOR);
        assert!((p as f64 / q as f64 - sqrt2).abs() < 1e-10);
    }

    #[test]
    fn small_denominators_are_found_exactly() {
        assert_eq!(limit_denominator(0.5, MAX_DENOMINATOR), Some((1, 2)));
        assert_eq!(limit_denominator(-0.25, MAX_DENOMINATOR), Some((-1, 4)));
        assert_eq!(limit_denominator(3.0, MAX_DENOMINATOR), Some((3, 1)));
        assert_eq!(limit_denominator(0.0, MAX_DENOMINATOR), Some((0, 1)));
    }

    #[test]
    fn non_finite_values_have_no_fraction() {
        assert_eq!(limit_denominator(f64::NAN, MAX_DENOMINATOR), None);
        assert_eq!(limit_denominator(f64::INFINITY, MAX_DENOMINATOR), None);
    }
}
