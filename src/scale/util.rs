use num_traits::Float;

/// Return `(min, max)` for two owned values.
pub fn sorted_pair<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Return references ordered as `(min, max)` without cloning.
pub fn sorted_pair_refs<'a, T: PartialOrd>(a: &'a T, b: &'a T) -> (&'a T, &'a T) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Compute a small epsilon relative to the provided step.
/// Returns step / 10, which is used as a tolerance for floating-point comparisons.
pub fn epsilon_from_step<T: Float>(step: &T) -> T {
    let ten = T::from(10.0).unwrap();
    *step / ten
}

/// Find a "nice" step size using a simple iterative approach.
/// Works directly with the generic type D without needing logarithms.
pub fn nice_step<D: Float>(raw_step: D) -> D {
    // Nice values to test: 1, 2, 5, 10, 20, 50, 100, etc.
    // We'll build these by repeatedly multiplying by 10, 5, 2
    let one = D::one();
    let two = one + one;
    let five = two + two + one;
    let ten = five + five;

    let abs_step = raw_step.abs();

    // Find a nice value close to raw_step
    // Start at 1 and scale up/down to find the right magnitude
    let mut candidate = one;

    // Scale up if raw_step is larger than our candidate
    while candidate * ten < abs_step {
        candidate = candidate * ten;
    }

    // Scale down if raw_step is smaller than our candidate / 10
    while candidate > abs_step * ten {
        candidate = candidate / ten;
    }

    // Now candidate is within an order of magnitude of abs_step
    // Try nice multiples: 1x, 2x, 5x, 10x of the base
    let candidates = [
        candidate,
        candidate * two,
        candidate * five,
        candidate * ten,
    ];

    // Pick the smallest candidate that is >= abs_step
    for c in candidates {
        if c >= abs_step {
            return c;
        }
    }

    // Fallback: return the largest candidate
    candidate * ten
}

/// Repair a degenerate interval before tick selection.
///
/// Swapped endpoints keep their original order; the expansion only kicks in
/// when the interval is empty, non-finite, or too small to subdivide. The
/// `expander` is the fraction of each endpoint's magnitude added on either
/// side (0.05 is the usual choice for view limits).
pub fn nonsingular<D: Float>(vmin: D, vmax: D, expander: D) -> (D, D) {
    let swapped = vmin > vmax;
    let (mut lo, mut hi) = sorted_pair(vmin, vmax);

    if !lo.is_finite() || !hi.is_finite() {
        return (-expander, expander);
    }

    let tiny = D::from(1e-15).unwrap();
    let maxabs = lo.abs().max(hi.abs());
    if maxabs < tiny {
        lo = -expander;
        hi = expander;
    } else if hi - lo <= maxabs * tiny {
        tracing::trace!(
            "expanding singular interval around {}",
            lo.to_f64().unwrap_or(f64::NAN)
        );
        lo = lo - expander * lo.abs();
        hi = hi + expander * hi.abs();
    }

    if swapped { (hi, lo) } else { (lo, hi) }
}
