//! Curve sampling for visualization.
//!
//! ## Purpose
//!
//! This module produces the ordered sequence of points a plotting layer
//! needs to draw a fitted curve: evenly spaced x-values spanning the
//! sample domain plus a 10% margin, with the prediction evaluated at
//! each.
//!
//! ## Design notes
//!
//! * **Degenerate domain**: When all samples share one x-value the
//!   padded span would be zero-width. The pad then falls back to a
//!   fixed ±2.0 window and the step to a 0.1 minimum, so the output is
//!   always a non-empty, positive-step sequence.
//! * **Non-finite predictions**: A predicted y that is NaN or infinite
//!   (e.g. exponential overflow far from the data) is silently dropped
//!   rather than emitted or treated as an error.
//!
//! ## Invariants
//!
//! * Output x-values are strictly increasing.
//! * Every emitted point is finite.
//! * A finite domain always yields at least one x-value to evaluate.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::sample::Sample;

// ============================================================================
// Constants
// ============================================================================

/// Fraction of the domain span added as margin on each side.
pub const PAD_FRACTION: f64 = 0.1;

/// Default number of steps across the padded domain.
pub const DEFAULT_STEPS: usize = 100;

/// Absolute pad used when the domain has zero width.
pub const FALLBACK_PAD: f64 = 2.0;

/// Minimum step used when the domain has zero width.
pub const MIN_STEP: f64 = 0.1;

// ============================================================================
// Curve Sampling
// ============================================================================

/// Sample `predict` over `[min_x − pad, max_x + pad]` with the default
/// step count.
///
/// See [`sample_curve_with`] for the padding and degeneracy policy.
pub fn sample_curve<T, F>(min_x: T, max_x: T, predict: F) -> Vec<Sample<T>>
where
    T: Float,
    F: Fn(T) -> T,
{
    sample_curve_with(min_x, max_x, DEFAULT_STEPS, predict)
}

/// Sample `predict` over the padded domain in `steps` steps.
///
/// The pad is 10% of the domain span; a zero-width domain falls back to
/// a ±2.0 window with a 0.1 minimum step. Points whose predicted y is
/// non-finite are dropped. Returns an empty sequence only for a
/// non-finite domain or `steps == 0`.
pub fn sample_curve_with<T, F>(min_x: T, max_x: T, steps: usize, predict: F) -> Vec<Sample<T>>
where
    T: Float,
    F: Fn(T) -> T,
{
    if !min_x.is_finite() || !max_x.is_finite() || steps == 0 {
        return Vec::new();
    }

    let (lo, hi) = if min_x <= max_x {
        (min_x, max_x)
    } else {
        (max_x, min_x)
    };

    let span = hi - lo;
    let steps_t = T::from(steps).unwrap();

    let (start, end, step) = if span > T::zero() {
        let pad = span * T::from(PAD_FRACTION).unwrap();
        let start = lo - pad;
        let end = hi + pad;
        (start, end, (end - start) / steps_t)
    } else {
        // All samples share one x: fixed window, clamped step.
        let pad = T::from(FALLBACK_PAD).unwrap();
        let start = lo - pad;
        let end = hi + pad;
        let step = ((end - start) / steps_t).max(T::from(MIN_STEP).unwrap());
        (start, end, step)
    };

    let mut points = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let x = start + step * T::from(i).unwrap();
        if x > end {
            break;
        }
        let y = predict(x);
        if y.is_finite() {
            points.push(Sample::new(x, y));
        }
    }

    points
}
