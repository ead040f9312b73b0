//! Per-model least-squares coefficient solvers.
//!
//! ## Purpose
//!
//! This module computes fitted coefficients for each model family. It
//! produces coefficients only; validation, R² computation, and result
//! assembly live in the engine layer.
//!
//! ## Design notes
//!
//! * **Linear**: Solved by the direct 2-variable normal-equation
//!   formula from Σx, Σy, Σxy, Σx². When the denominator
//!   `n·Σx² − (Σx)²` is (numerically) zero — all x identical — the fit
//!   degrades to the constant `y = mean(y)` instead of failing. This is
//!   the only model with a degeneracy fallback.
//! * **Quadratic/Cubic**: Normal equations of degree 2 or 3, solved by
//!   Gaussian elimination. The solver returns coefficients in ascending
//!   powers; they are reversed here to the descending public
//!   convention. A degenerate system propagates as `None`.
//! * **Exponential**: Each sample is transformed to `(x, ln y)` and the
//!   linear path is run on the transformed set; the intercept is
//!   exponentiated back. The caller must have established `y > 0`.
//!
//! ## Invariants
//!
//! * Inputs satisfy the model's minimum sample count (engine-checked).
//! * Returned coefficient slices follow the descending convention.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::normal::build_normal_equations;
use crate::math::solver::{GaussianSolver, TOLERANCE};
use crate::primitives::sample::Sample;

// ============================================================================
// Linear
// ============================================================================

/// Outcome of the direct 2-variable linear solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearSolution<T: Float> {
    /// Slope `a` in `y = a·x + b`. Zero for a degenerate design.
    pub slope: T,
    /// Intercept `b` in `y = a·x + b`. The mean of y for a degenerate
    /// design.
    pub intercept: T,
    /// Whether the constant-fit fallback was taken.
    pub degenerate: bool,
}

/// Fit `y = a·x + b` by the closed-form normal-equation formula.
///
/// Falls back to the constant fit `a = 0, b = mean(y)` when the design
/// is degenerate (all x identical within tolerance); it never fails.
pub fn linear<T: Float>(samples: &[Sample<T>]) -> LinearSolution<T> {
    let n = T::from(samples.len()).unwrap();

    let mut sum_x = T::zero();
    let mut sum_y = T::zero();
    let mut sum_xy = T::zero();
    let mut sum_x2 = T::zero();

    for s in samples {
        sum_x = sum_x + s.x;
        sum_y = sum_y + s.y;
        sum_xy = sum_xy + s.x * s.y;
        sum_x2 = sum_x2 + s.x * s.x;
    }

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator.abs() < T::from(TOLERANCE).unwrap() {
        return LinearSolution {
            slope: T::zero(),
            intercept: sum_y / n,
            degenerate: true,
        };
    }

    LinearSolution {
        slope: (n * sum_xy - sum_x * sum_y) / denominator,
        intercept: (sum_y * sum_x2 - sum_x * sum_xy) / denominator,
        degenerate: false,
    }
}

// ============================================================================
// Quadratic / Cubic
// ============================================================================

/// Fit a degree-`degree` polynomial (`degree` ∈ {2, 3}) via the normal
/// equations.
///
/// Returns coefficients in the descending convention, or `None` when the
/// system is degenerate (e.g. duplicated x-values leaving fewer distinct
/// abscissae than coefficients).
pub fn polynomial<T: Float>(samples: &[Sample<T>], degree: usize) -> Option<Vec<T>> {
    let system = build_normal_equations(samples, degree);
    let mut ascending = GaussianSolver::solve(&system.matrix, &system.rhs, system.size)?;
    // Solver ordering is ascending powers; public convention is descending.
    ascending.reverse();
    Some(ascending)
}

// ============================================================================
// Exponential
// ============================================================================

/// Fit `y = a·e^(b·x)` by log-linearization.
///
/// Requires every `y > 0` (caller-checked). Runs the linear path on
/// `(x, ln y)`: the slope becomes `b` and the exponentiated intercept
/// becomes `a`. On a degenerate design the inherited linear fallback
/// yields `b = 0` and `a` equal to the geometric mean of y, i.e. a
/// constant fit.
pub fn exponential<T: Float>(samples: &[Sample<T>]) -> (T, T) {
    let transformed: Vec<Sample<T>> = samples
        .iter()
        .map(|s| Sample::new(s.x, s.y.ln()))
        .collect();

    let solution = linear(&transformed);
    (solution.intercept.exp(), solution.slope)
}
