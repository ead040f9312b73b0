//! Small dense linear system solver.
//!
//! ## Purpose
//!
//! This module solves the n×n linear systems produced by the
//! normal-equation builder (n = 3 for quadratic, n = 4 for cubic fits).
//! The 2-variable linear case is handled by a closed-form formula in the
//! algorithms layer and never reaches this solver.
//!
//! ## Design notes
//!
//! * **Algorithm**: Gaussian elimination with partial pivoting, applied
//!   uniformly for every n. For the tiny systems involved this is both
//!   sufficient and numerically adequate; no external linear-algebra
//!   backend is needed.
//! * **Degeneracy**: A pivot whose magnitude falls below `TOLERANCE`
//!   means the matrix determinant is (numerically) zero; the solve
//!   reports `None` and the caller classifies the failure.
//! * **Convention**: Matrices are row-major, `a[i * n + j]` is row `i`,
//!   column `j`. Variable ordering is the caller's concern.
//!
//! ## Invariants
//!
//! * Input slices are never modified; elimination works on a copy.
//! * A returned solution has exactly `n` entries.
//!
//! ## Non-goals
//!
//! * No decomposition reuse, no iterative refinement, no support for
//!   rectangular or large systems.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Gaussian Elimination
// ============================================================================

/// Pivot magnitude below which a system is considered degenerate.
pub const TOLERANCE: f64 = 1e-10;

/// Helper struct for solving small dense linear systems.
pub struct GaussianSolver;

impl GaussianSolver {
    /// Solve `A x = b` for a row-major n×n matrix `a` and an n-vector `b`.
    ///
    /// Returns `None` when the system is degenerate: at some elimination
    /// step no remaining row offers a pivot with magnitude at least
    /// [`TOLERANCE`], which is the elimination-side equivalent of a
    /// near-zero determinant.
    pub fn solve<T: Float>(a: &[T], b: &[T], n: usize) -> Option<Vec<T>> {
        debug_assert_eq!(a.len(), n * n);
        debug_assert_eq!(b.len(), n);

        let tolerance = T::from(TOLERANCE).unwrap();

        // Augmented working copy [A | b]
        let width = n + 1;
        let mut aug = vec![T::zero(); n * width];
        for i in 0..n {
            for j in 0..n {
                aug[i * width + j] = a[i * n + j];
            }
            aug[i * width + n] = b[i];
        }

        // Forward elimination with partial pivoting
        for col in 0..n {
            // Select the row with the largest pivot magnitude
            let mut pivot_row = col;
            let mut pivot_mag = aug[col * width + col].abs();
            for row in (col + 1)..n {
                let mag = aug[row * width + col].abs();
                if mag > pivot_mag {
                    pivot_row = row;
                    pivot_mag = mag;
                }
            }

            if pivot_mag < tolerance {
                return None;
            }

            if pivot_row != col {
                for j in col..width {
                    aug.swap(col * width + j, pivot_row * width + j);
                }
            }

            let pivot = aug[col * width + col];
            for row in (col + 1)..n {
                let factor = aug[row * width + col] / pivot;
                if factor == T::zero() {
                    continue;
                }
                for j in col..width {
                    let delta = factor * aug[col * width + j];
                    aug[row * width + j] = aug[row * width + j] - delta;
                }
            }
        }

        // Back substitution
        let mut x = vec![T::zero(); n];
        for i in (0..n).rev() {
            let mut sum = aug[i * width + n];
            for j in (i + 1)..n {
                sum = sum - aug[i * width + j] * x[j];
            }
            x[i] = sum / aug[i * width + i];
        }

        Some(x)
    }
}
