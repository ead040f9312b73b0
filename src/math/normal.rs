//! Normal-equation assembly for polynomial least squares.
//!
//! ## Purpose
//!
//! This module accumulates the power-sum statistics of a sample set and
//! assembles the normal-equation system for a polynomial fit of degree
//! `d`: minimizing the squared residual of the basis `{1, x, …, x^d}`
//! leads to the symmetric system
//!
//! ```text
//! M[i][j] = Σ x^(i+j)        (i, j = 0..d, Hankel structure)
//! v[i]    = Σ x^i · y        (i = 0..d)
//! ```
//!
//! whose solution, in ascending powers, is the coefficient vector.
//!
//! ## Design notes
//!
//! * **Single pass**: One loop over the samples accumulates Σx^k for
//!   k = 0..2d and Σ(x^k·y) for k = 0..d. The full design matrix is
//!   never materialized — O(n) time, O(d) auxiliary sums.
//! * **Ordering**: Row `i` corresponds to the basis power `x^i`, so the
//!   solver returns coefficients in ascending powers. Callers wanting
//!   the descending display convention must reverse.
//!
//! ## Non-goals
//!
//! * No weighting, no centering/scaling of the basis, no degrees
//!   outside {1, 2, 3}.

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
// Normal Equations
// ============================================================================

/// An assembled normal-equation system `M x = v`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalEquations<T: Float> {
    /// Row-major (d+1)×(d+1) coefficient matrix.
    pub matrix: Vec<T>,
    /// Right-hand-side vector of length d+1.
    pub rhs: Vec<T>,
    /// System size, d+1.
    pub size: usize,
}

/// Build the degree-`degree` normal-equation system for `samples`.
///
/// `degree` must be in `{1, 2, 3}`; the resulting system is
/// `(degree + 1)`-square.
pub fn build_normal_equations<T: Float>(
    samples: &[Sample<T>],
    degree: usize,
) -> NormalEquations<T> {
    debug_assert!((1..=3).contains(&degree));

    let size = degree + 1;

    // Σx^k for k = 0..2d and Σ(x^k · y) for k = 0..d, one pass.
    let mut power_sums = vec![T::zero(); 2 * degree + 1];
    let mut moment_sums = vec![T::zero(); size];

    for s in samples {
        let mut x_pow = T::one();
        for k in 0..=(2 * degree) {
            power_sums[k] = power_sums[k] + x_pow;
            if k <= degree {
                moment_sums[k] = moment_sums[k] + x_pow * s.y;
            }
            x_pow = x_pow * s.x;
        }
    }

    let mut matrix = vec![T::zero(); size * size];
    for i in 0..size {
        for j in 0..size {
            matrix[i * size + j] = power_sums[i + j];
        }
    }

    NormalEquations {
        matrix,
        rhs: moment_sums,
        size,
    }
}
