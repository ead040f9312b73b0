//! R² computation and fit-quality banding.
//!
//! ## Purpose
//!
//! This module computes the coefficient of determination for a fitted
//! prediction function and maps it to a qualitative band for reporting.
//!
//! ## Design notes
//!
//! * **Formula**: `R² = 1 − RSS/TSS` with `TSS = Σ(yᵢ − ȳ)²` and
//!   `RSS = Σ(yᵢ − predict(xᵢ))²`.
//! * **Zero-variance convention**: When all y-values are identical,
//!   TSS is zero and the ratio is undefined. Rather than letting
//!   NaN/∞ escape, the convention here is: R² = 1 when the residuals
//!   are also (numerically) zero — the constant model fits perfectly —
//!   and R² = 0 otherwise. Enforced by test.
//!
//! ## Invariants
//!
//! * The returned value is never NaN or infinite for finite inputs and
//!   finite predictions.

// External dependencies
use core::fmt;
use num_traits::Float;

// Internal dependencies
use crate::primitives::sample::Sample;

// ============================================================================
// R²
// ============================================================================

/// Compute R² for `samples` against a prediction function.
pub fn r_squared<T, F>(samples: &[Sample<T>], predict: F) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    let n = T::from(samples.len()).unwrap();
    let mean_y = samples.iter().fold(T::zero(), |acc, s| acc + s.y) / n;

    let mut total = T::zero();
    let mut residual = T::zero();
    for s in samples {
        let predicted = predict(s.x);
        let dev = s.y - mean_y;
        let res = s.y - predicted;
        total = total + dev * dev;
        residual = residual + res * res;
    }

    // Zero-variance case: all y identical.
    if total <= T::epsilon() {
        return if residual <= T::epsilon() {
            T::one()
        } else {
            T::zero()
        };
    }

    T::one() - residual / total
}

// ============================================================================
// Quality Banding
// ============================================================================

/// Qualitative fit-quality band derived from R².
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    /// R² ≥ 0.9
    Excellent,
    /// 0.7 ≤ R² < 0.9
    Good,
    /// 0.5 ≤ R² < 0.7
    Moderate,
    /// R² < 0.5
    Poor,
}

impl Quality {
    /// Band an R² value.
    pub fn from_r_squared<T: Float>(r_squared: T) -> Self {
        let r = r_squared.to_f64().unwrap_or(f64::NAN);
        if r >= 0.9 {
            Quality::Excellent
        } else if r >= 0.7 {
            Quality::Good
        } else if r >= 0.5 {
            Quality::Moderate
        } else {
            Quality::Poor
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quality::Excellent => "excellent",
            Quality::Good => "good",
            Quality::Moderate => "moderate",
            Quality::Poor => "poor",
        };
        f.write_str(name)
    }
}
