//! Fit results and formula formatting.
//!
//! ## Purpose
//!
//! This module defines the `FitResult` returned by every successful fit
//! and the fixed-precision, sign-aware formatting of the display
//! formula.
//!
//! ## Design notes
//!
//! * Formatting is display-only: four decimal places, signs folded into
//!   the separating operator (`y = 2.0000x - 1.0000`). It has no
//!   semantic effect on the coefficients.
//! * A `FitResult` is immutable and produced fresh on every fit.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

use core::fmt;
use core::fmt::Write as _;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::model::ModelKind;
use crate::evaluation::diagnostics::Quality;

// ============================================================================
// FitResult
// ============================================================================

/// The outcome of a successful fit.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult<T: Float> {
    /// The fitted model family.
    pub model: ModelKind,

    /// Fitted coefficients, highest power first for polynomials,
    /// `[a, b]` for the exponential `a·e^(b·x)`.
    pub coefficients: Vec<T>,

    /// Human-readable formula, e.g. `y = 2.0000x + 0.0000`.
    pub formula: String,

    /// Coefficient of determination.
    pub r_squared: T,
}

impl<T: Float> FitResult<T> {
    /// Evaluate the fitted model at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.model.predict(&self.coefficients, x)
    }

    /// Qualitative fit-quality band of [`r_squared`](Self::r_squared).
    #[inline]
    pub fn quality(&self) -> Quality {
        Quality::from_r_squared(self.r_squared)
    }

    /// Doubling time `ln 2 / b` of an exponential fit.
    ///
    /// Negative for a decaying fit (half-life magnitude). `None` for
    /// non-exponential models and for `b` numerically zero, where no
    /// finite doubling time exists.
    pub fn doubling_time(&self) -> Option<T> {
        if self.model != ModelKind::Exponential {
            return None;
        }
        let b = self.coefficients[1];
        if b.abs() <= T::epsilon() {
            return None;
        }
        Some(T::from(2.0).unwrap().ln() / b)
    }
}

impl<T: Float> fmt::Display for FitResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fit Summary:")?;
        writeln!(f, "  Model: {}", self.model)?;
        writeln!(f, "  Formula: {}", self.formula)?;
        writeln!(
            f,
            "  R^2: {:.6} ({})",
            self.r_squared.to_f64().unwrap_or(f64::NAN),
            self.quality()
        )
    }
}

// ============================================================================
// Formula Formatting
// ============================================================================

/// Format the display formula for `model` with `coefficients` in the
/// descending convention.
pub fn format_formula<T: Float>(model: ModelKind, coefficients: &[T]) -> String {
    let c = |i: usize| coefficients[i].to_f64().unwrap_or(f64::NAN);

    match model {
        ModelKind::Linear => {
            let mut s = format!("y = {:.4}x", c(0));
            push_term(&mut s, c(1), "");
            s
        }
        ModelKind::Quadratic => {
            let mut s = format!("y = {:.4}x^2", c(0));
            push_term(&mut s, c(1), "x");
            push_term(&mut s, c(2), "");
            s
        }
        ModelKind::Cubic => {
            let mut s = format!("y = {:.4}x^3", c(0));
            push_term(&mut s, c(1), "x^2");
            push_term(&mut s, c(2), "x");
            push_term(&mut s, c(3), "");
            s
        }
        ModelKind::Exponential => format!("y = {:.4}e^({:.4}x)", c(0), c(1)),
    }
}

/// Format the constant formula `y = <value>` used by the degenerate
/// linear fallback.
pub fn format_constant<T: Float>(value: T) -> String {
    format!("y = {:.4}", value.to_f64().unwrap_or(f64::NAN))
}

// Append " + 1.2345<suffix>" or " - 1.2345<suffix>".
fn push_term(out: &mut String, value: f64, suffix: &str) {
    let sign = if value.is_sign_negative() { '-' } else { '+' };
    // Infallible for String.
    let _ = write!(out, " {} {:.4}{}", sign, value.abs(), suffix);
}
