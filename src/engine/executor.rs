//! Fit orchestration.
//!
//! ## Purpose
//!
//! This module runs a fit end to end: validate the request, dispatch to
//! the model's coefficient solver, compute R², format the formula, and
//! assemble the immutable `FitResult`.
//!
//! ## Design notes
//!
//! * **Degeneracy policy**: The linear model degrades to the constant
//!   fit `y = mean(y)` with R² = 0 when all x are identical; quadratic
//!   and cubic raise `DegenerateSystem` instead. The asymmetry is
//!   deliberate: a degenerate quadratic/cubic design indicates
//!   pathological input (duplicated abscissae) that the caller should
//!   see, while a vertical column of points still has a meaningful
//!   constant approximation.
//! * **Exponential**: Inherits the linear fallback through the
//!   log-linearized path, so an all-same-x exponential fit yields the
//!   constant `a = e^(mean(ln y))`, `b = 0` rather than an error.
//!
//! ## Invariants
//!
//! * Each fit call is independent and side-effect free; the sample set
//!   is not retained.
//! * `r_squared` in a returned result is finite.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::fit::{exponential, linear, polynomial};
use crate::algorithms::model::ModelKind;
use crate::engine::output::{format_constant, format_formula, FitResult};
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::r_squared;
use crate::primitives::errors::FitError;
use crate::primitives::sample::SampleSet;

// ============================================================================
// Fit Execution
// ============================================================================

/// Fit `samples` to `model` and return the assembled result.
pub fn fit<T: Float>(samples: &SampleSet<T>, model: ModelKind) -> Result<FitResult<T>, FitError> {
    Validator::validate_requirements(samples, model)?;

    let coefficients: Vec<T> = match model {
        ModelKind::Linear => {
            let solution = linear(samples.as_slice());
            if solution.degenerate {
                // Constant-fit fallback: a = 0, b = mean(y), R² pinned
                // to 0 by convention.
                return Ok(FitResult {
                    model,
                    coefficients: vec![T::zero(), solution.intercept],
                    formula: format_constant(solution.intercept),
                    r_squared: T::zero(),
                });
            }
            vec![solution.slope, solution.intercept]
        }
        ModelKind::Quadratic | ModelKind::Cubic => {
            // polynomial_degree is Some for these two variants.
            let degree = model.polynomial_degree().unwrap_or(2);
            polynomial(samples.as_slice(), degree).ok_or(FitError::DegenerateSystem)?
        }
        ModelKind::Exponential => {
            let (a, b) = exponential(samples.as_slice());
            vec![a, b]
        }
    };

    let r2 = r_squared(samples.as_slice(), |x| model.predict(&coefficients, x));

    Ok(FitResult {
        model,
        formula: format_formula(model, &coefficients),
        coefficients,
        r_squared: r2,
    })
}
