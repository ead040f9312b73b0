//! Model selection and prediction.
//!
//! ## Purpose
//!
//! This module defines the `ModelKind` selector shared by the fitting
//! engine and its callers, together with the per-model metadata (minimum
//! sample counts, coefficient counts) and the evaluation of a fitted
//! model at a point.
//!
//! ## Key concepts
//!
//! * **Descending convention**: Polynomial coefficients are stored
//!   highest power first (`[a, b, c]` for `a·x² + b·x + c`); the
//!   exponential model stores `[a, b]` for `a·e^(b·x)`.
//! * **Selector parsing**: `FromStr` accepts the lowercase selector
//!   strings used by presentation layers (`"linear"`, `"quadratic"`,
//!   `"cubic"`, `"exponential"`); anything else is `UnknownModel`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(feature = "std")]
use std::string::ToString;

use core::fmt;
use core::str::FromStr;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FitError;

// ============================================================================
// ModelKind
// ============================================================================

/// The parametric function family to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelKind {
    /// `y = a·x + b`
    #[default]
    Linear,

    /// `y = a·x² + b·x + c`
    Quadratic,

    /// `y = a·x³ + b·x² + c·x + d`
    Cubic,

    /// `y = a·e^(b·x)`, requires every `y > 0`
    Exponential,
}

impl ModelKind {
    /// Minimum number of samples the model needs.
    #[inline]
    pub const fn min_samples(&self) -> usize {
        match self {
            ModelKind::Linear => 2,
            ModelKind::Quadratic => 3,
            ModelKind::Cubic => 4,
            ModelKind::Exponential => 2,
        }
    }

    /// Number of fitted coefficients.
    #[inline]
    pub const fn num_coefficients(&self) -> usize {
        match self {
            ModelKind::Linear => 2,
            ModelKind::Quadratic => 3,
            ModelKind::Cubic => 4,
            ModelKind::Exponential => 2,
        }
    }

    /// Polynomial degree, for the models solved via normal equations.
    #[inline]
    pub(crate) const fn polynomial_degree(&self) -> Option<usize> {
        match self {
            ModelKind::Quadratic => Some(2),
            ModelKind::Cubic => Some(3),
            ModelKind::Linear | ModelKind::Exponential => None,
        }
    }

    /// Evaluate the model at `x` given coefficients in the descending
    /// convention.
    ///
    /// Polynomials are evaluated by Horner's scheme. The slice length
    /// must match [`num_coefficients`](Self::num_coefficients).
    pub fn predict<T: Float>(&self, coefficients: &[T], x: T) -> T {
        debug_assert_eq!(coefficients.len(), self.num_coefficients());
        match self {
            ModelKind::Linear | ModelKind::Quadratic | ModelKind::Cubic => coefficients
                .iter()
                .fold(T::zero(), |acc, &c| acc * x + c),
            ModelKind::Exponential => coefficients[0] * (coefficients[1] * x).exp(),
        }
    }

    /// The lowercase selector string for this model.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Linear => "linear",
            ModelKind::Quadratic => "quadratic",
            ModelKind::Cubic => "cubic",
            ModelKind::Exponential => "exponential",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(ModelKind::Linear),
            "quadratic" => Ok(ModelKind::Quadratic),
            "cubic" => Ok(ModelKind::Cubic),
            "exponential" => Ok(ModelKind::Exponential),
            other => Err(FitError::UnknownModel(other.to_string())),
        }
    }
}
