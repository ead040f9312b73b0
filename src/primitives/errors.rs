//! Error types for curve fitting.
//!
//! ## Purpose
//!
//! This module defines the crate-wide error enum returned by every
//! fallible operation. Each variant classifies one failure mode
//! precisely; the presentation layer is responsible for surfacing the
//! classification to the user.
//!
//! ## Design notes
//!
//! * **Terminal**: Every error ends the current fit attempt. The
//!   computation is deterministic and pure, so retrying with unchanged
//!   input reproduces the same error.
//! * **No silent coercion**: The engine never converts an error into
//!   NaN or degenerate output. The two documented fallbacks (linear
//!   constant fit, R² zero-variance convention) are not errors.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

// ============================================================================
// FitError
// ============================================================================

/// Errors that can occur while fitting a model or validating input.
#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    /// The sample set is empty.
    EmptyInput,

    /// The sample count is below the minimum the requested model needs.
    TooFewPoints {
        /// Number of samples provided.
        got: usize,
        /// Minimum the model requires.
        min: usize,
    },

    /// The exponential model was requested but a sample has `y <= 0`.
    NonPositiveY {
        /// Index of the offending sample.
        index: usize,
        /// The offending y-value.
        value: f64,
    },

    /// The normal-equation system is degenerate (near-zero determinant).
    DegenerateSystem,

    /// The model selector string is not one of the supported models.
    UnknownModel(String),

    /// A sample coordinate is NaN or infinite.
    InvalidNumericValue(String),
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitError::EmptyInput => write!(f, "Sample set is empty"),
            FitError::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {}, need at least {}", got, min)
            }
            FitError::NonPositiveY { index, value } => write!(
                f,
                "Exponential model requires y > 0: sample {} has y = {}",
                index, value
            ),
            FitError::DegenerateSystem => {
                write!(f, "Degenerate system: determinant magnitude below tolerance")
            }
            FitError::UnknownModel(name) => write!(f, "Unknown model: '{}'", name),
            FitError::InvalidNumericValue(detail) => {
                write!(f, "Invalid numeric value: {}", detail)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FitError {}
