//! Input validation for curve fitting.
//!
//! ## Purpose
//!
//! This module re-validates a sample set against the requirements of the
//! requested model. Upstream layers (UI, CSV import) may pre-filter, but
//! the engine checks defensively: minimum sample counts per model and
//! strict positivity of y under the exponential model.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first violation.
//! * **Efficiency**: Checks are ordered from cheap (length) to expensive
//!   (per-sample scans).
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter samples.
//! * Finiteness is a `SampleSet` construction invariant and is not
//!   re-checked here.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::model::ModelKind;
use crate::primitives::errors::FitError;
use crate::primitives::sample::SampleSet;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fit requests.
///
/// Provides static methods returning `Result<(), FitError>` that fail
/// fast upon the first violation.
pub struct Validator;

impl Validator {
    /// Validate `samples` against everything `model` requires.
    pub fn validate_requirements<T: Float>(
        samples: &SampleSet<T>,
        model: ModelKind,
    ) -> Result<(), FitError> {
        Self::validate_min_samples(samples.len(), model)?;
        if model == ModelKind::Exponential {
            Self::validate_positive_y(samples)?;
        }
        Ok(())
    }

    /// Check the model's minimum sample count.
    pub fn validate_min_samples(got: usize, model: ModelKind) -> Result<(), FitError> {
        let min = model.min_samples();
        if got < min {
            return Err(FitError::TooFewPoints { got, min });
        }
        Ok(())
    }

    /// Check that every y-value is strictly positive (exponential
    /// domain requirement).
    pub fn validate_positive_y<T: Float>(samples: &SampleSet<T>) -> Result<(), FitError> {
        for (index, s) in samples.iter().enumerate() {
            if s.y <= T::zero() {
                return Err(FitError::NonPositiveY {
                    index,
                    value: s.y.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(())
    }
}
