//! High-level API for curve fitting.
//!
//! ## Purpose
//!
//! This module is the user-facing surface of the crate. It exposes the
//! two core entry points — [`fit`] and [`sample_curve`] — plus the
//! [`CurveFit`] fluent builder for callers that prefer configuring a
//! reusable fitter.
//!
//! ## Key concepts
//!
//! * **Stateless core**: `fit` takes a validated [`SampleSet`] and a
//!   [`ModelKind`] and returns a fresh [`FitResult`]; nothing is
//!   retained between calls, so concurrent fits need no locking.
//! * **Builder**: `CurveFit` carries a model selection and an optional
//!   curve resolution, in the same fluent style as the rest of the
//!   ecosystem. Each parameter may be set once.

// External dependencies
use num_traits::Float;

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::executor;
use crate::engine::sampler;

// Publicly re-exported types
pub use crate::algorithms::model::ModelKind;
pub use crate::engine::output::FitResult;
pub use crate::engine::sampler::DEFAULT_STEPS;
pub use crate::evaluation::diagnostics::Quality;
pub use crate::primitives::errors::FitError;
pub use crate::primitives::sample::{Sample, SampleSet};

// ============================================================================
// Plain Entry Points
// ============================================================================

/// Fit `samples` to the requested `model`.
///
/// Fails with [`FitError::TooFewPoints`] below the model's minimum
/// sample count, [`FitError::NonPositiveY`] when the exponential model
/// sees `y <= 0`, and [`FitError::DegenerateSystem`] when the quadratic
/// or cubic normal equations are singular. The linear model never fails
/// on a degenerate design; it degrades to the constant fit `y = mean(y)`.
///
/// ```rust
/// use curvefit_rs::prelude::*;
///
/// let samples = SampleSet::<f64>::from_pairs(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)])?;
/// let result = fit(&samples, Linear)?;
/// assert!((result.r_squared - 1.0).abs() < 1e-9);
/// # Result::<(), FitError>::Ok(())
/// ```
pub fn fit<T: Float>(samples: &SampleSet<T>, model: ModelKind) -> Result<FitResult<T>, FitError> {
    executor::fit(samples, model)
}

/// Sample a prediction function over `[min_x − pad, max_x + pad]` for
/// plotting, where `pad` is 10% of the domain span.
///
/// Never fails: a zero-width domain falls back to a fixed ±2.0 window,
/// and non-finite predictions are dropped from the output.
pub fn sample_curve<T, F>(min_x: T, max_x: T, predict: F) -> Vec<Sample<T>>
where
    T: Float,
    F: Fn(T) -> T,
{
    sampler::sample_curve(min_x, max_x, predict)
}

// ============================================================================
// CurveFit Builder
// ============================================================================

/// Fluent builder for configuring and running fits.
///
/// ```rust
/// use curvefit_rs::prelude::*;
///
/// let result = CurveFit::new()
///     .model(Exponential)
///     .fit_pairs(&[(0.0, 1.0), (1.0, 2.718), (2.0, 7.389)])?;
/// assert!(result.r_squared > 0.999);
/// # Result::<(), FitError>::Ok(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurveFit {
    /// Selected model family (default: Linear).
    pub model: Option<ModelKind>,

    /// Number of steps used by [`curve`](Self::curve) (default: 100).
    pub curve_points: Option<usize>,
}

impl CurveFit {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the model family to fit.
    pub fn model(mut self, model: ModelKind) -> Self {
        self.model = Some(model);
        self
    }

    /// Set the number of steps for sampled curves.
    pub fn curve_points(mut self, steps: usize) -> Self {
        self.curve_points = Some(steps);
        self
    }

    /// Fit a validated sample set with the configured model.
    pub fn fit<T: Float>(&self, samples: &SampleSet<T>) -> Result<FitResult<T>, FitError> {
        executor::fit(samples, self.model.unwrap_or_default())
    }

    /// Convenience: build a [`SampleSet`] from pairs and fit it.
    pub fn fit_pairs<T: Float>(&self, pairs: &[(T, T)]) -> Result<FitResult<T>, FitError> {
        self.fit(&SampleSet::from_pairs(pairs)?)
    }

    /// Sample the fitted curve over the sample domain at the configured
    /// resolution.
    pub fn curve<T: Float>(&self, result: &FitResult<T>, samples: &SampleSet<T>) -> Vec<Sample<T>> {
        let (min_x, max_x) = samples.x_bounds();
        let steps = self.curve_points.unwrap_or(DEFAULT_STEPS);
        sampler::sample_curve_with(min_x, max_x, steps, |x| result.predict(x))
    }
}
