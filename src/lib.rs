//! # curvefit-rs — least-squares curve fitting for 2-D samples
//!
//! Fits a set of `(x, y)` samples to one of four parametric function
//! families — linear, quadratic, cubic, exponential — using least-squares
//! regression, and reports the fitted coefficients, a human-readable
//! formula, and a coefficient-of-determination (R²) quality metric.
//!
//! ## Models
//!
//! | Model | Shape | Minimum samples |
//! |-------|-------|-----------------|
//! | `Linear` | `y = a·x + b` | 2 |
//! | `Quadratic` | `y = a·x² + b·x + c` | 3 |
//! | `Cubic` | `y = a·x³ + b·x² + c·x + d` | 4 |
//! | `Exponential` | `y = a·e^(b·x)`, all `y > 0` | 2 |
//!
//! Polynomial models are solved through the normal equations of the
//! least-squares problem (Gaussian elimination with partial pivoting for
//! the 3×3 and 4×4 systems, a closed-form shortcut for the 2-variable
//! linear case). The exponential model is linearized through the natural
//! logarithm and fitted on the transformed data.
//!
//! ## Quick start
//!
//! ```rust
//! use curvefit_rs::prelude::*;
//!
//! let samples = SampleSet::<f64>::from_pairs(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)])?;
//! let result = fit(&samples, Linear)?;
//!
//! assert!((result.coefficients[0] - 2.0).abs() < 1e-9);
//! assert!((result.r_squared - 1.0).abs() < 1e-9);
//! println!("{}", result.formula); // y = 2.0000x + 0.0000
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ### Builder style
//!
//! ```rust
//! use curvefit_rs::prelude::*;
//!
//! let result = CurveFit::new()
//!     .model(Quadratic)
//!     .fit_pairs(&[(1.0f64, 1.0), (2.0, 4.0), (3.0, 9.0), (4.0, 16.0)])?;
//!
//! assert!((result.r_squared - 1.0).abs() < 1e-9);
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ### Sampling the fitted curve
//!
//! For visualization, [`sample_curve`](prelude::sample_curve) produces an
//! ordered sequence of points covering the sample domain plus a 10% margin:
//!
//! ```rust
//! use curvefit_rs::prelude::*;
//!
//! let samples = SampleSet::from_pairs(&[(0.0, 1.0), (1.0, 2.0), (2.0, 4.0)])?;
//! let result = fit(&samples, Linear)?;
//!
//! let (min_x, max_x) = samples.x_bounds();
//! let curve = sample_curve(min_x, max_x, |x| result.predict(x));
//! assert!(!curve.is_empty());
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ## Error handling
//!
//! [`fit`](prelude::fit) returns a [`FitError`](prelude::FitError)
//! classifying the failure: too few samples for the requested model,
//! non-positive `y` under the exponential model, or a degenerate
//! normal-equation system. The only degeneracy that does *not* fail is
//! the linear model on samples whose `x`-values are all identical, which
//! degrades to the constant fit `y = mean(y)`.
//!
//! ## Minimal usage (no_std)
//!
//! The crate supports `no_std` environments; disable default features to
//! drop the standard-library dependency:
//!
//! ```toml
//! [dependencies]
//! curvefit-rs = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and error types.
//
// Contains the `Sample`/`SampleSet` data model and the crate-wide
// `FitError` enum.
mod primitives;

// Layer 2: Math - pure numerical routines.
//
// Contains the small dense linear solver (Gaussian elimination with
// partial pivoting) and the normal-equation builder (power-sum
// accumulation).
mod math;

// Layer 3: Algorithms - model strategies.
//
// Contains the `ModelKind` selector and the per-model coefficient
// solvers (direct linear formula, polynomial normal equations,
// exponential log-linearization).
mod algorithms;

// Layer 4: Evaluation - fit diagnostics.
//
// Contains the R² computation and the qualitative fit-quality banding.
mod evaluation;

// Layer 5: Engine - orchestration and output.
//
// Contains input validation, the fitting executor, result assembly and
// formula formatting, and the curve sampler.
mod engine;

// High-level API for curve fitting.
//
// Provides the plain `fit`/`sample_curve` entry points and the
// `CurveFit` builder.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard curve-fitting prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use curvefit_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        fit, sample_curve, CurveFit, FitError, FitResult, ModelKind,
        ModelKind::{Cubic, Exponential, Linear, Quadratic},
        Quality, Sample, SampleSet,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and errors.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal numerical routines.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal model strategies.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal engine (validator, executor, sampler, output).
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API surface.
    pub mod api {
        pub use crate::api::*;
    }
}
