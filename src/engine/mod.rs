//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a fit end to end:
//! - `validator`: defensive re-validation of inputs per model
//! - `executor`: dispatch to a model strategy, R² computation, result
//!   assembly
//! - `output`: the `FitResult` type and formula formatting
//! - `sampler`: sampling the fitted curve over the data domain

/// Input validation.
pub mod validator;

/// Fit orchestration.
pub mod executor;

/// Fit results and formula formatting.
pub mod output;

/// Curve sampling for visualization.
pub mod sampler;
