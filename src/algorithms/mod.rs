//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the four model strategies on top of the math
//! layer:
//! - `ModelKind`: the model selector, minimum sample counts, and
//!   prediction from fitted coefficients
//! - `fit`: the per-model coefficient solvers (direct linear formula,
//!   polynomial normal equations, exponential log-linearization)

/// Model selection and prediction.
pub mod model;

/// Per-model least-squares coefficient solvers.
pub mod fit;
