//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer measures how well a fitted model explains the data:
//! - R² (coefficient of determination) against a prediction function
//! - Qualitative banding of R² for reporting

/// R² computation and fit-quality banding.
pub mod diagnostics;
