//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numerical routines behind least-squares
//! fitting:
//! - A small dense linear solver (Gaussian elimination with partial
//!   pivoting)
//! - Normal-equation assembly from single-pass power sums
//!
//! These are reusable numerical building blocks with no model-specific
//! logic.

/// Small dense linear system solver.
pub mod solver;

/// Normal-equation assembly for polynomial least squares.
pub mod normal;
