//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental building blocks shared by every
//! other layer:
//! - The `Sample`/`SampleSet` data model
//! - The crate-wide `FitError` enum
//!
//! These carry no numerical logic; invariants are enforced at
//! construction and everything above builds on them.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for curve fitting.
pub mod errors;

/// Sample data model (`Sample`, `SampleSet`).
pub mod sample;
