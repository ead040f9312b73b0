//! Sample data model.
//!
//! ## Purpose
//!
//! This module provides the `Sample` pair and the `SampleSet` collection
//! that every fitting operation consumes.
//!
//! ## Invariants
//!
//! * A `SampleSet` is never empty.
//! * Every coordinate in a `SampleSet` is finite.
//! * Sample order is preserved; the math does not depend on it, but
//!   output is reproducible.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter samples.
//! * Model-specific requirements (minimum counts, positivity) are
//!   checked by the engine validator, not here.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FitError;

// ============================================================================
// Sample
// ============================================================================

/// A single `(x, y)` observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<T: Float> {
    /// Predictor value.
    pub x: T,
    /// Response value.
    pub y: T,
}

impl<T: Float> Sample<T> {
    /// Create a new sample.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// SampleSet
// ============================================================================

/// An ordered, validated collection of samples.
///
/// Construction rejects empty input and non-finite coordinates, so every
/// downstream computation can assume finite data. Model-specific minimum
/// counts are re-checked by the engine when a fit is requested.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet<T: Float> {
    samples: Vec<Sample<T>>,
}

impl<T: Float> SampleSet<T> {
    /// Create a sample set from a vector of samples.
    pub fn new(samples: Vec<Sample<T>>) -> Result<Self, FitError> {
        if samples.is_empty() {
            return Err(FitError::EmptyInput);
        }

        for (i, s) in samples.iter().enumerate() {
            if !s.x.is_finite() {
                return Err(FitError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    s.x.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !s.y.is_finite() {
                return Err(FitError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    s.y.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(Self { samples })
    }

    /// Create a sample set from `(x, y)` pairs.
    pub fn from_pairs(pairs: &[(T, T)]) -> Result<Self, FitError> {
        Self::new(pairs.iter().map(|&(x, y)| Sample::new(x, y)).collect())
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the set is empty. Always `false` for a constructed set;
    /// provided for API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The samples as a slice, in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[Sample<T>] {
        &self.samples
    }

    /// Iterate over the samples in insertion order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Sample<T>> {
        self.samples.iter()
    }

    /// Minimum and maximum x-values.
    pub fn x_bounds(&self) -> (T, T) {
        self.bounds(|s| s.x)
    }

    /// Minimum and maximum y-values.
    pub fn y_bounds(&self) -> (T, T) {
        self.bounds(|s| s.y)
    }

    /// Mean of the y-values.
    pub fn mean_y(&self) -> T {
        let sum = self
            .samples
            .iter()
            .fold(T::zero(), |acc, s| acc + s.y);
        sum / T::from(self.samples.len()).unwrap()
    }

    fn bounds<F: Fn(&Sample<T>) -> T>(&self, coord: F) -> (T, T) {
        let first = coord(&self.samples[0]);
        self.samples.iter().skip(1).fold((first, first), |(lo, hi), s| {
            let v = coord(s);
            (lo.min(v), hi.max(v))
        })
    }
}

impl<'a, T: Float> IntoIterator for &'a SampleSet<T> {
    type Item = &'a Sample<T>;
    type IntoIter = core::slice::Iter<'a, Sample<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
