#![cfg(feature = "dev")]
//! Tests for the per-model coefficient solvers.

use approx::assert_relative_eq;

use curvefit_rs::internals::algorithms::fit::{exponential, linear, polynomial};
use curvefit_rs::internals::algorithms::model::ModelKind;
use curvefit_rs::internals::primitives::sample::Sample;

fn pts(pairs: &[(f64, f64)]) -> Vec<Sample<f64>> {
    pairs.iter().map(|&(x, y)| Sample::new(x, y)).collect()
}

// ============================================================================
// Linear
// ============================================================================

#[test]
fn test_linear_direct_formula() {
    let samples = pts(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]);
    let solution = linear(&samples);

    assert!(!solution.degenerate);
    assert_relative_eq!(solution.slope, 2.0, epsilon = 1e-12);
    assert_relative_eq!(solution.intercept, 0.0, epsilon = 1e-12);
}

#[test]
fn test_linear_degenerate_design_takes_mean_fallback() {
    let samples = pts(&[(4.0, 1.0), (4.0, 2.0), (4.0, 6.0)]);
    let solution = linear(&samples);

    assert!(solution.degenerate);
    assert_relative_eq!(solution.slope, 0.0);
    assert_relative_eq!(solution.intercept, 3.0, epsilon = 1e-12);
}

#[test]
fn test_linear_noisy_slope_sign() {
    // Decreasing data must give a negative slope.
    let samples = pts(&[(0.0, 10.1), (1.0, 7.9), (2.0, 6.2), (3.0, 3.8)]);
    let solution = linear(&samples);

    assert!(!solution.degenerate);
    assert!(solution.slope < 0.0);
}

// ============================================================================
// Polynomial (Quadratic / Cubic)
// ============================================================================

#[test]
fn test_polynomial_returns_descending_coefficients() {
    // y = 5x² + 0x + 1: solver works in ascending powers internally; the
    // returned order must be descending.
    let samples = pts(&[(-1.0, 6.0), (0.0, 1.0), (1.0, 6.0), (2.0, 21.0)]);
    let coefficients = polynomial(&samples, 2).unwrap();

    assert_eq!(coefficients.len(), 3);
    assert_relative_eq!(coefficients[0], 5.0, epsilon = 1e-9);
    assert_relative_eq!(coefficients[1], 0.0, epsilon = 1e-9);
    assert_relative_eq!(coefficients[2], 1.0, epsilon = 1e-9);
}

#[test]
fn test_polynomial_cubic_exact() {
    let f = |x: f64| 0.5 * x * x * x - x * x + 2.0 * x - 3.0;
    let samples: Vec<Sample<f64>> = [-2.0, -1.0, 0.0, 1.0, 2.0, 3.0]
        .iter()
        .map(|&x| Sample::new(x, f(x)))
        .collect();
    let coefficients = polynomial(&samples, 3).unwrap();

    assert_relative_eq!(coefficients[0], 0.5, epsilon = 1e-9);
    assert_relative_eq!(coefficients[1], -1.0, epsilon = 1e-9);
    assert_relative_eq!(coefficients[2], 2.0, epsilon = 1e-9);
    assert_relative_eq!(coefficients[3], -3.0, epsilon = 1e-9);
}

#[test]
fn test_polynomial_degenerate_design_is_none() {
    let samples = pts(&[(1.0, 1.0), (1.0, 2.0), (1.0, 3.0)]);
    assert!(polynomial(&samples, 2).is_none());
}

// ============================================================================
// Exponential
// ============================================================================

#[test]
fn test_exponential_log_linearization() {
    let f = |x: f64| 3.0 * (0.25 * x).exp();
    let samples: Vec<Sample<f64>> = [0.0, 1.0, 2.0, 4.0, 8.0]
        .iter()
        .map(|&x| Sample::new(x, f(x)))
        .collect();
    let (a, b) = exponential(&samples);

    assert_relative_eq!(a, 3.0, epsilon = 1e-9);
    assert_relative_eq!(b, 0.25, epsilon = 1e-9);
}

#[test]
fn test_exponential_decay() {
    let f = |x: f64| 10.0 * (-0.5 * x).exp();
    let samples: Vec<Sample<f64>> = [0.0, 1.0, 2.0, 3.0]
        .iter()
        .map(|&x| Sample::new(x, f(x)))
        .collect();
    let (a, b) = exponential(&samples);

    assert_relative_eq!(a, 10.0, epsilon = 1e-9);
    assert_relative_eq!(b, -0.5, epsilon = 1e-9);
}

// ============================================================================
// ModelKind
// ============================================================================

#[test]
fn test_min_samples_per_model() {
    assert_eq!(ModelKind::Linear.min_samples(), 2);
    assert_eq!(ModelKind::Quadratic.min_samples(), 3);
    assert_eq!(ModelKind::Cubic.min_samples(), 4);
    assert_eq!(ModelKind::Exponential.min_samples(), 2);
}

#[test]
fn test_predict_horner_evaluation() {
    // Cubic [2, -1, 0, 5] at x = 3: 2·27 - 9 + 0 + 5 = 50
    let y = ModelKind::Cubic.predict(&[2.0, -1.0, 0.0, 5.0], 3.0);
    assert_relative_eq!(y, 50.0, epsilon = 1e-12);

    // Exponential [2, 0.5] at x = 2: 2·e
    let y = ModelKind::Exponential.predict(&[2.0, 0.5], 2.0);
    assert_relative_eq!(y, 2.0 * 1.0f64.exp(), epsilon = 1e-12);
}
