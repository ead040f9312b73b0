#![cfg(feature = "dev")]
//! Tests for the sample data model and error types.

use approx::assert_relative_eq;

use curvefit_rs::internals::primitives::errors::FitError;
use curvefit_rs::internals::primitives::sample::{Sample, SampleSet};

// ============================================================================
// SampleSet
// ============================================================================

#[test]
fn test_construction_preserves_order() {
    let set = SampleSet::from_pairs(&[(3.0, 1.0), (1.0, 2.0), (2.0, 3.0)]).unwrap();
    let xs: Vec<f64> = set.iter().map(|s| s.x).collect();
    assert_eq!(xs, vec![3.0, 1.0, 2.0]);
    assert_eq!(set.len(), 3);
    assert!(!set.is_empty());
}

#[test]
fn test_rejects_empty() {
    assert_eq!(SampleSet::<f64>::new(vec![]), Err(FitError::EmptyInput));
}

#[test]
fn test_rejects_non_finite_coordinates() {
    let err = SampleSet::new(vec![Sample::new(1.0, 2.0), Sample::new(f64::NAN, 0.0)]);
    assert!(matches!(err, Err(FitError::InvalidNumericValue(ref d)) if d.starts_with("x[1]")));

    let err = SampleSet::new(vec![Sample::new(1.0, f64::NEG_INFINITY)]);
    assert!(matches!(err, Err(FitError::InvalidNumericValue(ref d)) if d.starts_with("y[0]")));
}

#[test]
fn test_bounds_and_mean() {
    let set = SampleSet::from_pairs(&[(3.0, -1.0), (1.0, 5.0), (2.0, 2.0)]).unwrap();
    assert_eq!(set.x_bounds(), (1.0, 3.0));
    assert_eq!(set.y_bounds(), (-1.0, 5.0));
    assert_relative_eq!(set.mean_y(), 2.0, epsilon = 1e-12);
}

#[test]
fn test_single_sample_bounds() {
    let set = SampleSet::from_pairs(&[(4.0, 9.0)]).unwrap();
    assert_eq!(set.x_bounds(), (4.0, 4.0));
    assert_eq!(set.y_bounds(), (9.0, 9.0));
}

// ============================================================================
// FitError
// ============================================================================

#[test]
fn test_error_display() {
    assert_eq!(format!("{}", FitError::EmptyInput), "Sample set is empty");
    assert_eq!(
        format!("{}", FitError::TooFewPoints { got: 2, min: 4 }),
        "Too few points: got 2, need at least 4"
    );
    assert_eq!(
        format!(
            "{}",
            FitError::NonPositiveY {
                index: 1,
                value: -2.0
            }
        ),
        "Exponential model requires y > 0: sample 1 has y = -2"
    );
    assert_eq!(
        format!("{}", FitError::DegenerateSystem),
        "Degenerate system: determinant magnitude below tolerance"
    );
    assert_eq!(
        format!("{}", FitError::UnknownModel("foo".to_string())),
        "Unknown model: 'foo'"
    );
    assert_eq!(
        format!("{}", FitError::InvalidNumericValue("x[0]=NaN".to_string())),
        "Invalid numeric value: x[0]=NaN"
    );
}

#[test]
fn test_error_properties() {
    let err1 = FitError::DegenerateSystem;
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, FitError::EmptyInput);
}

#[cfg(feature = "std")]
#[test]
fn test_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<FitError>();
}
