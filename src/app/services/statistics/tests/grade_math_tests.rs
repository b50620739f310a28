//! Tests for mean and median

use crate::ClassroomError;
use crate::app::services::statistics::{mean, median};

#[test]
fn test_mean() {
    assert_eq!(mean(&[70, 80]).unwrap(), 75.0);
    assert_eq!(mean(&[80, 90, 100]).unwrap(), 90.0);
    assert!((mean(&[1, 2]).unwrap() - 1.5).abs() < f64::EPSILON);
    assert!((mean(&[1, 1, 2]).unwrap() - 4.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_mean_does_not_overflow() {
    let grades = [i64::MAX, i64::MAX];
    assert_eq!(mean(&grades).unwrap(), i64::MAX as f64);
}

#[test]
fn test_median_odd() {
    assert_eq!(median(&[90, 70, 80]).unwrap(), 80.0);
    assert_eq!(median(&[5]).unwrap(), 5.0);
}

#[test]
fn test_median_even() {
    assert_eq!(median(&[70, 80, 90, 100]).unwrap(), 85.0);
    assert_eq!(median(&[100, 70, 90, 80]).unwrap(), 85.0);
    assert_eq!(median(&[1, 2]).unwrap(), 1.5);
}

#[test]
fn test_empty_is_average_undefined() {
    assert!(matches!(
        mean(&[]).unwrap_err(),
        ClassroomError::AverageUndefined { .. }
    ));
    assert!(matches!(
        median(&[]).unwrap_err(),
        ClassroomError::AverageUndefined { .. }
    ));
}
