//! Structural checks run on a dataset before it is handed to the trainer.
//!
//! Checks run in a fixed order and stop at the first failure:
//! 1. there is at least one point and as many labels as points,
//! 2. the first point is a non-empty sequence, which fixes the dimension `d`,
//! 3. every point has exactly `d` numeric coordinates,
//! 4. every label is numeric.
//!
//! `validate`/`validate_json` only answer pass or fail. `check`/`check_json` report
//! which rule failed first. None of these functions log or mutate their input.

use serde_json::Value;
use thiserror::Error;

/// The first rule a dataset broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("dataset contains no points")]
    Empty,
    #[error("got {points} points but {labels} labels")]
    LengthMismatch { points: usize, labels: usize },
    #[error("first point is not a sequence of coordinates")]
    FirstPointNotSequence,
    #[error("first point has no coordinates")]
    ZeroDimension,
    #[error("point {index} is not a sequence of coordinates")]
    PointNotSequence { index: usize },
    #[error("point {index} has {actual} coordinates, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },
    #[error("coordinate {coordinate} of point {index} is not a number")]
    NonNumericCoordinate { index: usize, coordinate: usize },
    #[error("label {index} is not a number")]
    NonNumericLabel { index: usize },
}

fn check_counts(points: usize, labels: usize) -> Result<(), ValidationFailure> {
    if points == 0 {
        return Err(ValidationFailure::Empty);
    }
    if points != labels {
        return Err(ValidationFailure::LengthMismatch { points, labels });
    }
    Ok(())
}

/// Checks typed data. Coordinates and labels are numeric by construction, so only
/// the count and dimension rules can fail.
pub fn check<F>(points: &[Vec<F>], labels: &[F]) -> Result<(), ValidationFailure> {
    check_counts(points.len(), labels.len())?;

    let expected = points[0].len();
    if expected == 0 {
        return Err(ValidationFailure::ZeroDimension);
    }

    for (index, point) in points.iter().enumerate() {
        if point.len() != expected {
            return Err(ValidationFailure::DimensionMismatch {
                index,
                expected,
                actual: point.len(),
            });
        }
    }
    Ok(())
}

/// `true` iff `check` passes.
pub fn validate<F>(points: &[Vec<F>], labels: &[F]) -> bool {
    check(points, labels).is_ok()
}

/// Checks untyped data, e.g. the `points` and `labels` arrays of a JSON document.
///
/// Only JSON numbers (integer or floating-point) count as numeric. Booleans, strings,
/// nulls, arrays and objects do not.
pub fn check_json(points: &[Value], labels: &[Value]) -> Result<(), ValidationFailure> {
    check_counts(points.len(), labels.len())?;

    let expected = match &points[0] {
        Value::Array(first) if first.is_empty() => return Err(ValidationFailure::ZeroDimension),
        Value::Array(first) => first.len(),
        _ => return Err(ValidationFailure::FirstPointNotSequence),
    };

    for (index, point) in points.iter().enumerate() {
        let coordinates = point
            .as_array()
            .ok_or(ValidationFailure::PointNotSequence { index })?;
        if coordinates.len() != expected {
            return Err(ValidationFailure::DimensionMismatch {
                index,
                expected,
                actual: coordinates.len(),
            });
        }
        if let Some(coordinate) = coordinates.iter().position(|v| !v.is_number()) {
            return Err(ValidationFailure::NonNumericCoordinate { index, coordinate });
        }
    }

    if let Some(index) = labels.iter().position(|v| !v.is_number()) {
        return Err(ValidationFailure::NonNumericLabel { index });
    }
    Ok(())
}

/// `true` iff `check_json` passes.
pub fn validate_json(points: &[Value], labels: &[Value]) -> bool {
    check_json(points, labels).is_ok()
}
