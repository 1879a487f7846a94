//! This module contains the data structures shared by the validator, the trainer and the loader.

use serde::{Deserialize, Serialize};

/// A labeled set of points, paired by position.
///
/// - `F`: The type of the coordinates and labels (e.g., `f64`, `f32`).
///
/// Labels are conventionally `-1` or `+1`, but any numeric value is accepted.
/// Construct it from already validated data; `Dataset` itself does not re-check shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset<F> {
    pub points: Vec<Vec<F>>,
    pub labels: Vec<F>,
}

impl<F> Dataset<F> {
    pub fn new(points: Vec<Vec<F>>, labels: Vec<F>) -> Self {
        Dataset { points, labels }
    }

    /// Number of (point, label) pairs.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The problem dimension `d`, taken from the first point.
    pub fn dimension(&self) -> usize {
        self.points.first().map_or(0, |p| p.len())
    }

    /// Iterates over `(point, label)` pairs in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = (&[F], &F)> + '_ {
        self.points.iter().map(Vec::as_slice).zip(self.labels.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_shape_accessors() {
        let dataset = Dataset::new(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]], vec![1.0, -1.0]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.dimension(), 3);
        assert!(!dataset.is_empty());

        let pairs: Vec<(&[f64], &f64)> = dataset.iter().collect();
        assert_eq!(pairs[1].0, &[4.0, 5.0, 6.0][..]);
        assert_eq!(*pairs[1].1, -1.0);
    }

    #[test]
    fn test_empty_dataset_has_zero_dimension() {
        let dataset: Dataset<f64> = Dataset::new(vec![], vec![]);
        assert!(dataset.is_empty());
        assert_eq!(dataset.dimension(), 0);
    }
}
