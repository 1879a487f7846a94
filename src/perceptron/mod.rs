//! The perceptron: hypothesis, training result and the online training loop.

pub mod trainer;
pub mod vector_ops;

pub use trainer::{train, train_dataset, train_observed};

use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::iter::Sum;

use vector_ops::dot;

/// A hyperplane `w·x + b = 0`.
///
/// A training run creates one zero-initialized hypothesis, mutates it in place
/// and hands it back inside a [`TrainingResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis<F> {
    pub weights: Vec<F>,
    pub bias: F,
}

impl<F> Hypothesis<F>
where
    F: Float + Sum,
{
    /// All-zero weights of length `dimension` and a zero bias.
    pub fn zeros(dimension: usize) -> Self {
        Hypothesis {
            weights: vec![F::zero(); dimension],
            bias: F::zero(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.weights.len()
    }

    /// `w·x + b`
    pub fn activation(&self, features: &[F]) -> F {
        dot(&self.weights, features) + self.bias
    }

    /// Signed margin `y·(w·x + b)`. Non-positive means misclassified.
    pub fn margin(&self, features: &[F], label: F) -> F {
        label * self.activation(features)
    }

    /// `+1` on or above the hyperplane, `-1` below it.
    pub fn predict(&self, features: &[F]) -> F {
        if self.activation(features) >= F::zero() {
            F::one()
        } else {
            -F::one()
        }
    }

    /// The smallest margin over a dataset. Positive iff every point is strictly separated.
    /// `None` for an empty dataset.
    pub fn functional_margin(&self, points: &[Vec<F>], labels: &[F]) -> Option<F> {
        points
            .iter()
            .zip(labels.iter())
            .map(|(x, &y)| self.margin(x, y))
            .fold(None, |min, m| match min {
                Some(current) if current <= m => Some(current),
                _ => Some(m),
            })
    }

    /// `true` iff every point has a strictly positive margin.
    pub fn separates(&self, points: &[Vec<F>], labels: &[F]) -> bool {
        points
            .iter()
            .zip(labels.iter())
            .all(|(x, &y)| self.margin(x, y) > F::zero())
    }

    /// Perceptron correction: `w ← w + y·x`, `b ← b + y`.
    pub(crate) fn correct(&mut self, features: &[F], label: F) {
        for (w, &x) in self.weights.iter_mut().zip(features.iter()) {
            *w = *w + label * x;
        }
        self.bias = self.bias + label;
    }
}

/// How a training run ended. Both states carry a usable hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A full pass made no corrections.
    Converged,
    /// Every allowed pass made at least one correction.
    BudgetExhausted,
}

/// Snapshot returned by [`train`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult<F> {
    pub hypothesis: Hypothesis<F>,
    /// Corrections across all passes.
    pub total_mistakes: usize,
    /// Completed passes over the dataset.
    pub passes: usize,
    /// Corrections made in the final pass. Zero iff the run converged.
    pub last_pass_mistakes: usize,
    pub outcome: Outcome,
}

impl<F> TrainingResult<F> {
    pub fn converged(&self) -> bool {
        self.outcome == Outcome::Converged
    }

    /// `(weights, bias, total_mistakes)`
    pub fn into_parts(self) -> (Vec<F>, F, usize) {
        (self.hypothesis.weights, self.hypothesis.bias, self.total_mistakes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hypothesis_zeros() {
        let h = Hypothesis::<f64>::zeros(3);
        assert_eq!(h.weights, vec![0.0, 0.0, 0.0]);
        assert_eq!(h.bias, 0.0);
        assert_eq!(h.dimension(), 3);
        // Every point sits on the zero hyperplane, so every margin is zero.
        assert_eq!(h.margin(&[1.0, 2.0, 3.0], 1.0), 0.0);
    }

    #[test]
    fn test_hypothesis_correct_and_predict() {
        let mut h = Hypothesis::<f64>::zeros(2);
        h.correct(&[2.0, -1.0], -1.0);
        assert_eq!(h.weights, vec![-2.0, 1.0]);
        assert_eq!(h.bias, -1.0);

        assert_eq!(h.activation(&[1.0, 1.0]), -2.0);
        assert_eq!(h.predict(&[1.0, 1.0]), -1.0);
        assert_eq!(h.predict(&[-1.0, 0.0]), 1.0);
        assert_eq!(h.margin(&[-1.0, 0.0], 1.0), 1.0);
    }

    #[test]
    fn test_functional_margin_and_separates() {
        let h = Hypothesis { weights: vec![1.0, 1.0], bias: 0.0 };
        let points = vec![vec![1.0, 1.0], vec![-2.0, -1.0]];

        assert_eq!(h.functional_margin(&points, &[1.0, -1.0]), Some(2.0));
        assert!(h.separates(&points, &[1.0, -1.0]));

        assert_eq!(h.functional_margin(&points, &[1.0, 1.0]), Some(-3.0));
        assert!(!h.separates(&points, &[1.0, 1.0]));

        assert_eq!(h.functional_margin(&[], &[]), None);
    }

    #[test]
    fn test_training_result_into_parts() {
        let result = TrainingResult {
            hypothesis: Hypothesis { weights: vec![1.0_f32, 2.0], bias: -0.5 },
            total_mistakes: 3,
            passes: 3,
            last_pass_mistakes: 0,
            outcome: Outcome::Converged,
        };
        assert_eq!(result.passes, 3);
        assert!(result.converged());
        assert_eq!(result.into_parts(), (vec![1.0, 2.0], -0.5, 3));
    }
}
