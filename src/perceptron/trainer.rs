//! The online perceptron training loop.

use num_traits::Float;
use std::iter::Sum;

use super::{Hypothesis, Outcome, TrainingResult};
use crate::common_types::Dataset;

/// Trains a perceptron on already validated data.
///
/// Runs at most `max_iterations` full passes over the data, in dataset order. Within a
/// pass every point is checked against the hypothesis as updated by the points before
/// it; a point with margin `≤ 0` (including exactly on the hyperplane) counts as a
/// mistake and triggers `w ← w + y·x`, `b ← b + y`. A pass without mistakes ends the
/// run as [`Outcome::Converged`]; running out of passes ends it as
/// [`Outcome::BudgetExhausted`]. Neither case is an error.
///
/// A budget of `0` is treated as `1`, so every run makes at least one pass.
/// Shape checks belong to [`crate::validation`]; behaviour on unvalidated data is unspecified.
/// Memory use does not depend on the budget.
pub fn train<F>(points: &[Vec<F>], labels: &[F], max_iterations: usize) -> TrainingResult<F>
where
    F: Float + Sum,
{
    train_observed(points, labels, max_iterations, |_| {})
}

/// [`train`], calling `on_pass` with the number of corrections after every completed pass.
pub fn train_observed<F, O>(
    points: &[Vec<F>],
    labels: &[F],
    max_iterations: usize,
    mut on_pass: O,
) -> TrainingResult<F>
where
    F: Float + Sum,
    O: FnMut(usize),
{
    let dimension = points.first().map_or(0, Vec::len);
    let max_passes = max_iterations.max(1);

    let mut hypothesis = Hypothesis::zeros(dimension);
    let mut total_mistakes = 0;
    let mut passes = 0;
    let mut last_pass_mistakes = 0;

    while passes < max_passes {
        last_pass_mistakes = run_pass(&mut hypothesis, points, labels);
        total_mistakes += last_pass_mistakes;
        passes += 1;
        on_pass(last_pass_mistakes);

        if last_pass_mistakes == 0 {
            break;
        }
    }

    let outcome = if last_pass_mistakes == 0 {
        Outcome::Converged
    } else {
        Outcome::BudgetExhausted
    };
    TrainingResult {
        hypothesis,
        total_mistakes,
        passes,
        last_pass_mistakes,
        outcome,
    }
}

/// [`train`] over a [`Dataset`].
pub fn train_dataset<F>(dataset: &Dataset<F>, max_iterations: usize) -> TrainingResult<F>
where
    F: Float + Sum,
{
    train(&dataset.points, &dataset.labels, max_iterations)
}

/// One sweep over the data. Returns the number of corrections made.
fn run_pass<F>(hypothesis: &mut Hypothesis<F>, points: &[Vec<F>], labels: &[F]) -> usize
where
    F: Float + Sum,
{
    let mut mistakes = 0;
    for (xi, &yi) in points.iter().zip(labels.iter()) {
        if hypothesis.margin(xi, yi) <= F::zero() {
            mistakes += 1;
            hypothesis.correct(xi, yi);
        }
    }
    mistakes
}
