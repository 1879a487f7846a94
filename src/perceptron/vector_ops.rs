//! Small vector helpers used by the trainer and its diagnostics.

use num_traits::Float;
use std::iter::Sum;

/// Calculates the dot product of two vectors.
///
/// Extra coordinates on the longer side are ignored; callers pass equal lengths.
pub fn dot<F: Float + Sum>(a: &[F], b: &[F]) -> F {
    a.iter().zip(b.iter()).map(|(&x, &y)| x * y).sum()
}

/// Calculates the magnitude (L2 norm) of a vector.
pub fn norm<F: Float + Sum>(vec: &[F]) -> F {
    vec.iter().map(|&x| x * x).sum::<F>().sqrt()
}

/// The largest L2 norm among `points` (the `R` of the convergence theorem).
/// `None` when there are no points.
pub fn max_norm<F: Float + Sum>(points: &[Vec<F>]) -> Option<F> {
    points
        .iter()
        .map(|p| norm(p))
        .fold(None, |max, n| match max {
            Some(m) if m >= n => Some(m),
            _ => Some(n),
        })
}

/// Novikoff's bound `(R/δ)²` on the number of corrections for data separable with margin `δ`.
/// `None` unless `margin > 0`.
pub fn mistake_bound<F: Float>(radius: F, margin: F) -> Option<F> {
    if margin <= F::zero() {
        return None;
    }
    let ratio = radius / margin;
    Some(ratio * ratio)
}
