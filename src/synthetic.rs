//! Synthetic, linearly separable datasets for demos and experiments.

use rand::Rng;
use thiserror::Error;

use crate::common_types::Dataset;
use crate::perceptron::vector_ops::{dot, norm};

/// Coordinates are drawn uniformly from `[-BOX_HALF_WIDTH, BOX_HALF_WIDTH]`.
pub const BOX_HALF_WIDTH: f64 = 10.0;

/// Rejection sampling gives up after this many draws per requested point.
const ATTEMPTS_PER_POINT: usize = 1000;

/// Upper bound on the up-front reservation; larger requests grow as points are accepted.
const PREALLOCATED_POINTS: usize = 1 << 16;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error("at least one point is required")]
    NoPoints,
    #[error("points need at least one coordinate")]
    ZeroDimension,
    #[error("margin must be a non-negative number, got {0}")]
    BadMargin(f64),
    #[error("could not place {requested} points at distance >= {margin} from the hyperplane")]
    MarginTooWide { requested: usize, margin: f64 },
    #[error("{0} points is more than the sampler can attempt")]
    TooManyPoints(usize),
}

/// Samples `n` points in `dim` dimensions and labels them by the side of a random
/// hyperplane they fall on. Points closer than `margin` to that hyperplane are redrawn,
/// so the result is separable with at least that margin.
pub fn linearly_separable<R: Rng>(
    n: usize,
    dim: usize,
    margin: f64,
    rng: &mut R,
) -> Result<Dataset<f64>, GenerationError> {
    if n == 0 {
        return Err(GenerationError::NoPoints);
    }
    if dim == 0 {
        return Err(GenerationError::ZeroDimension);
    }
    if !margin.is_finite() || margin < 0.0 {
        return Err(GenerationError::BadMargin(margin));
    }
    let max_attempts = n
        .checked_mul(ATTEMPTS_PER_POINT)
        .ok_or(GenerationError::TooManyPoints(n))?;

    let normal = random_unit_vector(dim, rng);
    let offset: f64 = rng.gen_range(-1.0..=1.0);

    let mut points = Vec::with_capacity(n.min(PREALLOCATED_POINTS));
    let mut labels = Vec::with_capacity(n.min(PREALLOCATED_POINTS));
    let mut attempts = 0;
    while points.len() < n {
        if attempts == max_attempts {
            return Err(GenerationError::MarginTooWide { requested: n, margin });
        }
        attempts += 1;

        let point: Vec<f64> = (0..dim)
            .map(|_| rng.gen_range(-BOX_HALF_WIDTH..=BOX_HALF_WIDTH))
            .collect();
        // Signed distance, since the normal has unit length.
        let distance = dot(&normal, &point) + offset;
        if distance.abs() < margin || distance == 0.0 {
            continue;
        }
        labels.push(if distance > 0.0 { 1.0 } else { -1.0 });
        points.push(point);
    }
    Ok(Dataset::new(points, labels))
}

fn random_unit_vector<R: Rng>(dim: usize, rng: &mut R) -> Vec<f64> {
    loop {
        let v: Vec<f64> = (0..dim).map(|_| rng.gen_range(-1.0..=1.0)).collect();
        let length = norm(&v);
        if length > 1e-6 {
            return v.into_iter().map(|x| x / length).collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perceptron::train_dataset;
    use crate::validation::validate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_data_is_valid_and_trainable() {
        let mut rng = StdRng::seed_from_u64(7);
        let dataset = linearly_separable(60, 3, 0.5, &mut rng).expect("generation succeeds");

        assert_eq!(dataset.len(), 60);
        assert_eq!(dataset.dimension(), 3);
        assert!(validate(&dataset.points, &dataset.labels));
        assert!(dataset.labels.iter().all(|&y| y == 1.0 || y == -1.0));

        let result = train_dataset(&dataset, 10_000);
        assert!(result.converged(), "Separable data should converge, got {:?}", result.outcome);
        assert!(result.hypothesis.separates(&dataset.points, &dataset.labels));
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let a = linearly_separable(10, 2, 0.1, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = linearly_separable(10, 2, 0.1, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(linearly_separable(0, 2, 0.1, &mut rng), Err(GenerationError::NoPoints));
        assert_eq!(linearly_separable(5, 0, 0.1, &mut rng), Err(GenerationError::ZeroDimension));
        assert!(matches!(
            linearly_separable(5, 2, f64::NAN, &mut rng),
            Err(GenerationError::BadMargin(_))
        ));
        assert_eq!(
            linearly_separable(usize::MAX, 2, 0.1, &mut rng),
            Err(GenerationError::TooManyPoints(usize::MAX))
        );
        // No point of the box can be 100 units from a hyperplane through the middle of it.
        assert_eq!(
            linearly_separable(3, 1, 100.0, &mut rng),
            Err(GenerationError::MarginTooWide { requested: 3, margin: 100.0 })
        );
    }
}
