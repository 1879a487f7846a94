//! Formatting of training results for people and for other programs.

use std::fmt;

use serde::Serialize;

use crate::perceptron::{Hypothesis, TrainingResult};

/// Number of samples taken along a 2D decision line.
pub const LINE_SAMPLES: usize = 10;

/// Everything the CLI prints about a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub weights: Vec<f64>,
    pub bias: f64,
    pub total_mistakes: usize,
    pub passes: usize,
    pub converged: bool,
    pub dimension: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary: Option<Boundary>,
}

impl Report {
    /// Builds a report, describing the boundary when the data is 2D or 3D.
    pub fn new(result: &TrainingResult<f64>, points: &[Vec<f64>]) -> Self {
        let hypothesis = &result.hypothesis;
        Report {
            weights: hypothesis.weights.clone(),
            bias: hypothesis.bias,
            total_mistakes: result.total_mistakes,
            passes: result.passes,
            converged: result.converged(),
            dimension: hypothesis.dimension(),
            boundary: boundary(hypothesis, points),
        }
    }
}

/// The decision boundary solved for its last coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Boundary {
    /// `x2 = slope * x1 + intercept`, sampled across the data's `x1` range.
    Line {
        slope: f64,
        intercept: f64,
        samples: Vec<(f64, f64)>,
    },
    /// `x3 = a * x1 + b * x2 + c`
    Plane { a: f64, b: f64, c: f64 },
}

/// Describes `w·x + b = 0` for 2D and 3D data.
///
/// `None` for any other dimension, and when the last weight is zero, since the
/// boundary then cannot be written as a function of the other coordinates.
pub fn boundary(hypothesis: &Hypothesis<f64>, points: &[Vec<f64>]) -> Option<Boundary> {
    let w = &hypothesis.weights;
    let bias = hypothesis.bias;
    match w.len() {
        2 if w[1] != 0.0 => {
            let slope = -w[0] / w[1];
            let intercept = -bias / w[1];
            let (lo, hi) = coordinate_range(points, 0)?;
            let samples = linspace(lo, hi, LINE_SAMPLES)
                .map(|x| (x, slope * x + intercept))
                .collect();
            Some(Boundary::Line { slope, intercept, samples })
        }
        3 if w[2] != 0.0 => Some(Boundary::Plane {
            a: -w[0] / w[2],
            b: -w[1] / w[2],
            c: -bias / w[2],
        }),
        _ => None,
    }
}

fn coordinate_range(points: &[Vec<f64>], axis: usize) -> Option<(f64, f64)> {
    points
        .iter()
        .filter_map(|p| p.get(axis).copied())
        .fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

fn linspace(lo: f64, hi: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = if count > 1 { (hi - lo) / (count - 1) as f64 } else { 0.0 };
    (0..count).map(move |i| lo + step * i as f64)
}

/// Human readable summary, one item per line.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = if self.converged { "converged" } else { "iteration cap reached" };

        writeln!(f, "Results:")?;
        writeln!(f, "\tWeights: {:?}", self.weights)?;
        writeln!(f, "\tBias: {}", self.bias)?;
        writeln!(f, "\tTotal errors: {}", self.total_mistakes)?;
        writeln!(f, "\tPasses: {} ({})", self.passes, outcome)?;

        match &self.boundary {
            Some(Boundary::Line { slope, intercept, samples }) => {
                writeln!(f, "\tBoundary: x2 = {:.4} * x1 + {:.4}", slope, intercept)?;
                for (x, y) in samples {
                    writeln!(f, "\t\t({:.4}, {:.4})", x, y)?;
                }
            }
            Some(Boundary::Plane { a, b, c }) => {
                writeln!(f, "\tBoundary: x3 = {:.4} * x1 + {:.4} * x2 + {:.4}", a, b, c)?;
            }
            None => {}
        }
        Ok(())
    }
}

/// Text form of a report. Ends with a newline.
pub fn render_text(report: &Report) -> String {
    report.to_string()
}

/// Pretty-printed JSON.
pub fn render_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
