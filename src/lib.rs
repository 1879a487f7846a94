//! Binary linear classification with the classical perceptron rule.
//!
//! The core is two pure functions: [`validate`] gates a dataset, [`train`] fits a
//! hyperplane to it. Loading, reporting and the synthetic generator sit around them.

pub mod common_types;
pub mod config;
pub mod dataset_io;
pub mod perceptron;
pub mod report;
pub mod synthetic;
pub mod validation;

pub use common_types::Dataset;
pub use perceptron::{train, train_dataset, train_observed, Hypothesis, Outcome, TrainingResult};
pub use validation::{validate, ValidationFailure};

#[cfg(feature = "python")]
mod python {
    use pyo3::prelude::*;

    /// Returns `True` if the points and labels form a well organized dataset.
    #[pyfunction]
    #[pyo3(name = "validate")]
    fn validate_py(points: &Bound<'_, PyAny>, labels: &Bound<'_, PyAny>) -> bool {
        // Anything that does not extract to numeric sequences is structurally invalid.
        let (Ok(points), Ok(labels)) = (points.extract::<Vec<Vec<f64>>>(), labels.extract::<Vec<f64>>())
        else {
            return false;
        };
        crate::validation::validate(&points, &labels)
    }

    /// Trains a perceptron and returns `(weights, bias, total_mistakes)`.
    #[pyfunction]
    #[pyo3(name = "train")]
    fn train_py(points: Vec<Vec<f64>>, labels: Vec<f64>, max_iterations: usize) -> PyResult<(Vec<f64>, f64, usize)> {
        if let Err(reason) = crate::validation::check(&points, &labels) {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(reason.to_string()));
        }
        Ok(crate::perceptron::train(&points, &labels, max_iterations).into_parts())
    }

    /// The `perceptron` Python module.
    #[pymodule]
    #[pyo3(name = "perceptron")]
    fn perceptron_py(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(validate_py, m)?)?;
        m.add_function(wrap_pyfunction!(train_py, m)?)?;
        Ok(())
    }
}
