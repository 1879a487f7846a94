//! Reading and writing datasets as JSON.
//!
//! The file format is a single object:
//!
//! ```json
//! { "points": [[1, 1], [2, 2], [-1, -1]], "labels": [1, 1, -1] }
//! ```
//!
//! The raw document goes through [`crate::validation::check_json`] before anything is
//! converted, so a malformed file is rejected with the rule it broke.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::common_types::Dataset;
use crate::validation::{check_json, ValidationFailure};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset file {} does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dataset has no `{0}` array")]
    MissingField(&'static str),
    #[error("dataset is not well organized: {0}")]
    Invalid(#[from] ValidationFailure),
}

/// Joins a data directory and a file name.
pub fn resolve(data_dir: impl AsRef<Path>, file_name: &str) -> PathBuf {
    data_dir.as_ref().join(file_name)
}

/// Loads and validates a dataset file.
pub fn load_json(path: impl AsRef<Path>) -> Result<Dataset<f64>, DatasetError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DatasetError::NotFound(path.to_path_buf()));
    }

    debug!(path = %path.display(), "reading dataset");
    let text = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = parse_json(&text)?;
    info!(
        path = %path.display(),
        points = dataset.len(),
        dimension = dataset.dimension(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Parses and validates a dataset document held in memory.
pub fn parse_json(text: &str) -> Result<Dataset<f64>, DatasetError> {
    let mut document: Value = serde_json::from_str(text)?;

    let points = take_array(&mut document, "points")?;
    let labels = take_array(&mut document, "labels")?;
    check_json(&points, &labels)?;

    // Every value is a JSON number at this point, so these conversions cannot fail.
    let points: Vec<Vec<f64>> = serde_json::from_value(Value::Array(points))?;
    let labels: Vec<f64> = serde_json::from_value(Value::Array(labels))?;
    Ok(Dataset::new(points, labels))
}

fn take_array(document: &mut Value, field: &'static str) -> Result<Vec<Value>, DatasetError> {
    match document.get_mut(field).map(Value::take) {
        Some(Value::Array(values)) => Ok(values),
        _ => Err(DatasetError::MissingField(field)),
    }
}

/// Writes a dataset in the same format [`load_json`] reads, creating parent directories.
pub fn save_json(path: impl AsRef<Path>, dataset: &Dataset<f64>) -> Result<(), DatasetError> {
    let path = path.as_ref();
    let io_error = |source: io::Error| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let text = serde_json::to_string_pretty(dataset)?;
    fs::write(path, text).map_err(io_error)?;

    info!(path = %path.display(), points = dataset.len(), "dataset written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_json_accepts_integers_and_floats() {
        let dataset = parse_json(r#"{"points": [[1, 1.5], [-2, 0]], "labels": [1, -1.0]}"#)
            .expect("document is well formed");
        assert_eq!(dataset.points, vec![vec![1.0, 1.5], vec![-2.0, 0.0]]);
        assert_eq!(dataset.labels, vec![1.0, -1.0]);
    }

    #[test]
    fn test_parse_json_reports_missing_fields() {
        let err = parse_json(r#"{"points": [[1, 2]]}"#).unwrap_err();
        assert!(matches!(err, DatasetError::MissingField("labels")), "got {:?}", err);

        let err = parse_json(r#"{"points": 3, "labels": [1]}"#).unwrap_err();
        assert!(matches!(err, DatasetError::MissingField("points")), "got {:?}", err);

        let err = parse_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, DatasetError::MissingField("points")), "got {:?}", err);
    }

    #[test]
    fn test_parse_json_rejects_badly_organized_data() {
        let err = parse_json(r#"{"points": [[1, 2], [3]], "labels": [1, -1]}"#).unwrap_err();
        assert!(
            matches!(
                err,
                DatasetError::Invalid(ValidationFailure::DimensionMismatch { index: 1, .. })
            ),
            "got {:?}",
            err
        );

        let err = parse_json(r#"{"points": [[1, 2]], "labels": ["yes"]}"#).unwrap_err();
        assert!(matches!(err, DatasetError::Invalid(ValidationFailure::NonNumericLabel { index: 0 })));
    }

    #[test]
    fn test_parse_json_rejects_invalid_json() {
        let err = parse_json("{points: ").unwrap_err();
        assert!(matches!(err, DatasetError::Json(_)), "got {:?}", err);
    }

    #[test]
    fn test_load_json_missing_file() {
        let dir = tempdir().expect("temp dir");
        let err = load_json(resolve(dir.path(), "absent.json")).unwrap_err();
        assert!(matches!(err, DatasetError::NotFound(_)), "got {:?}", err);
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("example3D.json");
        let dataset = Dataset::new(
            vec![vec![1.0, 2.0, 3.0], vec![-1.0, -0.5, 0.25]],
            vec![1.0, -1.0],
        );

        save_json(&path, &dataset).expect("write succeeds");
        let loaded = load_json(&path).expect("read succeeds");
        assert_eq!(loaded, dataset);
    }

    #[test]
    fn test_shipped_examples() {
        use crate::perceptron::train_dataset;

        let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        for (file, dimension, separable) in [
            ("example2D-1.json", 2, true),
            ("example3D-1.json", 3, true),
            ("example2D-overlap.json", 2, false),
        ] {
            let dataset = load_json(resolve(&data_dir, file)).expect("shipped file loads");
            assert_eq!(dataset.dimension(), dimension, "{}", file);

            let result = train_dataset(&dataset, 1500);
            assert_eq!(result.converged(), separable, "{}", file);
            assert_eq!(result.passes == 1500, !separable, "{}", file);
        }
    }
}
