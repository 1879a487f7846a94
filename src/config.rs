//! Run configuration for the command-line front end.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::dataset_io::resolve;

/// The `data` directory next to the crate sources, independent of the working directory.
pub const DEFAULT_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");
pub const DEFAULT_DATA_FILE: &str = "example2D-1.json";
pub const DEFAULT_MAX_ITERATIONS: usize = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings for one `train` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainConfig {
    pub data_dir: PathBuf,
    pub data_file: String,
    pub max_iterations: usize,
    pub format: OutputFormat,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            data_file: DEFAULT_DATA_FILE.to_string(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            format: OutputFormat::Text,
        }
    }
}

impl TrainConfig {
    /// Fills unset options with defaults. A requested iteration cap of 1 or less becomes 1.
    pub fn new(
        data_dir: Option<PathBuf>,
        data_file: Option<String>,
        iterations: Option<i64>,
        format: OutputFormat,
    ) -> Self {
        let defaults = TrainConfig::default();
        TrainConfig {
            data_dir: data_dir.unwrap_or(defaults.data_dir),
            data_file: data_file.unwrap_or(defaults.data_file),
            max_iterations: iterations.map_or(defaults.max_iterations, clamp_iterations),
            format,
        }
    }

    pub fn data_path(&self) -> PathBuf {
        resolve(&self.data_dir, &self.data_file)
    }
}

/// `max(requested, 1)`, saturating on platforms where `usize` is narrower than `i64`.
pub fn clamp_iterations(requested: i64) -> usize {
    if requested <= 1 {
        1
    } else {
        usize::try_from(requested).unwrap_or(usize::MAX)
    }
}
