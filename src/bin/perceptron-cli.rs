//! Perceptron CLI
//!
//! Loads a labeled dataset from a JSON file, fits a hyperplane with the perceptron
//! rule and prints the weights, bias and total number of corrections.
//!
//! # Commands
//!
//! - `train`: train on `<data-dir>/<data>` and print the result
//! - `generate`: write a random linearly separable dataset

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use perceptron::config::{OutputFormat, TrainConfig};
use perceptron::report::{render_json, render_text, Report};
use perceptron::{dataset_io, synthetic, train_dataset};

/// Basic implementation of the perceptron algorithm: loads labeled data from a
/// .json file and calculates the hyperplane dividing it.
#[derive(Parser)]
#[command(name = "perceptron-cli")]
#[command(version)]
#[command(about = "Fits a separating hyperplane to labeled points with the perceptron rule")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train on a dataset file and print the learned hyperplane
    Train {
        /// Directory holding the dataset files [default: the `data` directory shipped with the crate]
        #[arg(long)]
        data_dir: Option<PathBuf>,
        /// Name of the .json file inside the data directory
        #[arg(short, long)]
        data: Option<String>,
        /// Maximum number of passes over the data (values below 1 become 1)
        #[arg(short, long, allow_negative_numbers = true)]
        iterations: Option<i64>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Write a random linearly separable dataset
    Generate {
        /// Destination file
        #[arg(short, long)]
        out: PathBuf,
        /// Number of points
        #[arg(short = 'n', long, default_value_t = 50)]
        points: usize,
        /// Dimension of each point
        #[arg(long, default_value_t = 2)]
        dim: usize,
        /// Minimum distance between any point and the generating hyperplane
        #[arg(long, default_value_t = 0.5)]
        margin: f64,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let outcome = match cli.command {
        Commands::Train {
            data_dir,
            data,
            iterations,
            format,
        } => run_train(TrainConfig::new(data_dir, data, iterations, format)),
        Commands::Generate {
            out,
            points,
            dim,
            margin,
            seed,
        } => run_generate(out, points, dim, margin, seed),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_train(config: TrainConfig) -> Result<()> {
    let path = config.data_path();
    info!(path = %path.display(), "loading data");
    info!(max_iterations = config.max_iterations, "approximating");

    let dataset = dataset_io::load_json(&path)
        .with_context(|| format!("could not load dataset {}", path.display()))?;

    let result = train_dataset(&dataset, config.max_iterations);
    if !result.converged() {
        warn!(
            passes = result.passes,
            total_mistakes = result.total_mistakes,
            "no error-free pass within the iteration cap; the hyperplane may not separate the data"
        );
    }

    let report = Report::new(&result, &dataset.points);
    if !matches!(report.dimension, 2 | 3) {
        info!(
            dimension = report.dimension,
            "boundary is only described for 2D and 3D data"
        );
    }

    match config.format {
        OutputFormat::Text => print!("{}", render_text(&report)),
        OutputFormat::Json => {
            println!("{}", render_json(&report).context("could not serialize report")?)
        }
    }
    Ok(())
}

fn run_generate(out: PathBuf, points: usize, dim: usize, margin: f64, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let dataset = synthetic::linearly_separable(points, dim, margin, &mut rng)
        .context("could not generate dataset")?;
    dataset_io::save_json(&out, &dataset)
        .with_context(|| format!("could not write {}", out.display()))?;

    println!("Wrote {} points in {}D to {}", dataset.len(), dim, out.display());
    Ok(())
}
