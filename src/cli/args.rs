//! Command line argument parsing for the Sentira CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Sentira - binary sentiment classification for short free text
#[derive(Parser, Debug, Clone)]
#[command(name = "sentira")]
#[command(about = "Train and serve a binary sentiment classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SentiraArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SentiraArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a model from a labeled corpus and persist the artifact
    Train(TrainArgs),

    /// Score a piece of text with a trained model
    Predict(PredictArgs),

    /// Show metadata of a persisted model artifact
    Inspect(InspectArgs),
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Path to the labeled corpus file (one `label,text` record per line)
    #[arg(short, long)]
    pub corpus: PathBuf,

    /// Where to write the model artifact
    #[arg(short, long, default_value = "model.bin")]
    pub output: PathBuf,

    /// Raw label value remapped to positive (everything else is negative)
    #[arg(long, default_value_t = crate::train::DEFAULT_POSITIVE_RAW_LABEL)]
    pub positive_label: i64,

    /// Fraction of each class held out for evaluation
    #[arg(long, default_value_t = 0.2)]
    pub test_ratio: f64,

    /// Seed for the stratified split
    #[arg(long, default_value_t = 2)]
    pub seed: u64,

    /// Iteration budget for the classifier fit
    #[arg(long, default_value_t = crate::classifier::DEFAULT_MAX_ITER)]
    pub max_iter: usize,

    /// Gradient-descent learning rate
    #[arg(long, default_value_t = crate::classifier::DEFAULT_LEARNING_RATE)]
    pub learning_rate: f64,
}

/// Arguments for prediction
#[derive(Parser, Debug, Clone)]
pub struct PredictArgs {
    /// Path to the model artifact
    #[arg(short, long, default_value = "model.bin")]
    pub model: PathBuf,

    /// Text to score (reads stdin when omitted)
    #[arg(short, long)]
    pub text: Option<String>,
}

/// Arguments for artifact inspection
#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    /// Path to the model artifact
    #[arg(short, long, default_value = "model.bin")]
    pub model: PathBuf,
}
