//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SentiraArgs};
use crate::error::Result;
use crate::predict::PredictionResult;
use crate::train::TrainingReport;

/// Result structure for training runs.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingOutput {
    pub artifact_path: String,
    pub train_size: usize,
    pub test_size: usize,
    pub vocabulary_size: usize,
    pub train_accuracy: f64,
    pub test_accuracy: Option<f64>,
    pub iterations: usize,
    pub converged: bool,
    pub training_time_ms: u64,
}

impl TrainingOutput {
    /// Build the output record from a report and the artifact destination.
    pub fn from_report(report: &TrainingReport, artifact_path: &str) -> Self {
        TrainingOutput {
            artifact_path: artifact_path.to_string(),
            train_size: report.train_size,
            test_size: report.test_size,
            vocabulary_size: report.vocabulary_size,
            train_accuracy: report.train_accuracy,
            test_accuracy: report.test_accuracy,
            iterations: report.stats.iterations,
            converged: report.stats.converged,
            training_time_ms: report.stats.training_time_ms,
        }
    }
}

/// Result structure for artifact inspection.
#[derive(Debug, Serialize, Deserialize)]
pub struct InspectOutput {
    pub artifact_path: String,
    pub format_version: u32,
    pub analyzer_fingerprint: u32,
    pub trained_at: String,
    pub training_examples: usize,
    pub vocabulary_size: usize,
}

/// Print a training result in the requested format.
pub fn print_training_output(output: &TrainingOutput, args: &SentiraArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(output)?),
        OutputFormat::Human => {
            println!("Model written to {}", output.artifact_path);
            println!(
                "  train/test records: {}/{}",
                output.train_size, output.test_size
            );
            println!("  vocabulary size:    {}", output.vocabulary_size);
            println!("  train accuracy:     {:.4}", output.train_accuracy);
            match output.test_accuracy {
                Some(accuracy) => println!("  test accuracy:      {accuracy:.4}"),
                None => println!("  test accuracy:      (no holdout)"),
            }
            if args.verbosity() > 1 {
                println!(
                    "  optimizer:          {} iterations, converged: {}, {} ms",
                    output.iterations, output.converged, output.training_time_ms
                );
            }
        }
    }
    Ok(())
}

/// Print a prediction result in the requested format.
pub fn print_prediction(result: &PredictionResult, args: &SentiraArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Human => {
            println!("{} ({}%)", result.sentiment, result.percentage);
        }
    }
    Ok(())
}

/// Print artifact metadata in the requested format.
pub fn print_inspect_output(output: &InspectOutput, args: &SentiraArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(output)?),
        OutputFormat::Human => {
            println!("Artifact {}", output.artifact_path);
            println!("  format version:       {}", output.format_version);
            println!(
                "  analyzer fingerprint: {:#010x}",
                output.analyzer_fingerprint
            );
            println!("  trained at:           {}", output.trained_at);
            println!("  training examples:    {}", output.training_examples);
            println!("  vocabulary size:      {}", output.vocabulary_size);
        }
    }
    Ok(())
}
