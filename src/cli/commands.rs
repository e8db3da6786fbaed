//! Command implementations for the Sentira CLI.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::cli::args::{Command, InspectArgs, PredictArgs, SentiraArgs, TrainArgs};
use crate::cli::output::{
    InspectOutput, TrainingOutput, print_inspect_output, print_prediction, print_training_output,
};
use crate::error::{Result, SentiraError};
use crate::model::ModelArtifact;
use crate::predict::SentimentService;
use crate::train::{LabeledCorpus, Trainer, TrainingConfig, TrainingRecord};

/// Execute a CLI command.
pub fn execute_command(args: SentiraArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train(train_args.clone(), &args),
        Command::Predict(predict_args) => predict(predict_args.clone(), &args),
        Command::Inspect(inspect_args) => inspect(inspect_args.clone(), &args),
    }
}

/// Train a model and persist the artifact.
fn train(args: TrainArgs, cli_args: &SentiraArgs) -> Result<()> {
    if cli_args.verbosity() > 0 {
        println!("Loading corpus from: {}", args.corpus.display());
    }

    let corpus = load_corpus(&args.corpus, args.positive_label)?;
    if cli_args.verbosity() > 1 {
        println!(
            "Loaded {} records ({} positive)",
            corpus.len(),
            corpus.positive_count()
        );
    }

    let config = TrainingConfig::default()
        .with_test_ratio(args.test_ratio)
        .with_seed(args.seed)
        .with_max_iter(args.max_iter)
        .with_learning_rate(args.learning_rate);

    let report = Trainer::new(config).train(corpus, &args.output)?;

    let output = TrainingOutput::from_report(&report, &args.output.display().to_string());
    print_training_output(&output, cli_args)
}

/// Score text with a trained model.
fn predict(args: PredictArgs, cli_args: &SentiraArgs) -> Result<()> {
    let service = SentimentService::load(&args.model)?;

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let result = service.predict(&text)?;
    print_prediction(&result, cli_args)
}

/// Show artifact metadata.
fn inspect(args: InspectArgs, cli_args: &SentiraArgs) -> Result<()> {
    let artifact = ModelArtifact::load(&args.model)?;

    let output = InspectOutput {
        artifact_path: args.model.display().to_string(),
        format_version: artifact.metadata.format_version,
        analyzer_fingerprint: artifact.metadata.analyzer_fingerprint,
        trained_at: artifact.metadata.trained_at.to_rfc3339(),
        training_examples: artifact.metadata.training_examples,
        vocabulary_size: artifact.vectorizer.vocabulary_size(),
    };
    print_inspect_output(&output, cli_args)
}

/// Load a labeled corpus from a `label,text` file.
///
/// Lines that are empty or have no comma separator are rejected — a
/// malformed corpus aborts the run rather than training on garbage.
fn load_corpus(path: &Path, positive_label: i64) -> Result<LabeledCorpus> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let (label, text) = line.split_once(',').ok_or_else(|| {
            SentiraError::training(format!(
                "malformed corpus line {}: expected `label,text`",
                line_number + 1
            ))
        })?;

        let label: i64 = label.trim().parse().map_err(|_| {
            SentiraError::training(format!(
                "malformed corpus line {}: label is not an integer",
                line_number + 1
            ))
        })?;

        records.push(TrainingRecord::new(label, text));
    }

    Ok(LabeledCorpus::from_records_with_positive_label(
        records,
        positive_label,
    ))
}
