//! Training orchestration.
//!
//! The trainer drives the sequential stage pipeline:
//!
//! ```text
//! LoadCorpus → RemapLabels → Split (stratified, seeded) → NormalizeAll
//!            → FitVectorizer → FitClassifier → EvaluateOnHoldout
//!            → PersistArtifact (atomic)
//! ```
//!
//! Stages are non-retryable; a failure anywhere aborts the run before any
//! artifact is written. Evaluation is observational only — train and
//! holdout accuracy are reported but never gate persistence.

use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::SentimentAnalyzer;
use crate::classifier::{LogisticRegression, TrainingStats};
use crate::error::{Result, SentiraError};
use crate::feature::{SparseVector, TfIdfVectorizer};
use crate::model::ModelArtifact;

pub mod corpus;
pub mod split;

pub use corpus::{DEFAULT_POSITIVE_RAW_LABEL, LabeledCorpus, TrainingRecord};
pub use split::{SplitIndices, stratified_split};

/// Configuration for a training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Fraction of each class held out for evaluation, in `[0.0, 1.0)`.
    pub test_ratio: f64,
    /// Seed for the stratified split.
    pub seed: u64,
    /// Iteration budget for the classifier fit.
    pub max_iter: usize,
    /// Gradient-descent learning rate.
    pub learning_rate: f64,
    /// L2 regularization strength.
    pub l2_penalty: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            test_ratio: 0.2,
            seed: 2,
            max_iter: crate::classifier::DEFAULT_MAX_ITER,
            learning_rate: crate::classifier::DEFAULT_LEARNING_RATE,
            l2_penalty: crate::classifier::DEFAULT_L2_PENALTY,
        }
    }
}

impl TrainingConfig {
    /// Set the holdout ratio.
    pub fn with_test_ratio(mut self, test_ratio: f64) -> Self {
        self.test_ratio = test_ratio;
        self
    }

    /// Set the split seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the classifier iteration budget.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the classifier learning rate.
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }
}

/// Report from a completed training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Records used for fitting.
    pub train_size: usize,
    /// Records held out for evaluation.
    pub test_size: usize,
    /// Vocabulary size after fitting.
    pub vocabulary_size: usize,
    /// Accuracy on the training split.
    pub train_accuracy: f64,
    /// Accuracy on the holdout split, when one exists.
    pub test_accuracy: Option<f64>,
    /// Optimizer statistics from the classifier fit.
    pub stats: TrainingStats,
}

/// Drives a full training run and persists the resulting artifact.
#[derive(Debug, Clone)]
pub struct Trainer {
    config: TrainingConfig,
}

impl Trainer {
    /// Create a trainer with the given configuration.
    pub fn new(config: TrainingConfig) -> Self {
        Trainer { config }
    }

    /// Run every stage over `corpus` and write the artifact to
    /// `artifact_path`.
    ///
    /// No artifact is written unless every prior stage succeeded; the
    /// write itself is atomic.
    pub fn train(&self, corpus: LabeledCorpus, artifact_path: &Path) -> Result<TrainingReport> {
        if corpus.is_empty() {
            return Err(SentiraError::training("training corpus is empty"));
        }

        let analyzer = SentimentAnalyzer::new()?;

        // Split before normalization so the holdout never influences the
        // vocabulary or idf table.
        let split = stratified_split(corpus.labels(), self.config.test_ratio, self.config.seed)?;
        if split.train.is_empty() {
            return Err(SentiraError::training(
                "training split is empty; lower the test ratio",
            ));
        }

        let normalized: Vec<String> = corpus
            .texts()
            .par_iter()
            .map(|text| analyzer.normalize(text))
            .collect();

        let train_docs: Vec<String> = split
            .train
            .iter()
            .map(|&i| normalized[i].clone())
            .collect();
        let train_labels: Vec<u8> = split.train.iter().map(|&i| corpus.labels()[i]).collect();

        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&train_docs)?;

        let train_vectors: Vec<SparseVector> = train_docs
            .par_iter()
            .map(|doc| vectorizer.transform(doc))
            .collect();

        let mut classifier = LogisticRegression::new(vectorizer.vocabulary_size())
            .with_max_iter(self.config.max_iter)
            .with_learning_rate(self.config.learning_rate)
            .with_l2_penalty(self.config.l2_penalty);
        let stats = classifier.fit(&train_vectors, &train_labels)?;

        let train_accuracy = accuracy(&classifier, &train_vectors, &train_labels);
        let test_accuracy = if split.test.is_empty() {
            None
        } else {
            let test_vectors: Vec<SparseVector> = split
                .test
                .iter()
                .map(|&i| vectorizer.transform(&normalized[i]))
                .collect();
            let test_labels: Vec<u8> = split.test.iter().map(|&i| corpus.labels()[i]).collect();
            Some(accuracy(&classifier, &test_vectors, &test_labels))
        };

        let report = TrainingReport {
            train_size: split.train.len(),
            test_size: split.test.len(),
            vocabulary_size: vectorizer.vocabulary_size(),
            train_accuracy,
            test_accuracy,
            stats,
        };

        let artifact =
            ModelArtifact::new(vectorizer, classifier, &analyzer, split.train.len());
        artifact.save(artifact_path)?;

        Ok(report)
    }
}

/// Fraction of examples the classifier labels correctly.
fn accuracy(classifier: &LogisticRegression, x: &[SparseVector], y: &[u8]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }

    let correct = x
        .iter()
        .zip(y.iter())
        .filter(|&(vector, &label)| classifier.predict(vector).label == label)
        .count();
    correct as f64 / x.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_corpus() -> LabeledCorpus {
        LabeledCorpus::from_records(vec![
            TrainingRecord::new(1, "great movie loved it"),
            TrainingRecord::new(1, "wonderful amazing film"),
            TrainingRecord::new(1, "loved every minute"),
            TrainingRecord::new(0, "terrible awful hated it"),
            TrainingRecord::new(0, "worst film ever"),
            TrainingRecord::new(0, "hated every minute"),
        ])
    }

    #[test]
    fn test_train_produces_artifact_and_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");

        let config = TrainingConfig::default().with_test_ratio(0.0);
        let report = Trainer::new(config).train(toy_corpus(), &path).unwrap();

        assert_eq!(report.train_size, 6);
        assert_eq!(report.test_size, 0);
        assert!(report.test_accuracy.is_none());
        assert!(report.train_accuracy >= 0.5);
        assert!(report.vocabulary_size > 0);
        assert!(path.exists());

        let artifact = ModelArtifact::load(&path).unwrap();
        assert_eq!(
            artifact.classifier.dim(),
            artifact.vectorizer.vocabulary_size()
        );
    }

    #[test]
    fn test_empty_corpus_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");

        let result = Trainer::new(TrainingConfig::default())
            .train(LabeledCorpus::default(), &path);

        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_training_is_reproducible() {
        let dir = tempfile::tempdir().unwrap();
        let path_a = dir.path().join("a.bin");
        let path_b = dir.path().join("b.bin");

        let config = TrainingConfig::default().with_test_ratio(0.0).with_seed(42);
        Trainer::new(config.clone()).train(toy_corpus(), &path_a).unwrap();
        Trainer::new(config).train(toy_corpus(), &path_b).unwrap();

        let a = ModelArtifact::load(&path_a).unwrap();
        let b = ModelArtifact::load(&path_b).unwrap();

        assert_eq!(a.classifier.weights(), b.classifier.weights());
        assert_eq!(a.classifier.bias(), b.classifier.bias());
        assert_eq!(
            a.vectorizer.vocabulary_size(),
            b.vectorizer.vocabulary_size()
        );
    }
}
