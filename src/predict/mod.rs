//! Inference service.
//!
//! The service loads one validated artifact at construction and then
//! serves stateless `predict` calls for the life of the process. The
//! artifact is immutable after load, so a single service value can be
//! shared by any number of concurrent callers without coordination; there
//! is no per-request lazy loading and no reload path.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//! use sentira::predict::SentimentService;
//!
//! # fn main() -> sentira::error::Result<()> {
//! let service = SentimentService::load(Path::new("model.bin"))?;
//! let result = service.predict("what a great day")?;
//! println!("{} ({}%)", result.sentiment, result.percentage);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::SentimentAnalyzer;
use crate::error::{Result, SentiraError};
use crate::model::ModelArtifact;

/// Binary sentiment class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
        }
    }
}

/// Result of scoring one message.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted sentiment class.
    pub sentiment: Sentiment,
    /// Probability of the predicted class, in `[0, 1]`.
    pub confidence: f64,
    /// `floor(confidence * 100)`, for display.
    pub percentage: u8,
}

/// Stateless sentiment scoring over one loaded model artifact.
pub struct SentimentService {
    analyzer: SentimentAnalyzer,
    artifact: ModelArtifact,
}

impl SentimentService {
    /// Load and validate the artifact at `path`.
    ///
    /// Fails fast with a distinguishable artifact error; a service value
    /// is only ever constructed around a fully validated artifact.
    pub fn load(path: &Path) -> Result<Self> {
        let analyzer = SentimentAnalyzer::new()?;
        let artifact = ModelArtifact::load_with_analyzer(path, &analyzer)?;

        Ok(SentimentService { analyzer, artifact })
    }

    /// Construct a service around an already loaded artifact.
    ///
    /// Validates the artifact against this service's analyzer first.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        let analyzer = SentimentAnalyzer::new()?;
        artifact.validate(&analyzer)?;

        Ok(SentimentService { analyzer, artifact })
    }

    /// Score one message.
    ///
    /// Blank input is rejected here at the boundary with an input error —
    /// the pipeline itself is total on empty strings, but an empty request
    /// is a caller mistake, not a sentiment. Text whose every term is
    /// out-of-vocabulary still scores (by the bias term alone).
    pub fn predict(&self, text: &str) -> Result<PredictionResult> {
        if text.trim().is_empty() {
            return Err(SentiraError::input("no text provided"));
        }

        Ok(self.predict_unchecked(text))
    }

    /// Score text without the blank-input boundary check.
    ///
    /// Total on any input, including the empty string.
    pub fn predict_unchecked(&self, text: &str) -> PredictionResult {
        let normalized = self.analyzer.normalize(text);
        let features = self.artifact.vectorizer.transform(&normalized);
        let prediction = self.artifact.classifier.predict(&features);

        let sentiment = if prediction.label == 1 {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        };

        PredictionResult {
            sentiment,
            confidence: prediction.confidence,
            percentage: (prediction.confidence * 100.0).floor() as u8,
        }
    }

    /// The loaded artifact.
    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }
}

impl fmt::Debug for SentimentService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentimentService")
            .field("vocabulary_size", &self.artifact.vectorizer.vocabulary_size())
            .field("trained_at", &self.artifact.metadata.trained_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::train::{LabeledCorpus, Trainer, TrainingConfig, TrainingRecord};

    fn trained_service() -> SentimentService {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");

        let corpus = LabeledCorpus::from_records(vec![
            TrainingRecord::new(1, "great movie loved it"),
            TrainingRecord::new(0, "terrible awful hated it"),
        ]);
        let config = TrainingConfig::default().with_test_ratio(0.0);
        Trainer::new(config).train(corpus, &path).unwrap();

        SentimentService::load(&path).unwrap()
    }

    #[test]
    fn test_predict_positive() {
        let service = trained_service();
        let result = service.predict("I loved this").unwrap();

        assert_eq!(result.sentiment, Sentiment::Positive);
        assert!(result.confidence >= 0.5);
    }

    #[test]
    fn test_predict_negative() {
        let service = trained_service();
        let result = service.predict("terrible awful hated it").unwrap();

        assert_eq!(result.sentiment, Sentiment::Negative);
        assert_eq!(result.percentage, (result.confidence * 100.0).floor() as u8);
    }

    #[test]
    fn test_blank_input_rejected_at_boundary() {
        let service = trained_service();

        for text in ["", "   ", "\t\n"] {
            match service.predict(text) {
                Err(SentiraError::Input(message)) => {
                    assert_eq!(message, "no text provided");
                }
                other => panic!("expected input error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_pipeline_total_on_empty_input() {
        let service = trained_service();

        // Bias-only scoring: deterministic, never an error.
        let a = service.predict_unchecked("");
        let b = service.predict_unchecked("");
        assert_eq!(a, b);
    }

    #[test]
    fn test_out_of_vocabulary_scores_by_bias() {
        let service = trained_service();

        let oov = service.predict_unchecked("zzz qqq xyzzy");
        let empty = service.predict_unchecked("");
        assert_eq!(oov, empty);
    }

    #[test]
    fn test_service_is_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SentimentService>();
    }
}
