//! # Sentira
//!
//! A binary sentiment classification library for short free text.
//!
//! Sentira covers the full text-to-feature-to-label pipeline in two phases
//! that share one deterministic text transformation:
//!
//! - **Offline training**: fit a TF-IDF vectorizer and a logistic-regression
//!   classifier from a labeled corpus and persist both as a single atomic
//!   model artifact.
//! - **Online inference**: load the artifact once and repeatedly score new
//!   text with low latency.
//!
//! ## Pipeline
//!
//! ```text
//! Raw Text → Analyzer (tokenize, lowercase, stop, stem)
//!          → TfIdfVectorizer (vocabulary + idf)
//!          → LogisticRegression (weights + bias)
//!          → Prediction (label + calibrated probability)
//! ```
//!
//! The analyzer configuration is fingerprinted into every artifact, so a
//! model trained with one normalization pipeline cannot be silently served
//! by a different one.
//!
//! ## Example
//!
//! ```
//! use sentira::train::{LabeledCorpus, Trainer, TrainingConfig, TrainingRecord};
//! use sentira::predict::SentimentService;
//!
//! # fn main() -> sentira::error::Result<()> {
//! let corpus = LabeledCorpus::from_records(vec![
//!     TrainingRecord::new(1, "great movie loved it"),
//!     TrainingRecord::new(0, "terrible awful hated it"),
//! ]);
//!
//! let dir = std::env::temp_dir().join("sentira-doc-example");
//! std::fs::create_dir_all(&dir)?;
//! let path = dir.join("model.bin");
//!
//! let config = TrainingConfig::default().with_test_ratio(0.0);
//! let report = Trainer::new(config).train(corpus, &path)?;
//! assert!(report.train_accuracy >= 0.5);
//!
//! let service = SentimentService::load(&path)?;
//! let result = service.predict("I loved this")?;
//! println!("{}: {}%", result.sentiment, result.percentage);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod classifier;
pub mod error;
pub mod feature;
pub mod model;
pub mod predict;
pub mod train;

pub mod cli;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
