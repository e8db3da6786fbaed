//! Labeled training corpus types.
//!
//! Raw corpora label sentiment in their own domain (the classic Twitter
//! dataset uses 0 = negative and 4 = positive). The corpus remaps a single
//! designated "positive" raw value to 1 and everything else to 0 before
//! any other stage runs.

use serde::{Deserialize, Serialize};

/// Raw label value treated as positive by default (the Twitter dataset
/// convention: 4 = positive).
pub const DEFAULT_POSITIVE_RAW_LABEL: i64 = 4;

/// One labeled training record as read from a corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingRecord {
    /// Raw label in the dataset's own domain.
    pub label: i64,
    /// Raw message text.
    pub text: String,
}

impl TrainingRecord {
    /// Create a record from a raw label and text.
    pub fn new<S: Into<String>>(label: i64, text: S) -> Self {
        TrainingRecord {
            label,
            text: text.into(),
        }
    }
}

/// A labeled corpus with binary labels after remapping.
#[derive(Debug, Clone, Default)]
pub struct LabeledCorpus {
    texts: Vec<String>,
    labels: Vec<u8>,
}

impl LabeledCorpus {
    /// Build a corpus from records, remapping `1` to positive and all
    /// other raw labels to negative.
    ///
    /// Records already carrying binary labels pass through unchanged.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = TrainingRecord>,
    {
        Self::from_records_with_positive_label(records, 1)
    }

    /// Build a corpus from records, remapping `positive_raw_label` to 1
    /// and every other raw value to 0.
    pub fn from_records_with_positive_label<I>(records: I, positive_raw_label: i64) -> Self
    where
        I: IntoIterator<Item = TrainingRecord>,
    {
        let mut texts = Vec::new();
        let mut labels = Vec::new();

        for record in records {
            labels.push(u8::from(record.label == positive_raw_label));
            texts.push(record.text);
        }

        LabeledCorpus { texts, labels }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Whether the corpus has no records.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// The raw texts, in record order.
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// The binary labels, parallel to `texts`.
    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    /// Number of positive records.
    pub fn positive_count(&self) -> usize {
        self.labels.iter().filter(|&&l| l == 1).count()
    }
}
