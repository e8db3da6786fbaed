//! TF-IDF vectorizer for text feature extraction.
//!
//! The vectorizer operates on *already normalized* documents (the
//! space-joined output of the sentiment analyzer), so its fitted state is
//! plain data — a term→index vocabulary and an idf table — and serializes
//! directly into the model artifact.
//!
//! Term weighting: `tf * idf` with `tf = count / doc_len` and smoothed
//! `idf = ln((n_documents + 1) / (df + 1)) + 1`, followed by per-document
//! L2 normalization. The same formula runs at training and inference time.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentiraError};
use crate::feature::vector::SparseVector;

/// TF-IDF vectorizer with a vocabulary fixed at fit time.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> index mapping, assigned in order of first
    /// appearance across the training corpus.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency for each vocabulary index.
    idf: Vec<f64>,
    /// Total number of documents seen during fitting.
    n_documents: usize,
}

impl TfIdfVectorizer {
    /// Create an empty, unfitted vectorizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit the vectorizer on normalized training documents.
    ///
    /// Vocabulary indices follow first appearance in document order, then
    /// token order within each document — a deterministic total order, so
    /// the same corpus always produces the same index assignment.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        if documents.is_empty() {
            return Err(SentiraError::training(
                "cannot fit vectorizer on an empty corpus",
            ));
        }

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();

        for doc in documents {
            // Count each term once per document, preserving first-seen order.
            let mut seen = Vec::new();
            for token in doc.split_whitespace() {
                let next_index = vocabulary.len();
                let index = *vocabulary
                    .entry(token.to_string())
                    .or_insert_with(|| {
                        document_frequency.push(0);
                        next_index
                    });
                if !seen.contains(&index) {
                    document_frequency[index] += 1;
                    seen.push(index);
                }
            }
        }

        let n_documents = documents.len();
        let idf = document_frequency
            .iter()
            .map(|&df| ((n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0)
            .collect();

        self.vocabulary = vocabulary;
        self.idf = idf;
        self.n_documents = n_documents;

        Ok(())
    }

    /// Transform a normalized document into a TF-IDF feature vector.
    ///
    /// Pure function of the fitted state and the input: never grows the
    /// vocabulary, and out-of-vocabulary terms contribute nothing. An
    /// empty document maps to the all-zero vector.
    pub fn transform(&self, normalized: &str) -> SparseVector {
        let tokens: Vec<&str> = normalized.split_whitespace().collect();
        if tokens.is_empty() {
            return SparseVector::zeros(self.vocabulary_size());
        }

        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in &tokens {
            if let Some(&index) = self.vocabulary.get(*token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let doc_length = tokens.len() as f64;
        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(index, count)| (index, (count / doc_length) * self.idf[index]))
            .collect();
        entries.sort_unstable_by_key(|&(index, _)| index);

        let (indices, values): (Vec<usize>, Vec<f64>) = entries.into_iter().unzip();
        let mut vector = SparseVector::from_sorted(self.vocabulary_size(), indices, values);
        vector.l2_normalize();
        vector
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of documents this vectorizer was fitted on.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// Look up the vocabulary index of a term.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// The idf weight for a vocabulary index.
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_docs() -> Vec<String> {
        vec![
            "great movi love".to_string(),
            "terribl aw hate".to_string(),
            "great great stori".to_string(),
        ]
    }

    #[test]
    fn test_fit_builds_first_appearance_vocabulary() {
        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&toy_docs()).unwrap();

        assert_eq!(vectorizer.vocabulary_size(), 7);
        assert_eq!(vectorizer.term_index("great"), Some(0));
        assert_eq!(vectorizer.term_index("movi"), Some(1));
        assert_eq!(vectorizer.term_index("love"), Some(2));
        assert_eq!(vectorizer.term_index("terribl"), Some(3));
        assert_eq!(vectorizer.term_index("stori"), Some(6));
    }

    #[test]
    fn test_idf_favors_rare_terms() {
        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&toy_docs()).unwrap();

        let great = vectorizer.term_index("great").unwrap();
        let love = vectorizer.term_index("love").unwrap();

        // "great" appears in 2 of 3 documents, "love" in 1 of 3.
        assert!(vectorizer.idf()[love] > vectorizer.idf()[great]);
    }

    #[test]
    fn test_transform_is_deterministic() {
        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&toy_docs()).unwrap();

        let a = vectorizer.transform("great movi");
        let b = vectorizer.transform("great movi");
        assert_eq!(a, b);
    }

    #[test]
    fn test_transform_out_of_vocabulary() {
        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&toy_docs()).unwrap();

        let vector = vectorizer.transform("unknown words onli");
        assert!(vector.is_zero());
        assert_eq!(vector.dim(), vectorizer.vocabulary_size());
    }

    #[test]
    fn test_transform_empty_document() {
        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&toy_docs()).unwrap();

        let vector = vectorizer.transform("");
        assert!(vector.is_zero());
    }

    #[test]
    fn test_transform_is_l2_normalized() {
        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&toy_docs()).unwrap();

        let vector = vectorizer.transform("great movi love");
        assert!((vector.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_fit_empty_corpus_fails() {
        let mut vectorizer = TfIdfVectorizer::new();
        assert!(vectorizer.fit(&[]).is_err());
    }

    #[test]
    fn test_repeated_term_counted_once_per_document() {
        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&toy_docs()).unwrap();

        // "great" has df == 2 even though doc 3 contains it twice:
        // idf = ln(4/3) + 1.
        let great = vectorizer.term_index("great").unwrap();
        let expected = (4.0f64 / 3.0).ln() + 1.0;
        assert!((vectorizer.idf()[great] - expected).abs() < 1e-12);
    }
}
