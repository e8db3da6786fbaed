//! The fixed analyzer the sentiment model is trained and served with.
//!
//! Normalization must be byte-identical between training and inference:
//! the vocabulary a model was fitted against only matches text that went
//! through exactly the same tokenizer, stop-word list, and stemmer. A
//! mismatch does not fail loudly on its own — predictions just silently
//! degrade — so the full pipeline configuration is hashed into a
//! [`fingerprint`](SentimentAnalyzer::fingerprint) that is stored in every
//! model artifact and verified at load time.
//!
//! # Examples
//!
//! ```
//! use sentira::analysis::analyzer::sentiment::SentimentAnalyzer;
//!
//! let analyzer = SentimentAnalyzer::new().unwrap();
//!
//! assert_eq!(analyzer.normalize("I LOVED this movie!!"), "love movi");
//! assert_eq!(analyzer.normalize("12345 !!!"), "");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stem::StemFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::alphabetic::{ALPHABETIC_PATTERN, AlphabeticTokenizer};
use crate::error::Result;

/// Analyzer for English sentiment text.
///
/// Pipeline: alphabetic tokenization → lowercase → stop-word removal →
/// Porter stemming. Tokens keep their original left-to-right order.
pub struct SentimentAnalyzer {
    inner: PipelineAnalyzer,
    fingerprint: u32,
}

impl SentimentAnalyzer {
    /// Create the analyzer with the default (pinned) configuration.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(AlphabeticTokenizer::new()?);
        let stop_filter = StopFilter::new();
        let stem_filter = StemFilter::new();

        let fingerprint = Self::compute_fingerprint(&stop_filter, &stem_filter);

        let inner = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(stop_filter))
            .add_filter(Arc::new(stem_filter));

        Ok(Self { inner, fingerprint })
    }

    /// Normalize text into a space-joined string of processed tokens.
    ///
    /// Total on any input: empty or all-non-alphabetic text yields an empty
    /// string, never an error. Idempotent on its own output.
    pub fn normalize(&self, text: &str) -> String {
        // The pipeline components are infallible after construction; an
        // analysis error here would be a bug, not an input condition.
        let tokens = self
            .inner
            .analyze(text)
            .expect("sentiment pipeline is total on all inputs");

        let words: Vec<String> = tokens.map(|token| token.text).collect();
        words.join(" ")
    }

    /// CRC32 fingerprint of the normalization configuration.
    ///
    /// Covers the tokenizer pattern, filter chain, full stop-word list,
    /// and stemmer identity. Stored in model artifacts so inference can
    /// reject a model normalized differently.
    pub fn fingerprint(&self) -> u32 {
        self.fingerprint
    }

    fn compute_fingerprint(stop_filter: &StopFilter, stem_filter: &StemFilter) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(b"tokenizer=alphabetic:");
        hasher.update(ALPHABETIC_PATTERN.as_bytes());
        hasher.update(b";filters=lowercase,stop,stem;stop_words=");
        for word in stop_filter.sorted_words() {
            hasher.update(word.as_bytes());
            hasher.update(b",");
        }
        hasher.update(b";stemmer=");
        hasher.update(stem_filter.stemmer_name().as_bytes());
        hasher.finalize()
    }
}

impl std::fmt::Debug for SentimentAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentAnalyzer")
            .field("inner", &self.inner)
            .field("fingerprint", &self.fingerprint)
            .finish()
    }
}

impl Analyzer for SentimentAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "sentiment"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_and_stems() {
        let analyzer = SentimentAnalyzer::new().unwrap();

        assert_eq!(
            analyzer.normalize("I LOVED this running movie!!"),
            "love run movi"
        );
    }

    #[test]
    fn test_normalize_is_total() {
        let analyzer = SentimentAnalyzer::new().unwrap();

        assert_eq!(analyzer.normalize(""), "");
        assert_eq!(analyzer.normalize("12345 !!! @#$"), "");
        assert_eq!(analyzer.normalize("日本語のテキスト"), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let analyzer = SentimentAnalyzer::new().unwrap();

        for text in [
            "Great movie, loved it!",
            "terrible awful hated it",
            "",
            "The quick brown fox JUMPED over 2 lazy dogs...",
        ] {
            let once = analyzer.normalize(text);
            let twice = analyzer.normalize(&once);
            assert_eq!(once, twice, "normalize should be idempotent on {text:?}");
        }
    }

    #[test]
    fn test_stop_words_removed_before_stemming() {
        let analyzer = SentimentAnalyzer::new().unwrap();

        // "this", "is", "it" are stop words; "was" too.
        assert_eq!(analyzer.normalize("this movie was great, it is!"), "movi great");
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let a = SentimentAnalyzer::new().unwrap();
        let b = SentimentAnalyzer::new().unwrap();

        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), 0);
    }
}
