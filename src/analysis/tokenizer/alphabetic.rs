//! Alphabetic tokenizer implementation.
//!
//! Extracts runs of ASCII letters and discards everything else (digits,
//! punctuation, symbols, non-Latin scripts). This is equivalent to
//! replacing every character outside `[A-Za-z]` with a space and splitting
//! on whitespace, which is the normalization contract the sentiment
//! pipeline is trained against.
//!
//! # Examples
//!
//! ```
//! use sentira::analysis::tokenizer::Tokenizer;
//! use sentira::analysis::tokenizer::alphabetic::AlphabeticTokenizer;
//!
//! let tokenizer = AlphabeticTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("It's 100% great!!").unwrap().collect();
//!
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["It", "s", "great"]);
//! ```

use std::sync::Arc;

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{Result, SentiraError};

/// Pattern matched by this tokenizer. Part of the pinned normalization
/// configuration, so changing it changes the analyzer fingerprint.
pub const ALPHABETIC_PATTERN: &str = r"[A-Za-z]+";

/// A tokenizer that extracts runs of ASCII letters.
#[derive(Clone, Debug)]
pub struct AlphabeticTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl AlphabeticTokenizer {
    /// Create a new alphabetic tokenizer.
    pub fn new() -> Result<Self> {
        let regex = Regex::new(ALPHABETIC_PATTERN)
            .map_err(|e| SentiraError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(AlphabeticTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for AlphabeticTokenizer {
    fn default() -> Self {
        Self::new().expect("Alphabetic pattern should be valid")
    }
}

impl Tokenizer for AlphabeticTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alphabetic"
    }
}
