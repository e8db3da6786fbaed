//! Token types for text analysis.
//!
//! Tokens are the unit that flows through the analysis pipeline: the
//! tokenizer produces them from raw text and each filter transforms the
//! stream in turn.
//!
//! # Examples
//!
//! ```
//! use sentira::analysis::token::Token;
//!
//! let token = Token::new("hello", 0);
//! assert_eq!(token.text, "hello");
//! assert_eq!(token.position, 0);
//! assert!(!token.is_stopped());
//! ```

use serde::{Deserialize, Serialize};

/// A single token produced by text analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Whether this token has been marked as stopped (removed) by a filter
    pub stopped: bool,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let len = text.len();
        Token {
            text,
            position,
            start_offset: 0,
            end_offset: len,
            stopped: false,
        }
    }

    /// Create a new token with explicit byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            stopped: false,
        }
    }

    /// Mark this token as stopped.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    /// Check if this token is marked as stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Create a copy of this token with different text, keeping position
    /// and offsets.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        Token {
            text: text.into(),
            position: self.position,
            start_offset: self.start_offset,
            end_offset: self.end_offset,
            stopped: self.stopped,
        }
    }
}

/// Type alias for a boxed iterator of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 3);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 3);
        assert!(!token.is_stopped());
    }

    #[test]
    fn test_token_with_offsets() {
        let token = Token::with_offsets("world", 1, 6, 11);
        assert_eq!(token.start_offset, 6);
        assert_eq!(token.end_offset, 11);
    }

    #[test]
    fn test_token_stop() {
        let token = Token::new("the", 0).stop();
        assert!(token.is_stopped());
    }

    #[test]
    fn test_token_with_text() {
        let token = Token::with_offsets("running", 2, 10, 17);
        let stemmed = token.with_text("run");
        assert_eq!(stemmed.text, "run");
        assert_eq!(stemmed.position, 2);
        assert_eq!(stemmed.start_offset, 10);
        assert_eq!(stemmed.end_offset, 17);
    }
}
