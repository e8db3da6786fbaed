//! Analyzers that convert raw text into processed tokens.
//!
//! Analyzers are the complete text processing pipeline:
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → Filter 2 → ... → Token Stream
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](pipeline::PipelineAnalyzer) - custom tokenizer + filter chains
//! - [`SentimentAnalyzer`](sentiment::SentimentAnalyzer) - the fixed pipeline
//!   the sentiment model is trained and served with

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod pipeline;
pub mod sentiment;

pub use pipeline::PipelineAnalyzer;
pub use sentiment::SentimentAnalyzer;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
