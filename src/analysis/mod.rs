//! Text analysis pipeline: tokenization, filtering, and normalization.
//!
//! The analysis module turns raw user text into the normalized token
//! strings the rest of the pipeline is built on. Everything downstream
//! (vocabulary, idf table, classifier weights) is only valid for text that
//! went through the exact same analysis configuration, which is why the
//! [`SentimentAnalyzer`](analyzer::sentiment::SentimentAnalyzer) exposes a
//! configuration fingerprint that model artifacts embed and verify.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, PipelineAnalyzer, SentimentAnalyzer};
pub use token::{Token, TokenStream};
