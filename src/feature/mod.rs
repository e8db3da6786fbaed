//! Feature extraction: sparse vectors and TF-IDF weighting.

pub mod vector;
pub mod vectorizer;

pub use vector::SparseVector;
pub use vectorizer::TfIdfVectorizer;
