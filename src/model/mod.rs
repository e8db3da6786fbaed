//! Model artifact persistence.
//!
//! The artifact is the unit of persistence binding training output to
//! inference input: the fitted [`TfIdfVectorizer`] and
//! [`LogisticRegression`] are serialized together, with metadata that lets
//! the loader refuse anything it cannot correctly serve. There is no
//! partial or degraded artifact: `save` writes atomically (temp file +
//! rename) and `load` validates the whole bundle before returning it.
//!
//! Validation on load, in order:
//! 1. file present and decodable (`NotFound` / `Corrupt`),
//! 2. format version matches this crate (`IncompatibleVersion`),
//! 3. normalization fingerprint matches the running analyzer
//!    (`FingerprintMismatch`) — normalization drift between training and
//!    inference would otherwise degrade predictions silently,
//! 4. classifier dimension equals vocabulary size (`DimensionMismatch`).

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::SentimentAnalyzer;
use crate::classifier::LogisticRegression;
use crate::error::Result;
use crate::feature::TfIdfVectorizer;

/// On-disk format version. Bump on any incompatible layout change.
pub const FORMAT_VERSION: u32 = 1;

/// Errors raised by artifact persistence and validation.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact not found: {path}")]
    NotFound { path: String },

    #[error("artifact is corrupt or unreadable: {path}")]
    Corrupt { path: String },

    #[error("incompatible artifact format version {found}, expected {expected}")]
    IncompatibleVersion { found: u32, expected: u32 },

    #[error(
        "normalization fingerprint mismatch: artifact {artifact:#010x}, analyzer {analyzer:#010x}"
    )]
    FingerprintMismatch { artifact: u32, analyzer: u32 },

    #[error("classifier dimension {classifier} does not match vocabulary size {vocabulary}")]
    DimensionMismatch {
        classifier: usize,
        vocabulary: usize,
    },

    #[error("artifact write failed: {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Metadata describing how and when an artifact was produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    /// On-disk format version the artifact was written with.
    pub format_version: u32,
    /// Fingerprint of the normalization configuration used at training time.
    pub analyzer_fingerprint: u32,
    /// Training timestamp.
    pub trained_at: DateTime<Utc>,
    /// Number of training examples used.
    pub training_examples: usize,
}

/// The persisted pair of fitted vectorizer and classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Fitted vocabulary and idf table.
    pub vectorizer: TfIdfVectorizer,
    /// Fitted weights and bias.
    pub classifier: LogisticRegression,
    /// Provenance and compatibility metadata.
    pub metadata: ArtifactMetadata,
}

impl ModelArtifact {
    /// Bundle a fitted vectorizer and classifier into an artifact.
    pub fn new(
        vectorizer: TfIdfVectorizer,
        classifier: LogisticRegression,
        analyzer: &SentimentAnalyzer,
        training_examples: usize,
    ) -> Self {
        ModelArtifact {
            vectorizer,
            classifier,
            metadata: ArtifactMetadata {
                format_version: FORMAT_VERSION,
                analyzer_fingerprint: analyzer.fingerprint(),
                trained_at: Utc::now(),
                training_examples,
            },
        }
    }

    /// Save the artifact to `path` as a single atomic unit.
    ///
    /// The artifact is encoded into a temporary file in the destination
    /// directory and then renamed over `path`, so a crash mid-write never
    /// leaves a torn artifact behind.
    pub fn save(&self, path: &Path) -> Result<()> {
        let display_path = path.display().to_string();
        let directory = path.parent().filter(|p| !p.as_os_str().is_empty());

        let mut tmp = match directory {
            Some(dir) => tempfile::NamedTempFile::new_in(dir),
            None => tempfile::NamedTempFile::new(),
        }
        .map_err(|source| ArtifactError::WriteFailed {
            path: display_path.clone(),
            source,
        })?;

        let encoded = bincode::serialize(self).map_err(|_| ArtifactError::Corrupt {
            path: display_path.clone(),
        })?;
        tmp.write_all(&encoded)
            .and_then(|_| tmp.flush())
            .map_err(|source| ArtifactError::WriteFailed {
                path: display_path.clone(),
                source,
            })?;

        tmp.persist(path)
            .map_err(|e| ArtifactError::WriteFailed {
                path: display_path,
                source: e.error,
            })?;

        Ok(())
    }

    /// Load and validate an artifact from `path`.
    ///
    /// Fails with a distinguishable [`ArtifactError`] when the file is
    /// missing, corrupt, produced by an incompatible format version or
    /// normalization configuration, or internally inconsistent. Never
    /// truncates or pads a mismatched classifier.
    pub fn load(path: &Path) -> Result<Self> {
        let analyzer = SentimentAnalyzer::new()?;
        Self::load_with_analyzer(path, &analyzer)
    }

    /// Load and validate against a caller-supplied analyzer.
    pub fn load_with_analyzer(path: &Path, analyzer: &SentimentAnalyzer) -> Result<Self> {
        let display_path = path.display().to_string();

        let bytes = fs::read(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ArtifactError::NotFound {
                    path: display_path.clone(),
                }
            } else {
                ArtifactError::Corrupt {
                    path: display_path.clone(),
                }
            }
        })?;

        // Deserialize from the in-memory buffer so bincode bounds-checks
        // lengths against the file size instead of trusting a corrupt
        // length prefix and aborting on a giant allocation.
        let artifact: ModelArtifact = bincode::deserialize(&bytes)
            .map_err(|_| ArtifactError::Corrupt { path: display_path })?;

        artifact.validate(analyzer)?;
        Ok(artifact)
    }

    /// Check the artifact's internal consistency invariants.
    pub fn validate(&self, analyzer: &SentimentAnalyzer) -> Result<()> {
        if self.metadata.format_version != FORMAT_VERSION {
            return Err(ArtifactError::IncompatibleVersion {
                found: self.metadata.format_version,
                expected: FORMAT_VERSION,
            }
            .into());
        }

        if self.metadata.analyzer_fingerprint != analyzer.fingerprint() {
            return Err(ArtifactError::FingerprintMismatch {
                artifact: self.metadata.analyzer_fingerprint,
                analyzer: analyzer.fingerprint(),
            }
            .into());
        }

        if self.classifier.dim() != self.vectorizer.vocabulary_size() {
            return Err(ArtifactError::DimensionMismatch {
                classifier: self.classifier.dim(),
                vocabulary: self.vectorizer.vocabulary_size(),
            }
            .into());
        }

        Ok(())
    }
}
