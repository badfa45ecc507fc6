//! Error handling for the atlas data layer.

use crate::datasets::DatasetKind;

/// Specialized error type for dataset loading and indexing
#[derive(Debug, thiserror::Error)]
pub enum AtlasError {
    /// Error reading a dataset document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a dataset document as JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Dataset-specific failure (missing document, simulated fetch failure, ...)
    #[error("Dataset error [{kind}]: {message}")]
    Dataset {
        /// Which dataset failed
        kind: DatasetKind,
        /// Human-readable failure description
        message: String,
    },
}

impl AtlasError {
    /// Create a dataset-scoped error with a message
    #[must_use] pub fn dataset(kind: DatasetKind, message: impl Into<String>) -> Self {
        Self::Dataset {
            kind,
            message: message.into(),
        }
    }
}

/// Result type for atlas data operations
pub type Result<T> = std::result::Result<T, AtlasError>;
