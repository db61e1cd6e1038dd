//! Classifier error types

use thiserror::Error;

/// Errors that can occur when loading or running a classifier
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// Artifact missing, unreadable or inconsistent
    #[error("Classifier unavailable: {0}")]
    Unavailable(String),

    /// Feature vector of the wrong length
    #[error("Feature dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimension the model was trained on
        expected: usize,
        /// Dimension received
        actual: usize,
    },
}

impl From<std::io::Error> for ClassifierError {
    fn from(e: std::io::Error) -> Self {
        ClassifierError::Unavailable(format!("Failed to read artifact: {}", e))
    }
}

impl From<serde_json::Error> for ClassifierError {
    fn from(e: serde_json::Error) -> Self {
        ClassifierError::Unavailable(format!("Corrupt artifact: {}", e))
    }
}
