//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Evaluation error
    #[error("{0}")]
    Gate(#[from] greenclaim_gate::GateError),

    /// Classifier artifact could not be loaded
    #[error("{0}")]
    Classifier(#[from] greenclaim_classifier::ClassifierError),

    /// Embedding provider could not be set up
    #[error("{0}")]
    Embedding(#[from] greenclaim_embed::EmbeddingError),

    /// Record failed validation
    #[error("Invalid record: {0}")]
    Record(#[from] greenclaim_domain::InputError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Evaluation did not finish in time
    #[error("Evaluation timed out after {0}s")]
    Timeout(u64),
}
