//! Greenclaim Embedding Providers
//!
//! Implementations of the `EmbeddingProvider` trait from `greenclaim-domain`.
//!
//! # Providers
//!
//! - `HashingEmbedder`: deterministic, offline, mean-pooled token hashes
//! - `OllamaEmbedder`: pinned embedding model served by a local Ollama API
//!
//! # Examples
//!
//! ```
//! use greenclaim_embed::HashingEmbedder;
//! use greenclaim_domain::traits::EmbeddingProvider;
//!
//! let embedder = HashingEmbedder::new(64);
//! let vector = embedder.embed("100% recyclable").unwrap();
//! assert_eq!(vector.len(), 64);
//! ```

#![warn(missing_docs)]

pub mod hashing;
pub mod ollama;

use thiserror::Error;

pub use hashing::HashingEmbedder;
pub use ollama::OllamaEmbedder;

/// Errors that can occur while vectorizing text
#[derive(Error, Debug)]
pub enum EmbeddingError {
    /// Text the model cannot vectorize
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Response could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model returned a vector of the wrong length
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Pinned dimension
        expected: usize,
        /// Returned dimension
        actual: usize,
    },

    /// Model not available on the server
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),
}
