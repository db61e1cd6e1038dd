//! Ollama Embedding Provider
//!
//! Vectorizes text through the `/api/embeddings` endpoint of a local Ollama
//! instance. The model name and dimension are pinned at construction; a vector
//! of any other length is rejected rather than passed to the classifiers.
//!
//! Ollama answers an empty prompt with an empty vector, so blank text is sent
//! as a fixed placeholder and still yields a vector of the pinned dimension.
//!
//! Calls are blocking. Evaluation is synchronous per submission, and callers
//! that need concurrency run evaluations on a blocking thread pool.
//!
//! # Examples
//!
//! ```no_run
//! use greenclaim_embed::OllamaEmbedder;
//! use greenclaim_domain::traits::EmbeddingProvider;
//!
//! let embedder = OllamaEmbedder::new("http://localhost:11434", "nomic-embed-text", 768).unwrap();
//! let vector = embedder.embed("100% recyclable").unwrap();
//! assert_eq!(vector.len(), 768);
//! ```

use crate::EmbeddingError;
use greenclaim_domain::traits::EmbeddingProvider;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default timeout for embedding requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Prompt sent in place of empty or whitespace-only text
pub const EMPTY_PROMPT: &str = "[empty]";

/// Embedding provider backed by the Ollama API
pub struct OllamaEmbedder {
    endpoint: String,
    model: String,
    dimension: usize,
    client: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct OllamaEmbeddingRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Deserialize)]
struct OllamaEmbeddingResponse {
    embedding: Vec<f32>,
}

impl OllamaEmbedder {
    /// Create a provider for a pinned model and dimension
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        dimension: usize,
    ) -> Result<Self, EmbeddingError> {
        Self::with_timeout(endpoint, model, dimension, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a provider with a custom request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        dimension: usize,
        timeout: Duration,
    ) -> Result<Self, EmbeddingError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EmbeddingError::Communication(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            dimension,
            client,
        })
    }

    /// Pinned model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// API endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl EmbeddingProvider for OllamaEmbedder {
    type Error = EmbeddingError;

    fn embed(&self, text: &str) -> Result<Vec<f32>, Self::Error> {
        let url = format!("{}/api/embeddings", self.endpoint);
        let request_body = OllamaEmbeddingRequest {
            model: &self.model,
            prompt: prompt_for(text),
        };

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .map_err(|e| EmbeddingError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(EmbeddingError::ModelNotAvailable(self.model.clone()));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(EmbeddingError::Communication(format!("HTTP {}: {}", status, error_text)));
        }

        let body: OllamaEmbeddingResponse = response
            .json()
            .map_err(|e| EmbeddingError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        debug!(model = %self.model, len = body.embedding.len(), "Received embedding");

        if body.embedding.len() != self.dimension {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimension,
                actual: body.embedding.len(),
            });
        }

        Ok(body.embedding)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

fn prompt_for(text: &str) -> &str {
    if text.trim().is_empty() {
        EMPTY_PROMPT
    } else {
        text
    }
}
