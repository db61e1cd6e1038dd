//! Hash-based embedding model
//!
//! Each lowercased token is hashed with SHA-256, once per dimension with the
//! dimension index as seed, into a pseudo-random vector; the token vectors are mean-pooled and the result is
//! normalized to unit length. Boundary markers are pooled alongside the
//! tokens, so empty text still has a well-defined embedding.
//!
//! The model has no learned weights. Its output is fixed for a given
//! dimension across builds, toolchains and platforms, which makes it suitable
//! for pinned offline artifacts and tests.

use crate::EmbeddingError;
use greenclaim_domain::traits::EmbeddingProvider;
use sha2::{Digest, Sha256};

const START_MARKER: &str = "[CLS]";
const END_MARKER: &str = "[SEP]";

/// Deterministic mean-pooled token hashing model
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimension: usize,
}

impl HashingEmbedder {
    /// Create a model producing vectors of the given dimension
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    /// Model version string pinned in classifier artifacts
    pub fn model_version(&self) -> String {
        format!("hashing-v2-{}", self.dimension)
    }

    fn hash_with_seed(token: &str, seed: u64) -> f32 {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        hasher.update(seed.to_le_bytes());
        let digest = hasher.finalize();

        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        let hash_value = u64::from_le_bytes(prefix);

        // [-1, 1]
        let normalized = (hash_value as f64 / u64::MAX as f64) * 2.0 - 1.0;
        normalized as f32
    }

    fn tokenize(text: &str) -> Vec<String> {
        let mut tokens = vec![START_MARKER.to_string()];
        tokens.extend(
            text.split(|c: char| !c.is_alphanumeric())
                .filter(|t| !t.is_empty())
                .map(str::to_lowercase),
        );
        tokens.push(END_MARKER.to_string());
        tokens
    }
}

impl EmbeddingProvider for HashingEmbedder {
    type Error = EmbeddingError;

    fn embed(&self, text: &str) -> Result<Vec<f32>, Self::Error> {
        if self.dimension == 0 {
            return Err(EmbeddingError::InvalidInput(
                "Embedding dimension must be greater than 0".to_string(),
            ));
        }
        if text.chars().any(|c| c.is_control() && !c.is_whitespace()) {
            return Err(EmbeddingError::InvalidInput(
                "Text contains control characters".to_string(),
            ));
        }

        let tokens = Self::tokenize(text);
        let mut pooled = vec![0.0f32; self.dimension];

        for token in &tokens {
            for (i, value) in pooled.iter_mut().enumerate() {
                *value += Self::hash_with_seed(token, i as u64);
            }
        }

        let count = tokens.len() as f32;
        for value in &mut pooled {
            *value /= count;
        }

        let magnitude: f32 = pooled.iter().map(|x| x * x).sum::<f32>().sqrt();
        if magnitude > 0.0 {
            for value in &mut pooled {
                *value /= magnitude;
            }
        }

        Ok(pooled)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
