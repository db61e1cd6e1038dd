//! Pipeline assembly from configuration.

use crate::config::{Config, EmbeddingProviderKind, EmbeddingSettings};
use crate::error::Result;
use greenclaim_classifier::{LinearDocumentClassifier, LinearSemanticClassifier};
use greenclaim_domain::traits::EmbeddingProvider;
use greenclaim_embed::{EmbeddingError, HashingEmbedder, OllamaEmbedder};
use greenclaim_gate::DecisionPipeline;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Embedding provider chosen in the configuration.
pub enum Embedder {
    /// Offline hashing model
    Hashing(HashingEmbedder),
    /// Ollama server
    Ollama(OllamaEmbedder),
}

impl Embedder {
    /// Build the configured provider.
    pub fn from_settings(settings: &EmbeddingSettings) -> Result<Self> {
        match settings.provider {
            EmbeddingProviderKind::Hashing => Ok(Embedder::Hashing(HashingEmbedder::new(settings.dimension))),
            EmbeddingProviderKind::Ollama => Ok(Embedder::Ollama(OllamaEmbedder::with_timeout(
                settings.endpoint.clone(),
                settings.model.clone(),
                settings.dimension,
                Duration::from_secs(settings.request_timeout_secs),
            )?)),
        }
    }

    /// Name of the embedding model, as pinned in classifier artifacts.
    pub fn model_name(&self) -> String {
        match self {
            Embedder::Hashing(embedder) => embedder.model_version(),
            Embedder::Ollama(embedder) => embedder.model().to_string(),
        }
    }
}

impl EmbeddingProvider for Embedder {
    type Error = EmbeddingError;

    fn embed(&self, text: &str) -> std::result::Result<Vec<f32>, Self::Error> {
        match self {
            Embedder::Hashing(embedder) => embedder.embed(text),
            Embedder::Ollama(embedder) => embedder.embed(text),
        }
    }

    fn dimension(&self) -> usize {
        match self {
            Embedder::Hashing(embedder) => embedder.dimension(),
            Embedder::Ollama(embedder) => embedder.dimension(),
        }
    }
}

/// Pipeline over the configured predictors.
pub type Pipeline = DecisionPipeline<Embedder, LinearDocumentClassifier, LinearSemanticClassifier>;

/// Load the artifacts and assemble the pipeline.
pub fn build_pipeline(config: &Config) -> Result<Pipeline> {
    let embedder = Embedder::from_settings(&config.embedding)?;
    let document = LinearDocumentClassifier::load(&config.artifacts.document_model)?;
    let semantic = LinearSemanticClassifier::load(&config.artifacts.semantic_model)?;

    let model_name = embedder.model_name();
    for pinned in [&document.model().embedding_model, &semantic.model().embedding_model]
        .into_iter()
        .flatten()
    {
        if *pinned != model_name {
            warn!(
                "Classifier trained on embeddings from '{}', provider is '{}'",
                pinned, model_name
            );
        }
    }

    info!(embedding_model = %model_name, "Loaded classifiers");

    Ok(DecisionPipeline::new(
        Arc::new(embedder),
        Arc::new(document),
        Arc::new(semantic),
        config.gate.clone(),
    )?)
}
