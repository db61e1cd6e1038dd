//! Semantic clarity stage
//!
//! Classifies what the company asserted. Only the raw assertion is embedded;
//! the synthesized support text never reaches the semantic classifier.

use crate::document::embed_text;
use crate::GateError;
use greenclaim_domain::traits::{EmbeddingProvider, SemanticClassifier};
use greenclaim_domain::{SemanticCategory, SemanticVerdict};
use std::fmt::Display;
use std::sync::Arc;
use tracing::debug;

/// Fixed explanation for each category
pub fn category_rationale(category: SemanticCategory) -> &'static str {
    match category {
        SemanticCategory::Valid => "Clear, quantified and verifiable claim.",
        SemanticCategory::Ambiguous => "Vague claim.",
        SemanticCategory::Misleading => "Misleading or unrealistic claim.",
        SemanticCategory::Irrelevant => "Claim that does not concern the environment.",
        SemanticCategory::Marketing => "Promotional or non-technical claim.",
    }
}

/// Runs the semantic clarity classifier
pub struct SemanticStage<E, S> {
    embedder: Arc<E>,
    classifier: Arc<S>,
}

impl<E, S> SemanticStage<E, S>
where
    E: EmbeddingProvider,
    S: SemanticClassifier,
    E::Error: Display,
    S::Error: Display,
{
    /// Create a stage over shared predictors
    pub fn new(embedder: Arc<E>, classifier: Arc<S>) -> Self {
        Self { embedder, classifier }
    }

    /// Classify an assertion
    pub fn classify(&self, assertion: &str) -> Result<SemanticVerdict, GateError> {
        let features = embed_text(self.embedder.as_ref(), assertion)?;
        let category = self
            .classifier
            .predict(&features)
            .map_err(|e| GateError::Classifier(e.to_string()))?;

        debug!("Semantic classifier: {}", category);

        Ok(SemanticVerdict::new(category, category_rationale(category)))
    }
}
