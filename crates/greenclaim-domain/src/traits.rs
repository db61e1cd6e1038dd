//! Trait definitions for external predictors
//!
//! The embedding model and both classifiers are trained and loaded outside
//! the domain. Implementations must be deterministic for a pinned artifact and
//! safe to share read-only across evaluations.

use crate::SemanticCategory;

/// Maps text to a fixed-length vector
///
/// Implemented by the infrastructure layer (greenclaim-embed)
pub trait EmbeddingProvider {
    /// Error type for embedding operations
    type Error;

    /// Embed text as a vector of length [`EmbeddingProvider::dimension`]
    fn embed(&self, text: &str) -> Result<Vec<f32>, Self::Error>;

    /// Length of the vectors this provider produces
    fn dimension(&self) -> usize;
}

/// Binary document-compliance classifier
///
/// Consumes `embed(claim) ⧺ embed(support)`; class 0 is compliant, class 1 is
/// greenwashing risk.
///
/// Implemented by the infrastructure layer (greenclaim-classifier)
pub trait DocumentClassifier {
    /// Error type for prediction
    type Error;

    /// Predict the most likely class
    fn predict(&self, features: &[f32]) -> Result<usize, Self::Error>;

    /// Probability for every class, indexed by class
    fn predict_proba(&self, features: &[f32]) -> Result<Vec<f64>, Self::Error>;

    /// Number of features expected
    fn input_dim(&self) -> usize;
}

/// Five-way semantic clarity classifier
///
/// Consumes `embed(assertion)` only. Implementations resolve class indices
/// through the label map persisted with the model.
///
/// Implemented by the infrastructure layer (greenclaim-classifier)
pub trait SemanticClassifier {
    /// Error type for prediction
    type Error;

    /// Predict the clarity category
    fn predict(&self, features: &[f32]) -> Result<SemanticCategory, Self::Error>;

    /// Number of features expected
    fn input_dim(&self) -> usize;
}
