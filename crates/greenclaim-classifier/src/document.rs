//! Document-compliance classifier

use crate::model::argmax;
use crate::{ClassifierError, LinearModel};
use greenclaim_domain::traits::DocumentClassifier;
use std::path::Path;
use tracing::info;

/// Binary compliance classifier over claim and support embeddings
#[derive(Debug, Clone)]
pub struct LinearDocumentClassifier {
    model: LinearModel,
}

impl LinearDocumentClassifier {
    /// Wrap a trained model
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::Unavailable`] unless the model is well-formed
    /// and has exactly two classes
    pub fn new(model: LinearModel) -> Result<Self, ClassifierError> {
        model.validate()?;
        if model.num_classes() != 2 {
            return Err(ClassifierError::Unavailable(format!(
                "Document classifier needs 2 classes, artifact has {}",
                model.num_classes()
            )));
        }
        Ok(Self { model })
    }

    /// Parse an artifact from JSON
    pub fn from_json(json: &str) -> Result<Self, ClassifierError> {
        Self::new(serde_json::from_str(json)?)
    }

    /// Load an artifact from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ClassifierError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ClassifierError::Unavailable(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let classifier = Self::from_json(&contents)?;
        info!(
            path = %path.display(),
            version = %classifier.model.model_version,
            input_dim = classifier.model.input_dim,
            "Loaded document classifier"
        );
        Ok(classifier)
    }

    /// Underlying model
    pub fn model(&self) -> &LinearModel {
        &self.model
    }
}

impl DocumentClassifier for LinearDocumentClassifier {
    type Error = ClassifierError;

    fn predict(&self, features: &[f32]) -> Result<usize, Self::Error> {
        let probabilities = self.model.probabilities(features)?;
        Ok(argmax(&probabilities))
    }

    fn predict_proba(&self, features: &[f32]) -> Result<Vec<f64>, Self::Error> {
        self.model.probabilities(features)
    }

    fn input_dim(&self) -> usize {
        self.model.input_dim
    }
}
