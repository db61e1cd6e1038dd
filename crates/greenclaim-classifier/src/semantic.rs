//! Semantic-clarity classifier

use crate::{ClassifierError, LinearModel};
use greenclaim_domain::traits::SemanticClassifier;
use greenclaim_domain::SemanticCategory;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

#[derive(Deserialize)]
struct SemanticArtifact {
    model_version: String,
    #[serde(default)]
    embedding_model: Option<String>,
    input_dim: usize,
    weights: Vec<Vec<f32>>,
    bias: Vec<f32>,
    labels: BTreeMap<String, String>,
}

impl SemanticArtifact {
    fn into_parts(self) -> Result<(LinearModel, BTreeMap<usize, String>), ClassifierError> {
        let mut labels = BTreeMap::new();
        for (key, name) in self.labels {
            let class: usize = key.trim().parse().map_err(|_| {
                ClassifierError::Unavailable(format!("Label map key '{}' is not a class index", key))
            })?;
            labels.insert(class, name);
        }
        let model = LinearModel {
            model_version: self.model_version,
            embedding_model: self.embedding_model,
            input_dim: self.input_dim,
            weights: self.weights,
            bias: self.bias,
        };
        Ok((model, labels))
    }
}

/// Five-way clarity classifier with its label-index map
#[derive(Debug, Clone)]
pub struct LinearSemanticClassifier {
    model: LinearModel,
    labels: Vec<SemanticCategory>,
}

impl LinearSemanticClassifier {
    /// Wrap a trained model and its label map
    ///
    /// The model must have one class per category, and the map must name
    /// every category exactly once across the class indices.
    pub fn new(model: LinearModel, labels: BTreeMap<usize, String>) -> Result<Self, ClassifierError> {
        model.validate()?;
        if model.num_classes() != SemanticCategory::ALL.len() {
            return Err(ClassifierError::Unavailable(format!(
                "Semantic classifier needs {} classes, artifact has {}",
                SemanticCategory::ALL.len(),
                model.num_classes()
            )));
        }

        let mut categories = Vec::with_capacity(model.num_classes());
        for class in 0..model.num_classes() {
            let name = labels.get(&class).ok_or_else(|| {
                ClassifierError::Unavailable(format!("Label map has no entry for class {}", class))
            })?;
            let category = SemanticCategory::parse(name).ok_or_else(|| {
                ClassifierError::Unavailable(format!("Unknown category '{}' for class {}", name, class))
            })?;
            if categories.contains(&category) {
                return Err(ClassifierError::Unavailable(format!(
                    "Category '{}' is mapped to more than one class",
                    category
                )));
            }
            categories.push(category);
        }

        Ok(Self {
            model,
            labels: categories,
        })
    }

    /// Parse an artifact from JSON
    pub fn from_json(json: &str) -> Result<Self, ClassifierError> {
        let artifact: SemanticArtifact = serde_json::from_str(json)?;
        let (model, labels) = artifact.into_parts()?;
        Self::new(model, labels)
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
            classes = classifier.labels.len(),
            "Loaded semantic classifier"
        );
        Ok(classifier)
    }

    /// Category for each class index
    pub fn labels(&self) -> &[SemanticCategory] {
        &self.labels
    }

    /// Underlying model
    pub fn model(&self) -> &LinearModel {
        &self.model
    }
}

impl SemanticClassifier for LinearSemanticClassifier {
    type Error = ClassifierError;

    fn predict(&self, features: &[f32]) -> Result<SemanticCategory, Self::Error> {
        let class = self.model.predict(features)?;
        Ok(self.labels[class])
    }

    fn input_dim(&self) -> usize {
        self.model.input_dim
    }
}
