//! Softmax linear model shared by both classifiers

use crate::ClassifierError;
use serde::{Deserialize, Serialize};

/// Multinomial logistic regression over embedding features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// Version of the trained artifact
    pub model_version: String,

    /// Embedding model the features were produced with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding_model: Option<String>,

    /// Number of input features
    pub input_dim: usize,

    /// One weight row per class
    pub weights: Vec<Vec<f32>>,

    /// One bias per class
    pub bias: Vec<f32>,
}

impl LinearModel {
    /// Number of classes
    pub fn num_classes(&self) -> usize {
        self.weights.len()
    }

    /// Check that the weight matrix matches the declared shape
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.input_dim == 0 {
            return Err(ClassifierError::Unavailable(
                "input_dim must be greater than 0".to_string(),
            ));
        }
        if self.weights.is_empty() {
            return Err(ClassifierError::Unavailable("Model has no classes".to_string()));
        }
        if self.bias.len() != self.weights.len() {
            return Err(ClassifierError::Unavailable(format!(
                "Bias has {} entries for {} classes",
                self.bias.len(),
                self.weights.len()
            )));
        }
        for (class, row) in self.weights.iter().enumerate() {
            if row.len() != self.input_dim {
                return Err(ClassifierError::Unavailable(format!(
                    "Weight row {} has {} entries, expected {}",
                    class,
                    row.len(),
                    self.input_dim
                )));
            }
            if row.iter().any(|w| !w.is_finite()) {
                return Err(ClassifierError::Unavailable(format!(
                    "Weight row {} contains non-finite values",
                    class
                )));
            }
        }
        if self.bias.iter().any(|b| !b.is_finite()) {
            return Err(ClassifierError::Unavailable("Bias contains non-finite values".to_string()));
        }
        Ok(())
    }

    /// Class probabilities for a feature vector
    pub fn probabilities(&self, features: &[f32]) -> Result<Vec<f64>, ClassifierError> {
        if features.len() != self.input_dim {
            return Err(ClassifierError::DimensionMismatch {
                expected: self.input_dim,
                actual: features.len(),
            });
        }

        let logits: Vec<f64> = self
            .weights
            .iter()
            .zip(&self.bias)
            .map(|(row, bias)| {
                let dot: f64 = row
                    .iter()
                    .zip(features)
                    .map(|(w, x)| f64::from(*w) * f64::from(*x))
                    .sum();
                dot + f64::from(*bias)
            })
            .collect();

        // Shift by the max logit for numerical stability
        let max = logits.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = logits.iter().map(|l| (l - max).exp()).collect();
        let total: f64 = exps.iter().sum();

        Ok(exps.into_iter().map(|e| e / total).collect())
    }

    /// Most probable class; ties resolve to the lowest index
    pub fn predict(&self, features: &[f32]) -> Result<usize, ClassifierError> {
        let probabilities = self.probabilities(features)?;
        Ok(argmax(&probabilities))
    }
}

pub(crate) fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, value) in values.iter().enumerate() {
        if *value > values[best] {
            best = i;
        }
    }
    best
}
