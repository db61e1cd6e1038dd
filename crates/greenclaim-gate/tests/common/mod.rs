//! Shared fixtures for the gate integration tests

#![allow(dead_code)]

use greenclaim_classifier::{LinearDocumentClassifier, LinearModel, LinearSemanticClassifier};
use greenclaim_domain::SemanticCategory;
use greenclaim_embed::HashingEmbedder;
use greenclaim_gate::{DecisionPipeline, GateConfig};
use std::collections::BTreeMap;
use std::sync::Arc;

pub const DIMENSION: usize = 32;

pub type Pipeline = DecisionPipeline<HashingEmbedder, LinearDocumentClassifier, LinearSemanticClassifier>;

/// Model that ignores its features and always favors `class`
fn bias_only(input_dim: usize, classes: usize, class: usize, margin: f32) -> LinearModel {
    let mut bias = vec![0.0; classes];
    bias[class] = margin;
    LinearModel {
        model_version: "fixture".to_string(),
        embedding_model: Some("hashing-v2-32".to_string()),
        input_dim,
        weights: vec![vec![0.0; input_dim]; classes],
        bias,
    }
}

pub fn document_classifier(class: usize) -> LinearDocumentClassifier {
    LinearDocumentClassifier::new(bias_only(2 * DIMENSION, 2, class, 2.0)).unwrap()
}

pub fn semantic_classifier(category: SemanticCategory) -> LinearSemanticClassifier {
    let labels: BTreeMap<usize, String> = SemanticCategory::ALL
        .iter()
        .map(|c| (c.index(), c.as_str().to_string()))
        .collect();
    LinearSemanticClassifier::new(bias_only(DIMENSION, 5, category.index(), 3.0), labels).unwrap()
}

/// Pipeline whose classifiers answer compliant and `category`
pub fn pipeline(category: SemanticCategory) -> Pipeline {
    pipeline_with(0, category, GateConfig::default())
}

pub fn pipeline_with(document_class: usize, category: SemanticCategory, config: GateConfig) -> Pipeline {
    DecisionPipeline::new(
        Arc::new(HashingEmbedder::new(DIMENSION)),
        Arc::new(document_classifier(document_class)),
        Arc::new(semantic_classifier(category)),
        config,
    )
    .unwrap()
}
