//! Test doubles for the predictors

use greenclaim_domain::traits::{DocumentClassifier, EmbeddingProvider, SemanticClassifier};
use greenclaim_domain::SemanticCategory;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Deterministic embedder that records every text it sees
#[derive(Debug, Clone)]
pub struct StubEmbedder {
    dimension: usize,
    pub declared_dimension: usize,
    seen: Arc<Mutex<Vec<String>>>,
}

impl StubEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            declared_dimension: dimension,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl EmbeddingProvider for StubEmbedder {
    type Error = String;

    fn embed(&self, text: &str) -> Result<Vec<f32>, Self::Error> {
        self.seen.lock().unwrap().push(text.to_string());
        let sum: usize = text.bytes().map(usize::from).sum();
        Ok((0..self.dimension).map(|i| ((sum + i) % 7) as f32).collect())
    }

    fn dimension(&self) -> usize {
        self.declared_dimension
    }
}

/// Embedder that always fails
pub struct FailingEmbedder;

impl EmbeddingProvider for FailingEmbedder {
    type Error = String;

    fn embed(&self, _text: &str) -> Result<Vec<f32>, Self::Error> {
        Err("embedding model offline".to_string())
    }

    fn dimension(&self) -> usize {
        4
    }
}

/// Document classifier with a fixed answer
#[derive(Debug, Clone)]
pub struct FixedDocumentClassifier {
    class: usize,
    probability: f64,
    input_dim: usize,
    calls: Arc<AtomicUsize>,
    last_len: Arc<Mutex<Option<usize>>>,
}

impl FixedDocumentClassifier {
    pub fn new(class: usize, probability: f64, input_dim: usize) -> Self {
        Self {
            class,
            probability,
            input_dim,
            calls: Arc::new(AtomicUsize::new(0)),
            last_len: Arc::new(Mutex::new(None)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_feature_len(&self) -> Option<usize> {
        *self.last_len.lock().unwrap()
    }
}

impl DocumentClassifier for FixedDocumentClassifier {
    type Error = String;

    fn predict(&self, features: &[f32]) -> Result<usize, Self::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_len.lock().unwrap() = Some(features.len());
        Ok(self.class)
    }

    fn predict_proba(&self, _features: &[f32]) -> Result<Vec<f64>, Self::Error> {
        let mut probabilities = vec![1.0 - self.probability; 2];
        if let Some(p) = probabilities.get_mut(self.class) {
            *p = self.probability;
        }
        Ok(probabilities)
    }

    fn input_dim(&self) -> usize {
        self.input_dim
    }
}

/// Semantic classifier with a fixed answer
#[derive(Debug, Clone)]
pub struct FixedSemanticClassifier {
    category: SemanticCategory,
    input_dim: usize,
    calls: Arc<AtomicUsize>,
}

impl FixedSemanticClassifier {
    pub fn new(category: SemanticCategory, input_dim: usize) -> Self {
        Self {
            category,
            input_dim,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SemanticClassifier for FixedSemanticClassifier {
    type Error = String;

    fn predict(&self, _features: &[f32]) -> Result<SemanticCategory, Self::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.category)
    }

    fn input_dim(&self) -> usize {
        self.input_dim
    }
}
