//! Greenclaim Classifiers
//!
//! Loads the two trained classifiers from their persisted artifacts and
//! implements the `DocumentClassifier` and `SemanticClassifier` traits from
//! `greenclaim-domain`.
//!
//! # Artifacts
//!
//! Both classifiers persist as JSON softmax linear models:
//!
//! ```text
//! {
//!   "model_version": "doc-2024-06",
//!   "embedding_model": "hashing-v2-384",
//!   "input_dim": 768,
//!   "weights": [[...], [...]],
//!   "bias": [0.0, 0.0]
//! }
//! ```
//!
//! The semantic artifact has five classes and adds a `labels` map from class
//! index to category name, naming each category once. Artifacts are loaded
//! once at start and are read-only afterwards; a missing or inconsistent
//! artifact is reported as [`ClassifierError::Unavailable`].

#![warn(missing_docs)]

mod document;
mod error;
mod model;
mod semantic;

pub use document::LinearDocumentClassifier;
pub use error::ClassifierError;
pub use model::LinearModel;
pub use semantic::LinearSemanticClassifier;
