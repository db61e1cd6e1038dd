//! Greenclaim Gate
//!
//! Two-stage decision pipeline for environmental marketing claims.
//!
//! The gate provides:
//! - Document check: uncertified logo, certification rules, document classifier
//! - Semantic check: five-way clarity classifier on the raw assertion
//! - Override chain: keyword and consistency heuristics on the semantic verdict
//!
//! Embedding models and classifiers are injected through the traits in
//! `greenclaim_domain::traits`.
//!
//! # Examples
//!
//! ```no_run
//! use greenclaim_gate::{DecisionPipeline, GateConfig};
//! use greenclaim_domain::ClaimRecord;
//!
//! let config = GateConfig::default();
//! let record = ClaimRecord::new("100% biodegradable");
//!
//! // let pipeline = DecisionPipeline::new(embedder, document, semantic, config)?;
//! // let verdict = pipeline.run(&record)?;
//! ```

#![warn(missing_docs)]

mod config;
mod document;
mod error;
mod overrides;
mod pipeline;
mod rules;
mod semantic;
mod vocabulary;

#[cfg(test)]
mod mocks;

pub use config::GateConfig;
pub use document::{DocumentGate, COMPLIANT_RATIONALE, RISK_RATIONALE, UNCERTIFIED_LOGO_RATIONALE};
pub use error::GateError;
pub use overrides::{
    declared_percentage, extract_percentages, ChainTrace, OverrideChain, OverrideRule, Step,
};
pub use pipeline::DecisionPipeline;
pub use rules::{CertificationRule, CertificationRules, RuleOutcome};
pub use semantic::{category_rationale, SemanticStage};
pub use vocabulary::{Locale, Vocabulary};
