//! Decision pipeline
//!
//! Composes the stages of one evaluation:
//!
//! ```text
//! ClaimRecord -> synthesize -> DocumentGate --Compliant--> SemanticStage -> OverrideChain
//!                                   |
//!                                   +--GreenwashingRisk--> done, no semantic verdict
//! ```
//!
//! The pipeline holds no per-evaluation state. Predictors are shared through
//! `Arc`, so one pipeline serves concurrent evaluations and the same record
//! always yields the same verdict.

use crate::document::DocumentGate;
use crate::overrides::OverrideChain;
use crate::rules::CertificationRules;
use crate::semantic::SemanticStage;
use crate::{GateConfig, GateError};
use greenclaim_domain::traits::{DocumentClassifier, EmbeddingProvider, SemanticClassifier};
use greenclaim_domain::{synthesize, ClaimRecord, FinalVerdict};
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, info};

/// Full two-stage evaluation of a claim record
pub struct DecisionPipeline<E, D, S> {
    gate: DocumentGate<E, D>,
    semantic: SemanticStage<E, S>,
    overrides: OverrideChain,
    config: GateConfig,
}

impl<E, D, S> DecisionPipeline<E, D, S>
where
    E: EmbeddingProvider,
    D: DocumentClassifier,
    S: SemanticClassifier,
    E::Error: Display,
    D::Error: Display,
    S::Error: Display,
{
    /// Assemble a pipeline
    ///
    /// Fails when the configuration is invalid or when the classifiers were
    /// trained for a different embedding dimension: the document classifier
    /// takes two concatenated embeddings, the semantic classifier one.
    pub fn new(
        embedder: Arc<E>,
        document_classifier: Arc<D>,
        semantic_classifier: Arc<S>,
        config: GateConfig,
    ) -> Result<Self, GateError> {
        config.validate().map_err(GateError::Config)?;

        let dimension = embedder.dimension();
        if document_classifier.input_dim() != 2 * dimension {
            return Err(GateError::Config(format!(
                "Document classifier expects {} features, embedder produces 2 x {}",
                document_classifier.input_dim(),
                dimension
            )));
        }
        if semantic_classifier.input_dim() != dimension {
            return Err(GateError::Config(format!(
                "Semantic classifier expects {} features, embedder produces {}",
                semantic_classifier.input_dim(),
                dimension
            )));
        }

        let vocabulary = config.vocabulary();
        debug!(locale = ?config.locale, dimension, "Assembled decision pipeline");

        Ok(Self {
            gate: DocumentGate::new(
                Arc::clone(&embedder),
                document_classifier,
                CertificationRules::new(vocabulary.clone()),
            ),
            semantic: SemanticStage::new(embedder, semantic_classifier),
            overrides: OverrideChain::new(vocabulary, config.percentage_tolerance),
            config,
        })
    }

    /// Configuration in effect
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Evaluate one record
    pub fn run(&self, record: &ClaimRecord) -> Result<FinalVerdict, GateError> {
        record.validate()?;

        let document = synthesize(record);
        debug!(claim_text = %document.claim_text, "Synthesized support document");

        let document_verdict = self.gate.evaluate_with(record, &document)?;
        if !document_verdict.is_compliant() {
            info!(
                label = %document_verdict.label,
                confidence = document_verdict.confidence,
                "Evaluation complete"
            );
            return Ok(FinalVerdict {
                document: document_verdict,
                semantic: None,
            });
        }

        let initial = self.semantic.classify(&record.assertion)?;
        let trace = self.overrides.trace(initial, record, &document);
        if !trace.applied.is_empty() {
            debug!(applied = ?trace.applied, terminated = trace.terminated, "Override chain");
        }

        info!(
            label = %document_verdict.label,
            confidence = document_verdict.confidence,
            category = %trace.verdict.category,
            "Evaluation complete"
        );

        Ok(FinalVerdict {
            document: document_verdict,
            semantic: Some(trace.verdict),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{COMPLIANT_RATIONALE, UNCERTIFIED_LOGO_RATIONALE};
    use crate::mocks::{FixedDocumentClassifier, FixedSemanticClassifier, StubEmbedder};
    use crate::overrides::OverrideRule;
    use greenclaim_domain::{Certification, DocumentLabel, InputError, SemanticCategory};

    type TestPipeline = DecisionPipeline<StubEmbedder, FixedDocumentClassifier, FixedSemanticClassifier>;

    fn pipeline(
        document: FixedDocumentClassifier,
        semantic: FixedSemanticClassifier,
    ) -> TestPipeline {
        DecisionPipeline::new(
            Arc::new(StubEmbedder::new(4)),
            Arc::new(document),
            Arc::new(semantic),
            GateConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_compliant_runs_semantic_stage() {
        let semantic = FixedSemanticClassifier::new(SemanticCategory::Valid, 4);
        let pipeline = pipeline(FixedDocumentClassifier::new(0, 0.9, 8), semantic.clone());
        let mut record = ClaimRecord::new("Packaging made from 80% recycled paper").with_percentage("80%");
        record.has_uploaded_evidence = true;

        let verdict = pipeline.run(&record).unwrap();
        assert_eq!(verdict.document.label, DocumentLabel::Compliant);
        assert_eq!(verdict.document.rationale, COMPLIANT_RATIONALE);
        assert_eq!(verdict.semantic.unwrap().category, SemanticCategory::Valid);
        assert_eq!(semantic.call_count(), 1);
    }

    #[test]
    fn test_risk_skips_semantic_stage() {
        let semantic = FixedSemanticClassifier::new(SemanticCategory::Valid, 4);
        let pipeline = pipeline(FixedDocumentClassifier::new(0, 0.9, 8), semantic.clone());
        let record = ClaimRecord::new("Eco bottle").with_green_logo(false);

        let verdict = pipeline.run(&record).unwrap();
        assert_eq!(verdict.document.rationale, UNCERTIFIED_LOGO_RATIONALE);
        assert!(verdict.semantic.is_none());
        assert_eq!(semantic.call_count(), 0);
    }

    #[test]
    fn test_overrides_applied_after_classifier() {
        let pipeline = pipeline(
            FixedDocumentClassifier::new(0, 0.9, 8),
            FixedSemanticClassifier::new(SemanticCategory::Valid, 4),
        );
        let record = ClaimRecord::new("Carbon neutral delivery")
            .with_certification(Certification::Pas2060)
            .with_carbon_neutrality(greenclaim_domain::NeutralityBasis::DirectReduction, false);

        let semantic = pipeline.run(&record).unwrap().semantic.unwrap();
        assert_eq!(semantic.category, SemanticCategory::Ambiguous);
        assert_eq!(semantic.rationale, OverrideRule::NeutralityPlanInconsistency.rationale());
    }

    #[test]
    fn test_invalid_record_rejected_before_predictors() {
        let document = FixedDocumentClassifier::new(0, 0.9, 8);
        let pipeline = pipeline(document.clone(), FixedSemanticClassifier::new(SemanticCategory::Valid, 4));

        let result = pipeline.run(&ClaimRecord::new(""));
        assert!(matches!(result, Err(GateError::Input(InputError::MissingAssertion))));
        assert_eq!(document.call_count(), 0);
    }

    #[test]
    fn test_document_dimension_mismatch() {
        let result = DecisionPipeline::new(
            Arc::new(StubEmbedder::new(4)),
            Arc::new(FixedDocumentClassifier::new(0, 0.9, 4)),
            Arc::new(FixedSemanticClassifier::new(SemanticCategory::Valid, 4)),
            GateConfig::default(),
        );
        assert!(matches!(result, Err(GateError::Config(_))));
    }

    #[test]
    fn test_semantic_dimension_mismatch() {
        let result = DecisionPipeline::new(
            Arc::new(StubEmbedder::new(4)),
            Arc::new(FixedDocumentClassifier::new(0, 0.9, 8)),
            Arc::new(FixedSemanticClassifier::new(SemanticCategory::Valid, 8)),
            GateConfig::default(),
        );
        assert!(matches!(result, Err(GateError::Config(_))));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GateConfig {
            percentage_tolerance: 500,
            ..GateConfig::default()
        };
        let result = DecisionPipeline::new(
            Arc::new(StubEmbedder::new(4)),
            Arc::new(FixedDocumentClassifier::new(0, 0.9, 8)),
            Arc::new(FixedSemanticClassifier::new(SemanticCategory::Valid, 4)),
            config,
        );
        assert!(matches!(result, Err(GateError::Config(_))));
    }

    #[test]
    fn test_strict_config_tightens_percentage_rule() {
        let mut record = ClaimRecord::new("Contains 50% recycled plastic").with_percentage("47");
        record.has_uploaded_evidence = true;

        let default = pipeline(
            FixedDocumentClassifier::new(0, 0.9, 8),
            FixedSemanticClassifier::new(SemanticCategory::Valid, 4),
        );
        assert_eq!(default.run(&record).unwrap().semantic.unwrap().category, SemanticCategory::Valid);

        let strict = DecisionPipeline::new(
            Arc::new(StubEmbedder::new(4)),
            Arc::new(FixedDocumentClassifier::new(0, 0.9, 8)),
            Arc::new(FixedSemanticClassifier::new(SemanticCategory::Valid, 4)),
            GateConfig::strict(),
        )
        .unwrap();
        assert_eq!(strict.run(&record).unwrap().semantic.unwrap().category, SemanticCategory::Misleading);
    }
}
