//! Document gate
//!
//! First level of the evaluation. Checks, in order:
//!
//! 1. Uncertified green logo (absolute priority)
//! 2. Certification rules on the synthesized claim and support text
//! 3. Document classifier on `embed(assertion) ⧺ embed(support_text)`

use crate::rules::CertificationRules;
use crate::GateError;
use greenclaim_domain::traits::{DocumentClassifier, EmbeddingProvider};
use greenclaim_domain::{synthesize, ClaimRecord, DocumentLabel, DocumentVerdict, SupportDocument};
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, info};

/// Rationale for the logo check
pub const UNCERTIFIED_LOGO_RATIONALE: &str =
    "Claim uses an uncertified environmental logo: the mark is not certified by a recognized body.";

/// Rationale when the classifier finds the claim compliant
pub const COMPLIANT_RATIONALE: &str = "Claim complies with known standards and is documented.";

/// Rationale when the classifier finds a greenwashing risk
pub const RISK_RATIONALE: &str = "Claim is potentially vague, unverifiable or misleading.";

/// Embed text and check the vector length against the provider's dimension
pub(crate) fn embed_text<E>(embedder: &E, text: &str) -> Result<Vec<f32>, GateError>
where
    E: EmbeddingProvider,
    E::Error: Display,
{
    let vector = embedder
        .embed(text)
        .map_err(|e| GateError::Embedding(e.to_string()))?;
    if vector.len() != embedder.dimension() {
        return Err(GateError::Embedding(format!(
            "Provider returned {} values, expected {}",
            vector.len(),
            embedder.dimension()
        )));
    }
    Ok(vector)
}

/// Document-level compliance check
pub struct DocumentGate<E, D> {
    embedder: Arc<E>,
    classifier: Arc<D>,
    rules: CertificationRules,
}

impl<E, D> DocumentGate<E, D>
where
    E: EmbeddingProvider,
    D: DocumentClassifier,
    E::Error: Display,
    D::Error: Display,
{
    /// Create a gate over shared predictors
    pub fn new(embedder: Arc<E>, classifier: Arc<D>, rules: CertificationRules) -> Self {
        Self {
            embedder,
            classifier,
            rules,
        }
    }

    /// Evaluate a record, synthesizing its support document
    pub fn evaluate(&self, record: &ClaimRecord) -> Result<DocumentVerdict, GateError> {
        self.evaluate_with(record, &synthesize(record))
    }

    /// Evaluate a record against an already synthesized support document
    pub fn evaluate_with(
        &self,
        record: &ClaimRecord,
        document: &SupportDocument,
    ) -> Result<DocumentVerdict, GateError> {
        if record.has_uncertified_logo() {
            info!("Document gate: uncertified green logo");
            return Ok(DocumentVerdict::certain_risk(UNCERTIFIED_LOGO_RATIONALE));
        }

        if let Some(outcome) = self.rules.evaluate(&document.claim_text, &document.support_text) {
            info!("Document gate: certification rule {:?} matched", outcome.rule);
            return Ok(outcome.into_verdict());
        }

        self.classify(&record.assertion, &document.support_text)
    }

    fn classify(&self, assertion: &str, support_text: &str) -> Result<DocumentVerdict, GateError> {
        let mut features = embed_text(self.embedder.as_ref(), assertion)?;
        features.extend(embed_text(self.embedder.as_ref(), support_text)?);

        let class = self
            .classifier
            .predict(&features)
            .map_err(|e| GateError::Classifier(e.to_string()))?;
        let probabilities = self
            .classifier
            .predict_proba(&features)
            .map_err(|e| GateError::Classifier(e.to_string()))?;

        let label = DocumentLabel::from_class(class)
            .ok_or_else(|| GateError::Classifier(format!("Unexpected document class {}", class)))?;
        let confidence = probabilities
            .get(class)
            .copied()
            .filter(|p| (0.0..=1.0).contains(p))
            .ok_or_else(|| {
                GateError::Classifier(format!("No valid probability for class {}", class))
            })?;

        debug!("Document classifier: class {} with probability {:.3}", class, confidence);

        let rationale = match label {
            DocumentLabel::Compliant => COMPLIANT_RATIONALE,
            DocumentLabel::GreenwashingRisk => RISK_RATIONALE,
        };
        Ok(DocumentVerdict::new(label, rationale, confidence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{FailingEmbedder, FixedDocumentClassifier, StubEmbedder};
    use crate::Vocabulary;
    use greenclaim_domain::{Certification, DocumentLabel};

    fn gate(classifier: FixedDocumentClassifier) -> DocumentGate<StubEmbedder, FixedDocumentClassifier> {
        DocumentGate::new(
            Arc::new(StubEmbedder::new(4)),
            Arc::new(classifier),
            CertificationRules::new(Vocabulary::english()),
        )
    }

    #[test]
    fn test_uncertified_logo_has_priority() {
        let classifier = FixedDocumentClassifier::new(0, 0.9, 8);
        let gate = gate(classifier.clone());
        let record = ClaimRecord::new("Recyclable packaging")
            .with_certification(Certification::Iso14021)
            .with_green_logo(false);

        let verdict = gate.evaluate(&record).unwrap();
        assert_eq!(verdict.label, DocumentLabel::GreenwashingRisk);
        assert_eq!(verdict.confidence, 1.0);
        assert!(verdict.rationale.contains("uncertified environmental logo"));
        assert_eq!(classifier.call_count(), 0);
    }

    #[test]
    fn test_rule_preempts_classifier() {
        let classifier = FixedDocumentClassifier::new(0, 0.99, 8);
        let gate = gate(classifier.clone());
        let record = ClaimRecord::new("100% recyclable");

        let verdict = gate.evaluate(&record).unwrap();
        assert_eq!(verdict.label, DocumentLabel::GreenwashingRisk);
        assert!(verdict.rationale.contains("ISO 14021"));
        assert_eq!(classifier.call_count(), 0);
    }

    #[test]
    fn test_classifier_compliant() {
        let classifier = FixedDocumentClassifier::new(0, 0.83, 8);
        let gate = gate(classifier.clone());
        let record = ClaimRecord::new("Packaging made from 80% recycled paper").with_green_logo(true);

        let verdict = gate.evaluate(&record).unwrap();
        assert_eq!(verdict.label, DocumentLabel::Compliant);
        assert_eq!(verdict.rationale, COMPLIANT_RATIONALE);
        assert!((verdict.confidence - 0.83).abs() < 1e-9);
        assert_eq!(classifier.call_count(), 1);
    }

    #[test]
    fn test_classifier_risk() {
        let gate = gate(FixedDocumentClassifier::new(1, 0.7, 8));
        let verdict = gate.evaluate(&ClaimRecord::new("Good for the planet")).unwrap();
        assert_eq!(verdict.label, DocumentLabel::GreenwashingRisk);
        assert_eq!(verdict.rationale, RISK_RATIONALE);
    }

    #[test]
    fn test_classifier_receives_concatenated_features() {
        let classifier = FixedDocumentClassifier::new(0, 0.6, 8);
        let gate = gate(classifier.clone());
        gate.evaluate(&ClaimRecord::new("Good for the planet")).unwrap();
        assert_eq!(classifier.last_feature_len(), Some(8));
    }

    #[test]
    fn test_unexpected_class_is_error() {
        let gate = gate(FixedDocumentClassifier::new(2, 0.6, 8));
        let result = gate.evaluate(&ClaimRecord::new("Good for the planet"));
        assert!(matches!(result, Err(GateError::Classifier(_))));
    }

    #[test]
    fn test_embedding_failure_propagates() {
        let gate = DocumentGate::new(
            Arc::new(FailingEmbedder),
            Arc::new(FixedDocumentClassifier::new(0, 0.9, 8)),
            CertificationRules::new(Vocabulary::english()),
        );
        let result = gate.evaluate(&ClaimRecord::new("Good for the planet"));
        assert!(matches!(result, Err(GateError::Embedding(_))));
    }

    #[test]
    fn test_wrong_embedding_length_is_error() {
        let mut embedder = StubEmbedder::new(4);
        embedder.declared_dimension = 5;
        let gate = DocumentGate::new(
            Arc::new(embedder),
            Arc::new(FixedDocumentClassifier::new(0, 0.9, 10)),
            CertificationRules::new(Vocabulary::english()),
        );
        let result = gate.evaluate(&ClaimRecord::new("Good for the planet"));
        assert!(matches!(result, Err(GateError::Embedding(_))));
    }
}
