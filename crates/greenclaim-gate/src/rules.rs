//! Certification rule engine
//!
//! Deterministic keyword rules that pre-empt the document classifier. A claim
//! using a regulated term must be backed by the matching certification code in
//! its support text. Rules are checked in order and the first match wins.

use crate::vocabulary::{contains_term, Vocabulary};
use greenclaim_domain::{Certification, DocumentVerdict};
use tracing::debug;

/// Regulated claim term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificationRule {
    /// "recyclable" needs ISO 14021
    Recyclable,
    /// "carbon neutral" needs ISO 14064 or PAS 2060
    CarbonNeutral,
    /// "biodegradable" needs EN 13432
    Biodegradable,
}

impl CertificationRule {
    /// Rules in priority order
    pub const PRIORITY: [CertificationRule; 3] = [
        CertificationRule::Recyclable,
        CertificationRule::CarbonNeutral,
        CertificationRule::Biodegradable,
    ];

    /// Certifications that satisfy the rule; any one is enough
    pub fn accepted(&self) -> &'static [Certification] {
        match self {
            CertificationRule::Recyclable => &[Certification::Iso14021],
            CertificationRule::CarbonNeutral => &[Certification::Iso14064, Certification::Pas2060],
            CertificationRule::Biodegradable => &[Certification::En13432],
        }
    }

    fn term<'a>(&self, vocabulary: &'a Vocabulary) -> &'a str {
        match self {
            CertificationRule::Recyclable => &vocabulary.recyclable,
            CertificationRule::CarbonNeutral => &vocabulary.carbon_neutral,
            CertificationRule::Biodegradable => &vocabulary.biodegradable,
        }
    }
}

/// A matched rule; always a greenwashing risk with confidence 1.0
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    /// The rule that matched
    pub rule: CertificationRule,
    /// Explanation naming the missing certification
    pub rationale: String,
}

impl RuleOutcome {
    /// Convert into a document verdict
    pub fn into_verdict(self) -> DocumentVerdict {
        DocumentVerdict::certain_risk(self.rationale)
    }
}

/// Evaluates the certification rules
#[derive(Debug, Clone)]
pub struct CertificationRules {
    vocabulary: Vocabulary,
}

impl CertificationRules {
    /// Create a rule engine over the given vocabulary
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Check claim text against support text
    ///
    /// Returns `None` when no rule matches, which defers the decision to the
    /// document classifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use greenclaim_gate::{CertificationRule, CertificationRules, Vocabulary};
    ///
    /// let rules = CertificationRules::new(Vocabulary::english());
    /// let outcome = rules.evaluate("100% Recyclable:", "The report is not public.").unwrap();
    /// assert_eq!(outcome.rule, CertificationRule::Recyclable);
    ///
    /// assert!(rules.evaluate("100% recyclable:", "Certified ISO 14021.").is_none());
    /// ```
    pub fn evaluate(&self, claim_text: &str, support_text: &str) -> Option<RuleOutcome> {
        let claim_lower = claim_text.to_lowercase();
        let support_lower = support_text.to_lowercase();

        let outcome = CertificationRule::PRIORITY.into_iter().find_map(|rule| {
            let term = rule.term(&self.vocabulary);
            if !contains_term(&claim_lower, term) {
                return None;
            }
            let backed = rule
                .accepted()
                .iter()
                .any(|cert| contains_term(&support_lower, cert.code()));
            if backed {
                return None;
            }
            Some(RuleOutcome {
                rule,
                rationale: rationale(term, rule.accepted()),
            })
        });

        if let Some(outcome) = &outcome {
            debug!(rule = ?outcome.rule, "Certification rule matched");
        }
        outcome
    }
}

fn rationale(term: &str, accepted: &[Certification]) -> String {
    let codes: Vec<&str> = accepted.iter().map(|c| c.code()).collect();
    format!(
        "Claim '{}' without {} certification in the support documentation.",
        term,
        codes.join(" or ")
    )
}
