//! Semantic override chain
//!
//! Deterministic heuristics applied after the semantic classifier, in a fixed
//! precedence order. Every matching rule replaces both category and rationale,
//! so when several rules match the one latest in [`OverrideRule::PRECEDENCE`]
//! decides the result. The nonsense-term rule is the exception: it is
//! terminal, and once it matches no later rule runs.
//!
//! The chain is a fold over the rule list. A matching rule maps the current verdict to a
//! [`Step`]; a `Terminate` step passes through the remaining rules untouched.

use crate::vocabulary::{contains_any, Vocabulary};
use greenclaim_domain::{ClaimRecord, NeutralityBasis, SemanticCategory, SemanticVerdict, SupportDocument};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static PERCENTAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{1,3})\s*%").expect("valid regex"));
static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Override heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverrideRule {
    /// Claim text uses words with no environmental meaning (terminal)
    NonsenseTerm,
    /// Percentages in the claim disagree with the declared percentage
    PercentageConsistency,
    /// Reduction claimed without a point of comparison
    ComparativeReduction,
    /// Generic eco adjective without uploaded evidence
    UnsubstantiatedEcoTerm,
    /// Neutrality by direct reduction without a verified plan
    NeutralityPlanInconsistency,
}

impl OverrideRule {
    /// Rules in application order
    pub const PRECEDENCE: [OverrideRule; 5] = [
        OverrideRule::NonsenseTerm,
        OverrideRule::PercentageConsistency,
        OverrideRule::ComparativeReduction,
        OverrideRule::UnsubstantiatedEcoTerm,
        OverrideRule::NeutralityPlanInconsistency,
    ];

    /// Whether a match stops the chain
    pub fn is_terminal(&self) -> bool {
        matches!(self, OverrideRule::NonsenseTerm)
    }

    /// Category set on match
    pub fn category(&self) -> SemanticCategory {
        match self {
            OverrideRule::NeutralityPlanInconsistency => SemanticCategory::Ambiguous,
            _ => SemanticCategory::Misleading,
        }
    }

    /// Rationale set on match
    pub fn rationale(&self) -> &'static str {
        match self {
            OverrideRule::NonsenseTerm => {
                "Claim contains words with no environmental meaning ('nonsense'), classified as misleading."
            }
            OverrideRule::PercentageConsistency => {
                "Percentage stated in the claim is inconsistent with the one declared in the form."
            }
            OverrideRule::ComparativeReduction => {
                "Reduction claim without a comparative reference, classified as misleading."
            }
            OverrideRule::UnsubstantiatedEcoTerm => {
                "Claim refers to 'ecological' or 'natural' without uploaded scientific evidence."
            }
            OverrideRule::NeutralityPlanInconsistency => {
                "Neutrality through direct reductions declared without a verified reduction plan: claim is ambiguous."
            }
        }
    }

    fn matches(&self, context: &OverrideContext<'_>) -> bool {
        let vocabulary = context.vocabulary;
        match self {
            OverrideRule::NonsenseTerm => contains_any(&context.claim_text_lower, &vocabulary.nonsense_terms),
            OverrideRule::PercentageConsistency => {
                let declared = match context.record.percentage.as_deref().and_then(declared_percentage) {
                    Some(declared) => declared,
                    None => return false,
                };
                extract_percentages(&context.claim_text_lower)
                    .into_iter()
                    .any(|found| found.abs_diff(declared) > context.percentage_tolerance)
            }
            OverrideRule::ComparativeReduction => {
                contains_any(&context.assertion_lower, &vocabulary.reduction_terms)
                    && !contains_any(&context.assertion_lower, &vocabulary.comparative_terms)
            }
            OverrideRule::UnsubstantiatedEcoTerm => {
                contains_any(&context.assertion_lower, &vocabulary.eco_terms)
                    && !context.record.has_uploaded_evidence
            }
            OverrideRule::NeutralityPlanInconsistency => {
                let record = context.record;
                record.is_carbon_neutral_claim
                    && record.neutrality_basis == Some(NeutralityBasis::DirectReduction)
                    && record.has_verified_reduction_plan == Some(false)
            }
        }
    }

    fn fire(&self) -> Step {
        debug!(rule = ?self, "Override rule matched");
        let replaced = SemanticVerdict::new(self.category(), self.rationale());
        if self.is_terminal() {
            Step::Terminate(replaced)
        } else {
            Step::Continue(replaced)
        }
    }
}

/// Result of applying one rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Later rules still run
    Continue(SemanticVerdict),
    /// The chain stops with this verdict
    Terminate(SemanticVerdict),
}

impl Step {
    /// The verdict carried by the step
    pub fn into_verdict(self) -> SemanticVerdict {
        match self {
            Step::Continue(verdict) | Step::Terminate(verdict) => verdict,
        }
    }

    /// Whether the chain has stopped
    pub fn is_terminated(&self) -> bool {
        matches!(self, Step::Terminate(_))
    }
}

/// Inputs shared by every rule in one pass
struct OverrideContext<'a> {
    record: &'a ClaimRecord,
    vocabulary: &'a Vocabulary,
    percentage_tolerance: u32,
    claim_text_lower: String,
    assertion_lower: String,
}

/// Outcome of a full pass, with the rules that matched in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainTrace {
    /// Final semantic verdict
    pub verdict: SemanticVerdict,
    /// Rules that matched, in application order
    pub applied: Vec<OverrideRule>,
    /// Whether a terminal rule stopped the chain
    pub terminated: bool,
}

/// The ordered override rules
#[derive(Debug, Clone)]
pub struct OverrideChain {
    rules: Vec<OverrideRule>,
    vocabulary: Vocabulary,
    percentage_tolerance: u32,
}

impl OverrideChain {
    /// Create the chain with the standard precedence
    pub fn new(vocabulary: Vocabulary, percentage_tolerance: u32) -> Self {
        Self {
            rules: OverrideRule::PRECEDENCE.to_vec(),
            vocabulary,
            percentage_tolerance,
        }
    }

    /// Rules in application order
    pub fn rules(&self) -> &[OverrideRule] {
        &self.rules
    }

    /// Run the chain and return the final verdict
    pub fn apply(
        &self,
        initial: SemanticVerdict,
        record: &ClaimRecord,
        document: &SupportDocument,
    ) -> SemanticVerdict {
        self.trace(initial, record, document).verdict
    }

    /// Run the chain, recording which rules matched
    pub fn trace(
        &self,
        initial: SemanticVerdict,
        record: &ClaimRecord,
        document: &SupportDocument,
    ) -> ChainTrace {
        let context = OverrideContext {
            record,
            vocabulary: &self.vocabulary,
            percentage_tolerance: self.percentage_tolerance,
            claim_text_lower: document.claim_text.to_lowercase(),
            assertion_lower: record.assertion.to_lowercase(),
        };

        let (step, applied) = self.rules.iter().fold(
            (Step::Continue(initial), Vec::new()),
            |(step, mut applied), rule| match step {
                Step::Continue(_) if rule.matches(&context) => {
                    applied.push(*rule);
                    (rule.fire(), applied)
                }
                step => (step, applied),
            },
        );

        let terminated = step.is_terminated();
        ChainTrace {
            verdict: step.into_verdict(),
            applied,
            terminated,
        }
    }
}

/// Integer percentages written as `N%` in the text
pub fn extract_percentages(text: &str) -> Vec<u32> {
    PERCENTAGE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Integer part of a declared percentage such as "80%", "80" or "80.5 %"
///
/// Only the first run of digits is read, so "80.5%" gives 80 and "30-40%"
/// gives 30 rather than concatenating every digit into 805 or 3040.
pub fn declared_percentage(raw: &str) -> Option<u32> {
    DIGITS.find(raw).and_then(|m| m.as_str().parse().ok())
}
