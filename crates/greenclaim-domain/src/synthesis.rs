//! Support document synthesis
//!
//! Turns a record into the two texts the gates work on: a claim text that
//! folds the declared percentage, scope and certifications into the
//! assertion, and a support text summarizing the documentation answers.
//! Both are deterministic functions of the record.

use crate::{ClaimRecord, NeutralityBasis, ProductScope};

/// Texts synthesized from a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportDocument {
    /// Assertion enriched with percentage, scope and certifications
    pub claim_text: String,
    /// Summary of the supporting documentation
    pub support_text: String,
}

/// Synthesize claim and support text from a record
///
/// # Examples
///
/// ```
/// use greenclaim_domain::{synthesize, Certification, ClaimRecord};
///
/// let record = ClaimRecord::new("100% recyclable")
///     .with_certification(Certification::Iso14021);
/// let doc = synthesize(&record);
/// assert_eq!(doc.claim_text, "100% recyclable: certified ISO 14021");
/// assert!(doc.support_text.starts_with("Certified ISO 14021."));
/// ```
pub fn synthesize(record: &ClaimRecord) -> SupportDocument {
    SupportDocument {
        claim_text: claim_text(record),
        support_text: support_text(record),
    }
}

fn certification_list(record: &ClaimRecord) -> String {
    record
        .certifications
        .iter()
        .map(|c| c.code())
        .collect::<Vec<_>>()
        .join(", ")
}

fn claim_text(record: &ClaimRecord) -> String {
    let mut parts = vec![format!("{}:", record.assertion)];

    if let Some(percentage) = record.percentage.as_deref().filter(|p| !p.is_empty()) {
        parts.push(format!("({})", percentage));
    }

    match record.product_scope {
        ProductScope::WholeProduct => {}
        ProductScope::PackagingOnly => parts.push("relating to packaging only".to_string()),
        ProductScope::OtherPart => parts.push("relating to another part".to_string()),
    }

    if !record.certifications.is_empty() {
        parts.push(format!("certified {}", certification_list(record)));
    }

    parts.join(" ")
}

fn support_text(record: &ClaimRecord) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !record.certifications.is_empty() {
        parts.push(format!("Certified {}.", certification_list(record)));
    }

    if record.has_report {
        parts.push("An official report is available.".to_string());
    }

    if record.is_carbon_neutral_claim {
        if let Some(basis) = record.neutrality_basis {
            let basis = match basis {
                NeutralityBasis::DirectReduction => "direct reductions",
                NeutralityBasis::Offsetting => "offsetting",
                NeutralityBasis::Both => "direct reductions and offsetting",
            };
            parts.push(format!("Based on {}.", basis));
        }
        if record.has_verified_reduction_plan == Some(false) {
            parts.push("No reduction plan.".to_string());
        }
        if !record.independent_verification {
            parts.push("No independent verification.".to_string());
        }
    }

    if !record.report_is_public {
        parts.push("The report is not public.".to_string());
    }

    if record.uses_green_logo {
        match record.logo_is_certified {
            Some(false) => parts.push("Uncertified green logo.".to_string()),
            _ => parts.push("Certified environmental logo present.".to_string()),
        }
    }

    parts.join(" ")
}
