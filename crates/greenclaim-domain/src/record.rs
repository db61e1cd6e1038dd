//! Claim record - the submitted claim and its review form answers

use crate::Certification;
use std::collections::BTreeSet;
use thiserror::Error;

/// Part of the product a claim refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProductScope {
    /// The claim covers the whole product
    #[default]
    WholeProduct,
    /// The claim covers the packaging only
    PackagingOnly,
    /// The claim covers some other component
    OtherPart,
}

/// What a carbon neutrality claim rests on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NeutralityBasis {
    /// Emissions cut at the source
    DirectReduction,
    /// Emissions compensated through offsets
    Offsetting,
    /// A mix of reductions and offsets
    Both,
}

/// Errors in a submitted record
///
/// These are recoverable: the submitter can correct the form and retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The claim text is empty
    #[error("Claim assertion is required")]
    MissingAssertion,

    /// A conditional field was omitted although its condition holds
    #[error("Field '{field}' is required when {condition}")]
    MissingField {
        /// Name of the omitted field
        field: &'static str,
        /// Condition that requires it
        condition: &'static str,
    },

    /// A conditional field was given although its condition does not hold
    #[error("Field '{field}' is only allowed when {condition}")]
    UnexpectedField {
        /// Name of the extra field
        field: &'static str,
        /// Condition that allows it
        condition: &'static str,
    },

    /// Certification code outside the vocabulary
    #[error("Unknown certification: {0}")]
    UnknownCertification(String),
}

/// A green claim as submitted for review
///
/// Immutable for the duration of an evaluation. Optional fields are present
/// exactly when their governing flag is set; [`ClaimRecord::validate`] checks
/// this.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimRecord {
    /// The claim text as written by the company
    pub assertion: String,

    /// Part of the product the claim covers
    pub product_scope: ProductScope,

    /// Declared percentage, free text (e.g. "80%" or "80")
    pub percentage: Option<String>,

    /// Certifications held
    pub certifications: BTreeSet<Certification>,

    /// A supporting report exists
    pub has_report: bool,

    /// The claim is about climate neutrality
    pub is_carbon_neutral_claim: bool,

    /// Basis of the neutrality claim (carbon-neutral claims only)
    pub neutrality_basis: Option<NeutralityBasis>,

    /// A verified reduction plan exists (carbon-neutral claims only)
    pub has_verified_reduction_plan: Option<bool>,

    /// Verified by an independent body
    pub independent_verification: bool,

    /// The report is publicly available
    pub report_is_public: bool,

    /// An environmental logo or mark is used
    pub uses_green_logo: bool,

    /// The logo is certified by a recognized body (logo users only)
    pub logo_is_certified: Option<bool>,

    /// Scientific evidence was uploaded with the claim
    pub has_uploaded_evidence: bool,
}

impl ClaimRecord {
    /// Create a record with the given assertion and every flag cleared
    pub fn new(assertion: impl Into<String>) -> Self {
        Self {
            assertion: assertion.into(),
            product_scope: ProductScope::WholeProduct,
            percentage: None,
            certifications: BTreeSet::new(),
            has_report: false,
            is_carbon_neutral_claim: false,
            neutrality_basis: None,
            has_verified_reduction_plan: None,
            independent_verification: false,
            report_is_public: false,
            uses_green_logo: false,
            logo_is_certified: None,
            has_uploaded_evidence: false,
        }
    }

    /// Set the declared percentage
    pub fn with_percentage(mut self, percentage: impl Into<String>) -> Self {
        self.percentage = Some(percentage.into());
        self
    }

    /// Add a certification
    pub fn with_certification(mut self, certification: Certification) -> Self {
        self.certifications.insert(certification);
        self
    }

    /// Mark as a carbon neutrality claim with its basis and plan status
    pub fn with_carbon_neutrality(mut self, basis: NeutralityBasis, verified_plan: bool) -> Self {
        self.is_carbon_neutral_claim = true;
        self.neutrality_basis = Some(basis);
        self.has_verified_reduction_plan = Some(verified_plan);
        self
    }

    /// Mark as using a green logo, certified or not
    pub fn with_green_logo(mut self, certified: bool) -> Self {
        self.uses_green_logo = true;
        self.logo_is_certified = Some(certified);
        self
    }

    /// Check required text and conditional field presence
    pub fn validate(&self) -> Result<(), InputError> {
        if self.assertion.trim().is_empty() {
            return Err(InputError::MissingAssertion);
        }

        const NEUTRAL: &str = "the claim is about carbon neutrality";
        const LOGO: &str = "a green logo is used";

        check_conditional("neutrality_basis", NEUTRAL, self.is_carbon_neutral_claim, self.neutrality_basis.is_some())?;
        check_conditional(
            "has_verified_reduction_plan",
            NEUTRAL,
            self.is_carbon_neutral_claim,
            self.has_verified_reduction_plan.is_some(),
        )?;
        check_conditional("logo_is_certified", LOGO, self.uses_green_logo, self.logo_is_certified.is_some())?;

        Ok(())
    }

    /// True when the record declares an uncertified green logo
    pub fn has_uncertified_logo(&self) -> bool {
        self.uses_green_logo && self.logo_is_certified == Some(false)
    }
}

fn check_conditional(
    field: &'static str,
    condition: &'static str,
    holds: bool,
    present: bool,
) -> Result<(), InputError> {
    match (holds, present) {
        (true, false) => Err(InputError::MissingField { field, condition }),
        (false, true) => Err(InputError::UnexpectedField { field, condition }),
        _ => Ok(()),
    }
}
