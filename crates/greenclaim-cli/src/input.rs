//! Claim form input.
//!
//! Records are submitted as JSON objects mirroring the review form. Field
//! names are snake_case and certifications are given by code.

use crate::error::Result;
use greenclaim_domain::{Certification, ClaimRecord, InputError, NeutralityBasis, ProductScope};
use serde::Deserialize;

/// One submitted form.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClaimForm {
    /// Free-text environmental statement
    pub assertion: String,

    /// Part of the product the claim covers
    #[serde(default)]
    pub product_scope: ScopeField,

    /// Declared percentage, as typed
    #[serde(default)]
    pub percentage: Option<String>,

    /// Certification codes held
    #[serde(default)]
    pub certifications: Vec<String>,

    #[serde(default)]
    pub has_report: bool,

    #[serde(default)]
    pub is_carbon_neutral_claim: bool,

    #[serde(default)]
    pub neutrality_basis: Option<BasisField>,

    #[serde(default)]
    pub has_verified_reduction_plan: Option<bool>,

    #[serde(default)]
    pub independent_verification: bool,

    #[serde(default)]
    pub report_is_public: bool,

    #[serde(default)]
    pub uses_green_logo: bool,

    #[serde(default)]
    pub logo_is_certified: Option<bool>,

    #[serde(default)]
    pub has_uploaded_evidence: bool,
}

/// Product scope as written in the form.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeField {
    #[default]
    WholeProduct,
    PackagingOnly,
    OtherPart,
}

/// Neutrality basis as written in the form.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasisField {
    DirectReduction,
    Offsetting,
    Both,
}

impl From<ScopeField> for ProductScope {
    fn from(scope: ScopeField) -> Self {
        match scope {
            ScopeField::WholeProduct => ProductScope::WholeProduct,
            ScopeField::PackagingOnly => ProductScope::PackagingOnly,
            ScopeField::OtherPart => ProductScope::OtherPart,
        }
    }
}

impl From<BasisField> for NeutralityBasis {
    fn from(basis: BasisField) -> Self {
        match basis {
            BasisField::DirectReduction => NeutralityBasis::DirectReduction,
            BasisField::Offsetting => NeutralityBasis::Offsetting,
            BasisField::Both => NeutralityBasis::Both,
        }
    }
}

impl ClaimForm {
    /// Parse a form from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert into a validated record.
    pub fn into_record(self) -> std::result::Result<ClaimRecord, InputError> {
        let certifications = self
            .certifications
            .iter()
            .map(|code| Certification::parse(code).ok_or_else(|| InputError::UnknownCertification(code.clone())))
            .collect::<std::result::Result<_, _>>()?;

        let percentage = self
            .percentage
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        let record = ClaimRecord {
            assertion: self.assertion,
            product_scope: self.product_scope.into(),
            percentage,
            certifications,
            has_report: self.has_report,
            is_carbon_neutral_claim: self.is_carbon_neutral_claim,
            neutrality_basis: self.neutrality_basis.map(Into::into),
            has_verified_reduction_plan: self.has_verified_reduction_plan,
            independent_verification: self.independent_verification,
            report_is_public: self.report_is_public,
            uses_green_logo: self.uses_green_logo,
            logo_is_certified: self.logo_is_certified,
            has_uploaded_evidence: self.has_uploaded_evidence,
        };
        record.validate()?;
        Ok(record)
    }
}

/// Parse and validate one JSON record.
pub fn parse_record(json: &str) -> Result<ClaimRecord> {
    Ok(ClaimForm::from_json(json)?.into_record()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn test_minimal_form() {
        let record = parse_record(r#"{"assertion": "100% biodegradable"}"#).unwrap();
        assert_eq!(record.assertion, "100% biodegradable");
        assert_eq!(record.product_scope, ProductScope::WholeProduct);
        assert!(record.certifications.is_empty());
        assert!(!record.uses_green_logo);
    }

    #[test]
    fn test_full_form() {
        let json = r#"
        {
            "assertion": "Carbon neutral shipping",
            "product_scope": "packaging_only",
            "percentage": " 40% ",
            "certifications": ["PAS 2060", "iso14064"],
            "has_report": true,
            "is_carbon_neutral_claim": true,
            "neutrality_basis": "direct_reduction",
            "has_verified_reduction_plan": false,
            "uses_green_logo": true,
            "logo_is_certified": true
        }
        "#;

        let record = parse_record(json).unwrap();
        assert_eq!(record.product_scope, ProductScope::PackagingOnly);
        assert_eq!(record.percentage.as_deref(), Some("40%"));
        assert!(record.certifications.contains(&Certification::Pas2060));
        assert!(record.certifications.contains(&Certification::Iso14064));
        assert_eq!(record.neutrality_basis, Some(NeutralityBasis::DirectReduction));
        assert_eq!(record.has_verified_reduction_plan, Some(false));
    }

    #[test]
    fn test_blank_percentage_dropped() {
        let record = parse_record(r#"{"assertion": "Recycled", "percentage": "  "}"#).unwrap();
        assert!(record.percentage.is_none());
    }

    #[test]
    fn test_unknown_certification() {
        let result = parse_record(r#"{"assertion": "Green", "certifications": ["LEED"]}"#);
        assert!(matches!(
            result,
            Err(CliError::Record(InputError::UnknownCertification(code))) if code == "LEED"
        ));
    }

    #[test]
    fn test_conditional_fields_checked() {
        let result = parse_record(r#"{"assertion": "Green", "uses_green_logo": true}"#);
        assert!(matches!(result, Err(CliError::Record(InputError::MissingField { .. }))));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = parse_record(r#"{"assertion": "Green", "colour": "green"}"#);
        assert!(matches!(result, Err(CliError::Serialization(_))));
    }
}
