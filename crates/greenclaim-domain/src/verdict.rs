//! Verdict types produced by the decision pipeline

use std::fmt;

/// Outcome of the document-level check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentLabel {
    /// Claim is backed by its documentation
    Compliant,
    /// Claim risks misleading consumers
    GreenwashingRisk,
}

impl DocumentLabel {
    /// Map a document classifier class index (0 = compliant, 1 = risk)
    pub fn from_class(class: usize) -> Option<Self> {
        match class {
            0 => Some(DocumentLabel::Compliant),
            1 => Some(DocumentLabel::GreenwashingRisk),
            _ => None,
        }
    }

    /// Label name for display
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentLabel::Compliant => "compliant",
            DocumentLabel::GreenwashingRisk => "greenwashing_risk",
        }
    }
}

impl fmt::Display for DocumentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict of the document gate
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentVerdict {
    /// Compliance label
    pub label: DocumentLabel,
    /// Human-readable reason
    pub rationale: String,
    /// Confidence in [0.0, 1.0]
    pub confidence: f64,
}

impl DocumentVerdict {
    /// Create a document verdict
    ///
    /// # Panics
    /// Panics if confidence is outside [0, 1]
    pub fn new(label: DocumentLabel, rationale: impl Into<String>, confidence: f64) -> Self {
        assert!((0.0..=1.0).contains(&confidence), "Confidence must be in [0, 1]");
        Self {
            label,
            rationale: rationale.into(),
            confidence,
        }
    }

    /// A deterministic greenwashing-risk verdict (confidence 1.0)
    pub fn certain_risk(rationale: impl Into<String>) -> Self {
        Self::new(DocumentLabel::GreenwashingRisk, rationale, 1.0)
    }

    /// Whether the semantic stage should run
    pub fn is_compliant(&self) -> bool {
        self.label == DocumentLabel::Compliant
    }
}

/// Semantic clarity category
///
/// Class indices follow the label-index map the semantic classifier is
/// trained against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticCategory {
    /// Clear, quantified and verifiable
    Valid,
    /// Vague
    Ambiguous,
    /// Misleading or unrealistic
    Misleading,
    /// Not about the environment
    Irrelevant,
    /// Promotional, non-technical
    Marketing,
}

impl SemanticCategory {
    /// Every category in class-index order
    pub const ALL: [SemanticCategory; 5] = [
        SemanticCategory::Valid,
        SemanticCategory::Ambiguous,
        SemanticCategory::Misleading,
        SemanticCategory::Irrelevant,
        SemanticCategory::Marketing,
    ];

    /// Class index in the training label map
    pub fn index(&self) -> usize {
        match self {
            SemanticCategory::Valid => 0,
            SemanticCategory::Ambiguous => 1,
            SemanticCategory::Misleading => 2,
            SemanticCategory::Irrelevant => 3,
            SemanticCategory::Marketing => 4,
        }
    }

    /// Category name for display
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticCategory::Valid => "valid",
            SemanticCategory::Ambiguous => "ambiguous",
            SemanticCategory::Misleading => "misleading",
            SemanticCategory::Irrelevant => "irrelevant",
            SemanticCategory::Marketing => "marketing",
        }
    }

    /// Parse a category name
    ///
    /// Accepts the English names and the Italian labels found in training data.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "valid" | "valido" => Some(SemanticCategory::Valid),
            "ambiguous" | "ambiguo" => Some(SemanticCategory::Ambiguous),
            "misleading" | "ingannevole" => Some(SemanticCategory::Misleading),
            "irrelevant" | "irrilevante" => Some(SemanticCategory::Irrelevant),
            "marketing" => Some(SemanticCategory::Marketing),
            _ => None,
        }
    }
}

impl fmt::Display for SemanticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SemanticCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid semantic category: {}", s))
    }
}

/// Verdict of the semantic stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticVerdict {
    /// Clarity category
    pub category: SemanticCategory,
    /// Human-readable reason
    pub rationale: String,
}

impl SemanticVerdict {
    /// Create a semantic verdict
    pub fn new(category: SemanticCategory, rationale: impl Into<String>) -> Self {
        Self {
            category,
            rationale: rationale.into(),
        }
    }
}

/// Combined result of one evaluation
///
/// `semantic` is present only when the document verdict is compliant.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalVerdict {
    /// Document gate verdict
    pub document: DocumentVerdict,
    /// Semantic verdict, after overrides
    pub semantic: Option<SemanticVerdict>,
}

impl FinalVerdict {
    /// Compliant documentation and a valid semantic category
    pub fn is_clean(&self) -> bool {
        self.document.is_compliant()
            && self
                .semantic
                .as_ref()
                .is_some_and(|s| s.category == SemanticCategory::Valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_label_from_class() {
        assert_eq!(DocumentLabel::from_class(0), Some(DocumentLabel::Compliant));
        assert_eq!(DocumentLabel::from_class(1), Some(DocumentLabel::GreenwashingRisk));
        assert_eq!(DocumentLabel::from_class(2), None);
    }

    #[test]
    #[should_panic]
    fn test_confidence_out_of_range() {
        DocumentVerdict::new(DocumentLabel::Compliant, "ok", 1.5);
    }

    #[test]
    fn test_category_index_order() {
        for (i, category) in SemanticCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_category_parse_localized() {
        assert_eq!(SemanticCategory::parse("Ingannevole"), Some(SemanticCategory::Misleading));
        assert_eq!(SemanticCategory::parse("AMBIGUOUS"), Some(SemanticCategory::Ambiguous));
        assert_eq!(SemanticCategory::parse("unclear"), None);
    }

    #[test]
    fn test_is_clean() {
        let verdict = FinalVerdict {
            document: DocumentVerdict::new(DocumentLabel::Compliant, "ok", 0.8),
            semantic: Some(SemanticVerdict::new(SemanticCategory::Valid, "clear")),
        };
        assert!(verdict.is_clean());

        let risky = FinalVerdict {
            document: DocumentVerdict::certain_risk("no cert"),
            semantic: None,
        };
        assert!(!risky.is_clean());
    }
}
