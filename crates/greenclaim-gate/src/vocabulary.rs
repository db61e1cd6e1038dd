//! Keyword vocabularies for the certification rules and override chain
//!
//! Terms are matched as case-insensitive substrings. Certification codes are
//! locale-independent and live in the domain crate.

use serde::{Deserialize, Serialize};

/// Language of the keyword lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English terms
    #[default]
    English,
    /// Italian terms
    Italian,
}

/// Keyword lists used by the gates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Recyclability claim term (needs ISO 14021)
    pub recyclable: String,

    /// Carbon neutrality claim term (needs ISO 14064 or PAS 2060)
    pub carbon_neutral: String,

    /// Biodegradability claim term (needs EN 13432)
    pub biodegradable: String,

    /// Terms with no environmental meaning
    pub nonsense_terms: Vec<String>,

    /// Terms announcing a reduction
    pub reduction_terms: Vec<String>,

    /// Terms giving a reduction its point of comparison
    pub comparative_terms: Vec<String>,

    /// Generic environmental adjectives
    pub eco_terms: Vec<String>,
}

fn terms(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

impl Vocabulary {
    /// Vocabulary for a locale
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::English => Self::english(),
            Locale::Italian => Self::italian(),
        }
    }

    /// English terms
    pub fn english() -> Self {
        Self {
            recyclable: "recyclable".to_string(),
            carbon_neutral: "carbon neutral".to_string(),
            biodegradable: "biodegradable".to_string(),
            nonsense_terms: terms(&[
                "magic",
                "flying",
                "enchanted",
                "miracle",
                "eco-love",
                "super-green",
                "mystic",
                "perfect future",
            ]),
            reduction_terms: terms(&["reduction", "reduced", "reduces", "abatement"]),
            comparative_terms: terms(&["compared to", "baseline", "model", "year", "versus"]),
            eco_terms: terms(&["eco", "ecological", "natural"]),
        }
    }

    /// Italian terms
    pub fn italian() -> Self {
        Self {
            recyclable: "riciclabile".to_string(),
            carbon_neutral: "carbon neutral".to_string(),
            biodegradable: "biodegradabile".to_string(),
            nonsense_terms: terms(&[
                "magico",
                "volante",
                "incantato",
                "miracolo",
                "eco love",
                "super green",
                "mistico",
                "futuro perfetto",
            ]),
            reduction_terms: terms(&["riduzione", "ridotte", "abbattimento"]),
            comparative_terms: terms(&["rispetto a", "baseline", "modello", "anno", "comparato"]),
            eco_terms: terms(&["eco", "ecologico", "naturale"]),
        }
    }

    /// Check every list is usable
    pub fn validate(&self) -> Result<(), String> {
        let singles = [
            ("recyclable", &self.recyclable),
            ("carbon_neutral", &self.carbon_neutral),
            ("biodegradable", &self.biodegradable),
        ];
        for (name, term) in singles {
            if term.trim().is_empty() {
                return Err(format!("{} term cannot be empty", name));
            }
        }

        let lists = [
            ("nonsense_terms", &self.nonsense_terms),
            ("reduction_terms", &self.reduction_terms),
            ("comparative_terms", &self.comparative_terms),
            ("eco_terms", &self.eco_terms),
        ];
        for (name, list) in lists {
            if list.iter().any(|t| t.trim().is_empty()) {
                return Err(format!("{} contains an empty term", name));
            }
        }
        Ok(())
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::english()
    }
}

/// Case-insensitive substring test
pub(crate) fn contains_term(haystack_lower: &str, term: &str) -> bool {
    haystack_lower.contains(&term.to_lowercase())
}

/// True if any term occurs in the lowercased text
pub(crate) fn contains_any(haystack_lower: &str, terms: &[String]) -> bool {
    terms.iter().any(|t| contains_term(haystack_lower, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(Vocabulary::english().validate().is_ok());
        assert!(Vocabulary::italian().validate().is_ok());
    }

    #[test]
    fn test_for_locale() {
        assert_eq!(Vocabulary::for_locale(Locale::Italian).recyclable, "riciclabile");
        assert_eq!(Vocabulary::for_locale(Locale::English), Vocabulary::default());
    }

    #[test]
    fn test_empty_term_rejected() {
        let mut vocabulary = Vocabulary::english();
        vocabulary.eco_terms.push("  ".to_string());
        assert!(vocabulary.validate().is_err());
    }

    #[test]
    fn test_contains_any_case_insensitive() {
        let list = terms(&["Compared To"]);
        assert!(contains_any("30% less compared to 2020", &list));
        assert!(!contains_any("30% less", &list));
    }
}
