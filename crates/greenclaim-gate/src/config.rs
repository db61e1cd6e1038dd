//! Gate configuration

use crate::vocabulary::{Locale, Vocabulary};
use serde::{Deserialize, Serialize};

/// Configuration for the decision pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateConfig {
    /// Language of the keyword lists
    #[serde(default)]
    pub locale: Locale,

    /// Replaces the locale's keyword lists when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocabulary: Option<Vocabulary>,

    /// Largest allowed gap, in percentage points, between a percentage in the
    /// claim and the declared one
    #[serde(default = "default_percentage_tolerance")]
    pub percentage_tolerance: u32,
}

fn default_percentage_tolerance() -> u32 {
    5
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            locale: Locale::English,
            vocabulary: None,
            percentage_tolerance: default_percentage_tolerance(),
        }
    }
}

impl GateConfig {
    /// Strict preset: tighter percentage agreement
    pub fn strict() -> Self {
        Self {
            percentage_tolerance: 2,
            ..Self::default()
        }
    }

    /// Lenient preset: looser percentage agreement
    pub fn lenient() -> Self {
        Self {
            percentage_tolerance: 10,
            ..Self::default()
        }
    }

    /// Preset for a locale
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    /// Effective keyword lists
    pub fn vocabulary(&self) -> Vocabulary {
        self.vocabulary
            .clone()
            .unwrap_or_else(|| Vocabulary::for_locale(self.locale))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.percentage_tolerance > 100 {
            return Err("percentage_tolerance cannot exceed 100".to_string());
        }
        if let Some(vocabulary) = &self.vocabulary {
            vocabulary.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GateConfig::default();
        assert_eq!(config.percentage_tolerance, 5);
        assert_eq!(config.locale, Locale::English);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(GateConfig::strict().validate().is_ok());
        assert!(GateConfig::lenient().validate().is_ok());
        assert_eq!(GateConfig::strict().percentage_tolerance, 2);
    }

    #[test]
    fn test_locale_vocabulary() {
        let config = GateConfig::for_locale(Locale::Italian);
        assert_eq!(config.vocabulary().biodegradable, "biodegradabile");
    }

    #[test]
    fn test_custom_vocabulary_wins() {
        let mut custom = Vocabulary::english();
        custom.recyclable = "recycle-ready".to_string();
        let config = GateConfig {
            vocabulary: Some(custom),
            ..GateConfig::for_locale(Locale::Italian)
        };
        assert_eq!(config.vocabulary().recyclable, "recycle-ready");
    }

    #[test]
    fn test_invalid_tolerance() {
        let config = GateConfig {
            percentage_tolerance: 101,
            ..GateConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
