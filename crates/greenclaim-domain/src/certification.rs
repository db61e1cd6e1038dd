//! Certification vocabulary shared by the rule engine and input parsing

use std::fmt;

/// Environmental certification or standard a claim can cite
///
/// The vocabulary is closed: the review form only offers these codes, and the
/// certification rules match against their canonical spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Certification {
    /// Environmental management systems
    Iso14001,
    /// Type I environmental labelling
    Iso14024,
    /// Life cycle assessment
    Iso14040,
    /// Greenhouse gas accounting
    Iso14064,
    /// Self-declared environmental claims (recyclability)
    Iso14021,
    /// Forest Stewardship Council
    Fsc,
    /// EU Ecolabel
    Ecolabel,
    /// Eco-Management and Audit Scheme
    Emas,
    /// Carbon neutrality
    Pas2060,
    /// Industrial compostability
    En13432,
    /// Compostable plastics (US)
    AstmD6400,
    /// GHG Protocol corporate standard
    GhgProtocol,
}

impl Certification {
    /// Every certification, in form order
    pub const ALL: [Certification; 12] = [
        Certification::Iso14001,
        Certification::Iso14024,
        Certification::Iso14040,
        Certification::Iso14064,
        Certification::Iso14021,
        Certification::Fsc,
        Certification::Ecolabel,
        Certification::Emas,
        Certification::Pas2060,
        Certification::En13432,
        Certification::AstmD6400,
        Certification::GhgProtocol,
    ];

    /// Canonical code as it appears in support documents
    pub fn code(&self) -> &'static str {
        match self {
            Certification::Iso14001 => "ISO 14001",
            Certification::Iso14024 => "ISO 14024",
            Certification::Iso14040 => "ISO 14040",
            Certification::Iso14064 => "ISO 14064",
            Certification::Iso14021 => "ISO 14021",
            Certification::Fsc => "FSC",
            Certification::Ecolabel => "Ecolabel",
            Certification::Emas => "EMAS",
            Certification::Pas2060 => "PAS 2060",
            Certification::En13432 => "EN 13432",
            Certification::AstmD6400 => "ASTM D6400",
            Certification::GhgProtocol => "GHG Protocol",
        }
    }

    /// Parse a certification code
    ///
    /// Matching ignores case and whitespace, so the compact spellings found in
    /// older datasets (`EN13432`, `ISO14021`) resolve to the canonical code.
    ///
    /// # Examples
    ///
    /// ```
    /// use greenclaim_domain::Certification;
    ///
    /// assert_eq!(Certification::parse("en13432"), Some(Certification::En13432));
    /// assert_eq!(Certification::parse("PAS 2060"), Some(Certification::Pas2060));
    /// assert_eq!(Certification::parse("LEED"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = compact(s);
        Self::ALL.into_iter().find(|c| compact(c.code()) == wanted)
    }
}

fn compact(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for Certification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Certification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown certification: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_codes_round_trip() {
        for cert in Certification::ALL {
            assert_eq!(Certification::parse(cert.code()), Some(cert));
        }
    }

    #[test]
    fn test_compact_spellings() {
        assert_eq!(Certification::parse("ISO14021"), Some(Certification::Iso14021));
        assert_eq!(Certification::parse(" iso 14064 "), Some(Certification::Iso14064));
        assert_eq!(Certification::parse("ghg protocol"), Some(Certification::GhgProtocol));
    }

    #[test]
    fn test_unknown_code() {
        assert!("Leaping Bunny".parse::<Certification>().is_err());
        assert_eq!(Certification::parse(""), None);
    }
}
