use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse role classification driving per-event scoring weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PositionCategory {
    Goalkeeper,
    Defender,
    Midfielder,
    Attacker,
}

const GOALKEEPER_KEYWORDS: &[&str] = &["goalkeeper", "keeper"];
const DEFENDER_KEYWORDS: &[&str] = &["back", "defender"];
const ATTACKER_KEYWORDS: &[&str] = &["forward", "striker", "winger", "attacker"];

impl PositionCategory {
    pub const ALL: [PositionCategory; 4] = [
        PositionCategory::Goalkeeper,
        PositionCategory::Defender,
        PositionCategory::Midfielder,
        PositionCategory::Attacker,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PositionCategory::Goalkeeper => "Goalkeeper",
            PositionCategory::Defender => "Defender",
            PositionCategory::Midfielder => "Midfielder",
            PositionCategory::Attacker => "Attacker",
        }
    }

    /// Strict, case-insensitive lookup by category name
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(name))
    }

    /// Classifies a provider position label such as "Centre-Back" or "Left Winger".
    /// Unknown or missing labels fall back to Midfielder.
    pub fn classify(label: Option<&str>) -> Self {
        let Some(label) = label else {
            return PositionCategory::Midfielder;
        };
        let lower = label.to_lowercase();
        let matches_any = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

        if matches_any(GOALKEEPER_KEYWORDS) {
            PositionCategory::Goalkeeper
        } else if matches_any(DEFENDER_KEYWORDS) {
            PositionCategory::Defender
        } else if matches_any(ATTACKER_KEYWORDS) {
            PositionCategory::Attacker
        } else {
            PositionCategory::Midfielder
        }
    }
}

impl fmt::Display for PositionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(PositionCategory::from_name("attacker"), Some(PositionCategory::Attacker));
        assert_eq!(PositionCategory::from_name(" GOALKEEPER "), Some(PositionCategory::Goalkeeper));
        assert_eq!(PositionCategory::from_name("Striker"), None);
        assert_eq!(PositionCategory::from_name(""), None);
    }

    #[test]
    fn test_classify_provider_labels() {
        assert_eq!(PositionCategory::classify(Some("Goalkeeper")), PositionCategory::Goalkeeper);
        assert_eq!(PositionCategory::classify(Some("Centre-Back")), PositionCategory::Defender);
        assert_eq!(PositionCategory::classify(Some("Left Winger")), PositionCategory::Attacker);
        assert_eq!(PositionCategory::classify(Some("Centre-Forward")), PositionCategory::Attacker);
        assert_eq!(PositionCategory::classify(Some("Attacking Midfield")), PositionCategory::Midfielder);
        assert_eq!(PositionCategory::classify(None), PositionCategory::Midfielder);
    }

    #[test]
    fn test_keeper_checked_before_back() {
        assert_eq!(PositionCategory::classify(Some("Keeper (Fullback cover)")), PositionCategory::Goalkeeper);
    }
}
