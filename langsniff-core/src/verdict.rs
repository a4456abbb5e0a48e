//! Classification verdict

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-way outcome of one classification run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictStatus {
    /// Winner exceeds the runner-up base language by the required margin
    Confident,
    /// Winner leads, but not by enough
    Tentative,
    /// No variant produced any evidence
    NoWinner,
}

/// Result of classifying one window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationVerdict {
    pub status: VerdictStatus,
    /// Empty for [`VerdictStatus::NoWinner`]
    pub winning_base_language: String,
    /// Display/dictionary-selecting variant; empty for `NoWinner`
    pub winning_variant_id: String,
    /// Only meaningful when `status` is not `NoWinner`
    pub dictionary_available: bool,
}

impl ClassificationVerdict {
    /// Verdict for a window without evidence
    pub fn no_winner() -> Self {
        Self {
            status: VerdictStatus::NoWinner,
            winning_base_language: String::new(),
            winning_variant_id: String::new(),
            dictionary_available: false,
        }
    }

    pub fn is_confident(&self) -> bool {
        self.status == VerdictStatus::Confident
    }

    pub fn is_tentative(&self) -> bool {
        self.status == VerdictStatus::Tentative
    }

    pub fn is_no_winner(&self) -> bool {
        self.status == VerdictStatus::NoWinner
    }
}

impl fmt::Display for ClassificationVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            VerdictStatus::Confident => write!(
                f,
                "{} ({})",
                self.winning_base_language, self.winning_variant_id
            ),
            VerdictStatus::Tentative => write!(f, "[{}]", self.winning_base_language),
            VerdictStatus::NoWinner => write!(f, "default"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(status: VerdictStatus) -> ClassificationVerdict {
        ClassificationVerdict {
            status,
            winning_base_language: "german".to_string(),
            winning_variant_id: "deutsch8".to_string(),
            dictionary_available: true,
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(verdict(VerdictStatus::Confident).to_string(), "german (deutsch8)");
        assert_eq!(verdict(VerdictStatus::Tentative).to_string(), "[german]");
        assert_eq!(ClassificationVerdict::no_winner().to_string(), "default");
    }

    #[test]
    fn test_no_winner_is_empty() {
        let v = ClassificationVerdict::no_winner();

        assert!(v.is_no_winner());
        assert!(v.winning_base_language.is_empty());
        assert!(v.winning_variant_id.is_empty());
        assert!(!v.dictionary_available);
    }

    #[test]
    fn test_serializes_status_in_snake_case() {
        let json = serde_json::to_string(&verdict(VerdictStatus::Tentative)).unwrap();
        assert!(json.contains("\"status\":\"tentative\""));

        let json = serde_json::to_string(&ClassificationVerdict::no_winner()).unwrap();
        assert!(json.contains("\"no_winner\""));
    }
}
