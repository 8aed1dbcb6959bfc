use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of interview question to generate. Serialized by display label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionCategory {
    #[serde(rename = "Multiple Choice")]
    MultipleChoice,
    #[default]
    #[serde(rename = "Open Ended")]
    OpenEnded,
    #[serde(rename = "Data Structure and Algorithms")]
    DataStructuresAndAlgorithms,
    #[serde(rename = "Behavioral")]
    Behavioral,
}

impl QuestionCategory {
    pub const ALL: [QuestionCategory; 4] = [
        QuestionCategory::MultipleChoice,
        QuestionCategory::OpenEnded,
        QuestionCategory::DataStructuresAndAlgorithms,
        QuestionCategory::Behavioral,
    ];

    /// Preselected categories when the user does not pick any explicitly.
    pub const PRESELECTED: [QuestionCategory; 2] = [
        QuestionCategory::DataStructuresAndAlgorithms,
        QuestionCategory::Behavioral,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QuestionCategory::MultipleChoice => "Multiple Choice",
            QuestionCategory::OpenEnded => "Open Ended",
            QuestionCategory::DataStructuresAndAlgorithms => "Data Structure and Algorithms",
            QuestionCategory::Behavioral => "Behavioral",
        }
    }

    pub fn is_algorithm(self) -> bool {
        self == QuestionCategory::DataStructuresAndAlgorithms
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for QuestionCategory {
    type Err = String;

    /// Accepts display labels and kebab-case forms, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "multiple choice" | "mc" => Ok(QuestionCategory::MultipleChoice),
            "open ended" | "open" => Ok(QuestionCategory::OpenEnded),
            "data structure and algorithms" | "data structures and algorithms" | "dsa"
            | "algorithms" => Ok(QuestionCategory::DataStructuresAndAlgorithms),
            "behavioral" | "behavioural" => Ok(QuestionCategory::Behavioral),
            _ => Err(format!(
                "unknown question category '{s}' (expected one of: {})",
                QuestionCategory::ALL
                    .iter()
                    .map(|c| c.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_open_ended() {
        assert_eq!(QuestionCategory::default(), QuestionCategory::OpenEnded);
    }

    #[test]
    fn test_serde_uses_display_labels() {
        let json = serde_json::to_string(&QuestionCategory::DataStructuresAndAlgorithms).unwrap();
        assert_eq!(json, r#""Data Structure and Algorithms""#);

        let parsed: QuestionCategory = serde_json::from_str(r#""Multiple Choice""#).unwrap();
        assert_eq!(parsed, QuestionCategory::MultipleChoice);
    }

    #[test]
    fn test_from_str_accepts_labels_and_kebab_forms() {
        for category in QuestionCategory::ALL {
            assert_eq!(category.label().parse::<QuestionCategory>(), Ok(category));
        }
        assert_eq!("open-ended".parse::<QuestionCategory>(), Ok(QuestionCategory::OpenEnded));
        assert_eq!("DSA".parse::<QuestionCategory>(), Ok(QuestionCategory::DataStructuresAndAlgorithms));
        assert_eq!(
            "data-structure-and-algorithms".parse::<QuestionCategory>(),
            Ok(QuestionCategory::DataStructuresAndAlgorithms)
        );
        assert_eq!(" Behavioral ".parse::<QuestionCategory>(), Ok(QuestionCategory::Behavioral));
    }

    #[test]
    fn test_from_str_rejects_take_home() {
        let err = "Take home Assessment".parse::<QuestionCategory>().unwrap_err();
        assert!(err.contains("Take home Assessment"));
        assert!(err.contains("Behavioral"));
    }

    #[test]
    fn test_only_dsa_is_algorithm() {
        let algos: Vec<_> = QuestionCategory::ALL
            .into_iter()
            .filter(|c| c.is_algorithm())
            .collect();
        assert_eq!(algos, vec![QuestionCategory::DataStructuresAndAlgorithms]);
    }
}
