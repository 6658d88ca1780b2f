//! Request-intent scoring for free-text chat messages.
//!
//! Decides whether a message plausibly asks for content, how strongly, and
//! which coarse category it belongs to. Everything here is a pure function of
//! the input string and the bound [`crate::lexicon::Lexicon`].

mod scorer;

pub use scorer::IntentScorer;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse content category assigned to a scored message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Entertainment,
    Software,
    Gaming,
    Education,
    Books,
    Music,
    General,
}

impl Category {
    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Entertainment => "entertainment",
            Category::Software => "software",
            Category::Gaming => "gaming",
            Category::Education => "education",
            Category::Books => "books",
            Category::Music => "music",
            Category::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full classification of one message, produced by [`IntentScorer::analyze`].
///
/// Constructed fresh per message and immediately consumed by the caller;
/// nothing here is persisted by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntentAnalysis {
    /// The additive score the analysis was computed from.
    pub raw_score: u32,
    /// The message matches an explicit request construction.
    pub is_clear_request: bool,
    /// The message is plausibly a request, but not unambiguous.
    pub might_be_request: bool,
    /// First matching category group, or [`Category::General`].
    pub category: Category,
    /// Raw score capped at 95, exposed on a 0-100 scale.
    pub confidence: u32,
    /// Best-effort extracted title. Never `None` when `is_clear_request`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display_matches_serde() {
        let json = serde_json::to_string(&Category::Entertainment).unwrap();
        assert_eq!(json, "\"entertainment\"");
        assert_eq!(Category::Entertainment.to_string(), "entertainment");
    }

    #[test]
    fn test_category_roundtrip() {
        let parsed: Category = serde_json::from_str("\"gaming\"").unwrap();
        assert_eq!(parsed, Category::Gaming);
    }

    #[test]
    fn test_analysis_serializes_without_empty_title() {
        let analysis = IntentAnalysis {
            raw_score: 10,
            is_clear_request: false,
            might_be_request: false,
            category: Category::General,
            confidence: 10,
            title: None,
        };
        let json = serde_json::to_string(&analysis).unwrap();
        assert!(!json.contains("title"));
    }
}
