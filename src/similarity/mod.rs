//! Duplicate detection over open-request titles.
//!
//! A blended similarity metric combining edit distance, keyword-set overlap,
//! and frequency-weighted term overlap, applied per candidate against a
//! bounded snapshot of the backlog. Stateless: every call is a pure function
//! of its explicit inputs.

mod engine;

pub use engine::SimilarityEngine;

use serde::Serialize;

/// Relative weights of the three similarity algorithms.
///
/// Treated as read-only once the engine is constructed; reconfiguration means
/// building a new engine between batches, so one `similarity` call always
/// sees one consistent weight set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendWeights {
    pub levenshtein: f64,
    pub jaccard: f64,
    pub semantic: f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        BlendWeights {
            levenshtein: 0.4,
            jaccard: 0.3,
            semantic: 0.3,
        }
    }
}

/// Qualitative band for a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrength {
    Exact,
    VeryHigh,
    High,
    Medium,
    Low,
}

impl MatchStrength {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.95 {
            MatchStrength::Exact
        } else if score >= 0.85 {
            MatchStrength::VeryHigh
        } else if score >= 0.7 {
            MatchStrength::High
        } else if score >= 0.5 {
            MatchStrength::Medium
        } else {
            MatchStrength::Low
        }
    }
}

/// One ranked result of a duplicate or similar-title search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityMatch {
    /// Opaque candidate identifier, caller-owned.
    pub id: String,
    /// Blended similarity in [0.0, 1.0].
    pub score: f64,
    /// Band classification of `score`.
    pub strength: MatchStrength,
}

/// Per-algorithm diagnostic breakdown of one comparison.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityBreakdown {
    pub levenshtein: f64,
    pub jaccard: f64,
    pub semantic: f64,
    pub blended: f64,
    pub normalized_a: String,
    pub normalized_b: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = BlendWeights::default();
        let sum = weights.levenshtein + weights.jaccard + weights.semantic;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_match_strength_bands() {
        assert_eq!(MatchStrength::from_score(1.0), MatchStrength::Exact);
        assert_eq!(MatchStrength::from_score(0.95), MatchStrength::Exact);
        assert_eq!(MatchStrength::from_score(0.9), MatchStrength::VeryHigh);
        assert_eq!(MatchStrength::from_score(0.7), MatchStrength::High);
        assert_eq!(MatchStrength::from_score(0.5), MatchStrength::Medium);
        assert_eq!(MatchStrength::from_score(0.1), MatchStrength::Low);
    }
}
