//! The similarity engine: three algorithms and their weighted blend.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::candidate::TextCandidate;
use crate::lexicon::Lexicon;
use crate::similarity::{BlendWeights, MatchStrength, SimilarityBreakdown, SimilarityMatch};
use crate::text;

/// Computes blended title similarity and ranks duplicate candidates.
///
/// Holds only immutable configuration (weights and the stop-word set); all
/// computation is local to each call, so a shared engine is safe to use from
/// multiple threads without locking.
#[derive(Debug, Clone)]
pub struct SimilarityEngine {
    weights: BlendWeights,
    stop_words: HashSet<String>,
}

impl Default for SimilarityEngine {
    fn default() -> Self {
        SimilarityEngine::new(BlendWeights::default(), Lexicon::default_stop_words())
    }
}

impl SimilarityEngine {
    pub fn new(weights: BlendWeights, stop_words: HashSet<String>) -> Self {
        SimilarityEngine {
            weights,
            stop_words,
        }
    }

    pub fn weights(&self) -> BlendWeights {
        self.weights
    }

    /// Blended similarity of two titles in [0.0, 1.0].
    ///
    /// Titles whose normal forms are identical short-circuit to 1.0; anything
    /// else is the fixed-weight combination of edit, keyword-set, and
    /// frequency-weighted similarity. Symmetric in its arguments.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        let norm_a = text::normalize(a);
        let norm_b = text::normalize(b);
        if norm_a == norm_b {
            return 1.0;
        }

        let blended = Self::levenshtein_similarity(&norm_a, &norm_b) * self.weights.levenshtein
            + self.jaccard_normalized(&norm_a, &norm_b) * self.weights.jaccard
            + self.semantic_normalized(&norm_a, &norm_b) * self.weights.semantic;
        blended.clamp(0.0, 1.0)
    }

    /// Edit-distance similarity between two strings, compared as given.
    ///
    /// `1 - distance / max(len)` over Unicode scalar values, so mixed-script
    /// titles are measured per character rather than per byte. Both empty
    /// yields 1.0; one empty yields 0.0.
    pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }
        let s: Vec<char> = a.chars().collect();
        let t: Vec<char> = b.chars().collect();
        if s.is_empty() || t.is_empty() {
            return 0.0;
        }

        let mut prev: Vec<usize> = (0..=t.len()).collect();
        let mut curr: Vec<usize> = vec![0; t.len() + 1];
        for (i, sc) in s.iter().enumerate() {
            curr[0] = i + 1;
            for (j, tc) in t.iter().enumerate() {
                let cost = usize::from(sc != tc);
                curr[j + 1] = (prev[j + 1] + 1) // deletion
                    .min(curr[j] + 1) // insertion
                    .min(prev[j] + cost); // substitution
            }
            std::mem::swap(&mut prev, &mut curr);
        }
        let distance = prev[t.len()];
        let max_len = s.len().max(t.len());
        1.0 - distance as f64 / max_len as f64
    }

    /// Keyword-set overlap: |A ∩ B| / |A ∪ B| over deduplicated keywords of
    /// the normalized strings. Both empty yields 1.0; one empty yields 0.0.
    pub fn jaccard_similarity(&self, a: &str, b: &str) -> f64 {
        self.jaccard_normalized(&text::normalize(a), &text::normalize(b))
    }

    /// Cosine similarity over term-frequency vectors of the normalized
    /// strings; duplicates matter. 0.0 when either side has no keywords.
    pub fn semantic_similarity(&self, a: &str, b: &str) -> f64 {
        self.semantic_normalized(&text::normalize(a), &text::normalize(b))
    }

    fn jaccard_normalized(&self, norm_a: &str, norm_b: &str) -> f64 {
        let set_a: HashSet<String> =
            text::extract_keywords(norm_a, &self.stop_words).into_iter().collect();
        let set_b: HashSet<String> =
            text::extract_keywords(norm_b, &self.stop_words).into_iter().collect();

        if set_a.is_empty() && set_b.is_empty() {
            return 1.0;
        }
        if set_a.is_empty() || set_b.is_empty() {
            return 0.0;
        }

        let intersection = set_a.intersection(&set_b).count();
        let union = set_a.union(&set_b).count();
        intersection as f64 / union as f64
    }

    fn semantic_normalized(&self, norm_a: &str, norm_b: &str) -> f64 {
        let keywords_a = text::extract_keywords(norm_a, &self.stop_words);
        let keywords_b = text::extract_keywords(norm_b, &self.stop_words);
        if keywords_a.is_empty() || keywords_b.is_empty() {
            return 0.0;
        }

        let counts_a = term_counts(&keywords_a);
        let counts_b = term_counts(&keywords_b);

        let dot: f64 = counts_a
            .iter()
            .filter_map(|(term, &count_a)| {
                counts_b.get(term).map(|&count_b| (count_a * count_b) as f64)
            })
            .sum();

        let magnitude_a = l2_norm(&counts_a);
        let magnitude_b = l2_norm(&counts_b);
        if magnitude_a == 0.0 || magnitude_b == 0.0 {
            return 0.0;
        }
        dot / (magnitude_a * magnitude_b)
    }

    /// Rank candidates at least `threshold`-similar to `title`, best first.
    ///
    /// An empty title or candidate list yields an empty result without any
    /// computation. Candidates without a usable title are skipped, never
    /// raised as errors: a partial backlog snapshot must not abort the batch.
    /// Sorting is stable, so equal scores keep their input order.
    #[must_use = "the ranked matches are the only output of the scan"]
    pub fn find_duplicates(
        &self,
        title: &str,
        candidates: &[TextCandidate],
        threshold: f64,
    ) -> Vec<SimilarityMatch> {
        if title.trim().is_empty() || candidates.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<SimilarityMatch> = candidates
            .iter()
            .filter_map(|candidate| {
                let candidate_title = candidate.title.as_deref()?;
                if candidate_title.trim().is_empty() {
                    return None;
                }
                let score = self.similarity(title, candidate_title);
                (score >= threshold).then(|| SimilarityMatch {
                    id: candidate.id.clone(),
                    score,
                    strength: MatchStrength::from_score(score),
                })
            })
            .collect();

        matches.sort_by(|x, y| y.score.partial_cmp(&x.score).unwrap_or(Ordering::Equal));
        tracing::debug!(
            matches = matches.len(),
            threshold,
            "duplicate scan complete"
        );
        matches
    }

    /// Exploratory low-threshold search: like [`find_duplicates`] but capped
    /// at `limit` results, for "find similar" flows rather than hard
    /// duplicate gating.
    ///
    /// [`find_duplicates`]: SimilarityEngine::find_duplicates
    pub fn find_similar(
        &self,
        title: &str,
        candidates: &[TextCandidate],
        min_threshold: f64,
        limit: usize,
    ) -> Vec<SimilarityMatch> {
        let mut matches = self.find_duplicates(title, candidates, min_threshold);
        matches.truncate(limit);
        matches
    }

    /// Per-algorithm diagnostic breakdown of one comparison.
    pub fn breakdown(&self, a: &str, b: &str) -> SimilarityBreakdown {
        let norm_a = text::normalize(a);
        let norm_b = text::normalize(b);
        SimilarityBreakdown {
            levenshtein: Self::levenshtein_similarity(&norm_a, &norm_b),
            jaccard: self.jaccard_normalized(&norm_a, &norm_b),
            semantic: self.semantic_normalized(&norm_a, &norm_b),
            blended: self.similarity(a, b),
            normalized_a: norm_a,
            normalized_b: norm_b,
        }
    }
}

fn term_counts(keywords: &[String]) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for keyword in keywords {
        *counts.entry(keyword.as_str()).or_insert(0) += 1;
    }
    counts
}

fn l2_norm(counts: &HashMap<&str, usize>) -> f64 {
    counts
        .values()
        .map(|&count| (count * count) as f64)
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn engine() -> SimilarityEngine {
        SimilarityEngine::default()
    }

    // --- levenshtein ---

    #[test]
    fn test_levenshtein_identical() {
        assert_eq!(SimilarityEngine::levenshtein_similarity("abc", "abc"), 1.0);
    }

    #[test]
    fn test_levenshtein_both_empty() {
        assert_eq!(SimilarityEngine::levenshtein_similarity("", ""), 1.0);
    }

    #[test]
    fn test_levenshtein_one_empty() {
        assert_eq!(SimilarityEngine::levenshtein_similarity("", "abc"), 0.0);
        assert_eq!(SimilarityEngine::levenshtein_similarity("abc", ""), 0.0);
    }

    #[test]
    fn test_levenshtein_single_substitution() {
        // one substitution over four characters
        let similarity = SimilarityEngine::levenshtein_similarity("kitt", "mitt");
        assert!((similarity - 0.75).abs() < EPSILON);
    }

    #[test]
    fn test_levenshtein_counts_unicode_chars_not_bytes() {
        // one substitution over four Hebrew characters
        let similarity = SimilarityEngine::levenshtein_similarity("אבגד", "אבגה");
        assert!((similarity - 0.75).abs() < EPSILON);
    }

    #[test]
    fn test_levenshtein_disjoint() {
        let similarity = SimilarityEngine::levenshtein_similarity("abcd", "wxyz");
        assert!(similarity.abs() < EPSILON);
    }

    // --- jaccard ---

    #[test]
    fn test_jaccard_identical_sets() {
        let similarity = engine().jaccard_similarity("breaking bad", "breaking bad");
        assert!((similarity - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_jaccard_partial_overlap() {
        // keywords {breaking, bad} vs {breaking, dawn}: 1 shared of 3 total.
        let similarity = engine().jaccard_similarity("breaking bad", "breaking dawn");
        assert!((similarity - 1.0 / 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_jaccard_both_empty() {
        assert_eq!(engine().jaccard_similarity("", ""), 1.0);
    }

    #[test]
    fn test_jaccard_one_empty() {
        assert_eq!(engine().jaccard_similarity("", "breaking bad"), 0.0);
    }

    #[test]
    fn test_jaccard_stop_words_ignored() {
        // "the" and "movie" are stop words on both sides.
        let similarity = engine().jaccard_similarity("the movie dune", "dune");
        assert!((similarity - 1.0).abs() < EPSILON);
    }

    // --- semantic ---

    #[test]
    fn test_semantic_identical() {
        let similarity = engine().semantic_similarity("dune part two", "dune part two");
        assert!((similarity - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_semantic_no_shared_terms() {
        assert_eq!(engine().semantic_similarity("dune", "matrix"), 0.0);
    }

    #[test]
    fn test_semantic_empty_side() {
        assert_eq!(engine().semantic_similarity("", "dune"), 0.0);
        assert_eq!(engine().semantic_similarity("", ""), 0.0);
    }

    #[test]
    fn test_semantic_frequency_weighting() {
        // "dune dune" vs "dune": vectors (2) and (1) point the same way.
        let similarity = engine().semantic_similarity("dune dune", "dune");
        assert!((similarity - 1.0).abs() < EPSILON);

        // shared term with differing companions scores below 1.
        let partial = engine().semantic_similarity("dune arrakis", "dune caladan");
        assert!(partial > 0.0 && partial < 1.0);
    }

    // --- blended similarity ---

    #[test]
    fn test_similarity_identity() {
        for title in ["breaking bad", "אווטר דרך המים 2022", "x"] {
            assert_eq!(engine().similarity(title, title), 1.0);
        }
    }

    #[test]
    fn test_similarity_symmetry() {
        let e = engine();
        let pairs = [
            ("breaking bad", "breaking dawn"),
            ("the matrix 1999", "matrix reloaded"),
            ("אווטר דרך המים", "אווטר 2022"),
            ("", "something"),
        ];
        for (a, b) in pairs {
            let forward = e.similarity(a, b);
            let backward = e.similarity(b, a);
            assert!(
                (forward - backward).abs() < EPSILON,
                "similarity not symmetric for ({a}, {b})"
            );
        }
    }

    #[test]
    fn test_similarity_normalized_equal_short_circuits() {
        // Different surface forms, identical normal forms.
        assert_eq!(engine().similarity("The Matrix", "matrix!"), 1.0);
        assert_eq!(engine().similarity("הסרט", "סרט"), 1.0);
    }

    #[test]
    fn test_similarity_range() {
        let e = engine();
        let samples = [
            ("breaking bad", "breaking dawn"),
            ("avatar", "avatar 2022"),
            ("totally different", "else entirely"),
        ];
        for (a, b) in samples {
            let score = e.similarity(a, b);
            assert!((0.0..=1.0).contains(&score), "out of range for ({a}, {b})");
        }
    }

    #[test]
    fn test_similarity_unrelated_titles_score_low() {
        let score = engine().similarity("אווטר דרך המים 2022", "Grand Theft Auto V");
        assert!(score < 0.3, "unrelated titles scored {score}");
    }

    // --- find_duplicates ---

    fn sample_candidates() -> Vec<TextCandidate> {
        vec![
            TextCandidate::new("1", "אווטר דרך המים 2022"),
            TextCandidate::new("2", "Grand Theft Auto V"),
        ]
    }

    #[test]
    fn test_find_duplicates_exact_match_only() {
        let matches = engine().find_duplicates("אווטר דרך המים 2022", &sample_candidates(), 0.8);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "1");
        assert_eq!(matches[0].score, 1.0);
        assert_eq!(matches[0].strength, MatchStrength::Exact);
    }

    #[test]
    fn test_find_duplicates_empty_title_short_circuits() {
        let matches = engine().find_duplicates("", &sample_candidates(), 0.8);
        assert!(matches.is_empty());
        let matches = engine().find_duplicates("   ", &sample_candidates(), 0.8);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_find_duplicates_empty_candidates() {
        assert!(engine().find_duplicates("avatar", &[], 0.8).is_empty());
    }

    #[test]
    fn test_find_duplicates_skips_untitled_candidates() {
        let candidates = vec![
            TextCandidate::untitled("1"),
            TextCandidate {
                id: "2".to_string(),
                title: Some("  ".to_string()),
                status: Default::default(),
            },
            TextCandidate::new("3", "avatar"),
        ];
        let matches = engine().find_duplicates("avatar", &candidates, 0.8);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "3");
    }

    #[test]
    fn test_find_duplicates_sorted_descending() {
        let candidates = vec![
            TextCandidate::new("far", "avatar way of water extended director cut"),
            TextCandidate::new("exact", "avatar way of water"),
            TextCandidate::new("near", "avatar way of water 2022"),
        ];
        let matches = engine().find_duplicates("avatar way of water", &candidates, 0.1);
        assert_eq!(matches[0].id, "exact");
        for pair in matches.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_find_duplicates_threshold_monotonicity() {
        let e = engine();
        let candidates = vec![
            TextCandidate::new("1", "avatar way of water"),
            TextCandidate::new("2", "avatar way of water 2022"),
            TextCandidate::new("3", "breaking bad"),
            TextCandidate::new("4", "avatar"),
        ];
        let loose = e.find_duplicates("avatar way of water", &candidates, 0.3);
        let strict = e.find_duplicates("avatar way of water", &candidates, 0.8);
        assert!(loose.len() >= strict.len());
        for m in &strict {
            assert!(
                loose.iter().any(|l| l.id == m.id),
                "match {} admitted at 0.8 but missing at 0.3",
                m.id
            );
        }
    }

    // --- find_similar ---

    #[test]
    fn test_find_similar_respects_limit() {
        let candidates: Vec<TextCandidate> = (0..10)
            .map(|i| TextCandidate::new(i.to_string(), format!("avatar part {i}")))
            .collect();
        let matches = engine().find_similar("avatar", &candidates, 0.1, 3);
        assert_eq!(matches.len(), 3);
    }

    #[test]
    fn test_find_similar_empty_title() {
        assert!(engine().find_similar("", &sample_candidates(), 0.1, 5).is_empty());
    }

    // --- breakdown ---

    #[test]
    fn test_breakdown_components_match_public_api() {
        let e = engine();
        let breakdown = e.breakdown("breaking bad", "breaking dawn");
        assert!((breakdown.jaccard - e.jaccard_similarity("breaking bad", "breaking dawn")).abs() < EPSILON);
        assert!((breakdown.blended - e.similarity("breaking bad", "breaking dawn")).abs() < EPSILON);
        assert_eq!(breakdown.normalized_a, "breaking bad");
    }

    // --- custom weights ---

    #[test]
    fn test_custom_weights_change_blend() {
        let lev_only = SimilarityEngine::new(
            BlendWeights {
                levenshtein: 1.0,
                jaccard: 0.0,
                semantic: 0.0,
            },
            Lexicon::default_stop_words(),
        );
        let a = "breaking bad";
        let b = "breaking dawn";
        let expected =
            SimilarityEngine::levenshtein_similarity(&text::normalize(a), &text::normalize(b));
        assert!((lev_only.similarity(a, b) - expected).abs() < EPSILON);
    }
}
