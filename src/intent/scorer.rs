//! The intent scorer: rejection filter, additive scoring, detailed analysis.

use std::collections::HashSet;

use crate::intent::{Category, IntentAnalysis};
use crate::lexicon::Lexicon;

/// Points for the three request-phrase tiers. Mutually exclusive per message;
/// only the highest matching tier counts.
const HIGH_PHRASE_POINTS: i64 = 35;
const MEDIUM_PHRASE_POINTS: i64 = 20;
const LOW_PHRASE_POINTS: i64 = 15;

/// Category bonus / unclear-category penalty.
const CATEGORY_POINTS: i64 = 25;
const NO_CATEGORY_PENALTY: i64 = 5;

/// Technical-detail bonus (year or quality tag).
const TECHNICAL_POINTS: i64 = 15;

/// Penalties for conversational noise.
const CASUAL_PENALTY: i64 = 30;
const LONG_TEXT_PENALTY: i64 = 15;
const MANY_QUESTIONS_PENALTY: i64 = 10;

const LONG_TEXT_CHARS: usize = 200;
const MANY_QUESTIONS: usize = 3;

const MIN_REQUEST_CHARS: usize = 8;
const MIN_REQUEST_TOKENS: usize = 2;
const SPAM_MAX_DISTINCT_CHARS: usize = 3;
const SPAM_MIN_CHARS: usize = 5;

/// Longest provisional title, in words.
const MAX_TITLE_WORDS: usize = 10;

fn contains_any(haystack: &str, phrases: &[String]) -> bool {
    phrases.iter().any(|p| haystack.contains(p.as_str()))
}

/// Classifies free-text messages as content requests.
///
/// Stateless given its [`Lexicon`]; every method is a pure function of the
/// input string, safe to call concurrently.
#[derive(Debug, Clone)]
pub struct IntentScorer {
    lexicon: Lexicon,
}

impl Default for IntentScorer {
    fn default() -> Self {
        IntentScorer::new(Lexicon::default())
    }
}

impl IntentScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        IntentScorer { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Fast rejection filter: can this message plausibly be a content request?
    ///
    /// Rejects obvious noise (too short, acknowledgements, emoji spam,
    /// repeated characters); accepts only when the text carries a request
    /// indicator, a content keyword, or a known franchise title.
    pub fn could_be_request(&self, text: &str) -> bool {
        let trimmed = text.trim();
        let lower = trimmed.to_lowercase();

        if lower.chars().count() < MIN_REQUEST_CHARS {
            return false;
        }
        if lower.split_whitespace().count() < MIN_REQUEST_TOKENS {
            return false;
        }
        if self
            .lexicon
            .immediate_filters
            .iter()
            .any(|phrase| lower.starts_with(phrase.as_str()))
        {
            return false;
        }
        if self.lexicon.emoji_only_re.is_match(trimmed) {
            return false;
        }
        let distinct: HashSet<char> = lower.chars().collect();
        if lower.chars().count() > SPAM_MIN_CHARS && distinct.len() <= SPAM_MAX_DISTINCT_CHARS {
            return false;
        }

        contains_any(&lower, &self.lexicon.request_indicators)
            || contains_any(&lower, &self.lexicon.content_indicators)
            || contains_any(&lower, &self.lexicon.franchise_titles)
    }

    /// Additive request score, floored at zero.
    ///
    /// The three request-phrase tiers are mutually exclusive: only the
    /// highest matching tier contributes. All penalties apply before the
    /// single floor at the end, so stacked penalties can cancel a small
    /// positive base but never surface as a negative score.
    pub fn score(&self, text: &str) -> u32 {
        let lower = text.to_lowercase();
        let mut score: i64 = 0;

        if contains_any(&lower, &self.lexicon.high_phrases) {
            score += HIGH_PHRASE_POINTS;
        } else if contains_any(&lower, &self.lexicon.medium_phrases) {
            score += MEDIUM_PHRASE_POINTS;
        } else if contains_any(&lower, &self.lexicon.low_phrases) {
            score += LOW_PHRASE_POINTS;
        }

        let category_found = self
            .lexicon
            .score_categories
            .iter()
            .any(|set| contains_any(&lower, &set.keywords));
        if category_found {
            score += CATEGORY_POINTS;
        } else {
            score -= NO_CATEGORY_PENALTY;
        }

        if self.lexicon.year_re.is_match(&lower)
            || contains_any(&lower, &self.lexicon.quality_tags)
        {
            score += TECHNICAL_POINTS;
        }

        for phrase in &self.lexicon.casual_phrases {
            if lower.contains(phrase.as_str()) {
                score -= CASUAL_PENALTY;
            }
        }

        if text.chars().count() > LONG_TEXT_CHARS {
            score -= LONG_TEXT_PENALTY;
        }
        if text.matches('?').count() > MANY_QUESTIONS {
            score -= MANY_QUESTIONS_PENALTY;
        }

        score.max(0) as u32
    }

    /// Detailed second-pass classification for an already-scored message.
    pub fn analyze(&self, text: &str, score: u32) -> IntentAnalysis {
        let lower = text.to_lowercase();
        let category = self.detect_category(&lower);

        let is_clear_request = self
            .lexicon
            .clear_request_res
            .iter()
            .any(|pattern| pattern.is_match(&lower));

        let might_be_request =
            (score >= 15 && category != Category::General) || score >= 30;

        IntentAnalysis {
            raw_score: score,
            is_clear_request,
            might_be_request,
            category,
            confidence: score.min(95),
            title: self.extract_title(text, category),
        }
    }

    /// First matching category group wins; `General` when none match.
    fn detect_category(&self, lower: &str) -> Category {
        for (category, keywords) in &self.lexicon.analyze_categories {
            if contains_any(lower, keywords) {
                return *category;
            }
        }
        Category::General
    }

    /// Best-effort provisional title: request phrasing and category keywords
    /// stripped, capped at [`MAX_TITLE_WORDS`] words. Falls back to the
    /// message itself so a clear request always yields a title.
    fn extract_title(&self, text: &str, category: Category) -> Option<String> {
        let mut working = text.trim().to_lowercase();

        if let Some((_, keywords)) = self
            .lexicon
            .analyze_categories
            .iter()
            .find(|(c, _)| *c == category)
        {
            for keyword in keywords {
                working = remove_phrase(&working, keyword);
            }
        }

        // Longer phrases first, so "can i get" goes before bare "the".
        let mut stops = self.lexicon.title_stop_phrases.clone();
        stops.sort_by_key(|phrase| std::cmp::Reverse(phrase.split_whitespace().count()));
        for phrase in &stops {
            working = remove_phrase(&working, phrase);
        }

        let cleaned = trim_title(
            &working
                .split_whitespace()
                .take(MAX_TITLE_WORDS)
                .collect::<Vec<_>>()
                .join(" "),
        );
        if !cleaned.is_empty() {
            return Some(cleaned);
        }

        let fallback = trim_title(
            &text
                .trim()
                .to_lowercase()
                .split_whitespace()
                .take(MAX_TITLE_WORDS)
                .collect::<Vec<_>>()
                .join(" "),
        );
        if fallback.is_empty() {
            None
        } else {
            Some(fallback)
        }
    }
}

/// Remove whole-token runs equal to `phrase` from `text`.
fn remove_phrase(text: &str, phrase: &str) -> String {
    let phrase_tokens: Vec<&str> = phrase.split_whitespace().collect();
    if phrase_tokens.is_empty() {
        return text.to_string();
    }
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut out: Vec<&str> = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        if tokens.len() - i >= phrase_tokens.len()
            && tokens[i..i + phrase_tokens.len()] == phrase_tokens[..]
        {
            i += phrase_tokens.len();
        } else {
            out.push(tokens[i]);
            i += 1;
        }
    }
    out.join(" ")
}

/// Trim leading/trailing punctuation left over from stripping.
fn trim_title(title: &str) -> String {
    title
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_string()
}
