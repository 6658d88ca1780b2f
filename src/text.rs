//! Shared text normalization and keyword extraction.
//!
//! Both the intent scorer and the similarity engine canonicalize text through
//! this module, so the two components always agree on one comparison form.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

/// Single-letter Hebrew prefixes stripped from the front of longer words
/// (definite article, conjunctions, prepositions).
const HEBREW_PREFIXES: [char; 7] = ['ה', 'ו', 'ב', 'ל', 'מ', 'כ', 'ש'];

fn non_word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s]").expect("static pattern compiles"))
}

fn word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\w+").expect("static pattern compiles"))
}

/// Reduce text to its canonical comparison form: lower-cased, punctuation
/// folded to spaces, English articles dropped, single-letter Hebrew prefixes
/// stripped, whitespace collapsed and trimmed.
///
/// Punctuation is folded before article and prefix stripping so the whole
/// pipeline is a closure: `normalize(normalize(s)) == normalize(s)` holds for
/// every input string.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let folded = non_word_re().replace_all(&lowered, " ");
    let tokens: Vec<&str> = folded.split_whitespace().collect();
    let last = tokens.len().saturating_sub(1);

    let mut out: Vec<String> = Vec::with_capacity(tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        // An article is only an article when another word follows it.
        if i < last && matches!(*token, "the" | "a" | "an") {
            continue;
        }
        out.push(strip_hebrew_prefixes(token));
    }
    out.join(" ")
}

/// Strip leading Hebrew prefix letters while the word stays longer than two
/// characters. Runs to a fixed point so a second pass is always a no-op.
fn strip_hebrew_prefixes(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    while chars.len() > 2 && HEBREW_PREFIXES.contains(&chars[0]) {
        chars.remove(0);
    }
    chars.into_iter().collect()
}

/// Extract comparison keywords: word-boundary tokens, lower-cased, with
/// single-character tokens and stop words removed.
///
/// Order follows the original token order and duplicates are retained, since
/// the frequency-weighted similarity needs term counts. Callers wanting set
/// semantics must dedupe explicitly.
pub fn extract_keywords(text: &str, stop_words: &HashSet<String>) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_re()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .filter(|word| word.chars().count() >= 2 && !stop_words.contains(word))
        .collect()
}
