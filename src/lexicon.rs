//! Phrase and keyword tables driving intent scoring.
//!
//! Every word list the scorer consults lives here as one explicit structure
//! bound at construction, rather than as literals scattered through the
//! scoring code. Tests can substitute fixture tables; production code uses
//! [`Lexicon::default`], which carries the Hebrew+English tables tuned for
//! community content-request channels.

use std::collections::HashSet;

use regex::Regex;

use crate::intent::Category;

/// A named keyword set used by the score-time category bonus.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    pub label: String,
    pub keywords: Vec<String>,
}

/// All phrase/keyword tables consulted by the scorer, plus compiled patterns.
///
/// Phrase matching is substring-based over lower-cased text; lists are
/// matched in the order given, so more specific multi-word phrases should
/// precede their shorter prefixes.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Phrases that disqualify a message outright when it starts with one
    /// (acknowledgements, laughter, pure small talk).
    pub immediate_filters: Vec<String>,
    /// Words/phrases that signal someone is asking for something.
    pub request_indicators: Vec<String>,
    /// Words that signal the message is about obtainable content.
    pub content_indicators: Vec<String>,
    /// Curated franchise/platform names that alone make a message plausible.
    pub franchise_titles: Vec<String>,

    /// Explicit request phrases worth the top score tier.
    pub high_phrases: Vec<String>,
    /// Generic request words worth the middle tier.
    pub medium_phrases: Vec<String>,
    /// Bare existence words worth the bottom tier.
    pub low_phrases: Vec<String>,

    /// Category keyword sets awarding the score-time category bonus.
    pub score_categories: Vec<KeywordSet>,
    /// Quality tags counting as a technical detail.
    pub quality_tags: Vec<String>,
    /// Casual-conversation phrases, each subtracting from the score.
    pub casual_phrases: Vec<String>,

    /// Ordered category groups for analysis-time category detection.
    pub analyze_categories: Vec<(Category, Vec<String>)>,
    /// Phrases stripped from a message when extracting a provisional title.
    pub title_stop_phrases: Vec<String>,

    /// Stop words shared with the similarity engine's keyword extraction.
    pub stop_words: HashSet<String>,

    pub(crate) year_re: Regex,
    pub(crate) emoji_only_re: Regex,
    pub(crate) clear_request_res: Vec<Regex>,
}

fn phrases(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("lexicon pattern compiles")
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon {
            immediate_filters: phrases(&[
                // acknowledgements
                "תודה",
                "טנקס",
                "תנקס",
                "thanks",
                "thank you",
                // short reactions
                "וואו",
                "ואו",
                "אמאמא",
                "יפה",
                "מגניב",
                "אחלה",
                "מעולה",
                "כן",
                "לא",
                "אוק",
                "אוקיי",
                "ok",
                "okay",
                "בסדר",
                "טוב",
                // laughter
                "חח",
                "חחחח",
                "ההה",
                "lol",
                "haha",
                // small talk
                "שניה",
                "רגע",
                "מיד",
                "עכשיו אני",
                "אני בא",
                "אני הולך",
                "אתה בא",
                "מה קורה",
                "מה נשמע",
            ]),
            request_indicators: phrases(&[
                "אפשר",
                "יש",
                "מחפש",
                "רוצה",
                "צריך",
                "תן",
                "איפה",
                "מי יש",
                "can i get",
                "do you have",
                "looking for",
                "i want",
                "i need",
                "where is",
                "who has",
                "help me find",
            ]),
            content_indicators: phrases(&[
                "סרט",
                "סדרה",
                "משחק",
                "ספר",
                "תוכנה",
                "אפליקצי",
                "מוזיקה",
                "movie",
                "series",
                "game",
                "book",
                "software",
                "app",
                "music",
                "קורס",
                "course",
                "tutorial",
                "מדריך",
            ]),
            franchise_titles: phrases(&[
                "שובר שורות",
                "prison break",
                "friends",
                "avatar",
                "superman",
                "batman",
                "marvel",
                "netflix",
                "amazon prime",
                "disney+",
                "hbo",
            ]),
            high_phrases: phrases(&[
                "אפשר את ה",
                "אפשר את",
                "יש את ה",
                "יש את",
                "מחפש את ה",
                "מחפש את",
                "רוצה את ה",
                "רוצה את",
                "צריך את ה",
                "צריך את",
                "תן לי את",
                "can i get the",
                "do you have the",
                "i'm looking for the",
                "looking for the",
                "i want the",
            ]),
            medium_phrases: phrases(&[
                "אפשר",
                "יש לכם",
                "מישהו יש",
                "מי יש לו",
                "חפש",
                "איפה",
                "where",
                "מוצא",
                "find",
                "locate",
                "does anyone have",
            ]),
            low_phrases: phrases(&[
                "יש",
                "קיים",
                "זמין",
                "is there",
                "available",
                "have",
                "exists",
                "need",
                "want",
            ]),
            score_categories: vec![
                KeywordSet {
                    label: "entertainment".to_string(),
                    keywords: phrases(&[
                        "הסרט", "הסדרה", "netflix", "disney", "hbo", "סרט", "סדרה", "movie",
                        "series", "show", "film",
                    ]),
                },
                KeywordSet {
                    label: "software".to_string(),
                    keywords: phrases(&[
                        "תוכנת",
                        "התוכנה",
                        "photoshop",
                        "office",
                        "windows",
                        "תוכנה",
                        "software",
                        "app",
                        "אפליקציה",
                    ]),
                },
                KeywordSet {
                    label: "gaming".to_string(),
                    keywords: phrases(&[
                        "המשחק", "steam", "ps4", "ps5", "xbox", "nintendo", "משחק", "game",
                    ]),
                },
                KeywordSet {
                    label: "education".to_string(),
                    keywords: phrases(&[
                        "הקורס", "tutorial", "course", "udemy", "coursera", "קורס", "מדריך",
                    ]),
                },
                KeywordSet {
                    label: "books".to_string(),
                    keywords: phrases(&["הספר", "pdf", "epub", "ebook", "ספר", "book"]),
                },
                KeywordSet {
                    label: "music".to_string(),
                    keywords: phrases(&[
                        "השיר", "האלבום", "mp3", "flac", "spotify", "שיר", "אלבום", "מוזיקה",
                        "music",
                    ]),
                },
                KeywordSet {
                    label: "franchises".to_string(),
                    keywords: phrases(&[
                        "friends",
                        "avatar",
                        "superman",
                        "batman",
                        "marvel",
                        "שובר שורות",
                        "prison break",
                        "סופרמן",
                        "בטמן",
                        "איירון מן",
                        "iron man",
                        "avengers",
                    ]),
                },
            ],
            quality_tags: phrases(&["4k", "1080p", "hd", "crack", "free"]),
            casual_phrases: phrases(&[
                "איך אתה",
                "מה שלומך",
                "מה קורה",
                "איך היה",
                "מה נשמע",
                "אני חושב",
                "לדעתי",
                "מה דעתך",
                "אני מסכים",
                "how are you",
                "what's up",
                "i think",
                "in my opinion",
            ]),
            analyze_categories: vec![
                (
                    Category::Entertainment,
                    phrases(&["סרט", "סדרה", "נטפליקס", "דיסני", "movie", "series", "netflix"]),
                ),
                (
                    Category::Software,
                    phrases(&["תוכנה", "תוכנת", "photoshop", "office", "software"]),
                ),
                (
                    Category::Gaming,
                    phrases(&["משחק", "steam", "playstation", "xbox", "game"]),
                ),
                (
                    Category::Education,
                    phrases(&["קורס", "שיעור", "course", "tutorial", "udemy"]),
                ),
                (Category::Books, phrases(&["ספר", "pdf", "ebook", "book"])),
                (
                    Category::Music,
                    phrases(&["שיר", "אלבום", "מוזיקה", "music", "song"]),
                ),
            ],
            title_stop_phrases: phrases(&[
                "can i get",
                "do you have",
                "looking for",
                "help me find",
                "where is",
                "is there",
                "i want",
                "i need",
                "אני רוצה",
                "תן לי",
                "תביא לי",
                "אפשר",
                "מחפש",
                "רוצה",
                "צריך",
                "איפה",
                "בבקשה",
                "please",
                "את",
                "של",
                "על",
                "עם",
                "יש",
                "the",
                "an",
                "a",
            ]),
            stop_words: Self::default_stop_words(),
            year_re: re(r"\b20(1[0-9]|2[0-4])\b"),
            emoji_only_re: re(r"^[\s🫶❤️😘👍👌🔥💯⭐😊😎🎉🎊🙏♥️👏]*$"),
            clear_request_res: vec![
                re(r"אפשר\s+(את\s+)?ה?(סרט|סדרה|משחק|ספר|תוכנה)"),
                re(r"יש\s+(את\s+)?ה?(סרט|סדרה|משחק|ספר|תוכנה)"),
                re(r"מחפש\s+(את\s+)?ה?(סרט|סדרה|משחק|ספר|תוכנה)"),
                re(r"(can\s+i\s+get|do\s+you\s+have).+(movie|series|game|book|software)"),
                // looser single-verb forms
                re(r"אפשר\s+\w+"),
                re(r"יש\s+\w+"),
                re(r"איפה\s+\w+"),
                re(r"מחפש\s+\w+"),
                re(r"(can\s+i\s+get|looking\s+for|is\s+there|where\s+is)\s+\w+"),
            ],
        }
    }
}

impl Lexicon {
    /// The Hebrew+English stop-word set shared by keyword extraction on both
    /// the scoring and similarity sides.
    pub fn default_stop_words() -> HashSet<String> {
        [
            // hebrew
            "את",
            "של",
            "על",
            "עם",
            "אל",
            "מן",
            "או",
            "אבל",
            "כי",
            "אם",
            "גם",
            "כל",
            "יש",
            "לא",
            "זה",
            "היא",
            "הוא",
            "מה",
            "איך",
            "למה",
            "איפה",
            "מתי",
            "כמה",
            "הסדרה",
            "הסרט",
            "המשחק",
            "הספר",
            "האפליקציה",
            "התוכנה",
            // english
            "the",
            "an",
            "and",
            "or",
            "but",
            "in",
            "on",
            "at",
            "to",
            "for",
            "of",
            "with",
            "by",
            "is",
            "are",
            "was",
            "were",
            "have",
            "has",
            "had",
            "do",
            "does",
            "did",
            // generic category nouns carry no title signal
            "series",
            "movie",
            "film",
            "game",
            "book",
            "app",
            "application",
            "software",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}
