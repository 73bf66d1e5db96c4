//! Heuristic lexicon-based tagger.
//!
//! A stand-in for a real POS model: closed-class function words are listed
//! outright, open-class words are classified by capitalization and suffix.
//! Tuned for Spanish and English, the two languages the default Whisper
//! models handle best. Precision is deliberately traded for zero model
//! weight — misclassifying an open-class word usually shifts its score by
//! at most one weight step.

use crate::tag::tagger::{WordCategory, WordTagger};
use std::collections::HashSet;

/// Closed-class function words (articles, prepositions, pronouns,
/// conjunctions, auxiliaries) that never earn emphasis weight.
const FUNCTION_WORDS: &[&str] = &[
    // Spanish
    "el", "la", "los", "las", "un", "una", "unos", "unas", "de", "del", "a", "al", "en", "por",
    "para", "con", "sin", "sobre", "entre", "hasta", "desde", "y", "e", "o", "u", "ni", "que",
    "como", "pero", "sino", "si", "no", "se", "su", "sus", "mi", "mis", "tu", "tus", "yo", "me",
    "te", "le", "lo", "les", "nos", "os", "es", "son", "era", "fue", "ha", "han", "he", "hay",
    "muy", "más", "menos", "este", "esta", "esto", "ese", "esa", "eso", "aquel", "cual", "quien",
    // English
    "the", "an", "of", "to", "in", "on", "at", "by", "for", "with", "from", "into", "over",
    "under", "and", "or", "but", "nor", "so", "yet", "as", "than", "then", "it", "its", "he",
    "she", "they", "them", "his", "her", "their", "we", "us", "our", "you", "your", "i", "my",
    "be", "am", "is", "are", "was", "were", "been", "has", "have", "had", "do", "does", "did",
    "will", "would", "can", "could", "may", "might", "shall", "should", "must", "this", "that",
    "these", "those", "there", "here", "not", "very", "just", "also", "too",
];

/// Adverb suffixes checked before verb suffixes ("rápidamente" ends in
/// "-e" but must not fall through to the verb rules).
const ADVERB_SUFFIXES: &[&str] = &["mente", "ly"];

const VERB_SUFFIXES: &[&str] = &[
    "ando", "iendo", "aron", "ieron", "aba", "ía", "ar", "er", "ir", "ing",
];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "oso", "osa", "ble", "ivo", "iva", "ante", "ente", "ful", "ous", "ive", "less",
];

/// Heuristic tagger backed by a function-word list and suffix rules.
pub struct LexiconTagger {
    function_words: HashSet<&'static str>,
}

impl LexiconTagger {
    pub fn new() -> Self {
        Self {
            function_words: FUNCTION_WORDS.iter().copied().collect(),
        }
    }

    /// Strip leading/trailing punctuation, keeping interior letters intact.
    fn strip_punctuation(token: &str) -> &str {
        token.trim_matches(|c: char| !c.is_alphanumeric())
    }
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl WordTagger for LexiconTagger {
    fn tag(&self, token: &str) -> WordCategory {
        let stripped = Self::strip_punctuation(token);
        if stripped.is_empty() || stripped.chars().any(|c| c.is_ascii_digit()) {
            return WordCategory::Unknown;
        }

        let lower = stripped.to_lowercase();
        if self.function_words.contains(lower.as_str()) {
            return WordCategory::Unknown;
        }

        // Capitalized content word → proper noun. Sentence-initial words get
        // over-tagged by this rule; transcribed speech rarely carries
        // capitalization mid-stream, so the trade is acceptable.
        if stripped.chars().next().is_some_and(char::is_uppercase) {
            return WordCategory::ProperNoun;
        }

        if ADVERB_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return WordCategory::Adverb;
        }
        if ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return WordCategory::Adjective;
        }
        if VERB_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return WordCategory::Verb;
        }

        // Open-class default: remaining content words read as nouns.
        WordCategory::Noun
    }
}
