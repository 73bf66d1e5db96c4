use std::collections::HashMap;
use std::sync::Arc;

/// Coarse grammatical category of a single token.
///
/// Only the categories that carry emphasis weight are distinguished;
/// everything else (articles, pronouns, punctuation fragments, digits) is
/// `Unknown` and scores zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordCategory {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Unknown,
}

/// Trait for grammatical word classification.
///
/// This trait allows swapping implementations (heuristic lexicon vs mock).
pub trait WordTagger: Send + Sync {
    /// Classify a cleaned (trimmed, non-empty) token.
    ///
    /// # Arguments
    /// * `token` - A single word with surrounding whitespace removed
    ///
    /// # Returns
    /// The word's category, or `WordCategory::Unknown` if unclassifiable
    fn tag(&self, token: &str) -> WordCategory;
}

/// Implement WordTagger for Arc<T> to allow sharing across workers.
impl<T: WordTagger + ?Sized> WordTagger for Arc<T> {
    fn tag(&self, token: &str) -> WordCategory {
        (**self).tag(token)
    }
}

/// Mock tagger for testing
#[derive(Debug, Clone, Default)]
pub struct MockTagger {
    categories: HashMap<String, WordCategory>,
}

impl MockTagger {
    /// Create a mock that tags every token as `Unknown`
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the mock to return a specific category for a token
    pub fn with_word(mut self, token: &str, category: WordCategory) -> Self {
        self.categories.insert(token.to_string(), category);
        self
    }
}

impl WordTagger for MockTagger {
    fn tag(&self, token: &str) -> WordCategory {
        self.categories
            .get(token)
            .copied()
            .unwrap_or(WordCategory::Unknown)
    }
}
