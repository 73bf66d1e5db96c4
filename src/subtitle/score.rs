//! Emphasis scoring: numeric salience per word.
//!
//! A word's score blends three signals: its grammatical category, whether a
//! long pause precedes it, and whether its duration is an outlier for the
//! transcript. All weights and thresholds come from [`EmphasisConfig`].

use crate::config::EmphasisConfig;
use crate::subtitle::word::{TranscriptStats, Word};
use crate::tag::{WordCategory, WordTagger};
use std::sync::Arc;

/// Computes a salience score for each word of a transcript.
///
/// Scoring is a pure function of `(word, previous, stats)` for a fixed
/// tagger and configuration — no hidden state, so identical inputs always
/// yield identical scores.
pub struct EmphasisScorer {
    tagger: Arc<dyn WordTagger>,
    config: EmphasisConfig,
}

impl EmphasisScorer {
    pub fn new(tagger: Arc<dyn WordTagger>, config: EmphasisConfig) -> Self {
        Self { tagger, config }
    }

    pub fn config(&self) -> &EmphasisConfig {
        &self.config
    }

    /// Score one word against its predecessor in the original sequence.
    ///
    /// # Arguments
    /// * `word` - The word to score
    /// * `previous` - The immediately preceding word, if any
    /// * `stats` - Transcript-wide statistics, computed once per job
    ///
    /// # Returns
    /// A score `>= 0`; higher means more salient
    pub fn score(&self, word: &Word, previous: Option<&Word>, stats: &TranscriptStats) -> f64 {
        let token = word.cleaned();
        // Punctuation-only fragments from the transcriber carry no signal;
        // skip the tagger entirely.
        if token.is_empty() {
            return 0.0;
        }

        let mut score = self.category_weight(self.tagger.tag(token));

        if let Some(previous) = previous {
            let pause = word.start - previous.end;
            if pause > self.config.pause_threshold_secs {
                score += self.config.pause_bonus;
            }
        }

        if stats.average_word_duration > 0.0
            && word.duration() > self.config.long_word_ratio * stats.average_word_duration
        {
            score += self.config.duration_bonus;
        }

        score
    }

    fn category_weight(&self, category: WordCategory) -> f64 {
        match category {
            WordCategory::Noun => self.config.noun_weight,
            WordCategory::ProperNoun => self.config.proper_noun_weight,
            WordCategory::Verb => self.config.verb_weight,
            WordCategory::Adjective => self.config.adjective_weight,
            WordCategory::Adverb => self.config.adverb_weight,
            WordCategory::Unknown => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::MockTagger;

    fn scorer_with(tagger: MockTagger) -> EmphasisScorer {
        EmphasisScorer::new(Arc::new(tagger), EmphasisConfig::default())
    }

    #[test]
    fn unknown_word_scores_zero() {
        let scorer = scorer_with(MockTagger::new());
        let word = Word::new("hola", 0.0, 0.3);
        let stats = TranscriptStats::default();
        assert_eq!(scorer.score(&word, None, &stats), 0.0);
    }

    #[test]
    fn category_weight_per_default_table() {
        let scorer = scorer_with(
            MockTagger::new()
                .with_word("casa", WordCategory::Noun)
                .with_word("María", WordCategory::ProperNoun)
                .with_word("correr", WordCategory::Verb)
                .with_word("grande", WordCategory::Adjective)
                .with_word("rápidamente", WordCategory::Adverb),
        );
        let stats = TranscriptStats::default();
        let at = |text: &str| scorer.score(&Word::new(text, 0.0, 0.1), None, &stats);

        assert_eq!(at("casa"), 2.0);
        assert_eq!(at("María"), 2.5);
        assert_eq!(at("correr"), 1.5);
        assert_eq!(at("grande"), 1.5);
        assert_eq!(at("rápidamente"), 1.0);
    }

    #[test]
    fn empty_token_scores_zero_without_tagging() {
        // A tagger entry for the empty string must never be consulted
        let scorer = scorer_with(MockTagger::new().with_word("", WordCategory::ProperNoun));
        let word = Word::new("   ", 0.0, 5.0);
        let stats = TranscriptStats {
            average_word_duration: 0.1,
        };
        assert_eq!(scorer.score(&word, None, &stats), 0.0);
    }

    #[test]
    fn pause_bonus_requires_gap_above_threshold() {
        let scorer = scorer_with(MockTagger::new());
        let stats = TranscriptStats::default();
        let previous = Word::new("antes", 0.0, 1.0);

        // Exactly at the threshold: no bonus (strictly greater required)
        let at_threshold = Word::new("ahora", 1.6, 1.9);
        assert_eq!(scorer.score(&at_threshold, Some(&previous), &stats), 0.0);

        let past_threshold = Word::new("ahora", 1.7, 2.0);
        assert_eq!(scorer.score(&past_threshold, Some(&previous), &stats), 2.5);
    }

    #[test]
    fn no_pause_bonus_without_previous_word() {
        let scorer = scorer_with(MockTagger::new());
        let stats = TranscriptStats::default();
        // A first word "after" 10s of silence has no predecessor to measure from
        let word = Word::new("hola", 10.0, 10.3);
        assert_eq!(scorer.score(&word, None, &stats), 0.0);
    }

    #[test]
    fn duration_bonus_for_outlier_words() {
        let scorer = scorer_with(MockTagger::new());
        let stats = TranscriptStats {
            average_word_duration: 0.4,
        };
        // 0.71 > 1.75 * 0.4 = 0.7
        let long_word = Word::new("alargada", 0.0, 0.71);
        assert_eq!(scorer.score(&long_word, None, &stats), 2.0);

        let normal_word = Word::new("corta", 0.0, 0.4);
        assert_eq!(scorer.score(&normal_word, None, &stats), 0.0);
    }

    #[test]
    fn no_duration_bonus_when_average_is_zero() {
        let scorer = scorer_with(MockTagger::new());
        let stats = TranscriptStats::default();
        let word = Word::new("palabra", 0.0, 99.0);
        assert_eq!(scorer.score(&word, None, &stats), 0.0);
    }

    #[test]
    fn scoring_is_deterministic() {
        let scorer = scorer_with(MockTagger::new().with_word("casa", WordCategory::Noun));
        let word = Word::new("casa", 1.0, 1.5);
        let previous = Word::new("la", 0.0, 0.2);
        let stats = TranscriptStats {
            average_word_duration: 0.25,
        };

        let first = scorer.score(&word, Some(&previous), &stats);
        for _ in 0..10 {
            assert_eq!(scorer.score(&word, Some(&previous), &stats), first);
        }
    }

    // Scenario: "increíble" (0.6-1.4s) after "mundo" (ends 0.6s), average
    // word duration 0.37s. Adjective weight 1.5 plus duration bonus 2.0
    // (0.8 > 1.75 * 0.37), no pause bonus: total 3.5.
    #[test]
    fn adjacent_long_adjective_scores_three_and_a_half() {
        let scorer = scorer_with(MockTagger::new().with_word("increíble", WordCategory::Adjective));
        let stats = TranscriptStats {
            average_word_duration: 0.37,
        };
        let previous = Word::new("mundo", 0.3, 0.6);
        let word = Word::new("increíble", 0.6, 1.4);

        let score = scorer.score(&word, Some(&previous), &stats);
        assert!((score - 3.5).abs() < 1e-9);
    }

    // Same word preceded by a 0.7s gap: pause bonus 2.5 joins in, total 6.0.
    #[test]
    fn pause_pushes_long_adjective_to_six() {
        let scorer = scorer_with(MockTagger::new().with_word("increíble", WordCategory::Adjective));
        let stats = TranscriptStats {
            average_word_duration: 0.37,
        };
        let previous = Word::new("mundo", 0.3, 0.6);
        let word = Word::new("increíble", 1.3, 2.1);

        let score = scorer.score(&word, Some(&previous), &stats);
        assert!((score - 6.0).abs() < 1e-9);
    }
}
