use serde::{Deserialize, Serialize};

/// One transcribed word with its timestamps in seconds.
///
/// Produced by a `Transcriber`; immutable once created. A transcript is a
/// sequence of words ordered by non-decreasing `start`, with
/// `end >= start` for each word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub start: f64,
    pub end: f64,
}

impl Word {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// The token with surrounding whitespace removed.
    ///
    /// Whisper emits words with a leading space; cleaning happens here once
    /// instead of at every consumer.
    pub fn cleaned(&self) -> &str {
        self.text.trim()
    }
}

/// Transcript-wide statistics, computed once per job.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TranscriptStats {
    /// Mean of `end - start` over all words; 0 for an empty transcript.
    pub average_word_duration: f64,
}

impl TranscriptStats {
    pub fn of(words: &[Word]) -> Self {
        if words.is_empty() {
            return Self::default();
        }
        let total: f64 = words.iter().map(Word::duration).sum();
        Self {
            average_word_duration: total / words.len() as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_duration() {
        let word = Word::new("hola", 0.5, 1.25);
        assert!((word.duration() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn cleaned_trims_whitespace() {
        let word = Word::new(" mundo ", 0.0, 0.3);
        assert_eq!(word.cleaned(), "mundo");
    }

    #[test]
    fn stats_of_empty_transcript_is_zero() {
        assert_eq!(TranscriptStats::of(&[]).average_word_duration, 0.0);
    }

    #[test]
    fn stats_averages_word_durations() {
        let words = vec![
            Word::new("Hola", 0.0, 0.3),
            Word::new("mundo", 0.3, 0.6),
            Word::new("increíble", 0.6, 1.4),
        ];
        let stats = TranscriptStats::of(&words);
        // (0.3 + 0.3 + 0.8) / 3
        assert!((stats.average_word_duration - 1.4 / 3.0).abs() < 1e-9);
    }
}
