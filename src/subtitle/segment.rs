//! Dynamic segmentation: words → subtitle cues.
//!
//! Walks the transcript once with a word buffer. Ordinary words accumulate
//! until the group limit; a word whose emphasis score crosses the threshold
//! closes the current group and stands alone as its own cue.

use crate::config::SegmenterConfig;
use crate::subtitle::score::EmphasisScorer;
use crate::subtitle::srt::Cue;
use crate::subtitle::word::{TranscriptStats, Word};
use tracing::debug;

/// Groups a transcript into ordered subtitle cues.
pub struct Segmenter {
    scorer: EmphasisScorer,
    config: SegmenterConfig,
}

impl Segmenter {
    pub fn new(scorer: EmphasisScorer, config: SegmenterConfig) -> Self {
        Self { scorer, config }
    }

    /// Convert a word sequence into cues.
    ///
    /// # Arguments
    /// * `words` - The complete transcript, ordered by start time
    /// * `stats` - Transcript-wide statistics, computed once per job
    ///
    /// # Returns
    /// Cues with contiguous 1-based indices and non-decreasing start times.
    /// Every word with a non-empty cleaned token lands in exactly one cue;
    /// whitespace-only fragments are dropped rather than emitted as empty
    /// cues. Empty input yields an empty sequence — signalling that as a
    /// failure is the caller's job.
    pub fn segment(&self, words: &[Word], stats: &TranscriptStats) -> Vec<Cue> {
        let mut cues: Vec<Cue> = Vec::new();
        let mut buffer: Vec<&Word> = Vec::new();

        for (i, word) in words.iter().enumerate() {
            // The predecessor comes from the original sequence, not the
            // buffer: a flush must not erase pause information.
            let previous = if i > 0 { Some(&words[i - 1]) } else { None };
            let score = self.scorer.score(word, previous, stats);

            if score >= self.config.emphasis_threshold {
                debug!(word = word.cleaned(), score, "emphasis detected");
                flush(&mut cues, &mut buffer);
                let mut standalone = vec![word];
                flush(&mut cues, &mut standalone);
                continue;
            }

            buffer.push(word);
            if buffer.len() >= self.config.max_words_per_group {
                flush(&mut cues, &mut buffer);
            }
        }

        flush(&mut cues, &mut buffer);
        cues
    }
}

/// Drain the buffer into one cue; a no-op for an empty buffer.
fn flush(cues: &mut Vec<Cue>, buffer: &mut Vec<&Word>) {
    let (Some(first), Some(last)) = (buffer.first(), buffer.last()) else {
        return;
    };

    let tokens: Vec<&str> = buffer
        .iter()
        .map(|w| w.cleaned())
        .filter(|t| !t.is_empty())
        .collect();
    // A group of only whitespace fragments has no renderable text; an empty
    // cue would not survive an SRT round-trip, so emit nothing.
    if tokens.is_empty() {
        buffer.clear();
        return;
    }

    cues.push(Cue::from_seconds(
        cues.len() as u32 + 1,
        first.start,
        last.end,
        tokens.join(" "),
    ));
    buffer.clear();
}
