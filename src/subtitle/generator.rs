//! End-to-end subtitle generation for one media file.

use crate::error::{Result, SubcueError};
use crate::stt::Transcriber;
use crate::subtitle::segment::Segmenter;
use crate::subtitle::srt::{self, Cue};
use crate::subtitle::word::TranscriptStats;
use std::io::Write as _;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Orchestrates transcription, segmentation, and SRT serialization.
pub struct SubtitleGenerator {
    transcriber: Arc<dyn Transcriber>,
    segmenter: Segmenter,
}

impl SubtitleGenerator {
    pub fn new(transcriber: Arc<dyn Transcriber>, segmenter: Segmenter) -> Self {
        Self {
            transcriber,
            segmenter,
        }
    }

    /// Generate an SRT file for `media_path` at `output_path`.
    ///
    /// # Returns
    /// The cue sequence that was written.
    ///
    /// # Errors
    /// Returns the transcriber's error unchanged, `EmptyTranscript` when the
    /// media yields zero words (the segmenter is never invoked), or an I/O
    /// error from writing the result. The output file either appears
    /// complete or not at all: the SRT text is composed in memory and
    /// persisted via a temp file in the destination directory.
    pub fn generate(&self, media_path: &Path, output_path: &Path) -> Result<Vec<Cue>> {
        let words = self.transcriber.transcribe(media_path)?;
        if words.is_empty() {
            return Err(SubcueError::EmptyTranscript {
                path: media_path.display().to_string(),
            });
        }

        let stats = TranscriptStats::of(&words);
        let cues = self.segmenter.segment(&words, &stats);
        let srt_text = srt::compose(&cues);

        let dir = output_path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(srt_text.as_bytes())?;
        tmp.persist(output_path)
            .map_err(|e| SubcueError::Io(e.error))?;

        info!(
            media = %media_path.display(),
            output = %output_path.display(),
            cues = cues.len(),
            "subtitles written"
        );
        Ok(cues)
    }
}
