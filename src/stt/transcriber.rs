use crate::error::{Result, SubcueError};
use crate::subtitle::word::Word;
use std::path::Path;
use std::sync::Arc;

/// Trait for speech-to-text transcription.
///
/// This trait allows swapping implementations (real Whisper vs mock).
pub trait Transcriber: Send + Sync {
    /// Transcribe a media file into time-stamped words.
    ///
    /// # Arguments
    /// * `media_path` - Path to the media file to transcribe
    ///
    /// # Returns
    /// Words ordered by non-decreasing start time. An empty vector means
    /// the media contained no recognizable speech; deciding whether that is
    /// an error is the caller's job.
    fn transcribe(&self, media_path: &Path) -> Result<Vec<Word>>;

    /// Get the name of the loaded model
    fn model_name(&self) -> &str;

    /// Check if the transcriber is ready
    fn is_ready(&self) -> bool;
}

/// Implement Transcriber for Arc<T> to allow sharing across workers.
impl<T: Transcriber + ?Sized> Transcriber for Arc<T> {
    fn transcribe(&self, media_path: &Path) -> Result<Vec<Word>> {
        (**self).transcribe(media_path)
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }
}

/// Mock transcriber for testing
#[derive(Debug, Clone, Default)]
pub struct MockTranscriber {
    words: Vec<Word>,
    should_fail: bool,
}

impl MockTranscriber {
    /// Create a mock that returns an empty word sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the mock to return specific words
    pub fn with_words(mut self, words: Vec<Word>) -> Self {
        self.words = words;
        self
    }

    /// Configure the mock to fail on transcribe
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

impl Transcriber for MockTranscriber {
    fn transcribe(&self, _media_path: &Path) -> Result<Vec<Word>> {
        if self.should_fail {
            Err(SubcueError::Transcription {
                message: "mock transcription failure".to_string(),
            })
        } else {
            Ok(self.words.clone())
        }
    }

    fn model_name(&self) -> &str {
        "mock"
    }

    fn is_ready(&self) -> bool {
        !self.should_fail
    }
}
