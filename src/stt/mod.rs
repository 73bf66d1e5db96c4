//! Speech-to-text: the transcriber seam and its implementations.

pub mod audio;
pub mod transcriber;
pub mod whisper;

pub use transcriber::{MockTranscriber, Transcriber};
pub use whisper::{WhisperConfig, WhisperTranscriber};
