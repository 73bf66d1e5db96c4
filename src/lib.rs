//! subcue - Emphasis-aware subtitle generation service
//!
//! Transcribes media into time-stamped words, scores each word for
//! linguistic and prosodic salience, groups words into SRT cues, and runs
//! the whole flow as asynchronous jobs behind an HTTP API.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod cli;
pub mod config;
pub mod defaults;
pub mod error;
pub mod server;
pub mod stt;
pub mod subtitle;
pub mod tag;
pub mod task;

// Core traits (collaborator seams)
pub use stt::transcriber::{MockTranscriber, Transcriber};
pub use tag::{LexiconTagger, MockTagger, WordCategory, WordTagger};

// Subtitle pipeline
pub use subtitle::generator::SubtitleGenerator;
pub use subtitle::score::EmphasisScorer;
pub use subtitle::segment::Segmenter;
pub use subtitle::srt::Cue;
pub use subtitle::word::{TranscriptStats, Word};

// Task lifecycle
pub use task::registry::{Task, TaskId, TaskRegistry, TaskStatus};
pub use task::runner::JobRunner;

// Server
pub use server::AppState;

// Error handling
pub use error::{Result, SubcueError};

// Config
pub use config::Config;

/// Build version string with optional git commit hash.
///
/// Returns `"0.2.0+abc1234"` when git hash is available, `"0.2.0"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}
