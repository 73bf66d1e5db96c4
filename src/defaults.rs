//! Default configuration constants for subcue.
//!
//! This module provides shared constants used across different configuration
//! types to ensure consistency and eliminate duplication.

/// Default emphasis threshold.
///
/// A word whose score reaches this value is rendered as its own standalone
/// cue. Lower values (3.5) highlight more words; higher values (4.5-5.0)
/// reserve standalone cues for the most salient words.
pub const EMPHASIS_THRESHOLD: f64 = 4.0;

/// Default maximum number of words in a non-emphasized cue.
pub const MAX_WORDS_PER_GROUP: usize = 4;

/// Default pause threshold in seconds.
///
/// A gap longer than this between the previous word's end and the current
/// word's start earns the pause bonus.
pub const PAUSE_THRESHOLD_SECS: f64 = 0.6;

/// Default score weight for common nouns (e.g. "casa", "secreto").
pub const NOUN_WEIGHT: f64 = 2.0;

/// Default score weight for proper nouns (e.g. "Google", "María").
pub const PROPER_NOUN_WEIGHT: f64 = 2.5;

/// Default score weight for verbs (e.g. "correr", "es").
pub const VERB_WEIGHT: f64 = 1.5;

/// Default score weight for adjectives (e.g. "grande", "importante").
pub const ADJECTIVE_WEIGHT: f64 = 1.5;

/// Default score weight for adverbs (e.g. "rápidamente").
pub const ADVERB_WEIGHT: f64 = 1.0;

/// Default bonus added when a word follows a long pause.
pub const PAUSE_BONUS: f64 = 2.5;

/// Default bonus added when a word is a duration outlier.
pub const DURATION_BONUS: f64 = 2.0;

/// Default ratio over the transcript-wide average duration at which a word
/// counts as "long".
///
/// 1.75 means a word must last 75% longer than the average to earn the
/// duration bonus.
pub const LONG_WORD_RATIO: f64 = 1.75;

/// Default audio sample rate in Hz.
///
/// 16kHz is the standard for speech recognition; uploaded WAV audio at other
/// rates is resampled to this before inference.
pub const SAMPLE_RATE: u32 = 16000;

/// Default language code for transcription.
///
/// "auto" lets Whisper detect the spoken language automatically.
/// Set to a specific code (e.g., "en", "es") to force a language.
pub const DEFAULT_LANGUAGE: &str = "auto";

/// Language value that triggers automatic language detection.
pub const AUTO_LANGUAGE: &str = "auto";

/// Default HTTP listen address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default number of subtitle worker threads.
///
/// Each worker runs one transcription job at a time; two workers let a short
/// job overtake a long one without oversubscribing the CPU that Whisper
/// inference already saturates.
pub const WORKER_THREADS: usize = 2;

/// Default directory for uploaded media, relative to the working directory.
pub const UPLOAD_DIR: &str = "uploads";

/// Default directory for generated subtitle files, relative to the working
/// directory.
pub const RESULT_DIR: &str = "results";

/// File extension of generated subtitle files.
pub const RESULT_EXTENSION: &str = "srt";
