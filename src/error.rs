//! Error types for subcue.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubcueError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Transcription errors
    #[error("Transcription model not found at {path}")]
    ModelNotFound { path: String },

    #[error("Unsupported media format: {message}")]
    MediaFormat { message: String },

    #[error("Transcription failed: {message}")]
    Transcription { message: String },

    #[error("Transcription of {path} produced no words")]
    EmptyTranscript { path: String },

    // Subtitle serialization errors
    #[error("Malformed SRT at line {line}: {message}")]
    SrtParse { line: usize, message: String },

    // Task lifecycle errors
    #[error("Task not found: {id}")]
    TaskNotFound { id: String },

    #[error("Task {id} cannot move from {from} to {to}")]
    InvalidTransition { id: String, from: String, to: String },

    #[error("Job queue is closed")]
    QueueClosed,

    // Storage errors
    #[error("Invalid file name: {name:?}")]
    InvalidFileName { name: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, SubcueError>;
