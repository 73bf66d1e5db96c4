use crate::defaults;
use crate::error::{Result, SubcueError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub emphasis: EmphasisConfig,
    pub segmenter: SegmenterConfig,
    pub stt: SttConfig,
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

/// Emphasis scoring configuration.
///
/// The weight table and bonuses are deliberately configuration, not code:
/// speakers who pause a lot may want a lower `pause_bonus`, captions for
/// fast cuts may want heavier category weights.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EmphasisConfig {
    pub noun_weight: f64,
    pub proper_noun_weight: f64,
    pub verb_weight: f64,
    pub adjective_weight: f64,
    pub adverb_weight: f64,
    /// Gap in seconds after which a word earns the pause bonus
    pub pause_threshold_secs: f64,
    pub pause_bonus: f64,
    /// Ratio over the transcript average at which a word counts as long
    pub long_word_ratio: f64,
    pub duration_bonus: f64,
}

/// Cue grouping configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Score at which a word becomes its own standalone cue
    pub emphasis_threshold: f64,
    /// Maximum words per non-emphasized cue
    pub max_words_per_group: usize,
}

/// Speech-to-text configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SttConfig {
    /// Path to the Whisper model file
    pub model_path: PathBuf,
    /// Language code, or "auto" for detection
    pub language: String,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Number of subtitle worker threads
    pub workers: usize,
}

/// Upload/result storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    pub upload_dir: PathBuf,
    pub result_dir: PathBuf,
}

impl Default for EmphasisConfig {
    fn default() -> Self {
        Self {
            noun_weight: defaults::NOUN_WEIGHT,
            proper_noun_weight: defaults::PROPER_NOUN_WEIGHT,
            verb_weight: defaults::VERB_WEIGHT,
            adjective_weight: defaults::ADJECTIVE_WEIGHT,
            adverb_weight: defaults::ADVERB_WEIGHT,
            pause_threshold_secs: defaults::PAUSE_THRESHOLD_SECS,
            pause_bonus: defaults::PAUSE_BONUS,
            long_word_ratio: defaults::LONG_WORD_RATIO,
            duration_bonus: defaults::DURATION_BONUS,
        }
    }
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            emphasis_threshold: defaults::EMPHASIS_THRESHOLD,
            max_words_per_group: defaults::MAX_WORDS_PER_GROUP,
        }
    }
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("models/ggml-base.bin"),
            language: defaults::DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_HOST.to_string(),
            port: defaults::DEFAULT_PORT,
            workers: defaults::WORKER_THREADS,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from(defaults::UPLOAD_DIR),
            result_dir: PathBuf::from(defaults::RESULT_DIR),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file is missing or contains invalid TOML.
    /// Missing fields use default values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SubcueError::ConfigFileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                SubcueError::Io(e)
            }
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if the file is
    /// missing
    ///
    /// Invalid TOML is still an error — only absence falls back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(SubcueError::ConfigFileNotFound { .. }) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - SUBCUE_MODEL_PATH → stt.model_path
    /// - SUBCUE_LANGUAGE → stt.language
    /// - SUBCUE_UPLOAD_DIR → storage.upload_dir
    /// - SUBCUE_RESULT_DIR → storage.result_dir
    /// - SUBCUE_PORT → server.port
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(path) = std::env::var("SUBCUE_MODEL_PATH")
            && !path.is_empty()
        {
            self.stt.model_path = PathBuf::from(path);
        }

        if let Ok(language) = std::env::var("SUBCUE_LANGUAGE")
            && !language.is_empty()
        {
            self.stt.language = language;
        }

        if let Ok(dir) = std::env::var("SUBCUE_UPLOAD_DIR")
            && !dir.is_empty()
        {
            self.storage.upload_dir = PathBuf::from(dir);
        }

        if let Ok(dir) = std::env::var("SUBCUE_RESULT_DIR")
            && !dir.is_empty()
        {
            self.storage.result_dir = PathBuf::from(dir);
        }

        if let Ok(port) = std::env::var("SUBCUE_PORT")
            && let Ok(port) = port.parse::<u16>()
        {
            self.server.port = port;
        }

        self
    }

    /// Reject values the pipeline cannot work with.
    fn validate(&self) -> Result<()> {
        if self.segmenter.max_words_per_group == 0 {
            return Err(SubcueError::ConfigInvalidValue {
                key: "segmenter.max_words_per_group".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.server.workers == 0 {
            return Err(SubcueError::ConfigInvalidValue {
                key: "server.workers".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.emphasis.long_word_ratio <= 0.0 {
            return Err(SubcueError::ConfigInvalidValue {
                key: "emphasis.long_word_ratio".to_string(),
                message: "must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/subcue/config.toml on Linux
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("subcue").join("config.toml"))
    }
}
