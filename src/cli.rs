//! Command-line interface for subcue
//!
//! Provides argument parsing using clap derive macros.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Emphasis-aware subtitle generation service
#[derive(Parser, Debug)]
#[command(name = "subcue", version, about = "Emphasis-aware subtitle generation service")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (-v: debug, -vv: trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the subtitle API server
    Serve {
        /// Listen address (default: 0.0.0.0)
        #[arg(long, value_name = "HOST")]
        host: Option<String>,

        /// Listen port (default: 5000)
        #[arg(long, short, value_name = "PORT")]
        port: Option<u16>,

        /// Number of subtitle worker threads
        #[arg(long, value_name = "COUNT")]
        workers: Option<usize>,
    },

    /// Generate subtitles for one media file and exit
    Generate {
        /// Input media file (16-bit PCM WAV)
        input: PathBuf,

        /// Output SRT path (default: input with .srt extension)
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Whisper model file override
        #[arg(long, value_name = "PATH")]
        model: Option<PathBuf>,

        /// Language code override (default: auto-detect). Examples: auto, en, es
        #[arg(long, value_name = "LANG")]
        language: Option<String>,
    },
}
