use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use subcue::cli::{Cli, Commands};
use subcue::config::Config;
use subcue::server::{self, AppState};
use subcue::stt::whisper::{WhisperConfig, WhisperTranscriber};
use subcue::subtitle::generator::SubtitleGenerator;
use subcue::subtitle::score::EmphasisScorer;
use subcue::subtitle::segment::Segmenter;
use subcue::tag::LexiconTagger;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve {
            host,
            port,
            workers,
        } => {
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(workers) = workers {
                config.server.workers = workers;
            }
            run_serve(config).await
        }
        Commands::Generate {
            input,
            output,
            model,
            language,
        } => {
            let mut config = config;
            if let Some(model) = model {
                config.stt.model_path = model;
            }
            if let Some(language) = language {
                config.stt.language = language;
            }
            run_generate(config, input, output)
        }
    }
}

fn init_tracing(quiet: bool, verbosity: u8) {
    let default_level = if quiet {
        "error"
    } else {
        match verbosity {
            0 => "subcue=info,tower_http=warn",
            1 => "subcue=debug,tower_http=debug",
            _ => "trace",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => match Config::default_path() {
            Some(path) => Config::load_or_default(&path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => Config::default(),
        },
    };
    Ok(config.with_env_overrides())
}

fn build_transcriber(config: &Config) -> Result<Arc<WhisperTranscriber>> {
    let transcriber = WhisperTranscriber::new(WhisperConfig {
        model_path: config.stt.model_path.clone(),
        language: config.stt.language.clone(),
        threads: None,
    })
    .context("failed to initialize the Whisper transcriber")?;
    Ok(Arc::new(transcriber))
}

async fn run_serve(config: Config) -> Result<()> {
    let transcriber = build_transcriber(&config)?;
    let tagger = Arc::new(LexiconTagger::new());

    let state = AppState::new(&config, transcriber, tagger)?;
    let runner = Arc::clone(&state.runner);
    server::run(&config, state).await?;

    // Handlers are gone once serve returns; drain in-flight jobs before exit.
    if let Ok(runner) = Arc::try_unwrap(runner) {
        runner.shutdown();
    }
    Ok(())
}

fn run_generate(config: Config, input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let output = output.unwrap_or_else(|| input.with_extension("srt"));

    let transcriber = build_transcriber(&config)?;
    let scorer = EmphasisScorer::new(Arc::new(LexiconTagger::new()), config.emphasis.clone());
    let generator = SubtitleGenerator::new(
        transcriber,
        Segmenter::new(scorer, config.segmenter.clone()),
    );

    let cues = generator
        .generate(&input, &output)
        .with_context(|| format!("failed to generate subtitles for {}", input.display()))?;

    println!("Wrote {} cues to {}", cues.len(), output.display());
    Ok(())
}
