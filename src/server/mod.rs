//! HTTP API: upload, process, status, download.

pub mod handlers;
pub mod storage;

use crate::config::Config;
use crate::error::Result;
use crate::stt::Transcriber;
use crate::subtitle::generator::SubtitleGenerator;
use crate::subtitle::score::EmphasisScorer;
use crate::subtitle::segment::Segmenter;
use crate::tag::WordTagger;
use crate::task::registry::TaskRegistry;
use crate::task::runner::JobRunner;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use storage::MediaStore;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<TaskRegistry>,
    pub runner: Arc<JobRunner>,
    pub store: Arc<MediaStore>,
}

impl AppState {
    /// Wire up registry, store, and worker pool from configuration and the
    /// two external collaborators.
    pub fn new(
        config: &Config,
        transcriber: Arc<dyn Transcriber>,
        tagger: Arc<dyn WordTagger>,
    ) -> Result<Self> {
        let store = Arc::new(MediaStore::new(
            config.storage.upload_dir.clone(),
            config.storage.result_dir.clone(),
        )?);
        let registry = Arc::new(TaskRegistry::new());

        let scorer = EmphasisScorer::new(tagger, config.emphasis.clone());
        let generator = Arc::new(SubtitleGenerator::new(
            transcriber,
            Segmenter::new(scorer, config.segmenter.clone()),
        ));
        let runner = Arc::new(JobRunner::new(
            Arc::clone(&registry),
            generator,
            config.server.workers,
        ));

        Ok(Self {
            registry,
            runner,
            store,
        })
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/upload", post(handlers::upload))
        .route("/process", post(handlers::process))
        .route("/status/:task_id", get(handlers::status))
        .route("/download/:result_name", get(handlers::download))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the API until ctrl-c.
pub async fn run(config: &Config, state: AppState) -> Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, workers = config.server.workers, "listening");

    let app = router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;
    Ok(())
}
