//! Request handlers for the subtitle API.
//!
//! Synchronous failures (bad input, unknown names) surface directly as
//! HTTP errors; failures during background processing only ever surface
//! through the task's `failed` status.

use crate::error::SubcueError;
use crate::server::AppState;
use crate::server::storage::MediaStore;
use crate::task::registry::{Task, TaskStatus};
use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// API failure taxonomy, mapped onto HTTP status codes.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or missing request input (400)
    Input(String),
    /// Unknown task, upload, or result reference (404)
    NotFound(String),
    /// Unexpected synchronous failure (500)
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Input(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<SubcueError> for ApiError {
    fn from(error: SubcueError) -> Self {
        match error {
            SubcueError::InvalidFileName { .. } => ApiError::Input(error.to_string()),
            SubcueError::TaskNotFound { .. } => ApiError::NotFound(error.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    pub stored_name: String,
}

#[derive(Deserialize)]
pub struct ProcessRequest {
    pub stored_name: String,
}

#[derive(Serialize)]
pub struct ProcessResponse {
    pub message: &'static str,
    pub task_id: Uuid,
    pub status_url: String,
}

#[derive(Serialize)]
pub struct StatusResponse {
    #[serde(flatten)]
    pub task: Task,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

/// POST /upload — persist a media payload under a fresh unique name.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Input(format!("malformed multipart body: {}", e)))?
    {
        let Some(file_name) = field.file_name().map(str::to_owned) else {
            continue;
        };
        if file_name.is_empty() {
            return Err(ApiError::Input("no file selected".to_string()));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::Input(format!("failed to read upload: {}", e)))?;
        if bytes.is_empty() {
            return Err(ApiError::Input("uploaded file is empty".to_string()));
        }

        let stored_name = state.store.store_upload(&file_name, &bytes)?;
        info!(original = %file_name, stored = %stored_name, size = bytes.len(), "upload stored");

        return Ok((
            StatusCode::CREATED,
            Json(UploadResponse {
                message: "upload stored",
                stored_name,
            }),
        ));
    }

    Err(ApiError::Input("no media file in request".to_string()))
}

/// POST /process — create a task for a stored upload and schedule it.
pub async fn process(
    State(state): State<AppState>,
    Json(request): Json<ProcessRequest>,
) -> Result<(StatusCode, Json<ProcessResponse>), ApiError> {
    let media_path = state
        .store
        .upload_path(&request.stored_name)?
        .ok_or_else(|| {
            ApiError::NotFound(format!("no uploaded file named {}", request.stored_name))
        })?;

    let result_name = MediaStore::result_name_for(&request.stored_name);
    let result_path = state.store.result_path(&result_name)?;

    let task_id = state.registry.create(&request.stored_name);
    state.runner.submit(task_id, media_path, result_path)?;
    info!(task = %task_id, source = %request.stored_name, "processing scheduled");

    Ok((
        StatusCode::ACCEPTED,
        Json(ProcessResponse {
            message: "processing started",
            task_id,
            status_url: format!("/status/{}", task_id),
        }),
    ))
}

/// GET /status/{task_id} — snapshot of one task.
pub async fn status(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    let id: Uuid = task_id
        .parse()
        .map_err(|_| ApiError::NotFound(format!("no task with id {}", task_id)))?;
    let task = state
        .registry
        .get(id)
        .ok_or_else(|| ApiError::NotFound(format!("no task with id {}", task_id)))?;

    let download_url = (task.status == TaskStatus::Completed)
        .then(|| task.result_name.as_deref().map(|n| format!("/download/{}", n)))
        .flatten();

    Ok(Json(StatusResponse { task, download_url }))
}

/// GET /download/{result_name} — fetch a generated subtitle file.
pub async fn download(
    State(state): State<AppState>,
    Path(result_name): Path<String>,
) -> Result<Response, ApiError> {
    let path = state
        .store
        .existing_result(&result_name)?
        .ok_or_else(|| ApiError::NotFound(format!("no result named {}", result_name)))?;

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| ApiError::Internal(format!("failed to read result: {}", e)))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/x-subrip".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", result_name),
            ),
        ],
        bytes,
    )
        .into_response())
}
