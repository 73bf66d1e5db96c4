//! Router-level API contract tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use std::sync::Arc;
use std::time::Duration;
use subcue::config::Config;
use subcue::server::{self, AppState};
use subcue::{MockTagger, MockTranscriber, Word};
use tower::ServiceExt;

const BOUNDARY: &str = "subcue-test-boundary";

fn app(transcriber: MockTranscriber) -> (tempfile::TempDir, Router) {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut config = Config::default();
    config.storage.upload_dir = dir.path().join("uploads");
    config.storage.result_dir = dir.path().join("results");
    config.server.workers = 1;

    let state = AppState::new(&config, Arc::new(transcriber), Arc::new(MockTagger::new()))
        .expect("app state");
    (dir, server::router(state))
}

fn multipart_upload(file_name: &str, content: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"media\"; \
             filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("request")
}

fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("JSON body")
}

#[tokio::test]
async fn upload_process_status_download_happy_path() {
    let transcriber = MockTranscriber::new().with_words(vec![
        Word::new("Hola", 0.0, 0.3),
        Word::new("mundo", 0.3, 0.6),
    ]);
    let (_dir, app) = app(transcriber);

    // Upload
    let response = app
        .clone()
        .oneshot(multipart_upload("clip.wav", b"fake media"))
        .await
        .expect("upload");
    assert_eq!(response.status(), StatusCode::CREATED);
    let upload = response_json(response).await;
    let stored_name = upload["stored_name"].as_str().expect("stored_name");
    assert!(stored_name.ends_with(".wav"));

    // Process
    let response = app
        .clone()
        .oneshot(json_request(
            "/process",
            serde_json::json!({ "stored_name": stored_name }),
        ))
        .await
        .expect("process");
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let process = response_json(response).await;
    let task_id = process["task_id"].as_str().expect("task_id").to_string();
    assert_eq!(
        process["status_url"].as_str(),
        Some(format!("/status/{}", task_id).as_str())
    );

    // Poll status until terminal
    let mut status = serde_json::Value::Null;
    for _ in 0..200 {
        let response = app
            .clone()
            .oneshot(get_request(&format!("/status/{}", task_id)))
            .await
            .expect("status");
        assert_eq!(response.status(), StatusCode::OK);
        status = response_json(response).await;
        match status["status"].as_str() {
            Some("completed") | Some("failed") => break,
            _ => tokio::time::sleep(Duration::from_millis(10)).await,
        }
    }
    assert_eq!(status["status"], "completed");
    let download_url = status["download_url"].as_str().expect("download_url");

    // Download
    let response = app
        .clone()
        .oneshot(get_request(download_url))
        .await
        .expect("download");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/x-subrip"
    );
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let srt = String::from_utf8(bytes.to_vec()).expect("UTF-8 SRT");
    assert!(srt.contains("Hola mundo"));
    assert!(srt.contains("-->"));
}

#[tokio::test]
async fn failed_job_surfaces_error_in_status() {
    let (_dir, app) = app(MockTranscriber::new().with_failure());

    let response = app
        .clone()
        .oneshot(multipart_upload("clip.wav", b"fake media"))
        .await
        .expect("upload");
    let stored_name = response_json(response).await["stored_name"]
        .as_str()
        .expect("stored_name")
        .to_string();

    let response = app
        .clone()
        .oneshot(json_request(
            "/process",
            serde_json::json!({ "stored_name": stored_name }),
        ))
        .await
        .expect("process");
    let task_id = response_json(response).await["task_id"]
        .as_str()
        .expect("task_id")
        .to_string();

    let mut status = serde_json::Value::Null;
    for _ in 0..200 {
        let response = app
            .clone()
            .oneshot(get_request(&format!("/status/{}", task_id)))
            .await
            .expect("status");
        status = response_json(response).await;
        match status["status"].as_str() {
            Some("completed") | Some("failed") => break,
            _ => tokio::time::sleep(Duration::from_millis(10)).await,
        }
    }
    assert_eq!(status["status"], "failed");
    assert!(
        status["error"]
            .as_str()
            .is_some_and(|e| !e.is_empty())
    );
    assert!(status.get("download_url").is_none());
}

#[tokio::test]
async fn upload_without_file_is_bad_request() {
    let (_dir, app) = app(MockTranscriber::new());

    let body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhello\r\n--{BOUNDARY}--\r\n"
    );
    let request = Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("request");

    let response = app.oneshot(request).await.expect("upload");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response_json(response).await["error"].is_string());
}

#[tokio::test]
async fn upload_with_empty_payload_is_bad_request() {
    let (_dir, app) = app(MockTranscriber::new());

    let response = app
        .oneshot(multipart_upload("clip.wav", b""))
        .await
        .expect("upload");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn process_unknown_upload_is_not_found() {
    let (_dir, app) = app(MockTranscriber::new());

    let response = app
        .oneshot(json_request(
            "/process",
            serde_json::json!({ "stored_name": "missing.wav" }),
        ))
        .await
        .expect("process");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn process_traversal_name_is_bad_request() {
    let (_dir, app) = app(MockTranscriber::new());

    let response = app
        .oneshot(json_request(
            "/process",
            serde_json::json!({ "stored_name": "..\\..\\etc" }),
        ))
        .await
        .expect("process");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn status_of_unknown_task_is_not_found() {
    let (_dir, app) = app(MockTranscriber::new());

    for id in ["not-a-uuid", "00000000-0000-4000-8000-000000000000"] {
        let response = app
            .clone()
            .oneshot(get_request(&format!("/status/{}", id)))
            .await
            .expect("status");
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "id {:?}", id);
    }
}

#[tokio::test]
async fn download_of_unknown_result_is_not_found() {
    let (_dir, app) = app(MockTranscriber::new());

    let response = app
        .oneshot(get_request("/download/missing.srt"))
        .await
        .expect("download");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
