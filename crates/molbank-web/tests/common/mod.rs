//! Helpers shared by the HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use molbank_db::{Database, SqliteMoleculeRepository};
use molbank_web::{build_router, AppState};

pub const BOUNDARY: &str = "molbank-test-boundary";

/// A router over a fresh in-memory database.
pub async fn test_app() -> Router {
    test_app_with_limit(molbank_web::state::DEFAULT_MAX_UPLOAD_BYTES).await
}

pub async fn test_app_with_limit(max_upload_bytes: usize) -> Router {
    let db = Database::in_memory().await.expect("in-memory database");
    db.initialize().await.expect("schema");
    let repo = Arc::new(SqliteMoleculeRepository::new(db.pool().clone()));
    let state = AppState::new(repo, "test-server").with_max_upload_bytes(max_upload_bytes);
    build_router(state)
}

/// Send one request and decode the JSON reply.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("infallible router");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON response")
    };
    (status, body)
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// `POST /upload` carrying `contents` as the `file` part.
pub fn upload_request(filename: &str, content_type: &str, contents: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub fn json_upload(structures: &[&str]) -> Request<Body> {
    let items: Vec<Value> = structures
        .iter()
        .map(|s| serde_json::json!({ "structure": s }))
        .collect();
    upload_request("molecules.json", "application/json", Value::Array(items).to_string().as_bytes())
}

pub async fn add(app: &Router, structure: &str) -> i64 {
    let (status, body) = send(
        app,
        json_request(Method::POST, "/add", serde_json::json!({ "structure": structure })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "adding {structure}: {body}");
    body["id"].as_i64().expect("id")
}

pub fn detail(body: &Value) -> &str {
    body["detail"].as_str().expect("detail")
}
