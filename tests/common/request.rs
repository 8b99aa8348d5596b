#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

async fn send(app: &Router, request: Request<Body>) -> (u16, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status().as_u16();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, body_bytes.to_vec())
}

fn parse_json(status: u16, path: &str, bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap_or_else(|e| {
        panic!(
            "Response is not valid JSON\nStatus: {status} | Path: {path}\nError: {e}\nBody: {}",
            String::from_utf8_lossy(bytes)
        )
    })
}

/// POST a JSON body and get back the status plus the JSON response.
pub async fn post_json(app: &Router, path: &str, body: Value) -> (u16, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    let (status, bytes) = send(app, request).await;
    (status, parse_json(status, path, &bytes))
}

/// POST an arbitrary body labeled as JSON (for malformed payloads).
pub async fn post_raw_json(app: &Router, path: &str, body: &str) -> (u16, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let (status, bytes) = send(app, request).await;
    (status, parse_json(status, path, &bytes))
}

/// GET and parse the body as JSON.
pub async fn get_json(app: &Router, path: &str) -> (u16, Value) {
    let (status, body) = get_raw(app, path).await;
    (status, parse_json(status, path, body.as_bytes()))
}

/// GET returning the raw string body (metrics text).
pub async fn get_raw(app: &Router, path: &str) -> (u16, String) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();

    let (status, bytes) = send(app, request).await;
    (status, String::from_utf8_lossy(&bytes).to_string())
}
