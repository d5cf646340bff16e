//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use clap::Parser;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use travel_backend::config::Config;
use travel_backend::database::{Database, MemoryStore};
use travel_backend::{app, AppState};

pub const SECRET: &str = "integration-test-secret-0123456789abcdef";

pub fn test_config() -> Config {
    Config::try_parse_from([
        "travel-backend",
        "--database-url",
        "memory",
        "--jwt-secret",
        SECRET,
        "--bcrypt-cost",
        "4",
    ])
    .unwrap()
}

pub fn memory_app() -> Router {
    let config = test_config();
    let state = AppState::new(Arc::new(MemoryStore::new()), &config, SECRET).unwrap();
    app(state, &config)
}

pub async fn sqlite_app() -> Router {
    let config = test_config();
    let db = Database::connect("sqlite::memory:", Duration::from_secs(5))
        .await
        .unwrap();
    let state = AppState::new(Arc::new(db), &config, SECRET).unwrap();
    app(state, &config)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    TestResponse { status, body }
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> TestResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_raw(app: &Router, uri: &str, body: &'static str) -> TestResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn get(app: &Router, uri: &str, bearer: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}
