//! General-purpose middleware for the API.
//!
//! This module wraps the router with the layers every route shares: CORS open
//! to all origins (browser clients are served from other hosts), request
//! tracing, a request timeout and a body size limit. Error responses produced
//! by the layers themselves (413, 408) or by the router fallback are rewritten
//! into the same `{"error": ...}` shape the handlers return.

use std::time::Duration;

use axum::{
    http::{header, StatusCode},
    middleware::map_response,
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Request bodies above this size are rejected with 413.
pub const MAX_BODY_SIZE: usize = 64 * 1024;

pub fn apply(router: Router, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(map_response(json_error_body))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Replaces a non-JSON error body with `{"error": <reason phrase>}`.
async fn json_error_body(response: Response) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) || is_json(&response) {
        return response;
    }

    let message = status.canonical_reason().unwrap_or("Request failed");
    (status, Json(json!({ "error": message }))).into_response()
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}
