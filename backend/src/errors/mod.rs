//! Global application error types and handlers.
//!
//! This module defines the error types shared across the backend: the storage
//! error surfaced by both store implementations, and [`ApiError`], the single
//! type every handler returns on failure. `ApiError` owns the mapping to HTTP
//! status codes and the `{"error": ...}` response body, so internal causes are
//! logged here and never leak to clients.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Generic message for any failure the client cannot act on.
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Errors raised by the credential and document stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique index rejected the write.
    #[error("duplicate key for {0}")]
    DuplicateKey(String),

    #[error("store call timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("document serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    /// `public` is sent to the client, `detail` only to the log.
    #[error("{public}: {detail}")]
    Internal { public: &'static str, detail: String },
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError::BadRequest(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        ApiError::Unauthorized(msg.into())
    }

    pub fn internal(public: &'static str, detail: impl ToString) -> Self {
        ApiError::Internal {
            public,
            detail: detail.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::internal(INTERNAL_SERVER_ERROR, err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(msg) | ApiError::Unauthorized(msg) => msg,
            ApiError::Internal { public, detail } => {
                tracing::error!(error = %detail, "request failed");
                public.to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
