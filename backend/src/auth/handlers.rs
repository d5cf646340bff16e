//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming HTTP requests for registration and login,
//! turn unparseable bodies into the same 400 responses the presence checks
//! produce, and delegate to [`AuthService`](super::service::AuthService) for
//! the core logic.

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};

use super::errors::{AuthError, REGISTRATION_FAILED};
use super::models::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
use crate::errors::ApiError;
use crate::AppState;

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(request) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected registration body");
        AuthError::Validation.into_api_error(REGISTRATION_FAILED)
    })?;

    state
        .auth
        .register(request)
        .await
        .map_err(|err| err.into_api_error(REGISTRATION_FAILED))?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully!")),
    ))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected login body");
            LoginRequest::default()
        }
    };

    let token = state.auth.login(request).await?;

    Ok(Json(LoginResponse {
        token,
        message: "Login successful!".to_string(),
    }))
}
