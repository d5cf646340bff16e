//! Middleware for protecting authenticated routes.
//!
//! This module contains the [`AuthUser`] extractor, which validates the bearer
//! token on a request and yields the account id it was issued for. Handlers
//! that take an `AuthUser` argument are reachable only with a valid,
//! unexpired token.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::errors::ApiError;
use crate::AppState;

pub const MISSING_BEARER: &str = "Missing bearer token";

/// Authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub account_id: String,
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
            .ok_or_else(|| ApiError::unauthorized(MISSING_BEARER))?;

        let claims = state.auth.authenticate(token).map_err(|err| {
            tracing::debug!(error = %err, "bearer token rejected");
            ApiError::unauthorized(err.public_message())
        })?;

        Ok(AuthUser {
            account_id: claims.sub,
        })
    }
}
