//! Custom error types specific to authentication failures.
//!
//! This module defines the errors that can occur while hashing passwords,
//! issuing or verifying tokens, and running the registration and login flows,
//! along with their mapping onto [`ApiError`] responses. Credential failures
//! share one message regardless of cause so responses never reveal whether an
//! email is registered.

use thiserror::Error;

use crate::errors::{ApiError, StoreError, INTERNAL_SERVER_ERROR};

pub const MISSING_FIELDS: &str = "All fields are required!";
pub const EMAIL_IN_USE: &str = "Email already in use!";
pub const INVALID_CREDENTIALS: &str = "Invalid email or password!";
pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("password hashing failed: {0}")]
    Hash(#[source] bcrypt::BcryptError),

    #[error("malformed password hash: {0}")]
    HashFormat(#[source] bcrypt::BcryptError),
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,

    #[error("invalid token: {0}")]
    Invalid(String),

    #[error("token signing failed: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

impl TokenError {
    /// Message sent to clients presenting a rejected bearer token.
    pub fn public_message(&self) -> &'static str {
        match self {
            TokenError::Expired => "Token expired",
            _ => "Invalid token",
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing required field")]
    Validation,

    #[error("email already in use")]
    DuplicateEmail,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Store(StoreError),

    #[error("blocking task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey(_) => AuthError::DuplicateEmail,
            other => AuthError::Store(other),
        }
    }
}

impl AuthError {
    /// Maps to an HTTP error, using `internal_message` for server faults.
    pub fn into_api_error(self, internal_message: &'static str) -> ApiError {
        match self {
            AuthError::Validation => ApiError::bad_request(MISSING_FIELDS),
            AuthError::DuplicateEmail => ApiError::bad_request(EMAIL_IN_USE),
            AuthError::InvalidCredentials => ApiError::bad_request(INVALID_CREDENTIALS),
            other => ApiError::internal(internal_message, other),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        err.into_api_error(INTERNAL_SERVER_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn duplicate_key_becomes_duplicate_email() {
        let err: AuthError = StoreError::DuplicateKey("email".into()).into();
        assert!(matches!(err, AuthError::DuplicateEmail));
    }

    #[test]
    fn client_errors_are_bad_requests() {
        for err in [
            AuthError::Validation,
            AuthError::DuplicateEmail,
            AuthError::InvalidCredentials,
        ] {
            assert_eq!(ApiError::from(err).status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn hash_format_is_internal() {
        let bcrypt_err = bcrypt::verify("x", "garbage").unwrap_err();
        let err = AuthError::from(PasswordError::HashFormat(bcrypt_err));
        let api = err.into_api_error(REGISTRATION_FAILED);
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(api, ApiError::Internal { public, .. } if public == REGISTRATION_FAILED));
    }

    #[test]
    fn expired_token_message() {
        assert_eq!(TokenError::Expired.public_message(), "Token expired");
        assert_eq!(TokenError::Invalid("bad".into()).public_message(), "Invalid token");
    }
}
