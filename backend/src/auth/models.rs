//! Data structures for authentication-related entities.
//!
//! This module defines the registration and login request bodies, the
//! response bodies, and the JWT claims used throughout the authentication
//! flow. Request fields are optional so presence checks can report a
//! validation error instead of a deserialization failure.

use serde::{Deserialize, Serialize};

/// Body of `POST /register`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body of `POST /login`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub message: String,
}

/// JWT claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account id.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Returns the value when present and non-empty.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
