//! Defines the HTTP routes specifically for authentication.
//!
//! These routes handle account registration and login. They are designed to be
//! merged into the main Axum router at the root path, matching the paths the
//! existing clients call.

use axum::{routing::post, Router};

use super::handlers::{login, register};
use crate::AppState;

pub fn auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}
