//! Defines the HTTP routes for user profile endpoints.

use axum::{routing::get, Router};

use super::handlers::me;
use crate::AppState;

pub fn user_router() -> Router<AppState> {
    Router::new().route("/me", get(me))
}
