//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for the API domains, the travel
//! records and user profiles, excluding the core authentication routes which
//! are handled by [`crate::auth`].

pub mod travel;
pub mod user;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::AppState;

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(travel::travel_router())
        .merge(user::user_router())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
