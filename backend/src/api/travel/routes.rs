//! Defines the HTTP routes for the travel record collections.
//!
//! Paths match the ones existing clients call, including the singular
//! `/budget`.

use axum::{routing::get, Router};

use super::handlers::{create, list};
use super::models::{NewBudget, NewChecklist, NewFeedback, NewPlan};
use crate::AppState;

pub fn travel_router() -> Router<AppState> {
    Router::new()
        .route(
            "/checklists",
            get(list::<NewChecklist>).post(create::<NewChecklist>),
        )
        .route("/budget", get(list::<NewBudget>).post(create::<NewBudget>))
        .route(
            "/feedbacks",
            get(list::<NewFeedback>).post(create::<NewFeedback>),
        )
        .route("/plans", get(list::<NewPlan>).post(create::<NewPlan>))
}
