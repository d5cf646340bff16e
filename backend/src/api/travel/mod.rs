//! Module for the travel record API.
//!
//! This module defines the create and list endpoints for checklists, budgets,
//! feedback and trip plans. Records are stored as documents in their own
//! collections and carry no relation to accounts.

pub mod handlers;
pub mod models;
pub mod routes;

pub use routes::travel_router;
