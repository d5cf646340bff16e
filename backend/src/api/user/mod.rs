//! Module for user profile API endpoints.
//!
//! This module handles functionality related to account information that is
//! distinct from the core authentication process, such as returning the
//! profile behind a bearer token.

pub mod handlers;
pub mod routes;

pub use routes::user_router;
