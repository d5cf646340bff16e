//! Authentication module for managing user accounts and access tokens.
//!
//! This module provides the public interface for user authentication-related
//! functionality: registration, login, password hashing, token issuance and
//! verification, and the bearer-token extractor for protected routes.

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod routes;
pub mod service;
pub mod token;

// Re-exports for convenience
pub use errors::{AuthError, PasswordError, TokenError};
pub use middleware::AuthUser;
pub use models::{Claims, LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
pub use password::PasswordHasher;
pub use routes::auth_router;
pub use service::AuthService;
pub use token::TokenIssuer;
