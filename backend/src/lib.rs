//! Travel planner backend.
//!
//! Account registration and login with bcrypt-hashed passwords and HS256
//! bearer tokens, plus create/list storage for checklists, budgets, feedback
//! and trip plans. [`AppState`] bundles the injected components and [`app`]
//! assembles the full router; `main` only parses configuration, connects the
//! store and serves.

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::auth::{AuthService, PasswordError, PasswordHasher, TokenIssuer};
use crate::config::{Config, ConfigError};
use crate::database::{CredentialStore, DocumentStore};

/// Failures while assembling [`AppState`].
#[derive(Debug, Error)]
pub enum StateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Password(#[from] PasswordError),
}

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub documents: Arc<dyn DocumentStore>,
}

impl AppState {
    /// Wires the auth service and record handlers onto one store.
    pub fn new<S>(store: Arc<S>, config: &Config, secret: &str) -> Result<Self, StateError>
    where
        S: CredentialStore + DocumentStore + 'static,
    {
        let auth = AuthService::new(
            store.clone(),
            PasswordHasher::new(config.bcrypt_cost),
            TokenIssuer::new(secret.as_bytes()),
            config.token_ttl()?,
        )?;

        Ok(Self {
            auth: Arc::new(auth),
            documents: store,
        })
    }
}

/// Builds the complete router with middleware applied.
pub fn app(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .merge(auth::auth_router())
        .merge(api::api_router())
        .with_state(state);

    middleware::apply(router, config.request_timeout())
}
