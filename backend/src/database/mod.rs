//! Module for database connection setup and common utilities.
//!
//! This module is responsible for initializing the SQLite connection pool,
//! creating the schema, and bounding every store call with a timeout. The
//! store traits and their query implementations live in [`queries`]; the
//! in-process store used for development and tests lives in [`memory`].

pub mod memory;
pub mod models;
pub mod queries;

use std::future::Future;
use std::time::Duration;

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

use crate::errors::StoreError;

pub use memory::MemoryStore;
pub use models::{Account, AccountProfile, Collection, Document, NewAccount};
pub use queries::{CredentialStore, DocumentStore};

/// SQLite-backed store.
#[derive(Clone)]
pub struct Database {
    pub pool: SqlitePool,
    timeout: Duration,
}

impl Database {
    /// Connects to `url` and creates the schema if needed.
    pub async fn connect(url: &str, timeout: Duration) -> Result<Self, StoreError> {
        tracing::info!(url = %redact(url), "connecting to database");

        let pool = pool_options(url, timeout).connect(url).await?;

        let db = Self { pool, timeout };
        db.run_migrations().await?;
        Ok(db)
    }

    async fn run_migrations(&self) -> Result<(), StoreError> {
        tracing::debug!("running database migrations");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS accounts (
                id TEXT PRIMARY KEY,
                username TEXT NOT NULL,
                email TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                id TEXT PRIMARY KEY,
                collection TEXT NOT NULL,
                body TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents(collection)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Runs a store call under the configured timeout.
    pub(crate) async fn bounded<T, F>(&self, fut: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        tokio::time::timeout(self.timeout, fut)
            .await
            .map_err(|_| StoreError::Timeout(self.timeout))?
    }
}

/// Each connection to an in-memory SQLite database is its own database, so
/// the pool keeps exactly one and never recycles it.
fn pool_options(url: &str, timeout: Duration) -> SqlitePoolOptions {
    let options = SqlitePoolOptions::new().acquire_timeout(timeout);
    if url.contains(":memory:") {
        options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        options.max_connections(5)
    }
}

/// Strips anything after `?` so connection options are not logged.
fn redact(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}
