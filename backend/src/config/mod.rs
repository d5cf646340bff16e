//! Central module for application-wide configuration settings.
//!
//! This module handles loading and validating configuration parameters such as
//! the store URL, the listening address, the token signing secret and the
//! various timeouts. Values come from command-line flags or the environment,
//! are parsed once at startup into [`Config`], and are then handed to the
//! component constructors. Nothing else in the crate reads the environment.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

/// Secrets shorter than this are accepted but logged as weak.
pub const MIN_RECOMMENDED_SECRET_LEN: usize = 32;

/// Upper bound for `TOKEN_TTL_SECS` (one year).
pub const MAX_TOKEN_TTL_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET is not set; refusing to start without a token signing secret")]
    MissingSecret,

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("TOKEN_TTL_SECS must be at most {MAX_TOKEN_TTL_SECS}, got {0}")]
    TtlOutOfRange(u64),
}

/// Runtime configuration, assembled once in `main`.
#[derive(Debug, Clone, Parser)]
#[command(name = "travel-backend", version, about = "Travel planner HTTP backend")]
pub struct Config {
    /// SQLite connection URL, or `memory` for the in-process store.
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite:travel.db?mode=rwc")]
    pub database_url: String,

    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// HS256 signing secret for access tokens.
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: Option<String>,

    #[arg(long, env = "TOKEN_TTL_SECS", default_value_t = 3600)]
    pub token_ttl_secs: u64,

    #[arg(
        long,
        env = "BCRYPT_COST",
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(4..=31)
    )]
    pub bcrypt_cost: u32,

    #[arg(long, env = "STORE_TIMEOUT_SECS", default_value_t = 5)]
    pub store_timeout_secs: u64,

    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,
}

impl Config {
    /// Checks the values clap cannot express on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let secret = self.signing_secret()?;
        if secret.len() < MIN_RECOMMENDED_SECRET_LEN {
            tracing::warn!(
                len = secret.len(),
                "JWT_SECRET is shorter than {MIN_RECOMMENDED_SECRET_LEN} bytes; consider a longer secret"
            );
        }
        if self.token_ttl_secs == 0 {
            return Err(ConfigError::Zero("TOKEN_TTL_SECS"));
        }
        self.token_ttl()?;
        if self.store_timeout_secs == 0 {
            return Err(ConfigError::Zero("STORE_TIMEOUT_SECS"));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Zero("REQUEST_TIMEOUT_SECS"));
        }
        Ok(())
    }

    pub fn signing_secret(&self) -> Result<&str, ConfigError> {
        match self.jwt_secret.as_deref() {
            Some(secret) if !secret.is_empty() => Ok(secret),
            _ => Err(ConfigError::MissingSecret),
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn token_ttl(&self) -> Result<chrono::Duration, ConfigError> {
        let secs = self.token_ttl_secs;
        if secs > MAX_TOKEN_TTL_SECS {
            return Err(ConfigError::TtlOutOfRange(secs));
        }
        i64::try_from(secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .ok_or(ConfigError::TtlOutOfRange(secs))
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// True when the in-process store was requested instead of SQLite.
    pub fn uses_memory_store(&self) -> bool {
        self.database_url.eq_ignore_ascii_case("memory")
    }
}
