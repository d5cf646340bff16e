//! Core business logic for the authentication system.
//!
//! This service handles account registration, credential verification and
//! token issuance. It orchestrates the credential store, the password hasher
//! and the token issuer, and is independent of the HTTP framework so it can
//! be exercised directly in tests.
//!
//! bcrypt work runs on tokio's blocking pool. Login against an unknown email
//! still verifies against a dummy hash, keeping the cost of both credential
//! failures the same.

use std::sync::Arc;

use chrono::Duration;

use super::errors::{AuthError, PasswordError, TokenError};
use super::models::{present, Claims, LoginRequest, RegisterRequest};
use super::password::PasswordHasher;
use super::token::TokenIssuer;
use crate::database::{Account, CredentialStore, NewAccount};

pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    hasher: PasswordHasher,
    tokens: TokenIssuer,
    token_ttl: Duration,
    dummy_hash: String,
}

impl AuthService {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: PasswordHasher,
        tokens: TokenIssuer,
        token_ttl: Duration,
    ) -> Result<Self, PasswordError> {
        let dummy_hash = hasher.hash(&uuid::Uuid::new_v4().to_string())?;
        Ok(Self {
            store,
            hasher,
            tokens,
            token_ttl,
            dummy_hash,
        })
    }

    /// Creates an account. No token is issued; the caller logs in separately.
    pub async fn register(&self, request: RegisterRequest) -> Result<Account, AuthError> {
        let (Some(username), Some(email), Some(password)) = (
            present(&request.username),
            present(&request.email),
            present(&request.password),
        ) else {
            return Err(AuthError::Validation);
        };

        if self.store.find_account_by_email(email).await?.is_some() {
            tracing::debug!("registration rejected: email already in use");
            return Err(AuthError::DuplicateEmail);
        }

        let password_hash = self.hash(password).await?;

        // A concurrent registration can still win the race; the store's
        // unique index turns that into DuplicateEmail via From<StoreError>.
        let account = self
            .store
            .insert_account(NewAccount {
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        tracing::info!(account_id = %account.id, "account registered");
        Ok(account)
    }

    /// Verifies credentials and issues an access token for the account.
    pub async fn login(&self, request: LoginRequest) -> Result<String, AuthError> {
        let email = present(&request.email).unwrap_or_default();
        let password = request.password.unwrap_or_default();

        let account = if email.is_empty() {
            None
        } else {
            self.store.find_account_by_email(email).await?
        };

        let (hash, account) = match account {
            Some(account) => (account.password_hash.clone(), Some(account)),
            None => (self.dummy_hash.clone(), None),
        };

        let matches = self.verify(password, hash).await?;
        let account = match account {
            Some(account) if matches => account,
            _ => {
                tracing::debug!("login rejected: invalid credentials");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let token = self.tokens.issue(&account.id, self.token_ttl)?;
        tracing::info!(account_id = %account.id, "login succeeded");
        Ok(token)
    }

    /// Resolves a bearer token to the account it was issued for.
    pub fn authenticate(&self, token: &str) -> Result<Claims, TokenError> {
        self.tokens.verify(token)
    }

    pub async fn find_account(&self, id: &str) -> Result<Option<Account>, AuthError> {
        Ok(self.store.find_account_by_id(id).await?)
    }

    async fn hash(&self, password: &str) -> Result<String, AuthError> {
        let hasher = self.hasher;
        let password = password.to_string();
        let hash = tokio::task::spawn_blocking(move || hasher.hash(&password)).await??;
        Ok(hash)
    }

    async fn verify(&self, password: String, hash: String) -> Result<bool, AuthError> {
        let hasher = self.hasher;
        let matches = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash)).await??;
        Ok(matches)
    }
}
