//! Handler functions for user profile endpoints.
//!
//! These functions serve data about the authenticated caller. They take an
//! [`AuthUser`] so the bearer token is verified before the handler runs.

use axum::{extract::State, Json};

use crate::auth::middleware::AuthUser;
use crate::database::AccountProfile;
use crate::errors::ApiError;
use crate::AppState;

/// GET /me
pub async fn me(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<AccountProfile>, ApiError> {
    let account = state
        .auth
        .find_account(&user.account_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid token"))?;

    Ok(Json(AccountProfile::from(account)))
}
