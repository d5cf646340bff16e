//! Handler functions for the travel record API.
//!
//! Every collection shares the same two handlers, parameterized by its
//! [`NewRecord`] body type: `create` runs the presence checks and inserts one
//! document, `list` returns the whole collection with store-assigned `_id`s.

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::models::NewRecord;
use crate::auth::MessageResponse;
use crate::errors::{ApiError, INTERNAL_SERVER_ERROR};
use crate::AppState;

pub async fn create<T>(
    State(state): State<AppState>,
    body: Result<Json<T>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError>
where
    T: NewRecord + DeserializeOwned,
{
    let collection = T::COLLECTION;
    let record = body
        .ok()
        .and_then(|Json(body)| body.into_stored())
        .ok_or_else(|| ApiError::bad_request(T::MISSING_FIELDS))?;

    let document =
        serde_json::to_value(record).map_err(|err| ApiError::internal(INTERNAL_SERVER_ERROR, err))?;
    let id = state.documents.insert_document(collection, document).await?;

    tracing::info!(%collection, %id, "record created");
    Ok((StatusCode::CREATED, Json(MessageResponse::new(T::CREATED))))
}

pub async fn list<T>(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError>
where
    T: NewRecord,
{
    let documents = state.documents.find_documents(T::COLLECTION).await?;
    Ok(Json(documents.into_iter().map(|doc| doc.into_json()).collect()))
}
