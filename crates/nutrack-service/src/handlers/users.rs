//! User account handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use nutrack_core::User;

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::state::AppState;

/// Response body for the existence probe: `{ success, exists }`.
#[derive(Debug, Serialize)]
pub struct ExistsResponse {
    /// Always true; the probe itself cannot fail.
    pub success: bool,
    /// Whether the user exists.
    pub exists: bool,
}

/// Create a user. The payload carries the account id.
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Envelope<User>>), ApiError> {
    let user = state.users.create(body).await.map_err(ApiError::write)?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_message(user, "User created successfully")),
    ))
}

/// Fetch a user by id.
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
) -> Result<Json<Envelope<User>>, ApiError> {
    let user = state.users.get(&uid).await.map_err(ApiError::read)?;
    Ok(Json(Envelope::data(user)))
}

/// Replace a user's record.
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Envelope<User>>, ApiError> {
    let user = state
        .users
        .update(&uid, body)
        .await
        .map_err(ApiError::write)?;
    Ok(Json(Envelope::with_message(
        user,
        "User updated successfully",
    )))
}

/// Delete a user by id.
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
) -> Result<Json<Envelope<()>>, ApiError> {
    state.users.delete(&uid).await.map_err(ApiError::read)?;
    Ok(Json(Envelope::message("User deleted successfully")))
}

/// Probe whether a user exists. Always answers 200.
pub async fn user_exists(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
) -> Json<ExistsResponse> {
    let exists = state.users.exists(&uid).await;
    Json(ExistsResponse {
        success: true,
        exists,
    })
}
