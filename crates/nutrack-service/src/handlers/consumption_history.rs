//! Consumption history handlers.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use nutrack_core::ConsumptionHistoryEntry;

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::handlers::{LimitQuery, OrderQuery};
use crate::state::AppState;

/// List a user's entire consumption history.
pub async fn get_all(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
    Query(query): Query<OrderQuery>,
) -> Result<Json<Envelope<Vec<ConsumptionHistoryEntry>>>, ApiError> {
    let entries = state
        .consumption_history
        .get_all(&uid, query.order_direction)
        .await
        .map_err(ApiError::read)?;
    Ok(Json(Envelope::data(entries)))
}

/// List a page of a user's consumption history.
pub async fn get_with_limit(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Envelope<Vec<ConsumptionHistoryEntry>>>, ApiError> {
    let entries = state
        .consumption_history
        .get_with_limit(&uid, query.limit, query.order_direction, query.start_after)
        .await
        .map_err(ApiError::read)?;
    Ok(Json(Envelope::data(entries)))
}

/// List the last N days of a user's consumption history.
pub async fn get_by_days(
    State(state): State<Arc<AppState>>,
    Path((uid, days)): Path<(String, i64)>,
    Query(query): Query<OrderQuery>,
) -> Result<Json<Envelope<Vec<ConsumptionHistoryEntry>>>, ApiError> {
    let entries = state
        .consumption_history
        .get_by_days(&uid, days, query.order_direction)
        .await
        .map_err(ApiError::read)?;
    Ok(Json(Envelope::data(entries)))
}

/// Add a consumption history entry.
pub async fn add_record(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Envelope<()>>), ApiError> {
    let id = state
        .consumption_history
        .add(&uid, body)
        .await
        .map_err(ApiError::write)?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::created(id, "Record added successfully")),
    ))
}

/// Delete one consumption history entry.
pub async fn delete_record(
    State(state): State<Arc<AppState>>,
    Path((uid, record_id)): Path<(String, String)>,
) -> Result<Json<Envelope<()>>, ApiError> {
    state
        .consumption_history
        .delete(&uid, &record_id)
        .await
        .map_err(ApiError::read)?;
    Ok(Json(Envelope::message("Record deleted successfully")))
}
