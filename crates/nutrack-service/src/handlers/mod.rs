//! API handlers.
//!
//! Thin controllers: extract, delegate to a domain service, translate the
//! outcome into the response envelope. Status translation lives in
//! [`ApiError::write`](crate::ApiError::write) and
//! [`ApiError::read`](crate::ApiError::read).

use chrono::{DateTime, Utc};
use serde::Deserialize;

use nutrack_store::Direction;

pub mod consumption_history;
pub mod health;
pub mod search_history;
pub mod users;

/// Query string for ordered listings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderQuery {
    /// Sort direction, `asc` by default.
    #[serde(default)]
    pub order_direction: Direction,
}

/// Query string for limited listings with an optional keyset cursor.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitQuery {
    /// Maximum number of entries to return.
    pub limit: usize,

    /// Sort direction, `asc` by default.
    #[serde(default)]
    pub order_direction: Direction,

    /// Resume strictly after this timestamp (the previous page's last
    /// sort value).
    #[serde(default)]
    pub start_after: Option<DateTime<Utc>>,
}
