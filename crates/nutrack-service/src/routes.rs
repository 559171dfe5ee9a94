//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{consumption_history, health, search_history, users};
use crate::state::AppState;

/// Maximum concurrent in-flight requests across the API.
const MAX_CONCURRENT_REQUESTS: usize = 100;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /health` - Health check
///
/// ## Users
/// - `POST /users` - Create a user (id in the payload)
/// - `GET /users/:uid` - Fetch a user
/// - `PUT /users/:uid` - Replace a user
/// - `DELETE /users/:uid` - Delete a user
/// - `GET /users/:uid/exists` - Existence probe
///
/// ## Search history
/// - `GET /search-history/:uid/all?orderDirection=` - Full history
/// - `GET /search-history/:uid/limit?limit=&orderDirection=&startAfter=` - One page
/// - `GET /search-history/:uid/:days?orderDirection=` - Last N days
/// - `POST /search-history/:uid` - Add an entry
/// - `DELETE /search-history/:uid/:recordId` - Delete an entry
///
/// ## Consumption history
/// - The same five routes under `/consumption-history`
pub fn create_router(state: AppState) -> Router {
    // Extract config values before moving state
    let cors_origins = state.config.cors_origins.clone();
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;

    let cors = build_cors_layer(&cors_origins);

    let state = Arc::new(state);

    Router::new()
        // Health
        .route("/health", get(health::health))
        // Users
        .route("/users", post(users::create_user))
        .route(
            "/users/:uid",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/users/:uid/exists", get(users::user_exists))
        // Search history. The static `all`/`limit` segments win over the
        // `:days` capture, and `:days` doubles as the record id for DELETE.
        .route("/search-history/:uid", post(search_history::add_record))
        .route("/search-history/:uid/all", get(search_history::get_all))
        .route(
            "/search-history/:uid/limit",
            get(search_history::get_with_limit),
        )
        .route(
            "/search-history/:uid/:days",
            get(search_history::get_by_days).delete(search_history::delete_record),
        )
        // Consumption history
        .route(
            "/consumption-history/:uid",
            post(consumption_history::add_record),
        )
        .route(
            "/consumption-history/:uid/all",
            get(consumption_history::get_all),
        )
        .route(
            "/consumption-history/:uid/limit",
            get(consumption_history::get_with_limit),
        )
        .route(
            "/consumption-history/:uid/:days",
            get(consumption_history::get_by_days).delete(consumption_history::delete_record),
        )
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
