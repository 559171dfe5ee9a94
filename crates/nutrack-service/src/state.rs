//! Application state.

use std::sync::Arc;

use nutrack_store::{DocumentStore, Documents};

use crate::config::ServiceConfig;
use crate::services::{ConsumptionHistoryService, SearchHistoryService, UserService};

/// Application state shared across handlers.
///
/// Built once at startup around the injected store client; the client is
/// the only shared resource, so the state clones freely into handlers.
#[derive(Clone)]
pub struct AppState {
    /// User account operations.
    pub users: UserService,

    /// Search history operations.
    pub search_history: SearchHistoryService,

    /// Consumption history operations.
    pub consumption_history: ConsumptionHistoryService,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Build the state from a store client and configuration.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, config: ServiceConfig) -> Self {
        let docs = Documents::new(store);
        Self {
            users: UserService::new(docs.clone()),
            search_history: SearchHistoryService::new(docs.clone()),
            consumption_history: ConsumptionHistoryService::new(docs),
            config,
        }
    }
}
