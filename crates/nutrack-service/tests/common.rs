//! Common test utilities for nutrack integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use serde_json::json;
use tempfile::TempDir;

use nutrack_service::{create_router, AppState, ServiceConfig};
use nutrack_store::RocksStore;

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Temporary directory for the database (kept alive for test duration).
    pub _temp_dir: TempDir,
    /// A fresh user id for the test.
    pub uid: String,
}

impl TestHarness {
    /// Create a new test harness with a fresh database.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = RocksStore::open(temp_dir.path()).expect("Failed to open store");

        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            data_dir: temp_dir.path().to_string_lossy().to_string(),
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
        };

        let state = AppState::new(Arc::new(store), config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");
        let uid = fresh_uid();

        Self {
            server,
            _temp_dir: temp_dir,
            uid,
        }
    }

    /// Register a user with the given id and valid defaults.
    pub async fn create_user(&self, uid: &str) {
        self.server
            .post("/users")
            .json(&json!({
                "id": uid,
                "fullName": "Ana Torres",
                "email": "ana@example.com",
            }))
            .await
            .assert_status(axum::http::StatusCode::CREATED);
    }

    /// Add a search history entry for a user; returns the new record id.
    pub async fn add_search_entry(&self, uid: &str, body: serde_json::Value) -> String {
        let response = self.server.post(&format!("/search-history/{uid}")).json(&body).await;
        response.assert_status(axum::http::StatusCode::CREATED);
        let body: serde_json::Value = response.json();
        body["id"].as_str().expect("id in create response").to_string()
    }

    /// Add a consumption history entry for a user; returns the new record id.
    pub async fn add_consumption_entry(&self, uid: &str, body: serde_json::Value) -> String {
        let response = self
            .server
            .post(&format!("/consumption-history/{uid}"))
            .json(&body)
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        let body: serde_json::Value = response.json();
        body["id"].as_str().expect("id in create response").to_string()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// A user id no other test run has seen.
pub fn fresh_uid() -> String {
    uuid::Uuid::new_v4().to_string()
}
