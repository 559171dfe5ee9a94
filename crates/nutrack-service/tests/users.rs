//! User endpoint integration tests.

mod common;

use axum::http::StatusCode;
use common::{fresh_uid, TestHarness};
use serde_json::json;

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn create_user_fills_defaults() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/users")
        .json(&json!({
            "id": harness.uid,
            "fullName": "Ana Torres",
            "email": "ana@example.com",
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User created successfully");
    assert_eq!(body["data"]["role"], "standard");
    assert_eq!(body["data"]["settings"], json!({}));
    assert!(body["data"]["registeredAt"].is_string());
}

#[tokio::test]
async fn create_user_without_id_fails() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/users")
        .json(&json!({ "fullName": "Ana", "email": "a@x.com" }))
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("\"id\""));
}

#[tokio::test]
async fn create_user_with_missing_required_fields_fails() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/users")
        .json(&json!({ "id": harness.uid }))
        .await;

    response.assert_status_bad_request();
    let message = response.json::<serde_json::Value>()["message"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(message.contains("fullName"), "{message}");
    assert!(message.contains("email"), "{message}");
}

#[tokio::test]
async fn create_user_with_unknown_role_fails() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/users")
        .json(&json!({
            "id": harness.uid,
            "fullName": "Ana",
            "email": "a@x.com",
            "role": "admin",
        }))
        .await;

    response.assert_status_bad_request();
    let message = response.json::<serde_json::Value>()["message"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(message.contains("standard"), "{message}");
}

#[tokio::test]
async fn create_user_accepts_paid_role_and_settings() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/users")
        .json(&json!({
            "id": harness.uid,
            "fullName": "Ana",
            "email": "a@x.com",
            "role": "paid",
            "settings": { "locale": "es" },
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["role"], "paid");
    assert_eq!(body["data"]["settings"]["locale"], "es");
}

// ============================================================================
// Get
// ============================================================================

#[tokio::test]
async fn get_user_round_trips_the_created_record() {
    let harness = TestHarness::new();
    harness.create_user(&harness.uid).await;

    let response = harness.server.get(&format!("/users/{}", harness.uid)).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], harness.uid);
    assert_eq!(body["data"]["fullName"], "Ana Torres");
    assert_eq!(body["data"]["role"], "standard");
}

#[tokio::test]
async fn get_unknown_user_is_not_found() {
    let harness = TestHarness::new();

    let response = harness.server.get(&format!("/users/{}", fresh_uid())).await;

    response.assert_status_not_found();
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Document not found");
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn update_user_replaces_the_record() {
    let harness = TestHarness::new();
    harness.create_user(&harness.uid).await;

    let response = harness
        .server
        .put(&format!("/users/{}", harness.uid))
        .json(&json!({
            "fullName": "Ana M. Torres",
            "email": "ana@example.com",
            "role": "paid",
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "User updated successfully");
    assert_eq!(body["data"]["fullName"], "Ana M. Torres");

    let fetched = harness.server.get(&format!("/users/{}", harness.uid)).await;
    assert_eq!(
        fetched.json::<serde_json::Value>()["data"]["role"],
        "paid"
    );
}

#[tokio::test]
async fn update_unknown_user_is_rejected() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .put(&format!("/users/{}", fresh_uid()))
        .json(&json!({ "fullName": "Ana", "email": "a@x.com" }))
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Document not found");
}

#[tokio::test]
async fn update_with_invalid_payload_is_rejected() {
    let harness = TestHarness::new();
    harness.create_user(&harness.uid).await;

    let response = harness
        .server
        .put(&format!("/users/{}", harness.uid))
        .json(&json!({ "email": "a@x.com" }))
        .await;

    response.assert_status_bad_request();
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn delete_user_then_get_is_not_found() {
    let harness = TestHarness::new();
    harness.create_user(&harness.uid).await;

    let response = harness
        .server
        .delete(&format!("/users/{}", harness.uid))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "User deleted successfully");

    harness
        .server
        .get(&format!("/users/{}", harness.uid))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn delete_unknown_user_is_not_found() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .delete(&format!("/users/{}", fresh_uid()))
        .await;

    response.assert_status_not_found();
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Document not found");
}

// ============================================================================
// Exists
// ============================================================================

#[tokio::test]
async fn exists_probe_tracks_lifecycle() {
    let harness = TestHarness::new();
    let url = format!("/users/{}/exists", harness.uid);

    let response = harness.server.get(&url).await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["exists"], false);

    harness.create_user(&harness.uid).await;

    let response = harness.server.get(&url).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["exists"], true);
}
