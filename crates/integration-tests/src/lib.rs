//! Integration tests for Shopsmith.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! cargo run -p shopsmith-cli -- migrate
//!
//! # Start the API server
//! cargo run -p shopsmith-api
//!
//! # Run integration tests
//! cargo test -p shopsmith-integration-tests -- --ignored
//! ```
//!
//! The tests mint their own access tokens, so `SHOPSMITH_AUTH_SECRET` must
//! be set to the same value the running server uses.

use reqwest::Client;
use secrecy::SecretString;
use serde_json::Value;

use shopsmith_api::middleware::auth::issue_token;
use shopsmith_core::UserId;

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn api_base_url() -> String {
    std::env::var("SHOPSMITH_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Build an HTTP client.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> Client {
    Client::builder().build().expect("Failed to create HTTP client")
}

/// A fresh opaque user id, unique per test run.
#[must_use]
pub fn fresh_user_id() -> String {
    format!("user_{}", uuid::Uuid::new_v4().simple())
}

/// Mint a bearer header value for a user id.
///
/// # Panics
///
/// Panics if `SHOPSMITH_AUTH_SECRET` is unset or signing fails.
#[must_use]
pub fn bearer(user_id: &str) -> String {
    let secret = std::env::var("SHOPSMITH_AUTH_SECRET")
        .map(SecretString::from)
        .expect("SHOPSMITH_AUTH_SECRET must be set for integration tests");
    let token =
        issue_token(&UserId::new(user_id), &secret, 1).expect("Failed to sign test token");
    format!("Bearer {token}")
}

/// Test helper: create a store via the API and return its JSON.
///
/// # Panics
///
/// Panics if the request fails or does not return 201.
pub async fn create_store(client: &Client, user_id: &str, name: &str) -> Value {
    let resp = client
        .post(format!("{}/api/stores", api_base_url()))
        .header("authorization", bearer(user_id))
        .json(&serde_json::json!({ "name": name }))
        .send()
        .await
        .expect("Failed to create store");

    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
    resp.json().await.expect("Store response was not JSON")
}

/// Test helper: create a billboard via the API and return its JSON.
///
/// # Panics
///
/// Panics if the request fails or does not return 201.
pub async fn create_billboard(
    client: &Client,
    user_id: &str,
    store_id: &str,
    label: &str,
) -> Value {
    let resp = client
        .post(format!("{}/api/stores/{store_id}/billboards", api_base_url()))
        .header("authorization", bearer(user_id))
        .json(&serde_json::json!({ "label": label, "imageUrl": "http://img.test/b.png" }))
        .send()
        .await
        .expect("Failed to create billboard");

    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
    resp.json().await.expect("Billboard response was not JSON")
}
