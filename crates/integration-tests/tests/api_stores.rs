//! Integration tests for store CRUD and ownership monotonicity.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The API server running (cargo run -p shopsmith-api)
//! - `SHOPSMITH_AUTH_SECRET` matching the server's
//!
//! Run with: cargo test -p shopsmith-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};

use shopsmith_integration_tests::{
    api_base_url, bearer, client, create_billboard, create_store, fresh_user_id,
};

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_store_create_and_list_scoped_to_caller() {
    let client = client();
    let base_url = api_base_url();
    let owner = fresh_user_id();
    let other = fresh_user_id();

    let store = create_store(&client, &owner, "My Store").await;
    let store_id = store["id"].as_str().expect("store id");
    assert_eq!(store["name"], "My Store");
    assert_eq!(store["userId"], owner.as_str());

    // The owner sees the store in their listing
    let stores: Value = client
        .get(format!("{base_url}/api/stores"))
        .header("authorization", bearer(&owner))
        .send()
        .await
        .expect("Failed to list stores")
        .json()
        .await
        .expect("not JSON");
    assert!(
        stores
            .as_array()
            .expect("array")
            .iter()
            .any(|s| s["id"] == store_id)
    );

    // Another identity does not
    let stores: Value = client
        .get(format!("{base_url}/api/stores"))
        .header("authorization", bearer(&other))
        .send()
        .await
        .expect("Failed to list stores")
        .json()
        .await
        .expect("not JSON");
    assert!(
        !stores
            .as_array()
            .expect("array")
            .iter()
            .any(|s| s["id"] == store_id)
    );
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_store_missing_name_is_400_with_reason() {
    let client = client();
    let owner = fresh_user_id();

    let resp = client
        .post(format!("{}/api/stores", api_base_url()))
        .header("authorization", bearer(&owner))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to post store");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.text().await.expect("no body"), "Name is required");
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_ownership_check_is_monotonic() {
    let client = client();
    let base_url = api_base_url();
    let owner = fresh_user_id();
    let intruder = fresh_user_id();

    let store = create_store(&client, &owner, "Monotonic Store").await;
    let store_id = store["id"].as_str().expect("store id");

    // Matching (storeId, identity) succeeds
    let resp = client
        .patch(format!("{base_url}/api/stores/{store_id}"))
        .header("authorization", bearer(&owner))
        .json(&json!({ "name": "Renamed Store" }))
        .send()
        .await
        .expect("Failed to patch store");
    assert_eq!(resp.status(), StatusCode::OK);
    let renamed: Value = resp.json().await.expect("not JSON");
    assert_eq!(renamed["name"], "Renamed Store");

    // Changing the identity flips the result
    let resp = client
        .patch(format!("{base_url}/api/stores/{store_id}"))
        .header("authorization", bearer(&intruder))
        .json(&json!({ "name": "Hijacked Store" }))
        .send()
        .await
        .expect("Failed to patch store");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // Changing the store id flips it too
    let resp = client
        .patch(format!("{base_url}/api/stores/nonexistent"))
        .header("authorization", bearer(&owner))
        .json(&json!({ "name": "Ghost Store" }))
        .send()
        .await
        .expect("Failed to patch store");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // No identity at all is 401, distinct from 403
    let resp = client
        .patch(format!("{base_url}/api/stores/{store_id}"))
        .json(&json!({ "name": "Anonymous Store" }))
        .send()
        .await
        .expect("Failed to patch store");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.text().await.expect("no body"), "Unauthenticated");
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_store_delete_blocked_while_children_exist() {
    let client = client();
    let base_url = api_base_url();
    let owner = fresh_user_id();

    let store = create_store(&client, &owner, "Deletable Store").await;
    let store_id = store["id"].as_str().expect("store id");
    let billboard = create_billboard(&client, &owner, store_id, "Blocker").await;
    let billboard_id = billboard["id"].as_str().expect("billboard id");

    // Blocked while the billboard exists
    let resp = client
        .delete(format!("{base_url}/api/stores/{store_id}"))
        .header("authorization", bearer(&owner))
        .send()
        .await
        .expect("Failed to delete store");
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // Remove the billboard, then the store delete returns the prior row
    let resp = client
        .delete(format!("{base_url}/api/stores/{store_id}/billboards/{billboard_id}"))
        .header("authorization", bearer(&owner))
        .send()
        .await
        .expect("Failed to delete billboard");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .delete(format!("{base_url}/api/stores/{store_id}"))
        .header("authorization", bearer(&owner))
        .send()
        .await
        .expect("Failed to delete store");
    assert_eq!(resp.status(), StatusCode::OK);
    let deleted: Value = resp.json().await.expect("not JSON");
    assert_eq!(deleted["name"], "Deletable Store");

    // Public read now serializes as null
    let body: Value = client
        .get(format!("{base_url}/api/stores/{store_id}"))
        .send()
        .await
        .expect("Failed to get store")
        .json()
        .await
        .expect("not JSON");
    assert!(body.is_null());
}
