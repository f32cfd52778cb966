//! Integration tests for product CRUD, filters, and atomic image handling.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The API server running (cargo run -p shopsmith-api)
//! - `SHOPSMITH_AUTH_SECRET` matching the server's
//!
//! Run with: cargo test -p shopsmith-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use shopsmith_integration_tests::{
    api_base_url, bearer, client, create_billboard, create_store, fresh_user_id,
};

/// Create the category/size/color rows a product needs, returning their ids.
async fn catalog_fixtures(
    client: &Client,
    owner: &str,
    store_id: &str,
) -> (String, String, String) {
    let base_url = api_base_url();

    let billboard = create_billboard(client, owner, store_id, "Catalog").await;

    let category: Value = client
        .post(format!("{base_url}/api/stores/{store_id}/categories"))
        .header("authorization", bearer(owner))
        .json(&json!({ "name": "Shirts", "billboardId": billboard["id"] }))
        .send()
        .await
        .expect("Failed to create category")
        .json()
        .await
        .expect("not JSON");

    let size: Value = client
        .post(format!("{base_url}/api/stores/{store_id}/sizes"))
        .header("authorization", bearer(owner))
        .json(&json!({ "name": "Small", "value": "S" }))
        .send()
        .await
        .expect("Failed to create size")
        .json()
        .await
        .expect("not JSON");

    let color: Value = client
        .post(format!("{base_url}/api/stores/{store_id}/colors"))
        .header("authorization", bearer(owner))
        .json(&json!({ "name": "Crimson", "value": "#DC143C" }))
        .send()
        .await
        .expect("Failed to create color")
        .json()
        .await
        .expect("not JSON");

    (
        category["id"].as_str().expect("category id").to_string(),
        size["id"].as_str().expect("size id").to_string(),
        color["id"].as_str().expect("color id").to_string(),
    )
}

/// Create a product, asserting 201, and return its JSON.
async fn create_product(
    client: &Client,
    owner: &str,
    store_id: &str,
    ids: &(String, String, String),
    name: &str,
    extra: Value,
) -> Value {
    let mut body = json!({
        "name": name,
        "price": "19.99",
        "categoryId": ids.0,
        "sizeId": ids.1,
        "colorId": ids.2,
        "images": [{ "url": "http://img.test/p1.png" }, { "url": "http://img.test/p2.png" }],
    });
    if let (Some(body), Some(extra)) = (body.as_object_mut(), extra.as_object()) {
        for (key, value) in extra {
            body.insert(key.clone(), value.clone());
        }
    }

    let resp = client
        .post(format!("{}/api/stores/{store_id}/products", api_base_url()))
        .header("authorization", bearer(owner))
        .json(&body)
        .send()
        .await
        .expect("Failed to create product");
    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("Product response was not JSON")
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_product_create_then_read_back_with_relations() {
    let client = client();
    let base_url = api_base_url();
    let owner = fresh_user_id();

    let store = create_store(&client, &owner, "Product Store").await;
    let store_id = store["id"].as_str().expect("store id");
    let ids = catalog_fixtures(&client, &owner, store_id).await;

    let product = create_product(&client, &owner, store_id, &ids, "Linen Shirt", json!({})).await;
    let product_id = product["id"].as_str().expect("product id");
    assert_eq!(product["price"], "19.99");
    assert_eq!(product["isFeatured"], false);
    assert_eq!(product["isArchived"], false);

    // Read-one embeds images and the joined category/size/color
    let fetched: Value = client
        .get(format!("{base_url}/api/stores/{store_id}/products/{product_id}"))
        .send()
        .await
        .expect("Failed to get product")
        .json()
        .await
        .expect("not JSON");

    assert_eq!(fetched["name"], "Linen Shirt");
    assert_eq!(fetched["images"].as_array().expect("images").len(), 2);
    assert_eq!(fetched["category"]["name"], "Shirts");
    assert_eq!(fetched["size"]["value"], "S");
    assert_eq!(fetched["color"]["value"], "#DC143C");
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_product_missing_images_is_400_with_reason() {
    let client = client();
    let base_url = api_base_url();
    let owner = fresh_user_id();

    let store = create_store(&client, &owner, "Product Validation Store").await;
    let store_id = store["id"].as_str().expect("store id");
    let ids = catalog_fixtures(&client, &owner, store_id).await;

    let resp = client
        .post(format!("{base_url}/api/stores/{store_id}/products"))
        .header("authorization", bearer(&owner))
        .json(&json!({
            "name": "No Images",
            "price": "5.00",
            "categoryId": ids.0,
            "sizeId": ids.1,
            "colorId": ids.2,
            "images": [],
        }))
        .send()
        .await
        .expect("Failed to post product");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.text().await.expect("no body"), "Images is required");
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_product_listing_excludes_archived_and_orders_newest_first() {
    let client = client();
    let base_url = api_base_url();
    let owner = fresh_user_id();

    let store = create_store(&client, &owner, "Listing Store").await;
    let store_id = store["id"].as_str().expect("store id");
    let ids = catalog_fixtures(&client, &owner, store_id).await;

    create_product(&client, &owner, store_id, &ids, "First", json!({})).await;
    create_product(&client, &owner, store_id, &ids, "Second", json!({})).await;
    create_product(&client, &owner, store_id, &ids, "Hidden", json!({ "isArchived": true })).await;

    let products: Value = client
        .get(format!("{base_url}/api/stores/{store_id}/products"))
        .send()
        .await
        .expect("Failed to list products")
        .json()
        .await
        .expect("not JSON");

    let names: Vec<&str> = products
        .as_array()
        .expect("array")
        .iter()
        .map(|p| p["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["Second", "First"]);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_featured_filter_triggers_on_key_presence() {
    let client = client();
    let base_url = api_base_url();
    let owner = fresh_user_id();

    let store = create_store(&client, &owner, "Featured Store").await;
    let store_id = store["id"].as_str().expect("store id");
    let ids = catalog_fixtures(&client, &owner, store_id).await;

    create_product(&client, &owner, store_id, &ids, "Plain", json!({})).await;
    create_product(&client, &owner, store_id, &ids, "Featured", json!({ "isFeatured": true })).await;

    // The key's presence triggers the filter even with value "false"
    let products: Value = client
        .get(format!("{base_url}/api/stores/{store_id}/products?isFeatured=false"))
        .send()
        .await
        .expect("Failed to list products")
        .json()
        .await
        .expect("not JSON");

    let names: Vec<&str> = products
        .as_array()
        .expect("array")
        .iter()
        .map(|p| p["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["Featured"]);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_product_patch_replaces_fields_and_images() {
    let client = client();
    let base_url = api_base_url();
    let owner = fresh_user_id();

    let store = create_store(&client, &owner, "Patch Store").await;
    let store_id = store["id"].as_str().expect("store id");
    let ids = catalog_fixtures(&client, &owner, store_id).await;

    let product = create_product(&client, &owner, store_id, &ids, "Before", json!({})).await;
    let product_id = product["id"].as_str().expect("product id");

    let resp = client
        .patch(format!("{base_url}/api/stores/{store_id}/products/{product_id}"))
        .header("authorization", bearer(&owner))
        .json(&json!({
            "name": "After",
            "price": "24.99",
            "categoryId": ids.0,
            "sizeId": ids.1,
            "colorId": ids.2,
            "images": [{ "url": "http://img.test/new.png" }],
        }))
        .send()
        .await
        .expect("Failed to patch product");
    assert_eq!(resp.status(), StatusCode::OK);

    let fetched: Value = client
        .get(format!("{base_url}/api/stores/{store_id}/products/{product_id}"))
        .send()
        .await
        .expect("Failed to get product")
        .json()
        .await
        .expect("not JSON");

    assert_eq!(fetched["name"], "After");
    assert_eq!(fetched["price"], "24.99");
    let images = fetched["images"].as_array().expect("images");
    assert_eq!(images.len(), 1);
    assert_eq!(images[0]["url"], "http://img.test/new.png");
}
