//! Product route handlers.
//!
//! Listings support optional equality filters and always exclude archived
//! products; the `isFeatured` filter is triggered by the presence of the
//! query key, not its value.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use shopsmith_core::{CategoryId, ColorId, OpaqueId, ProductId, SizeId, StoreId};

use crate::db::ProductRepository;
use crate::db::products::{ProductFilter, ProductInput};
use crate::error::AppError;
use crate::middleware::RequireUser;
use crate::state::AppState;

use super::{ensure_path_id, ensure_store_owner, require, require_id, require_text};

/// Build the products router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/stores/{store_id}/products", get(list).post(create))
        .route(
            "/api/stores/{store_id}/products/{product_id}",
            get(get_one).patch(update).delete(delete_one),
        )
}

/// An image reference in a product payload.
#[derive(Debug, Deserialize)]
pub struct ImageInput {
    pub url: String,
}

/// Request body for creating or replacing a product.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub category_id: Option<CategoryId>,
    pub size_id: Option<SizeId>,
    pub color_id: Option<ColorId>,
    pub images: Option<Vec<ImageInput>>,
    pub is_featured: Option<bool>,
    pub is_archived: Option<bool>,
}

impl ProductRequest {
    /// Validate required fields in declaration order. The flags are optional
    /// and default to false.
    fn validate(self) -> Result<ProductInput, AppError> {
        let name = require_text(self.name, "Name")?;
        let price = require(self.price, "Price")?;
        let category_id = require_id(self.category_id, "Category")?;
        let size_id = require_id(self.size_id, "Size")?;
        let color_id = require_id(self.color_id, "Color")?;
        let images = match self.images {
            Some(images) if !images.is_empty() => images,
            _ => return Err(AppError::MissingField("Images")),
        };

        Ok(ProductInput {
            name,
            price,
            category_id,
            size_id,
            color_id,
            is_featured: self.is_featured.unwrap_or(false),
            is_archived: self.is_archived.unwrap_or(false),
            image_urls: images.into_iter().map(|image| image.url).collect(),
        })
    }
}

/// Query parameters for product listings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsQuery {
    pub category_id: Option<CategoryId>,
    pub size_id: Option<SizeId>,
    pub color_id: Option<ColorId>,
    /// Raw value; only the key's presence matters.
    pub is_featured: Option<String>,
}

impl ListProductsQuery {
    /// Convert to repository filters. Blank ids count as absent.
    fn into_filter(self) -> ProductFilter {
        ProductFilter {
            category_id: self.category_id.filter(|id| !id.is_blank()),
            size_id: self.size_id.filter(|id| !id.is_blank()),
            color_id: self.color_id.filter(|id| !id.is_blank()),
            featured_only: self.is_featured.is_some(),
        }
    }
}

/// POST /api/stores/{store_id}/products - Create a product and its images
/// atomically.
pub async fn create(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
    RequireUser(user_id): RequireUser,
    Json(body): Json<ProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    let input = body.validate()?;
    ensure_path_id(&store_id, "Store ID")?;
    ensure_store_owner(state.pool(), &store_id, &user_id).await?;

    let product = ProductRepository::new(state.pool())
        .create(&store_id, &input)
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/stores/{store_id}/products - List a store's products with
/// relations, excluding archived rows.
pub async fn list(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
    Query(query): Query<ListProductsQuery>,
) -> Result<impl IntoResponse, AppError> {
    ensure_path_id(&store_id, "Store ID")?;

    let products = ProductRepository::new(state.pool())
        .list_for_store(&store_id, &query.into_filter())
        .await?;

    Ok(Json(products))
}

/// GET /api/stores/{store_id}/products/{product_id} - Get one product with
/// relations, or `null`.
pub async fn get_one(
    State(state): State<AppState>,
    Path((store_id, product_id)): Path<(StoreId, ProductId)>,
) -> Result<impl IntoResponse, AppError> {
    ensure_path_id(&store_id, "Store ID")?;
    ensure_path_id(&product_id, "Product ID")?;

    let product = ProductRepository::new(state.pool())
        .get_by_id(&product_id)
        .await?;

    Ok(Json(product))
}

/// PATCH /api/stores/{store_id}/products/{product_id} - Replace the
/// product's fields and images atomically.
pub async fn update(
    State(state): State<AppState>,
    Path((store_id, product_id)): Path<(StoreId, ProductId)>,
    RequireUser(user_id): RequireUser,
    Json(body): Json<ProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    let input = body.validate()?;
    ensure_path_id(&store_id, "Store ID")?;
    ensure_path_id(&product_id, "Product ID")?;
    ensure_store_owner(state.pool(), &store_id, &user_id).await?;

    let product = ProductRepository::new(state.pool())
        .update(&product_id, &input)
        .await?;

    Ok(Json(product))
}

/// DELETE /api/stores/{store_id}/products/{product_id} - Delete the product,
/// returning its prior state. Images cascade.
pub async fn delete_one(
    State(state): State<AppState>,
    Path((store_id, product_id)): Path<(StoreId, ProductId)>,
    RequireUser(user_id): RequireUser,
) -> Result<impl IntoResponse, AppError> {
    ensure_path_id(&store_id, "Store ID")?;
    ensure_path_id(&product_id, "Product ID")?;
    ensure_store_owner(state.pool(), &store_id, &user_id).await?;

    let product = ProductRepository::new(state.pool())
        .delete(&product_id)
        .await?;

    Ok(Json(product))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn full_request() -> ProductRequest {
        ProductRequest {
            name: Some("Linen Shirt".to_string()),
            price: Some(Decimal::new(1999, 2)),
            category_id: Some(CategoryId::new("c1")),
            size_id: Some(SizeId::new("sz1")),
            color_id: Some(ColorId::new("col1")),
            images: Some(vec![ImageInput {
                url: "http://x/1.png".to_string(),
            }]),
            is_featured: None,
            is_archived: None,
        }
    }

    #[test]
    fn test_flags_default_to_false() {
        let input = full_request().validate().unwrap();
        assert!(!input.is_featured);
        assert!(!input.is_archived);
        assert_eq!(input.image_urls, vec!["http://x/1.png".to_string()]);
    }

    #[test]
    fn test_validation_order_first_failure_wins() {
        let body = ProductRequest {
            name: None,
            price: None,
            ..full_request()
        };
        assert!(matches!(body.validate(), Err(AppError::MissingField("Name"))));

        let body = ProductRequest {
            price: None,
            ..full_request()
        };
        assert!(matches!(body.validate(), Err(AppError::MissingField("Price"))));

        let body = ProductRequest {
            category_id: None,
            ..full_request()
        };
        assert!(matches!(
            body.validate(),
            Err(AppError::MissingField("Category"))
        ));
    }

    #[test]
    fn test_empty_images_are_rejected() {
        let body = ProductRequest {
            images: Some(Vec::new()),
            ..full_request()
        };
        assert!(matches!(
            body.validate(),
            Err(AppError::MissingField("Images"))
        ));
    }

    #[test]
    fn test_featured_filter_triggers_on_key_presence() {
        // Any value, including "false" or empty, turns the filter on.
        let query = ListProductsQuery {
            is_featured: Some("false".to_string()),
            ..ListProductsQuery::default()
        };
        assert!(query.into_filter().featured_only);

        let query = ListProductsQuery {
            is_featured: Some(String::new()),
            ..ListProductsQuery::default()
        };
        assert!(query.into_filter().featured_only);

        assert!(!ListProductsQuery::default().into_filter().featured_only);
    }

    #[test]
    fn test_blank_filter_ids_count_as_absent() {
        let query = ListProductsQuery {
            category_id: Some(CategoryId::new("")),
            ..ListProductsQuery::default()
        };
        assert!(query.into_filter().category_id.is_none());
    }
}
