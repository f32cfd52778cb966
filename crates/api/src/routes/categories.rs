//! Category route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use shopsmith_core::{BillboardId, CategoryId, StoreId};

use crate::db::CategoryRepository;
use crate::error::AppError;
use crate::middleware::RequireUser;
use crate::state::AppState;

use super::{ensure_path_id, ensure_store_owner, require_id, require_text};

/// Build the categories router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/stores/{store_id}/categories",
            get(list).post(create),
        )
        .route(
            "/api/stores/{store_id}/categories/{category_id}",
            get(get_one).patch(update).delete(delete_one),
        )
}

/// Request body for creating or replacing a category.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    pub name: Option<String>,
    pub billboard_id: Option<BillboardId>,
}

impl CategoryRequest {
    /// Validate required fields in declaration order.
    fn validate(self) -> Result<(String, BillboardId), AppError> {
        let name = require_text(self.name, "Name")?;
        let billboard_id = require_id(self.billboard_id, "Billboard ID")?;
        Ok((name, billboard_id))
    }
}

/// POST /api/stores/{store_id}/categories - Create a category.
pub async fn create(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
    RequireUser(user_id): RequireUser,
    Json(body): Json<CategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (name, billboard_id) = body.validate()?;
    ensure_path_id(&store_id, "Store ID")?;
    ensure_store_owner(state.pool(), &store_id, &user_id).await?;

    let category = CategoryRepository::new(state.pool())
        .create(&store_id, &billboard_id, &name)
        .await?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/stores/{store_id}/categories - List a store's categories.
pub async fn list(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
) -> Result<impl IntoResponse, AppError> {
    ensure_path_id(&store_id, "Store ID")?;

    let categories = CategoryRepository::new(state.pool())
        .list_for_store(&store_id)
        .await?;

    Ok(Json(categories))
}

/// GET /api/stores/{store_id}/categories/{category_id} - Get one category
/// with its billboard embedded, or `null`.
pub async fn get_one(
    State(state): State<AppState>,
    Path((store_id, category_id)): Path<(StoreId, CategoryId)>,
) -> Result<impl IntoResponse, AppError> {
    ensure_path_id(&store_id, "Store ID")?;
    ensure_path_id(&category_id, "Category ID")?;

    let category = CategoryRepository::new(state.pool())
        .get_by_id(&category_id)
        .await?;

    Ok(Json(category))
}

/// PATCH /api/stores/{store_id}/categories/{category_id} - Replace the
/// category's fields.
pub async fn update(
    State(state): State<AppState>,
    Path((store_id, category_id)): Path<(StoreId, CategoryId)>,
    RequireUser(user_id): RequireUser,
    Json(body): Json<CategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (name, billboard_id) = body.validate()?;
    ensure_path_id(&store_id, "Store ID")?;
    ensure_path_id(&category_id, "Category ID")?;
    ensure_store_owner(state.pool(), &store_id, &user_id).await?;

    let category = CategoryRepository::new(state.pool())
        .update(&category_id, &billboard_id, &name)
        .await?;

    Ok(Json(category))
}

/// DELETE /api/stores/{store_id}/categories/{category_id} - Delete the
/// category, returning its prior state.
pub async fn delete_one(
    State(state): State<AppState>,
    Path((store_id, category_id)): Path<(StoreId, CategoryId)>,
    RequireUser(user_id): RequireUser,
) -> Result<impl IntoResponse, AppError> {
    ensure_path_id(&store_id, "Store ID")?;
    ensure_path_id(&category_id, "Category ID")?;
    ensure_store_owner(state.pool(), &store_id, &user_id).await?;

    let category = CategoryRepository::new(state.pool())
        .delete(&category_id)
        .await?;

    Ok(Json(category))
}
