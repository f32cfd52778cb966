//! Size route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use shopsmith_core::{SizeId, StoreId};

use crate::db::SizeRepository;
use crate::error::AppError;
use crate::middleware::RequireUser;
use crate::state::AppState;

use super::{ensure_path_id, ensure_store_owner, require_text};

/// Build the sizes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/stores/{store_id}/sizes", get(list).post(create))
        .route(
            "/api/stores/{store_id}/sizes/{size_id}",
            get(get_one).patch(update).delete(delete_one),
        )
}

/// Request body for creating or replacing a size.
#[derive(Debug, Deserialize)]
pub struct SizeRequest {
    pub name: Option<String>,
    pub value: Option<String>,
}

impl SizeRequest {
    /// Validate required fields in declaration order.
    fn validate(self) -> Result<(String, String), AppError> {
        let name = require_text(self.name, "Name")?;
        let value = require_text(self.value, "Value")?;
        Ok((name, value))
    }
}

/// POST /api/stores/{store_id}/sizes - Create a size.
pub async fn create(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
    RequireUser(user_id): RequireUser,
    Json(body): Json<SizeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (name, value) = body.validate()?;
    ensure_path_id(&store_id, "Store ID")?;
    ensure_store_owner(state.pool(), &store_id, &user_id).await?;

    let size = SizeRepository::new(state.pool())
        .create(&store_id, &name, &value)
        .await?;

    Ok((StatusCode::CREATED, Json(size)))
}

/// GET /api/stores/{store_id}/sizes - List a store's sizes.
pub async fn list(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
) -> Result<impl IntoResponse, AppError> {
    ensure_path_id(&store_id, "Store ID")?;

    let sizes = SizeRepository::new(state.pool())
        .list_for_store(&store_id)
        .await?;

    Ok(Json(sizes))
}

/// GET /api/stores/{store_id}/sizes/{size_id} - Get one size, or `null`.
pub async fn get_one(
    State(state): State<AppState>,
    Path((store_id, size_id)): Path<(StoreId, SizeId)>,
) -> Result<impl IntoResponse, AppError> {
    ensure_path_id(&store_id, "Store ID")?;
    ensure_path_id(&size_id, "Size ID")?;

    let size = SizeRepository::new(state.pool()).get_by_id(&size_id).await?;

    Ok(Json(size))
}

/// PATCH /api/stores/{store_id}/sizes/{size_id} - Replace the size's fields.
pub async fn update(
    State(state): State<AppState>,
    Path((store_id, size_id)): Path<(StoreId, SizeId)>,
    RequireUser(user_id): RequireUser,
    Json(body): Json<SizeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (name, value) = body.validate()?;
    ensure_path_id(&store_id, "Store ID")?;
    ensure_path_id(&size_id, "Size ID")?;
    ensure_store_owner(state.pool(), &store_id, &user_id).await?;

    let size = SizeRepository::new(state.pool())
        .update(&size_id, &name, &value)
        .await?;

    Ok(Json(size))
}

/// DELETE /api/stores/{store_id}/sizes/{size_id} - Delete the size,
/// returning its prior state.
pub async fn delete_one(
    State(state): State<AppState>,
    Path((store_id, size_id)): Path<(StoreId, SizeId)>,
    RequireUser(user_id): RequireUser,
) -> Result<impl IntoResponse, AppError> {
    ensure_path_id(&store_id, "Store ID")?;
    ensure_path_id(&size_id, "Size ID")?;
    ensure_store_owner(state.pool(), &store_id, &user_id).await?;

    let size = SizeRepository::new(state.pool()).delete(&size_id).await?;

    Ok(Json(size))
}
