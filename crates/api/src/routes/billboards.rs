//! Billboard route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use shopsmith_core::{BillboardId, StoreId};

use crate::db::BillboardRepository;
use crate::error::AppError;
use crate::middleware::RequireUser;
use crate::state::AppState;

use super::{ensure_path_id, ensure_store_owner, require_text};

/// Build the billboards router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/stores/{store_id}/billboards",
            get(list).post(create),
        )
        .route(
            "/api/stores/{store_id}/billboards/{billboard_id}",
            get(get_one).patch(update).delete(delete_one),
        )
}

/// Request body for creating or replacing a billboard.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillboardRequest {
    pub label: Option<String>,
    pub image_url: Option<String>,
}

impl BillboardRequest {
    /// Validate required fields in declaration order.
    fn validate(self) -> Result<(String, String), AppError> {
        let label = require_text(self.label, "Label")?;
        let image_url = require_text(self.image_url, "Image URL")?;
        Ok((label, image_url))
    }
}

/// POST /api/stores/{store_id}/billboards - Create a billboard.
pub async fn create(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
    RequireUser(user_id): RequireUser,
    Json(body): Json<BillboardRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (label, image_url) = body.validate()?;
    ensure_path_id(&store_id, "Store ID")?;
    ensure_store_owner(state.pool(), &store_id, &user_id).await?;

    let billboard = BillboardRepository::new(state.pool())
        .create(&store_id, &label, &image_url)
        .await?;

    Ok((StatusCode::CREATED, Json(billboard)))
}

/// GET /api/stores/{store_id}/billboards - List a store's billboards.
pub async fn list(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
) -> Result<impl IntoResponse, AppError> {
    ensure_path_id(&store_id, "Store ID")?;

    let billboards = BillboardRepository::new(state.pool())
        .list_for_store(&store_id)
        .await?;

    Ok(Json(billboards))
}

/// GET /api/stores/{store_id}/billboards/{billboard_id} - Get one billboard,
/// or `null`.
pub async fn get_one(
    State(state): State<AppState>,
    Path((store_id, billboard_id)): Path<(StoreId, BillboardId)>,
) -> Result<impl IntoResponse, AppError> {
    ensure_path_id(&store_id, "Store ID")?;
    ensure_path_id(&billboard_id, "Billboard ID")?;

    let billboard = BillboardRepository::new(state.pool())
        .get_by_id(&billboard_id)
        .await?;

    Ok(Json(billboard))
}

/// PATCH /api/stores/{store_id}/billboards/{billboard_id} - Replace the
/// billboard's fields.
pub async fn update(
    State(state): State<AppState>,
    Path((store_id, billboard_id)): Path<(StoreId, BillboardId)>,
    RequireUser(user_id): RequireUser,
    Json(body): Json<BillboardRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (label, image_url) = body.validate()?;
    ensure_path_id(&store_id, "Store ID")?;
    ensure_path_id(&billboard_id, "Billboard ID")?;
    ensure_store_owner(state.pool(), &store_id, &user_id).await?;

    let billboard = BillboardRepository::new(state.pool())
        .update(&billboard_id, &label, &image_url)
        .await?;

    Ok(Json(billboard))
}

/// DELETE /api/stores/{store_id}/billboards/{billboard_id} - Delete the
/// billboard, returning its prior state.
pub async fn delete_one(
    State(state): State<AppState>,
    Path((store_id, billboard_id)): Path<(StoreId, BillboardId)>,
    RequireUser(user_id): RequireUser,
) -> Result<impl IntoResponse, AppError> {
    ensure_path_id(&store_id, "Store ID")?;
    ensure_path_id(&billboard_id, "Billboard ID")?;
    ensure_store_owner(state.pool(), &store_id, &user_id).await?;

    let billboard = BillboardRepository::new(state.pool())
        .delete(&billboard_id)
        .await?;

    Ok(Json(billboard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_order_first_failure_wins() {
        let body = BillboardRequest {
            label: None,
            image_url: None,
        };
        assert!(matches!(
            body.validate(),
            Err(AppError::MissingField("Label"))
        ));

        let body = BillboardRequest {
            label: Some("Summer".to_string()),
            image_url: None,
        };
        assert!(matches!(
            body.validate(),
            Err(AppError::MissingField("Image URL"))
        ));
    }
}
