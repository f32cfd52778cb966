//! Color route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use shopsmith_core::{ColorId, StoreId};

use crate::db::ColorRepository;
use crate::error::AppError;
use crate::middleware::RequireUser;
use crate::state::AppState;

use super::{ensure_path_id, ensure_store_owner, require_text};

/// Build the colors router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/stores/{store_id}/colors", get(list).post(create))
        .route(
            "/api/stores/{store_id}/colors/{color_id}",
            get(get_one).patch(update).delete(delete_one),
        )
}

/// Request body for creating or replacing a color.
#[derive(Debug, Deserialize)]
pub struct ColorRequest {
    pub name: Option<String>,
    pub value: Option<String>,
}

impl ColorRequest {
    /// Validate required fields in declaration order.
    fn validate(self) -> Result<(String, String), AppError> {
        let name = require_text(self.name, "Name")?;
        let value = require_text(self.value, "Value")?;
        Ok((name, value))
    }
}

/// POST /api/stores/{store_id}/colors - Create a color.
pub async fn create(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
    RequireUser(user_id): RequireUser,
    Json(body): Json<ColorRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (name, value) = body.validate()?;
    ensure_path_id(&store_id, "Store ID")?;
    ensure_store_owner(state.pool(), &store_id, &user_id).await?;

    let color = ColorRepository::new(state.pool())
        .create(&store_id, &name, &value)
        .await?;

    Ok((StatusCode::CREATED, Json(color)))
}

/// GET /api/stores/{store_id}/colors - List a store's colors.
pub async fn list(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
) -> Result<impl IntoResponse, AppError> {
    ensure_path_id(&store_id, "Store ID")?;

    let colors = ColorRepository::new(state.pool())
        .list_for_store(&store_id)
        .await?;

    Ok(Json(colors))
}

/// GET /api/stores/{store_id}/colors/{color_id} - Get one color, or `null`.
pub async fn get_one(
    State(state): State<AppState>,
    Path((store_id, color_id)): Path<(StoreId, ColorId)>,
) -> Result<impl IntoResponse, AppError> {
    ensure_path_id(&store_id, "Store ID")?;
    ensure_path_id(&color_id, "Color ID")?;

    let color = ColorRepository::new(state.pool()).get_by_id(&color_id).await?;

    Ok(Json(color))
}

/// PATCH /api/stores/{store_id}/colors/{color_id} - Replace the color's
/// fields.
pub async fn update(
    State(state): State<AppState>,
    Path((store_id, color_id)): Path<(StoreId, ColorId)>,
    RequireUser(user_id): RequireUser,
    Json(body): Json<ColorRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (name, value) = body.validate()?;
    ensure_path_id(&store_id, "Store ID")?;
    ensure_path_id(&color_id, "Color ID")?;
    ensure_store_owner(state.pool(), &store_id, &user_id).await?;

    let color = ColorRepository::new(state.pool())
        .update(&color_id, &name, &value)
        .await?;

    Ok(Json(color))
}

/// DELETE /api/stores/{store_id}/colors/{color_id} - Delete the color,
/// returning its prior state.
pub async fn delete_one(
    State(state): State<AppState>,
    Path((store_id, color_id)): Path<(StoreId, ColorId)>,
    RequireUser(user_id): RequireUser,
) -> Result<impl IntoResponse, AppError> {
    ensure_path_id(&store_id, "Store ID")?;
    ensure_path_id(&color_id, "Color ID")?;
    ensure_store_owner(state.pool(), &store_id, &user_id).await?;

    let color = ColorRepository::new(state.pool()).delete(&color_id).await?;

    Ok(Json(color))
}
