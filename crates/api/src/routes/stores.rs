//! Store route handlers.
//!
//! Stores are the root of the ownership chain: creation assigns the caller
//! as owner, and every other mutation in the API authorizes against the
//! store row created here.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use shopsmith_core::StoreId;

use crate::db::StoreRepository;
use crate::error::AppError;
use crate::middleware::RequireUser;
use crate::state::AppState;

use super::{ensure_path_id, ensure_store_owner, require_text};

/// Build the stores router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/stores", get(list).post(create))
        .route(
            "/api/stores/{store_id}",
            get(get_one).patch(update).delete(delete_one),
        )
}

/// Request body for creating or renaming a store.
#[derive(Debug, Deserialize)]
pub struct StoreRequest {
    pub name: Option<String>,
}

/// POST /api/stores - Create a store owned by the caller.
pub async fn create(
    State(state): State<AppState>,
    RequireUser(user_id): RequireUser,
    Json(body): Json<StoreRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = require_text(body.name, "Name")?;

    let store = StoreRepository::new(state.pool())
        .create(&user_id, &name)
        .await?;

    Ok((StatusCode::CREATED, Json(store)))
}

/// GET /api/stores - List the caller's stores, newest first.
pub async fn list(
    State(state): State<AppState>,
    RequireUser(user_id): RequireUser,
) -> Result<impl IntoResponse, AppError> {
    let stores = StoreRepository::new(state.pool())
        .list_for_user(&user_id)
        .await?;

    Ok(Json(stores))
}

/// GET /api/stores/{store_id} - Get a store by id, or `null`.
pub async fn get_one(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
) -> Result<impl IntoResponse, AppError> {
    ensure_path_id(&store_id, "Store ID")?;

    let store = StoreRepository::new(state.pool()).get_by_id(&store_id).await?;

    Ok(Json(store))
}

/// PATCH /api/stores/{store_id} - Rename a store.
pub async fn update(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
    RequireUser(user_id): RequireUser,
    Json(body): Json<StoreRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = require_text(body.name, "Name")?;
    ensure_path_id(&store_id, "Store ID")?;
    ensure_store_owner(state.pool(), &store_id, &user_id).await?;

    let store = StoreRepository::new(state.pool())
        .update(&store_id, &name)
        .await?;

    Ok(Json(store))
}

/// DELETE /api/stores/{store_id} - Delete a store, returning its prior state.
pub async fn delete_one(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
    RequireUser(user_id): RequireUser,
) -> Result<impl IntoResponse, AppError> {
    ensure_path_id(&store_id, "Store ID")?;
    ensure_store_owner(state.pool(), &store_id, &user_id).await?;

    let store = StoreRepository::new(state.pool()).delete(&store_id).await?;

    Ok(Json(store))
}
