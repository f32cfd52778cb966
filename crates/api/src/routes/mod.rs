//! HTTP route handlers for the store admin API.
//!
//! # Route Structure
//!
//! ```text
//! # Stores
//! POST   /api/stores                                     - Create store (auth)
//! GET    /api/stores                                     - List caller's stores (auth)
//! GET    /api/stores/{storeId}                           - Get store
//! PATCH  /api/stores/{storeId}                           - Rename store (auth)
//! DELETE /api/stores/{storeId}                           - Delete store (auth)
//!
//! # Per-store resources (billboards shown; categories, sizes, colors,
//! # and products follow the same shape)
//! GET    /api/stores/{storeId}/billboards                - List
//! POST   /api/stores/{storeId}/billboards                - Create (auth)
//! GET    /api/stores/{storeId}/billboards/{billboardId}  - Get one (or null)
//! PATCH  /api/stores/{storeId}/billboards/{billboardId}  - Replace fields (auth)
//! DELETE /api/stores/{storeId}/billboards/{billboardId}  - Delete (auth)
//! ```
//!
//! Every mutation follows the same protocol: authenticate, validate required
//! fields in declaration order (first failure wins), check the path ids, then
//! verify that the caller owns the store before touching the row. Reads are
//! public. Error bodies are plain-text reason strings.

pub mod billboards;
pub mod categories;
pub mod colors;
pub mod products;
pub mod sizes;
pub mod stores;

use axum::Router;
use sqlx::PgPool;

use shopsmith_core::{OpaqueId, StoreId, UserId};

use crate::db::StoreRepository;
use crate::error::AppError;
use crate::state::AppState;

/// Build the full API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(stores::router())
        .merge(billboards::router())
        .merge(categories::router())
        .merge(sizes::router())
        .merge(colors::router())
        .merge(products::router())
}

// =============================================================================
// Shared request validation
// =============================================================================

/// Require a present field of any type.
pub(crate) fn require<T>(value: Option<T>, label: &'static str) -> Result<T, AppError> {
    value.ok_or(AppError::MissingField(label))
}

/// Require a present, non-blank text field.
pub(crate) fn require_text(value: Option<String>, label: &'static str) -> Result<String, AppError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(AppError::MissingField(label)),
    }
}

/// Require a present, non-blank id field.
pub(crate) fn require_id<T: OpaqueId>(value: Option<T>, label: &'static str) -> Result<T, AppError> {
    match value {
        Some(id) if !id.is_blank() => Ok(id),
        _ => Err(AppError::MissingField(label)),
    }
}

/// Reject blank path identifiers.
pub(crate) fn ensure_path_id<T: OpaqueId>(id: &T, label: &'static str) -> Result<(), AppError> {
    if id.is_blank() {
        return Err(AppError::MissingId(label));
    }
    Ok(())
}

/// The ownership gate shared by every mutation: a store row must exist with
/// this id *and* this owner. Its absence means the caller is not allowed to
/// touch anything under the store, whether or not the store exists.
pub(crate) async fn ensure_store_owner(
    pool: &PgPool,
    store_id: &StoreId,
    user_id: &UserId,
) -> Result<(), AppError> {
    let store = StoreRepository::new(pool)
        .find_for_user(store_id, user_id)
        .await?;

    if store.is_none() {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shopsmith_core::BillboardId;

    use super::*;

    #[test]
    fn test_require_text_rejects_missing_and_blank() {
        assert!(matches!(
            require_text(None, "Label"),
            Err(AppError::MissingField("Label"))
        ));
        assert!(matches!(
            require_text(Some(String::new()), "Label"),
            Err(AppError::MissingField("Label"))
        ));
        assert!(matches!(
            require_text(Some("   ".to_string()), "Label"),
            Err(AppError::MissingField("Label"))
        ));
        assert_eq!(require_text(Some("Summer".to_string()), "Label").unwrap(), "Summer");
    }

    #[test]
    fn test_require_id_rejects_missing_and_blank() {
        assert!(require_id(None::<BillboardId>, "Billboard ID").is_err());
        assert!(require_id(Some(BillboardId::new("")), "Billboard ID").is_err());
        assert_eq!(
            require_id(Some(BillboardId::new("b1")), "Billboard ID").unwrap(),
            BillboardId::new("b1")
        );
    }

    #[test]
    fn test_first_missing_field_wins() {
        // Mirrors a category payload with both fields absent: the error names
        // the first field in declaration order.
        let result = require_text(None, "Name")
            .and_then(|name| require_id(None::<BillboardId>, "Billboard ID").map(|id| (name, id)));
        assert!(matches!(result, Err(AppError::MissingField("Name"))));
    }

    #[test]
    fn test_ensure_path_id() {
        assert!(ensure_path_id(&StoreId::new("s1"), "Store ID").is_ok());
        assert!(matches!(
            ensure_path_id(&StoreId::new(" "), "Store ID"),
            Err(AppError::MissingId("Store ID"))
        ));
    }
}
