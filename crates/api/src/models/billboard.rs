//! Billboard domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use shopsmith_core::{BillboardId, StoreId};

/// A billboard: a labeled hero image belonging to one store.
///
/// Billboards cannot be deleted while any category still references them;
/// the database enforces this and the API surfaces it as a generic failure.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Billboard {
    pub id: BillboardId,
    pub store_id: StoreId,
    pub label: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
