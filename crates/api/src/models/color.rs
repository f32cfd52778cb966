//! Color domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use shopsmith_core::{ColorId, StoreId};

/// A color option (e.g., name "Crimson", value "#DC143C") belonging to one
/// store.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub id: ColorId,
    pub store_id: StoreId,
    pub name: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
