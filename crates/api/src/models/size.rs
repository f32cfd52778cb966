//! Size domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use shopsmith_core::{SizeId, StoreId};

/// A size option (e.g., name "Small", value "S") belonging to one store.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Size {
    pub id: SizeId,
    pub store_id: StoreId,
    pub name: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
