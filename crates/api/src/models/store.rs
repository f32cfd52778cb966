//! Store domain type.
//!
//! A store is the unit of tenancy: every other entity belongs to exactly one
//! store, and the store's `user_id` is what mutations are authorized against.

use chrono::{DateTime, Utc};
use serde::Serialize;

use shopsmith_core::{StoreId, UserId};

/// A store owned by a single user identity.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// Unique store id.
    pub id: StoreId,
    /// Store display name.
    pub name: String,
    /// Opaque identity of the owning user.
    pub user_id: UserId,
    /// When the store was created.
    pub created_at: DateTime<Utc>,
    /// When the store was last updated.
    pub updated_at: DateTime<Utc>,
}
