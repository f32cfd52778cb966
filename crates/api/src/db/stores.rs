//! Database operations for stores.
//!
//! The store table doubles as the authorization table: the ownership check
//! behind every mutation is [`StoreRepository::find_for_user`], a single
//! point lookup on `(id, user_id)`.

use sqlx::PgPool;

use shopsmith_core::{StoreId, UserId};

use super::{RepositoryError, map_constraint_error};
use crate::models::Store;

/// Repository for store database operations.
pub struct StoreRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StoreRepository<'a> {
    /// Create a new store repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all stores owned by a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Store>, RepositoryError> {
        let stores = sqlx::query_as::<_, Store>(
            "SELECT id, name, user_id, created_at, updated_at
             FROM store
             WHERE user_id = $1
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(stores)
    }

    /// Get a store by its id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: &StoreId) -> Result<Option<Store>, RepositoryError> {
        let store = sqlx::query_as::<_, Store>(
            "SELECT id, name, user_id, created_at, updated_at
             FROM store
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(store)
    }

    /// The ownership point lookup: the store with this id, if it is owned by
    /// this user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_for_user(
        &self,
        id: &StoreId,
        user_id: &UserId,
    ) -> Result<Option<Store>, RepositoryError> {
        let store = sqlx::query_as::<_, Store>(
            "SELECT id, name, user_id, created_at, updated_at
             FROM store
             WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(store)
    }

    /// Create a new store owned by the given user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, user_id: &UserId, name: &str) -> Result<Store, RepositoryError> {
        let id = StoreId::generate();
        let store = sqlx::query_as::<_, Store>(
            "INSERT INTO store (id, name, user_id)
             VALUES ($1, $2, $3)
             RETURNING id, name, user_id, created_at, updated_at",
        )
        .bind(&id)
        .bind(name)
        .bind(user_id)
        .fetch_one(self.pool)
        .await?;

        Ok(store)
    }

    /// Overwrite the store's name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no store has this id.
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(&self, id: &StoreId, name: &str) -> Result<Store, RepositoryError> {
        let store = sqlx::query_as::<_, Store>(
            "UPDATE store
             SET name = $2, updated_at = now()
             WHERE id = $1
             RETURNING id, name, user_id, created_at, updated_at",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        store.ok_or(RepositoryError::NotFound)
    }

    /// Delete the store, returning its prior state.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKeyViolation` if any billboard,
    /// category, size, color, or product still references the store.
    /// Returns `RepositoryError::NotFound` if no store has this id.
    pub async fn delete(&self, id: &StoreId) -> Result<Store, RepositoryError> {
        let store = sqlx::query_as::<_, Store>(
            "DELETE FROM store
             WHERE id = $1
             RETURNING id, name, user_id, created_at, updated_at",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(map_constraint_error)?;

        store.ok_or(RepositoryError::NotFound)
    }
}
