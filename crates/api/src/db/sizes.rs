//! Database operations for sizes.

use sqlx::PgPool;

use shopsmith_core::{SizeId, StoreId};

use super::{RepositoryError, map_constraint_error};
use crate::models::Size;

const SIZE_COLUMNS: &str = "id, store_id, name, value, created_at, updated_at";

/// Repository for size database operations.
pub struct SizeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SizeRepository<'a> {
    /// Create a new size repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all sizes in a store, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_store(&self, store_id: &StoreId) -> Result<Vec<Size>, RepositoryError> {
        let sizes = sqlx::query_as::<_, Size>(&format!(
            "SELECT {SIZE_COLUMNS}
             FROM size
             WHERE store_id = $1
             ORDER BY created_at DESC",
        ))
        .bind(store_id)
        .fetch_all(self.pool)
        .await?;

        Ok(sizes)
    }

    /// Get a size by its id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: &SizeId) -> Result<Option<Size>, RepositoryError> {
        let size = sqlx::query_as::<_, Size>(&format!(
            "SELECT {SIZE_COLUMNS}
             FROM size
             WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(size)
    }

    /// Create a new size scoped to a store.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        store_id: &StoreId,
        name: &str,
        value: &str,
    ) -> Result<Size, RepositoryError> {
        let id = SizeId::generate();
        let size = sqlx::query_as::<_, Size>(&format!(
            "INSERT INTO size (id, store_id, name, value)
             VALUES ($1, $2, $3, $4)
             RETURNING {SIZE_COLUMNS}",
        ))
        .bind(&id)
        .bind(store_id)
        .bind(name)
        .bind(value)
        .fetch_one(self.pool)
        .await?;

        Ok(size)
    }

    /// Overwrite the size's name and value.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no size has this id.
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: &SizeId,
        name: &str,
        value: &str,
    ) -> Result<Size, RepositoryError> {
        let size = sqlx::query_as::<_, Size>(&format!(
            "UPDATE size
             SET name = $2, value = $3, updated_at = now()
             WHERE id = $1
             RETURNING {SIZE_COLUMNS}",
        ))
        .bind(id)
        .bind(name)
        .bind(value)
        .fetch_optional(self.pool)
        .await?;

        size.ok_or(RepositoryError::NotFound)
    }

    /// Delete the size, returning its prior state.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKeyViolation` if any product still
    /// references the size.
    /// Returns `RepositoryError::NotFound` if no size has this id.
    pub async fn delete(&self, id: &SizeId) -> Result<Size, RepositoryError> {
        let size = sqlx::query_as::<_, Size>(&format!(
            "DELETE FROM size
             WHERE id = $1
             RETURNING {SIZE_COLUMNS}",
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(map_constraint_error)?;

        size.ok_or(RepositoryError::NotFound)
    }
}
