//! Database operations for billboards.

use sqlx::PgPool;

use shopsmith_core::{BillboardId, StoreId};

use super::{RepositoryError, map_constraint_error};
use crate::models::Billboard;

const BILLBOARD_COLUMNS: &str = "id, store_id, label, image_url, created_at, updated_at";

/// Repository for billboard database operations.
pub struct BillboardRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> BillboardRepository<'a> {
    /// Create a new billboard repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all billboards in a store, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_store(
        &self,
        store_id: &StoreId,
    ) -> Result<Vec<Billboard>, RepositoryError> {
        let billboards = sqlx::query_as::<_, Billboard>(&format!(
            "SELECT {BILLBOARD_COLUMNS}
             FROM billboard
             WHERE store_id = $1
             ORDER BY created_at DESC",
        ))
        .bind(store_id)
        .fetch_all(self.pool)
        .await?;

        Ok(billboards)
    }

    /// Get a billboard by its id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(
        &self,
        id: &BillboardId,
    ) -> Result<Option<Billboard>, RepositoryError> {
        let billboard = sqlx::query_as::<_, Billboard>(&format!(
            "SELECT {BILLBOARD_COLUMNS}
             FROM billboard
             WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(billboard)
    }

    /// Create a new billboard scoped to a store.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        store_id: &StoreId,
        label: &str,
        image_url: &str,
    ) -> Result<Billboard, RepositoryError> {
        let id = BillboardId::generate();
        let billboard = sqlx::query_as::<_, Billboard>(&format!(
            "INSERT INTO billboard (id, store_id, label, image_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {BILLBOARD_COLUMNS}",
        ))
        .bind(&id)
        .bind(store_id)
        .bind(label)
        .bind(image_url)
        .fetch_one(self.pool)
        .await?;

        Ok(billboard)
    }

    /// Overwrite the billboard's label and image.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no billboard has this id.
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: &BillboardId,
        label: &str,
        image_url: &str,
    ) -> Result<Billboard, RepositoryError> {
        let billboard = sqlx::query_as::<_, Billboard>(&format!(
            "UPDATE billboard
             SET label = $2, image_url = $3, updated_at = now()
             WHERE id = $1
             RETURNING {BILLBOARD_COLUMNS}",
        ))
        .bind(id)
        .bind(label)
        .bind(image_url)
        .fetch_optional(self.pool)
        .await?;

        billboard.ok_or(RepositoryError::NotFound)
    }

    /// Delete the billboard, returning its prior state.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKeyViolation` if any category still
    /// references the billboard.
    /// Returns `RepositoryError::NotFound` if no billboard has this id.
    pub async fn delete(&self, id: &BillboardId) -> Result<Billboard, RepositoryError> {
        let billboard = sqlx::query_as::<_, Billboard>(&format!(
            "DELETE FROM billboard
             WHERE id = $1
             RETURNING {BILLBOARD_COLUMNS}",
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(map_constraint_error)?;

        billboard.ok_or(RepositoryError::NotFound)
    }
}
