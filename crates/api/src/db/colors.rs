//! Database operations for colors.

use sqlx::PgPool;

use shopsmith_core::{ColorId, StoreId};

use super::{RepositoryError, map_constraint_error};
use crate::models::Color;

const COLOR_COLUMNS: &str = "id, store_id, name, value, created_at, updated_at";

/// Repository for color database operations.
pub struct ColorRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ColorRepository<'a> {
    /// Create a new color repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all colors in a store, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_store(&self, store_id: &StoreId) -> Result<Vec<Color>, RepositoryError> {
        let colors = sqlx::query_as::<_, Color>(&format!(
            "SELECT {COLOR_COLUMNS}
             FROM color
             WHERE store_id = $1
             ORDER BY created_at DESC",
        ))
        .bind(store_id)
        .fetch_all(self.pool)
        .await?;

        Ok(colors)
    }

    /// Get a color by its id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: &ColorId) -> Result<Option<Color>, RepositoryError> {
        let color = sqlx::query_as::<_, Color>(&format!(
            "SELECT {COLOR_COLUMNS}
             FROM color
             WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(color)
    }

    /// Create a new color scoped to a store.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        store_id: &StoreId,
        name: &str,
        value: &str,
    ) -> Result<Color, RepositoryError> {
        let id = ColorId::generate();
        let color = sqlx::query_as::<_, Color>(&format!(
            "INSERT INTO color (id, store_id, name, value)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLOR_COLUMNS}",
        ))
        .bind(&id)
        .bind(store_id)
        .bind(name)
        .bind(value)
        .fetch_one(self.pool)
        .await?;

        Ok(color)
    }

    /// Overwrite the color's name and value.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no color has this id.
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: &ColorId,
        name: &str,
        value: &str,
    ) -> Result<Color, RepositoryError> {
        let color = sqlx::query_as::<_, Color>(&format!(
            "UPDATE color
             SET name = $2, value = $3, updated_at = now()
             WHERE id = $1
             RETURNING {COLOR_COLUMNS}",
        ))
        .bind(id)
        .bind(name)
        .bind(value)
        .fetch_optional(self.pool)
        .await?;

        color.ok_or(RepositoryError::NotFound)
    }

    /// Delete the color, returning its prior state.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKeyViolation` if any product still
    /// references the color.
    /// Returns `RepositoryError::NotFound` if no color has this id.
    pub async fn delete(&self, id: &ColorId) -> Result<Color, RepositoryError> {
        let color = sqlx::query_as::<_, Color>(&format!(
            "DELETE FROM color
             WHERE id = $1
             RETURNING {COLOR_COLUMNS}",
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(map_constraint_error)?;

        color.ok_or(RepositoryError::NotFound)
    }
}
