//! Database operations for categories.
//!
//! Single-category reads embed the referenced billboard, which is what the
//! storefront consumers render category pages from.

use sqlx::PgPool;

use shopsmith_core::{BillboardId, CategoryId, StoreId};

use super::{RepositoryError, map_constraint_error};
use crate::models::{Billboard, Category, CategoryWithBillboard};

const CATEGORY_COLUMNS: &str = "id, store_id, billboard_id, name, created_at, updated_at";

/// Joined row for a category with its billboard (billboard columns aliased
/// with a `b_` prefix).
#[derive(Debug, sqlx::FromRow)]
struct CategoryBillboardRow {
    id: CategoryId,
    store_id: StoreId,
    billboard_id: BillboardId,
    name: String,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
    b_id: BillboardId,
    b_store_id: StoreId,
    b_label: String,
    b_image_url: String,
    b_created_at: chrono::DateTime<chrono::Utc>,
    b_updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<CategoryBillboardRow> for CategoryWithBillboard {
    fn from(row: CategoryBillboardRow) -> Self {
        Self {
            category: Category {
                id: row.id,
                store_id: row.store_id,
                billboard_id: row.billboard_id,
                name: row.name,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            billboard: Billboard {
                id: row.b_id,
                store_id: row.b_store_id,
                label: row.b_label,
                image_url: row.b_image_url,
                created_at: row.b_created_at,
                updated_at: row.b_updated_at,
            },
        }
    }
}

/// Repository for category database operations.
pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    /// Create a new category repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all categories in a store, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_store(
        &self,
        store_id: &StoreId,
    ) -> Result<Vec<Category>, RepositoryError> {
        let categories = sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS}
             FROM category
             WHERE store_id = $1
             ORDER BY created_at DESC",
        ))
        .bind(store_id)
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Get a category by its id, with its billboard embedded.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(
        &self,
        id: &CategoryId,
    ) -> Result<Option<CategoryWithBillboard>, RepositoryError> {
        let row = sqlx::query_as::<_, CategoryBillboardRow>(
            "SELECT c.id, c.store_id, c.billboard_id, c.name, c.created_at, c.updated_at,
                    b.id AS b_id, b.store_id AS b_store_id, b.label AS b_label,
                    b.image_url AS b_image_url, b.created_at AS b_created_at,
                    b.updated_at AS b_updated_at
             FROM category c
             JOIN billboard b ON b.id = c.billboard_id
             WHERE c.id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Create a new category scoped to a store.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKeyViolation` if the billboard does
    /// not exist.
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        store_id: &StoreId,
        billboard_id: &BillboardId,
        name: &str,
    ) -> Result<Category, RepositoryError> {
        let id = CategoryId::generate();
        let category = sqlx::query_as::<_, Category>(&format!(
            "INSERT INTO category (id, store_id, billboard_id, name)
             VALUES ($1, $2, $3, $4)
             RETURNING {CATEGORY_COLUMNS}",
        ))
        .bind(&id)
        .bind(store_id)
        .bind(billboard_id)
        .bind(name)
        .fetch_one(self.pool)
        .await
        .map_err(map_constraint_error)?;

        Ok(category)
    }

    /// Overwrite the category's name and billboard reference.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no category has this id.
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: &CategoryId,
        billboard_id: &BillboardId,
        name: &str,
    ) -> Result<Category, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(&format!(
            "UPDATE category
             SET billboard_id = $2, name = $3, updated_at = now()
             WHERE id = $1
             RETURNING {CATEGORY_COLUMNS}",
        ))
        .bind(id)
        .bind(billboard_id)
        .bind(name)
        .fetch_optional(self.pool)
        .await
        .map_err(map_constraint_error)?;

        category.ok_or(RepositoryError::NotFound)
    }

    /// Delete the category, returning its prior state.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKeyViolation` if any product still
    /// references the category.
    /// Returns `RepositoryError::NotFound` if no category has this id.
    pub async fn delete(&self, id: &CategoryId) -> Result<Category, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(&format!(
            "DELETE FROM category
             WHERE id = $1
             RETURNING {CATEGORY_COLUMNS}",
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(map_constraint_error)?;

        category.ok_or(RepositoryError::NotFound)
    }
}
