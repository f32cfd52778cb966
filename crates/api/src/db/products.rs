//! Database operations for products and their images.
//!
//! Product rows and their image rows are written together in one
//! transaction; reads attach images plus the referenced category, size, and
//! color via batched lookups.

use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::PgPool;

use shopsmith_core::{CategoryId, ColorId, ImageId, ProductId, SizeId, StoreId};

use super::{RepositoryError, map_constraint_error};
use crate::models::{Category, Color, Image, Product, ProductWithRelations, Size};

const PRODUCT_COLUMNS: &str = "id, store_id, category_id, size_id, color_id, name, price, \
                               is_featured, is_archived, created_at, updated_at";

const IMAGE_COLUMNS: &str = "id, product_id, url, created_at, updated_at";

/// Validated input for creating or replacing a product.
#[derive(Debug, Clone)]
pub struct ProductInput {
    pub name: String,
    pub price: Decimal,
    pub category_id: CategoryId,
    pub size_id: SizeId,
    pub color_id: ColorId,
    pub is_featured: bool,
    pub is_archived: bool,
    pub image_urls: Vec<String>,
}

/// Optional equality filters for product listings.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category_id: Option<CategoryId>,
    pub size_id: Option<SizeId>,
    pub color_id: Option<ColorId>,
    /// When set, only featured products are returned.
    pub featured_only: bool,
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List products in a store matching the filter, newest first, with
    /// relations attached. Archived products are always excluded.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    /// Returns `RepositoryError::DataCorruption` if a product references a
    /// missing category, size, or color.
    pub async fn list_for_store(
        &self,
        store_id: &StoreId,
        filter: &ProductFilter,
    ) -> Result<Vec<ProductWithRelations>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS}
             FROM product
             WHERE store_id = $1
               AND is_archived = FALSE
               AND ($2::text IS NULL OR category_id = $2)
               AND ($3::text IS NULL OR size_id = $3)
               AND ($4::text IS NULL OR color_id = $4)
               AND ($5::boolean IS FALSE OR is_featured = TRUE)
             ORDER BY created_at DESC",
        ))
        .bind(store_id)
        .bind(filter.category_id.as_ref())
        .bind(filter.size_id.as_ref())
        .bind(filter.color_id.as_ref())
        .bind(filter.featured_only)
        .fetch_all(self.pool)
        .await?;

        self.attach_relations(products).await
    }

    /// Get a product by its id, with relations attached.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    /// Returns `RepositoryError::DataCorruption` if the product references a
    /// missing category, size, or color.
    pub async fn get_by_id(
        &self,
        id: &ProductId,
    ) -> Result<Option<ProductWithRelations>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS}
             FROM product
             WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        let Some(product) = product else {
            return Ok(None);
        };

        let mut with_relations = self.attach_relations(vec![product]).await?;
        Ok(with_relations.pop())
    }

    /// Create a new product and its images atomically.
    ///
    /// Returns the bare product row; images are written but not read back.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKeyViolation` if the referenced
    /// category, size, or color does not exist.
    /// Returns `RepositoryError::Database` if the transaction fails.
    pub async fn create(
        &self,
        store_id: &StoreId,
        input: &ProductInput,
    ) -> Result<Product, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let id = ProductId::generate();
        let product = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO product
                 (id, store_id, category_id, size_id, color_id, name, price,
                  is_featured, is_archived)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {PRODUCT_COLUMNS}",
        ))
        .bind(&id)
        .bind(store_id)
        .bind(&input.category_id)
        .bind(&input.size_id)
        .bind(&input.color_id)
        .bind(&input.name)
        .bind(input.price)
        .bind(input.is_featured)
        .bind(input.is_archived)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_constraint_error)?;

        insert_images(&mut tx, &product.id, &input.image_urls).await?;

        tx.commit().await?;
        Ok(product)
    }

    /// Overwrite the product's fields and replace its images atomically.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has this id.
    /// Returns `RepositoryError::ForeignKeyViolation` if the referenced
    /// category, size, or color does not exist.
    /// Returns `RepositoryError::Database` if the transaction fails.
    pub async fn update(
        &self,
        id: &ProductId,
        input: &ProductInput,
    ) -> Result<Product, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let product = sqlx::query_as::<_, Product>(&format!(
            "UPDATE product
             SET category_id = $2, size_id = $3, color_id = $4, name = $5,
                 price = $6, is_featured = $7, is_archived = $8,
                 updated_at = now()
             WHERE id = $1
             RETURNING {PRODUCT_COLUMNS}",
        ))
        .bind(id)
        .bind(&input.category_id)
        .bind(&input.size_id)
        .bind(&input.color_id)
        .bind(&input.name)
        .bind(input.price)
        .bind(input.is_featured)
        .bind(input.is_archived)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_constraint_error)?
        .ok_or(RepositoryError::NotFound)?;

        sqlx::query("DELETE FROM product_image WHERE product_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        insert_images(&mut tx, &product.id, &input.image_urls).await?;

        tx.commit().await?;
        Ok(product)
    }

    /// Delete the product, returning its prior state. Images cascade.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has this id.
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "DELETE FROM product
             WHERE id = $1
             RETURNING {PRODUCT_COLUMNS}",
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(map_constraint_error)?;

        product.ok_or(RepositoryError::NotFound)
    }

    /// Attach images and the referenced category/size/color to each product
    /// via batched `ANY($1)` lookups.
    async fn attach_relations(
        &self,
        products: Vec<Product>,
    ) -> Result<Vec<ProductWithRelations>, RepositoryError> {
        if products.is_empty() {
            return Ok(Vec::new());
        }

        let product_ids: Vec<String> = products.iter().map(|p| p.id.to_string()).collect();
        let category_ids: Vec<String> = products.iter().map(|p| p.category_id.to_string()).collect();
        let size_ids: Vec<String> = products.iter().map(|p| p.size_id.to_string()).collect();
        let color_ids: Vec<String> = products.iter().map(|p| p.color_id.to_string()).collect();

        let images = sqlx::query_as::<_, Image>(&format!(
            "SELECT {IMAGE_COLUMNS}
             FROM product_image
             WHERE product_id = ANY($1)
             ORDER BY created_at",
        ))
        .bind(&product_ids)
        .fetch_all(self.pool)
        .await?;

        let mut images_by_product: HashMap<ProductId, Vec<Image>> = HashMap::new();
        for image in images {
            images_by_product
                .entry(image.product_id.clone())
                .or_default()
                .push(image);
        }

        let categories: HashMap<CategoryId, Category> = sqlx::query_as::<_, Category>(
            "SELECT id, store_id, billboard_id, name, created_at, updated_at
             FROM category
             WHERE id = ANY($1)",
        )
        .bind(&category_ids)
        .fetch_all(self.pool)
        .await?
        .into_iter()
        .map(|c| (c.id.clone(), c))
        .collect();

        let sizes: HashMap<SizeId, Size> = sqlx::query_as::<_, Size>(
            "SELECT id, store_id, name, value, created_at, updated_at
             FROM size
             WHERE id = ANY($1)",
        )
        .bind(&size_ids)
        .fetch_all(self.pool)
        .await?
        .into_iter()
        .map(|s| (s.id.clone(), s))
        .collect();

        let colors: HashMap<ColorId, Color> = sqlx::query_as::<_, Color>(
            "SELECT id, store_id, name, value, created_at, updated_at
             FROM color
             WHERE id = ANY($1)",
        )
        .bind(&color_ids)
        .fetch_all(self.pool)
        .await?
        .into_iter()
        .map(|c| (c.id.clone(), c))
        .collect();

        products
            .into_iter()
            .map(|product| {
                let category = categories.get(&product.category_id).cloned().ok_or_else(|| {
                    missing_relation(&product.id, "category", product.category_id.as_str())
                })?;
                let size = sizes.get(&product.size_id).cloned().ok_or_else(|| {
                    missing_relation(&product.id, "size", product.size_id.as_str())
                })?;
                let color = colors.get(&product.color_id).cloned().ok_or_else(|| {
                    missing_relation(&product.id, "color", product.color_id.as_str())
                })?;
                let images = images_by_product.remove(&product.id).unwrap_or_default();

                Ok(ProductWithRelations {
                    product,
                    images,
                    category,
                    size,
                    color,
                })
            })
            .collect()
    }
}

fn missing_relation(product_id: &ProductId, kind: &str, id: &str) -> RepositoryError {
    RepositoryError::DataCorruption(format!(
        "product {product_id} references missing {kind} {id}"
    ))
}

/// Insert image rows for a product inside an open transaction.
async fn insert_images(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    product_id: &ProductId,
    urls: &[String],
) -> Result<(), RepositoryError> {
    for url in urls {
        sqlx::query("INSERT INTO product_image (id, product_id, url) VALUES ($1, $2, $3)")
            .bind(ImageId::generate())
            .bind(product_id)
            .bind(url)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}
