//! Database operations for the Shopsmith `PostgreSQL` store.
//!
//! ## Tables
//!
//! - `store` - Tenant root, owned by one user identity
//! - `billboard` - Hero images per store
//! - `category` - Product categories, each fronted by a billboard
//! - `size` / `color` - Simple name/value option rows per store
//! - `product` - Products referencing category, size, and color
//! - `product_image` - Images owned by a product (the only cascade)
//!
//! Foreign keys are RESTRICT except `product_image.product_id`: deleting a
//! row that other rows still reference fails in the database and surfaces
//! through [`RepositoryError::ForeignKeyViolation`].
//!
//! # Migrations
//!
//! Migrations are stored in `crates/api/migrations/` and run via:
//! ```bash
//! cargo run -p shopsmith-cli -- migrate
//! ```

pub mod billboards;
pub mod categories;
pub mod colors;
pub mod products;
pub mod sizes;
pub mod stores;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use billboards::BillboardRepository;
pub use categories::CategoryRepository;
pub use colors::ColorRepository;
pub use products::ProductRepository;
pub use sizes::SizeRepository;
pub use stores::StoreRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// A delete or insert was blocked by a foreign key constraint.
    #[error("foreign key violation: {0}")]
    ForeignKeyViolation(String),
}

/// Map a sqlx error, converting foreign-key constraint failures to
/// [`RepositoryError::ForeignKeyViolation`].
pub(crate) fn map_constraint_error(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = err
        && db_err.is_foreign_key_violation()
    {
        let constraint = db_err.constraint().unwrap_or("unknown").to_owned();
        return RepositoryError::ForeignKeyViolation(constraint);
    }
    RepositoryError::Database(err)
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
