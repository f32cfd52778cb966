//! Store management commands.
//!
//! # Usage
//!
//! ```bash
//! shopsmith store create -u user_2abCdEf -n "Acme Outfitters"
//! ```
//!
//! # Environment Variables
//!
//! - `SHOPSMITH_DATABASE_URL` - `PostgreSQL` connection string
//!   (falls back to `DATABASE_URL`)

use sqlx::PgPool;
use thiserror::Error;

use shopsmith_api::db::{RepositoryError, StoreRepository};
use shopsmith_core::UserId;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Repository error.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),
}

/// Create a store owned by the given user.
///
/// # Errors
///
/// Returns `StoreError` if the inputs are blank, the database URL is
/// missing, or the insert fails.
pub async fn create(user: &str, name: &str) -> Result<(), StoreError> {
    dotenvy::dotenv().ok();

    if user.trim().is_empty() {
        return Err(StoreError::InvalidInput("user id must not be blank"));
    }
    if name.trim().is_empty() {
        return Err(StoreError::InvalidInput("store name must not be blank"));
    }

    let database_url = std::env::var("SHOPSMITH_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| StoreError::MissingEnvVar("SHOPSMITH_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&database_url).await?;

    tracing::info!("Creating store: {} (owner {})", name, user);
    let store = StoreRepository::new(&pool)
        .create(&UserId::new(user), name)
        .await?;

    tracing::info!("Store created successfully! ID: {}", store.id);
    Ok(())
}
