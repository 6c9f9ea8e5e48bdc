//! [`CatalogStore`] backed by PostgreSQL.

use async_trait::async_trait;
use catalog_core::catalog::CatalogStore;
use catalog_core::error::{CoreError, CoreResult};
use catalog_core::product::{NewProduct, Product};
use catalog_core::types::DbId;
use validator::Validate;

use crate::repositories::ProductRepo;
use crate::DbPool;

/// Cheaply cloneable; the pool is reference counted.
#[derive(Debug, Clone)]
pub struct PgCatalogStore {
    pool: DbPool,
}

impl PgCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Validate and insert a product, returning its public shape.
    pub async fn insert(&self, new: &NewProduct) -> CoreResult<Product> {
        new.validate()?;
        let row = ProductRepo::insert(&self.pool, new)
            .await
            .map_err(classify_sqlx_error)?;
        tracing::info!(id = row.id, game_id = row.game_id, "Product inserted");
        Ok(row.into())
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn list_all(&self) -> CoreResult<Vec<Product>> {
        let rows = ProductRepo::list_visible(&self.pool)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn list_by_game(&self, game_id: DbId) -> CoreResult<Vec<Product>> {
        let rows = ProductRepo::list_visible_by_game(&self.pool, game_id)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn get_by_id(&self, id: DbId) -> CoreResult<Option<Product>> {
        let row = ProductRepo::find_visible_by_id(&self.pool, id)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(row.map(Product::from))
    }
}

/// Classify a sqlx error as either "cannot reach the store" or "the
/// statement failed".
///
/// - Pool exhaustion, a closed pool, I/O, TLS and protocol failures map to
///   [`CoreError::Unavailable`].
/// - Everything else (SQL errors, decode errors) maps to [`CoreError::Query`].
pub fn classify_sqlx_error(err: sqlx::Error) -> CoreError {
    match err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_)
        | sqlx::Error::WorkerCrashed => {
            tracing::error!(error = %err, "Catalog store unavailable");
            CoreError::Unavailable(err.to_string())
        }
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23514") => {
            CoreError::Validation(db_err.message().to_string())
        }
        other => {
            tracing::error!(error = %other, "Catalog query failed");
            CoreError::Query(other.to_string())
        }
    }
}
