//! PostgreSQL access for the product catalog.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod models;
pub mod repositories;
pub mod schema;
pub mod store;

pub use schema::ensure_schema;
pub use store::PgCatalogStore;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool and open the first connection eagerly so an
/// unreachable database fails startup.
pub async fn create_pool(
    options: PgConnectOptions,
    max_connections: u32,
) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
}
