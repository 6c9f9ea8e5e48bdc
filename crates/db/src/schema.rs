//! Idempotent table provisioning.
//!
//! There is no migration history: the serving process only guarantees that
//! the `products` table and its game index exist.

use crate::DbPool;

const CREATE_PRODUCTS: &str = "\
    CREATE TABLE IF NOT EXISTS products ( \
        prd_id SERIAL PRIMARY KEY, \
        prd_name VARCHAR(255) NOT NULL CHECK (prd_name <> ''), \
        prd_general_fix_price DOUBLE PRECISION NOT NULL CHECK ( \
            prd_general_fix_price >= 0 \
            AND prd_general_fix_price <> 'NaN' \
            AND prd_general_fix_price <> 'Infinity' \
        ), \
        prd_game_id INTEGER NOT NULL, \
        prd_status SMALLINT NOT NULL DEFAULT 1, \
        prd_hide_stock SMALLINT NOT NULL DEFAULT 0 \
    )";

const CREATE_GAME_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_products_game_id ON products (prd_game_id)";

/// Create the `products` table and its index when absent. Safe to call on
/// every startup.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_PRODUCTS).execute(pool).await?;
    sqlx::query(CREATE_GAME_INDEX).execute(pool).await?;
    tracing::debug!("products table ensured");
    Ok(())
}
