//! Repository for the `products` table.
//!
//! Every read carries [`VISIBLE`]; there is intentionally no unfiltered
//! select.

use catalog_core::product::NewProduct;
use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::ProductRow;

/// Column list for product reads.
const COLUMNS: &str = "prd_id, prd_name, prd_general_fix_price, prd_game_id";

/// Visibility predicate shared by all reads.
const VISIBLE: &str = "prd_status > 0 AND prd_hide_stock = 0";

/// Provides data access for products.
pub struct ProductRepo;

impl ProductRepo {
    /// All visible products ordered by id.
    pub async fn list_visible(pool: &PgPool) -> Result<Vec<ProductRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE {VISIBLE} ORDER BY prd_id");
        sqlx::query_as::<_, ProductRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Visible products of one game ordered by id.
    pub async fn list_visible_by_game(
        pool: &PgPool,
        game_id: DbId,
    ) -> Result<Vec<ProductRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products \
             WHERE prd_game_id = $1 AND {VISIBLE} \
             ORDER BY prd_id"
        );
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(game_id)
            .fetch_all(pool)
            .await
    }

    /// The visible product with the given id.
    ///
    /// Returns `None` both for missing and for filtered-out rows.
    pub async fn find_visible_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProductRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE prd_id = $1 AND {VISIBLE}");
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a product with explicit flags. Used for seeding; callers
    /// validate `dto` first.
    pub async fn insert(pool: &PgPool, dto: &NewProduct) -> Result<ProductRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO products \
                 (prd_name, prd_general_fix_price, prd_game_id, prd_status, prd_hide_stock) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(&dto.name)
            .bind(dto.price)
            .bind(dto.game_id)
            .bind(dto.status)
            .bind(dto.hide_stock)
            .fetch_one(pool)
            .await
    }
}
