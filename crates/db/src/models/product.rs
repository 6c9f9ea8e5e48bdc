use catalog_core::product::Product;
use catalog_core::types::DbId;
use sqlx::FromRow;

/// A visible-shape row from the `products` table.
///
/// Only the four public columns are selected; the filter columns stay in SQL.
#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
    #[sqlx(rename = "prd_id")]
    pub id: DbId,
    #[sqlx(rename = "prd_name")]
    pub name: String,
    #[sqlx(rename = "prd_general_fix_price")]
    pub price: f64,
    #[sqlx(rename = "prd_game_id")]
    pub game_id: DbId,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            price: row.price,
            game_id: row.game_id,
        }
    }
}
