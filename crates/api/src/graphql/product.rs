use async_graphql::SimpleObject;
use catalog_core::product::Product;
use catalog_core::types::DbId;

/// A product as served to clients.
///
/// Every field is nullable in the schema, matching the published contract;
/// a product read from the store always fills all four.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Product")]
pub struct ProductObject {
    pub id: Option<DbId>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub game_id: Option<DbId>,
}

impl From<Product> for ProductObject {
    fn from(product: Product) -> Self {
        Self {
            id: Some(product.id),
            name: Some(product.name),
            price: Some(product.price),
            game_id: Some(product.game_id),
        }
    }
}
