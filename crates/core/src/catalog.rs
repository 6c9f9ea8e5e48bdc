//! The read contract every catalog backend implements.
//!
//! Resolvers hold an `Arc<dyn CatalogStore>` so the PostgreSQL store and the
//! in-memory store are interchangeable.

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::product::Product;
use crate::types::DbId;

/// Read-only access to visible products.
///
/// Every operation applies the visibility rule from
/// [`is_visible`](crate::product::is_visible); there is no way to opt out.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All visible products in primary-key order.
    async fn list_all(&self) -> CoreResult<Vec<Product>>;

    /// Visible products belonging to `game_id`, in primary-key order.
    ///
    /// An unknown game yields an empty list.
    async fn list_by_game(&self, game_id: DbId) -> CoreResult<Vec<Product>>;

    /// The visible product with the given id, or `None`.
    async fn get_by_id(&self, id: DbId) -> CoreResult<Option<Product>>;
}
