//! GraphQL schema for the product catalog.
//!
//! One query root, no mutations, no subscriptions:
//!
//! ```text
//! type Product { id: Int, name: String, price: Float, gameId: Int }
//!
//! type Query {
//!   products(gameId: Int): [Product]
//!   product(id: Int): Product
//! }
//! ```
//!
//! Both root fields are nullable so a store failure in one leaves the other's
//! data intact.

use std::sync::Arc;

use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use catalog_core::catalog::CatalogStore;

pub mod error;
pub mod limits;
pub mod product;
pub mod query;

pub use limits::{Limit, QueryLimits};
pub use product::ProductObject;
pub use query::QueryRoot;

pub type CatalogSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Ceiling for catalog queries.
pub const QUERY_LIMIT: Limit = Limit {
    depth: 8,
    complexity: 256,
};

/// Ceiling for introspection-only queries, sized for the full query
/// GraphiQL sends on load.
pub const INTROSPECTION_LIMIT: Limit = Limit {
    depth: 20,
    complexity: 1024,
};

/// Build the executable schema with `store` injected as context data.
pub fn build_schema(store: Arc<dyn CatalogStore>) -> CatalogSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(store)
        .extension(QueryLimits {
            query: QUERY_LIMIT,
            introspection: INTROSPECTION_LIMIT,
        })
        .finish()
}
