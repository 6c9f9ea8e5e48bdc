use std::sync::Arc;

use catalog_core::catalog::CatalogStore;

use crate::graphql::{build_schema, CatalogSchema};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the schema is reference counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Executable GraphQL schema with the catalog store attached.
    pub schema: CatalogSchema,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self {
            schema: build_schema(store),
        }
    }
}
