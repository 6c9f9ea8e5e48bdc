use std::sync::Arc;

use async_graphql::{Context, Object, Result};
use catalog_core::catalog::CatalogStore;
use catalog_core::types::DbId;

use super::error::field_error;
use super::product::ProductObject;

/// The GraphQL query root.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryRoot;

fn store<'a>(ctx: &Context<'a>) -> Result<&'a Arc<dyn CatalogStore>> {
    ctx.data::<Arc<dyn CatalogStore>>()
}

#[Object(name = "Query")]
impl QueryRoot {
    /// Visible products, restricted to one game when `gameId` is given.
    async fn products(
        &self,
        ctx: &Context<'_>,
        game_id: Option<DbId>,
    ) -> Result<Option<Vec<Option<ProductObject>>>> {
        let store = store(ctx)?;
        let products = match game_id {
            Some(game_id) => store.list_by_game(game_id).await,
            None => store.list_all().await,
        }
        .map_err(|err| field_error("products", &err))?;

        tracing::debug!(?game_id, count = products.len(), "Resolved products");
        Ok(Some(
            products
                .into_iter()
                .map(|product| Some(ProductObject::from(product)))
                .collect(),
        ))
    }

    /// A single visible product, or null when `id` is missing or matches
    /// nothing.
    async fn product(
        &self,
        ctx: &Context<'_>,
        id: Option<DbId>,
    ) -> Result<Option<ProductObject>> {
        let Some(id) = id else {
            return Ok(None);
        };

        let product = store(ctx)?
            .get_by_id(id)
            .await
            .map_err(|err| field_error("product", &err))?;

        tracing::debug!(id, found = product.is_some(), "Resolved product");
        Ok(product.map(ProductObject::from))
    }
}
