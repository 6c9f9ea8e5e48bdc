//! Depth and complexity limits applied per request.
//!
//! Catalog queries are shallow, so their ceiling is tight. Introspection
//! queries (every root field is `__schema`, `__type` or `__typename`) nest
//! `ofType` many levels deep and get a separate, looser ceiling so GraphiQL
//! can load the schema.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_graphql::extensions::{
    Extension, ExtensionContext, ExtensionFactory, NextParseQuery, NextValidation,
};
use async_graphql::parser::types::{ExecutableDocument, Selection};
use async_graphql::{ServerError, ServerResult, ValidationResult, Variables};

/// Ceiling for one class of query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    pub depth: usize,
    pub complexity: usize,
}

/// Extension factory holding the ceilings for catalog and introspection
/// queries.
#[derive(Debug, Clone, Copy)]
pub struct QueryLimits {
    pub query: Limit,
    pub introspection: Limit,
}

impl ExtensionFactory for QueryLimits {
    fn create(&self) -> Arc<dyn Extension> {
        Arc::new(QueryLimitsExtension {
            limits: *self,
            introspection_only: AtomicBool::new(false),
        })
    }
}

struct QueryLimitsExtension {
    limits: QueryLimits,
    introspection_only: AtomicBool,
}

/// True when every operation selects only `__`-prefixed root fields.
/// Fragment spreads at the root count as ordinary selections.
fn is_introspection_only(document: &ExecutableDocument) -> bool {
    document.operations.iter().all(|(_, operation)| {
        operation
            .node
            .selection_set
            .node
            .items
            .iter()
            .all(|selection| match &selection.node {
                Selection::Field(field) => field.node.name.node.as_str().starts_with("__"),
                _ => false,
            })
    })
}

#[async_trait::async_trait]
impl Extension for QueryLimitsExtension {
    async fn parse_query(
        &self,
        ctx: &ExtensionContext<'_>,
        query: &str,
        variables: &Variables,
        next: NextParseQuery<'_>,
    ) -> ServerResult<ExecutableDocument> {
        let document = next.run(ctx, query, variables).await?;
        self.introspection_only
            .store(is_introspection_only(&document), Ordering::Relaxed);
        Ok(document)
    }

    async fn validation(
        &self,
        ctx: &ExtensionContext<'_>,
        next: NextValidation<'_>,
    ) -> Result<ValidationResult, Vec<ServerError>> {
        let result = next.run(ctx).await?;
        let limit = if self.introspection_only.load(Ordering::Relaxed) {
            self.limits.introspection
        } else {
            self.limits.query
        };

        if result.complexity > limit.complexity {
            tracing::warn!(complexity = result.complexity, "Rejected query: too complex");
            return Err(vec![ServerError::new("Query is too complex.", None)]);
        }
        if result.depth > limit.depth {
            tracing::warn!(depth = result.depth, "Rejected query: nested too deep");
            return Err(vec![ServerError::new("Query is nested too deep.", None)]);
        }
        Ok(result)
    }
}
