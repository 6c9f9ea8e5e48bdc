//! Mapping from store errors to GraphQL field errors.

use async_graphql::ErrorExtensions;
use catalog_core::error::CoreError;

/// Turn a store error into a field error with a sanitized message and an
/// `extensions.code`. The underlying error is logged, not returned.
pub fn field_error(field: &'static str, err: &CoreError) -> async_graphql::Error {
    tracing::warn!(field, error = %err, "Catalog store error surfaced as field error");

    let (code, message) = match err {
        CoreError::Unavailable(_) => ("STORE_UNAVAILABLE", "Catalog store is unavailable".to_string()),
        CoreError::Query(_) => ("STORE_QUERY_FAILED", "Catalog query failed".to_string()),
        CoreError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
    };

    async_graphql::Error::new(message).extend_with(|_, ext| ext.set("code", code))
}
