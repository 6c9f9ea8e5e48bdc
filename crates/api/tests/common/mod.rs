#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use catalog_core::catalog::CatalogStore;
use catalog_core::memory::InMemoryCatalogStore;
use catalog_core::product::NewProduct;
use http_body_util::BodyExt;
use tower::ServiceExt;

use catalog_api::config::ServerConfig;
use catalog_api::router::build_app_router;
use catalog_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        ..ServerConfig::default()
    }
}

/// Build the full application router, middleware included, over `store`.
pub fn build_test_app(store: Arc<dyn CatalogStore>) -> Router {
    build_app_router(AppState::new(store), &test_config()).unwrap()
}

/// An in-memory catalog with a fixed shape:
///
/// | id | name         | game | served |
/// |----|--------------|------|--------|
/// | 1  | Gold Pack    | 1    | yes    |
/// | 2  | Retired Pack | 1    | no (status 0) |
/// | 3  | Gem Bundle   | 2    | yes    |
/// | 4  | Hidden Skin  | 2    | no (hide_stock 1) |
/// | 5  | Silver Pack  | 1    | yes    |
pub async fn seeded_store() -> Arc<InMemoryCatalogStore> {
    let store = Arc::new(InMemoryCatalogStore::new());
    for new in [
        NewProduct::visible("Gold Pack", 9.99, 1),
        NewProduct::visible("Retired Pack", 2.5, 1).with_flags(0, 0),
        NewProduct::visible("Gem Bundle", 19.0, 2),
        NewProduct::visible("Hidden Skin", 7.25, 2).with_flags(1, 1),
        NewProduct::visible("Silver Pack", 4.99, 1),
    ] {
        store.insert(new).await.unwrap();
    }
    store
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// POST a GraphQL query and return the parsed response envelope.
pub async fn graphql(app: Router, query: &str) -> serde_json::Value {
    graphql_with_variables(app, query, serde_json::json!({})).await
}

pub async fn graphql_with_variables(
    app: Router,
    query: &str,
    variables: serde_json::Value,
) -> serde_json::Value {
    let response = post_json(
        app,
        "/graphql",
        serde_json::json!({ "query": query, "variables": variables }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await
}
