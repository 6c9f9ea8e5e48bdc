//! Product catalog API server library.
//!
//! Exposes configuration, state, the GraphQL schema and the router so the
//! binary and the integration tests share them.

pub mod config;
pub mod error;
pub mod graphql;
pub mod router;
pub mod routes;
pub mod state;
