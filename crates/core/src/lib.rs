//! Domain types and the catalog store seam shared by the db and api crates.

pub mod catalog;
pub mod error;
pub mod memory;
pub mod product;
pub mod types;
