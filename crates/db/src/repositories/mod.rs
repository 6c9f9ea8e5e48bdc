//! SQL for each table, one zero-sized repo per table.

pub mod product_repo;

pub use product_repo::ProductRepo;
