//! Catalog source implementations.
//!
//! # Repositories
//!
//! - [`PgProductRepository`] - PostgreSQL-backed product search
//! - [`InMemoryProductRepository`] - Fixed in-memory catalog snapshot

pub mod in_memory_product_repository;
pub mod pg_product_repository;

pub use in_memory_product_repository::InMemoryProductRepository;
pub use pg_product_repository::PgProductRepository;
