//! Repository trait definitions for the domain layer.
//!
//! The domain depends on a single capability, [`ProductRepository`], which
//! is implemented by the infrastructure layer. Mock implementations are
//! generated via `mockall` for unit tests.

pub mod product_repository;

pub use product_repository::ProductRepository;

#[cfg(test)]
pub use product_repository::MockProductRepository;
