//! Repository trait for catalog product data access.

use crate::domain::entities::Product;
use crate::error::AppError;
use async_trait::async_trait;

/// Catalog source the search use cases read products from.
///
/// Both `search` and `count` apply the same predicate: a case-insensitive
/// substring match of the raw query against the product title or
/// description, where an empty query matches every product. Results are
/// ordered by ascending product id.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProductRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryProductRepository`] - Fixed in-memory snapshot
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_product.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns one page of products matching `query`.
    ///
    /// # Arguments
    ///
    /// - `query` - Raw search text; empty matches all products
    /// - `skip` - Number of matching products to skip (offset)
    /// - `take` - Maximum number of products to return (limit)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the data source fails.
    async fn search(&self, query: &str, skip: i64, take: i64) -> Result<Vec<Product>, AppError>;

    /// Counts all products matching `query`, ignoring pagination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the data source fails.
    async fn count(&self, query: &str) -> Result<i64, AppError>;

    /// Finds a single product by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Product))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the data source fails.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;
}
