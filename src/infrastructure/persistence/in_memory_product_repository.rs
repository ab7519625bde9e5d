//! In-memory implementation of the product repository.

use async_trait::async_trait;

use crate::domain::entities::Product;
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;
use crate::infrastructure::seed::{SeedError, demo_catalog};

/// Product repository over a fixed, immutable catalog snapshot.
///
/// Applies the same matching and ordering rules as the PostgreSQL
/// repository, so it can stand in for the database during development
/// (`CATALOG_SOURCE=memory`) and in HTTP tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    products: Vec<Product>,
}

impl InMemoryProductRepository {
    /// Creates a repository holding `products`, ordered by id.
    pub fn new(mut products: Vec<Product>) -> Self {
        products.sort_by_key(Product::id);
        Self { products }
    }

    /// Creates a repository pre-loaded with the demo catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`SeedError`] if the demo data is inconsistent.
    pub fn with_demo_catalog() -> Result<Self, SeedError> {
        Ok(Self::new(demo_catalog().into_products()?))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn matching<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Product> + 'a {
        let needle = query.to_lowercase();
        self.products.iter().filter(move |product| {
            needle.is_empty()
                || product.title().to_lowercase().contains(&needle)
                || product
                    .description()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn search(&self, query: &str, skip: i64, take: i64) -> Result<Vec<Product>, AppError> {
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let take = usize::try_from(take).unwrap_or(0);

        Ok(self.matching(query).skip(skip).take(take).cloned().collect())
    }

    async fn count(&self, query: &str) -> Result<i64, AppError> {
        Ok(self.matching(query).count() as i64)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        Ok(self.products.iter().find(|p| p.id() == id).cloned())
    }
}
