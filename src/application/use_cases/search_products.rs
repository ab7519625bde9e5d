//! Paginated product search with the palindrome discount rule.

use std::sync::Arc;

use crate::application::dto::{ProductView, SearchProductsOutput};
use crate::domain::repositories::ProductRepository;
use crate::domain::value_objects::{Pagination, SearchQuery};
use crate::error::AppError;

/// Page size used when the caller does not provide one.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Parameters of a product search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchProductsInput {
    /// Raw search text; empty matches all products.
    pub query: String,
    /// Zero-based page index.
    pub page: i64,
    pub page_size: i64,
}

impl Default for SearchProductsInput {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Searches the catalog and prices the resulting page.
///
/// Each call is independent: the use case holds no state besides the
/// shared catalog handle, and never retries a failing catalog source.
pub struct SearchProductsUseCase<R: ProductRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ProductRepository + ?Sized> SearchProductsUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Runs the search.
    ///
    /// # Flow
    ///
    /// 1. Validate pagination (fail fast, nothing is fetched on error)
    /// 2. Fetch the page and the total match count concurrently
    /// 3. Apply the palindrome discount to the page when the query is a palindrome
    /// 4. Project products into [`ProductView`]s with pagination metadata
    ///
    /// `current_page` and `page_size` echo the input unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a negative page or non-positive
    /// page size. Catalog source errors are returned as-is.
    pub async fn execute(&self, input: SearchProductsInput) -> Result<SearchProductsOutput, AppError> {
        let pagination = Pagination::new(input.page, input.page_size)?;
        let search_query = SearchQuery::new(input.query.as_str());

        let (products, total_count) = tokio::try_join!(
            self.repository
                .search(&input.query, pagination.skip(), pagination.take()),
            self.repository.count(&input.query)
        )?;

        let palindrome = search_query.is_palindrome();
        let views: Vec<ProductView> = if palindrome {
            products
                .iter()
                .map(|product| ProductView::from(product.apply_palindrome_discount().as_ref()))
                .collect()
        } else {
            products.iter().map(ProductView::from).collect()
        };

        metrics::counter!(
            "catalog_searches_total",
            "palindrome" => if palindrome { "true" } else { "false" }
        )
        .increment(1);
        if palindrome {
            let discounted = views.iter().filter(|v| v.is_palindrome_discount).count();
            metrics::counter!("catalog_palindrome_discounts_total").increment(discounted as u64);
        }

        tracing::debug!(
            query = %search_query,
            page = input.page,
            page_size = input.page_size,
            palindrome,
            returned = views.len(),
            total_count,
            "Product search completed"
        );

        Ok(SearchProductsOutput {
            products: views,
            total_pages: pagination.total_pages(total_count),
            current_page: input.page,
            page_size: input.page_size,
            total_count,
        })
    }
}
