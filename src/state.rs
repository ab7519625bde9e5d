//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::use_cases::{GetProductUseCase, SearchProductsUseCase};
use crate::domain::repositories::ProductRepository;

/// Handler state: use cases sharing one catalog handle.
///
/// Cloning is cheap; every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub search_products: Arc<SearchProductsUseCase<dyn ProductRepository>>,
    pub get_product: Arc<GetProductUseCase<dyn ProductRepository>>,
    /// Direct catalog access for health checks.
    pub catalog: Arc<dyn ProductRepository>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn ProductRepository>) -> Self {
        Self {
            search_products: Arc::new(SearchProductsUseCase::new(catalog.clone())),
            get_product: Arc::new(GetProductUseCase::new(catalog.clone())),
            catalog,
        }
    }
}
