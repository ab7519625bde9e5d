//! Single product lookup.

use std::sync::Arc;

use crate::application::dto::ProductView;
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;
use serde_json::json;

/// Fetches one product by id. No promotion rule is applied.
pub struct GetProductUseCase<R: ProductRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ProductRepository + ?Sized> GetProductUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product has this id.
    /// Catalog source errors are returned as-is.
    pub async fn execute(&self, id: i64) -> Result<ProductView, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(|product| ProductView::from(&product))
            .ok_or_else(|| AppError::not_found("Product not found", json!({ "id": id })))
    }
}
