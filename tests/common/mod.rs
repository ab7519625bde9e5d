#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, routing::get};
use catalog_search::api::handlers::{get_product_handler, health_handler, search_products_handler};
use catalog_search::domain::entities::Product;
use catalog_search::domain::repositories::ProductRepository;
use catalog_search::error::AppError;
use catalog_search::infrastructure::persistence::InMemoryProductRepository;
use catalog_search::state::AppState;
use serde_json::json;
use std::sync::Arc;

/// State backed by the ten-product demo catalog.
pub fn create_test_state() -> AppState {
    let catalog = InMemoryProductRepository::with_demo_catalog().unwrap();
    AppState::new(Arc::new(catalog))
}

/// Catalog routes without rate limiting, as the handlers see them in production.
pub fn create_test_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/products", get(search_products_handler))
        .route("/api/products/{id}", get(get_product_handler))
        .with_state(state)
}

/// Catalog source whose every call fails, like an unreachable database.
pub struct UnavailableCatalog;

#[async_trait]
impl ProductRepository for UnavailableCatalog {
    async fn search(&self, _query: &str, _skip: i64, _take: i64) -> Result<Vec<Product>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn count(&self, _query: &str) -> Result<i64, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Product>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }
}
