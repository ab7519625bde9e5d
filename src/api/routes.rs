//! API route configuration.

use crate::api::handlers::{get_product_handler, search_products_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public catalog routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET /products`       - Search products (paginated, palindrome-aware)
/// - `GET /products/{id}`  - Fetch a single product
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(search_products_handler))
        .route("/products/{id}", get(get_product_handler))
}
