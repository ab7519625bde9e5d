//! Handlers for product search and lookup.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::{PathRejection, QueryRejection}},
};
use validator::Validate;

use crate::api::dto::search::SearchParams;
use crate::application::dto::{ProductView, SearchProductsOutput};
use crate::error::AppError;
use crate::state::AppState;

/// Searches the catalog.
///
/// # Endpoint
///
/// `GET /api/products`
///
/// # Query Parameters
///
/// - `query` (optional): Text matched against title and description (max 200 chars)
/// - `page` (optional): Zero-based page index (default: 0)
/// - `pageSize` / `page_size` (optional): Items per page (default: 20)
///
/// When `query` reads as a palindrome, every product on the page carries at
/// least a 50% discount and is flagged with `isPalindromeDiscount`.
///
/// # Response
///
/// ```json
/// {
///   "products": [{ "id": 1, "title": "...", "price": 1000.0, "finalPrice": 500.0,
///                  "isPalindromeDiscount": true,
///                  "promotion": { "id": 0, "code": "PALINDROME", "discount": 50 } }],
///   "totalPages": 1,
///   "currentPage": 0,
///   "pageSize": 20,
///   "totalCount": 1
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for malformed or out-of-range parameters.
pub async fn search_products_handler(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchProductsOutput>, AppError> {
    let Query(params) = params?;
    params.validate()?;

    let output = state.search_products.execute(params.into_input()).await?;

    Ok(Json(output))
}

/// Returns a single product by id.
///
/// # Endpoint
///
/// `GET /api/products/{id}`
///
/// # Errors
///
/// - 400 Bad Request if `id` is not an integer
/// - 404 Not Found if no product has this id
pub async fn get_product_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ProductView>, AppError> {
    let Path(id) = id?;

    let product = state.get_product.execute(id).await?;

    Ok(Json(product))
}
