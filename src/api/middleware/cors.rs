//! Cross-origin access for the storefront.

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Allows read-only catalog requests from any origin.
///
/// The storefront is served separately from the API, so browsers need CORS
/// headers on every `GET`.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}
