//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`              - Health check (catalog source)
//! - `GET /api/products`        - Product search
//! - `GET /api/products/{id}`   - Product lookup
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Cross-origin `GET` for the storefront
//! - **Rate limiting** - Per-IP token bucket on `/api`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// The rate limiter keys on the peer address, so the returned service must
/// be served with `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Returns an error if the configured rate limit is invalid.
pub fn app_router(state: AppState, config: &Config) -> anyhow::Result<NormalizePath<Router>> {
    let api_router = api::routes::catalog_routes().layer(rate_limit::layer(
        config.rate_limit_per_second,
        config.rate_limit_burst,
    )?);

    Ok(NormalizePathLayer::trim_trailing_slash().layer(base_router(state, api_router)))
}

/// Router without rate limiting, for callers that cannot supply connect info.
pub fn unthrottled_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash()
        .layer(base_router(state, api::routes::catalog_routes()))
}

fn base_router(state: AppState, api_router: Router<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}
