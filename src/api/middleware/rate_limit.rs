//! Rate limiting middleware using token bucket algorithm.

use anyhow::Context;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Per-IP rate limiter for the catalog API.
pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a rate limiter for the public catalog endpoints.
///
/// # Limits
///
/// - **Rate**: `per_second` requests per second, replenished evenly
/// - **Burst**: `burst` requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the service must be served with connect info.
///
/// # Errors
///
/// Returns an error if either value is zero.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/products", get(search_products_handler))
///     .layer(rate_limit::layer(10, 50)?);
/// ```
pub fn layer(per_second: u32, burst: u32) -> anyhow::Result<RateLimitLayer> {
    anyhow::ensure!(per_second > 0, "Rate limit must allow at least one request per second");

    // The builder takes the replenish interval, not a rate.
    let interval_ms = (1000 / u64::from(per_second)).max(1);

    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(interval_ms)
        .burst_size(burst)
        .finish()
        .context("Invalid rate limit settings")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
