//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Catalog source reachable
/// - **503 Service Unavailable**: Catalog source failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "catalog": { "status": "ok", "message": "10 products" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let catalog_check = check_catalog(&state).await;

    let healthy = catalog_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            catalog: catalog_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks the catalog source by counting all products.
async fn check_catalog(state: &AppState) -> CheckStatus {
    match state.catalog.count("").await {
        Ok(total) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{total} products")),
        },
        Err(e) => {
            tracing::warn!(error = %e, "Catalog health check failed");
            CheckStatus {
                status: "error".to_string(),
                message: Some(format!("Catalog error: {e}")),
            }
        }
    }
}
