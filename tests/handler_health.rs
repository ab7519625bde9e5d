mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use catalog_search::state::AppState;
use serde_json::Value;
use std::sync::Arc;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = TestServer::new(common::create_test_app(common::create_test_state())).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["catalog"]["status"], "ok");
    assert_eq!(json["checks"]["catalog"]["message"], "10 products");
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let state = AppState::new(Arc::new(common::UnavailableCatalog));
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["catalog"]["status"], "error");
}
