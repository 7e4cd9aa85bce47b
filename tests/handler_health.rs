mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;

use qrify::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let ts = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(ts.state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["database"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_degraded_database() {
    let ts = common::create_test_state();
    ts.qr_codes.set_fail(true);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(ts.state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
    assert!(json["checks"]["database"]["message"].is_string());
}
