mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use wa_link_helper::api::handlers::health_handler;
use wa_link_helper::state::AppState;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = server(common::create_test_state());

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["registry"]["status"], "ok");
    assert_eq!(json["checks"]["registry"]["message"], "3 countries loaded");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_endpoint_empty_registry() {
    let server = server(common::state_with(common::empty_registry()));

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["registry"]["status"], "error");
}
