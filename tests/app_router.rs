mod common;

use axum::ServiceExt;
use axum::extract::Request;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use wa_link_helper::routes::app_router;

fn server() -> TestServer {
    let app = app_router(common::create_test_state(), false, "static");

    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

#[tokio::test]
async fn test_api_is_nested_and_trailing_slash_trimmed() {
    let server = server();

    let response = server
        .post("/api/link/")
        .json(&json!({ "country_code": "ID", "phone_number": "081234567890" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["url"], "https://wa.me/6281234567890");
}

#[tokio::test]
async fn test_health_and_pages_are_mounted() {
    let server = server();

    server.get("/health").await.assert_status_ok();
    server.get("/api/countries/").await.assert_status_ok();
    server.get("/").await.assert_status_ok();
    server.get("/robots.txt").await.assert_status_ok();
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let server = server();

    let response = server.get("/static/app.js").await;

    response.assert_status_ok();
    let script = response.text();
    assert!(script.contains("/api/link"));
    assert!(script.contains("renderFailure"));
}

#[tokio::test]
async fn test_unknown_path_falls_back_to_not_found_page() {
    let server = server();

    let response = server.get("/api/unknown").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("Page not Found"));

    let response = server.get("/nowhere/").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("Page not Found"));
}
