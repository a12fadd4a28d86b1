mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use wa_link_helper::api::handlers::link_handler;

fn server() -> TestServer {
    let app = Router::new()
        .route("/api/link", post(link_handler))
        .with_state(common::create_test_state());

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_valid_form_returns_link() {
    let server = server();

    let response = server
        .post("/api/link")
        .json(&json!({
            "country_code": "ID",
            "phone_number": "081234567890",
            "text": "Hi there"
        }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["valid"], true);
    assert_eq!(body["errors"], json!([]));
    assert_eq!(body["canonical_number"], "6281234567890");
    assert_eq!(body["url"], "https://wa.me/6281234567890?text=Hi%20there");
}

#[tokio::test]
async fn test_empty_text_has_no_query() {
    let server = server();

    let response = server
        .post("/api/link")
        .json(&json!({ "country_code": "US", "phone_number": "(555) 010-0199" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["url"], "https://wa.me/15550100199");
}

#[tokio::test]
async fn test_lowercase_country_code() {
    let server = server();

    let response = server
        .post("/api/link")
        .json(&json!({ "country_code": "gb", "phone_number": "07700900123" }))
        .await;

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["canonical_number"], "447700900123");
}

#[tokio::test]
async fn test_missing_phone_is_invalid() {
    let server = server();

    let response = server
        .post("/api/link")
        .json(&json!({ "country_code": "ID", "text": "Hello" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["valid"], false);
    assert_eq!(body["errors"][0]["field"], "phone_number");
    assert_eq!(body["errors"][0]["message"], "Phone number is required");
    assert!(body["url"].is_null());
    assert!(body["canonical_number"].is_null());
}

#[tokio::test]
async fn test_empty_body_reports_both_fields() {
    let server = server();

    let response = server.post("/api/link").json(&json!({})).await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["valid"], false);

    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["country_code", "phone_number"]);
}

#[tokio::test]
async fn test_zeros_only_phone_is_invalid() {
    let server = server();

    let response = server
        .post("/api/link")
        .json(&json!({ "country_code": "ID", "phone_number": "000" }))
        .await;

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["valid"], false);
    assert!(body["url"].is_null());
}

#[tokio::test]
async fn test_oversized_field_is_rejected() {
    let server = server();

    let response = server
        .post("/api/link")
        .json(&json!({
            "country_code": "ID",
            "phone_number": "1".repeat(65),
        }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["details"]["fields"], json!(["phone_number"]));
}

#[tokio::test]
async fn test_oversized_text_is_not_echoed() {
    let server = server();
    let text = "a".repeat(4097);

    let response = server
        .post("/api/link")
        .json(&json!({
            "country_code": "ID",
            "phone_number": "0812",
            "text": &text,
        }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["details"]["fields"], json!(["text"]));
    assert_eq!(body["error"]["details"]["codes"]["text"], json!(["length"]));
    assert!(body.get("valid").is_none());
    assert!(!response.text().contains(&text));
}
