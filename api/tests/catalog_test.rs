//! Integration tests for the lookup endpoints and health check

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::Value;

use common::{app, TestContext};

#[actix_web::test]
async fn test_health_check() {
    let ctx = TestContext::new();
    let service = test::init_service(app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_catalog_lists_form_options() {
    let ctx = TestContext::new();
    let service = test::init_service(app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/api/v1/catalog").to_request();
    let body: Value = test::call_and_read_body_json(&service, req).await;

    let data = &body["data"];
    assert!(data["disasterTypes"].as_array().unwrap().iter().any(|t| t == "Flood"));
    assert_eq!(data["severities"].as_array().unwrap().len(), 4);
    assert!(data["states"].as_array().unwrap().iter().any(|s| s == "Kerala"));
}

#[actix_web::test]
async fn test_contacts_include_national_emergency_number() {
    let ctx = TestContext::new();
    let service = test::init_service(app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/api/v1/contacts").to_request();
    let body: Value = test::call_and_read_body_json(&service, req).await;

    let contacts = body["data"]["contacts"].as_array().unwrap();
    assert!(contacts.iter().any(|c| c["number"] == "112"));
    assert!(!body["data"]["stateHelplines"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_unknown_route_is_404() {
    let ctx = TestContext::new();
    let service = test::init_service(app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/api/v1/nowhere").to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
