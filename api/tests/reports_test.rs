//! Integration tests for report submission and lookup

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use common::{app, FixedVerifier, TestContext};
use dr_infra::sms::MockSmsProvider;

fn report_body() -> Value {
    json!({
        "type": "Flood",
        "severity": "critical",
        "state": "maharashtra",
        "district": "Mumbai Suburban",
        "location": "Andheri East",
        "description": "Water level rising fast",
        "peopleAffected": "50",
        "reporterContact": "9876543210",
        "phoneNumbers": ["9123456789", "8123456789"]
    })
}

#[actix_web::test]
async fn test_submit_report_stores_and_alerts() {
    let ctx = TestContext::new();
    let service = test::init_service(app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/reports")
        .set_json(report_body())
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    let receipt = &body["data"];
    assert!(receipt["referenceCode"].as_str().unwrap().starts_with("DR-"));
    assert_eq!(receipt["alert"]["sent"], 2);
    assert!(receipt["stateHelpline"].is_string());

    let stored = ctx.repository.all();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].state, "Maharashtra");

    let sent = ctx.sms.sent_messages();
    assert_eq!(sent.len(), 2);
    assert!(sent[0].body.contains("Severity: CRITICAL"));
}

#[actix_web::test]
async fn test_submit_without_type_is_rejected() {
    let ctx = TestContext::new();
    let service = test::init_service(app(ctx.state.clone())).await;

    let mut body = report_body();
    body.as_object_mut().unwrap().remove("type");
    let req = test::TestRequest::post().uri("/api/v1/reports").set_json(body).to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(ctx.repository.is_empty());
    assert_eq!(ctx.sms.get_message_count(), 0);
}

#[actix_web::test]
async fn test_rejected_image_stops_submission() {
    let ctx = TestContext::with(MockSmsProvider::new(), FixedVerifier::Rejected);
    let service = test::init_service(app(ctx.state.clone())).await;

    let mut body = report_body();
    body["imageBase64"] = json!("aGVsbG8=");
    let req = test::TestRequest::post().uri("/api/v1/reports").set_json(body).to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(ctx.repository.is_empty());
    assert_eq!(ctx.sms.get_message_count(), 0);
}

#[actix_web::test]
async fn test_alert_failure_still_returns_receipt() {
    let sms = MockSmsProvider::new();
    sms.set_simulate_failure(true);
    let ctx = TestContext::with(sms, FixedVerifier::Legitimate);
    let service = test::init_service(app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/reports")
        .set_json(report_body())
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["alert"]["success"], false);
    assert_eq!(ctx.repository.len(), 1);
}

#[actix_web::test]
async fn test_lookup_and_list_reports() {
    let ctx = TestContext::new();
    let service = test::init_service(app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/reports")
        .set_json(report_body())
        .to_request();
    let created: Value = test::call_and_read_body_json(&service, req).await;
    let reference = created["data"]["referenceCode"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/reports/{}", reference))
        .to_request();
    let found: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(found["data"]["reference_code"], reference.as_str());
    assert_eq!(found["data"]["type"], "flood");

    let req = test::TestRequest::get().uri("/api/v1/reports?limit=10").to_request();
    let listed: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_unknown_reference_is_404() {
    let ctx = TestContext::new();
    let service = test::init_service(app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/api/v1/reports/DR-2025-NOPE").to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}
