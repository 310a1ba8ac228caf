//! Unit tests for the Fast2SMS provider

use dr_core::services::alert::{DispatchMode, SmsProvider};
use dr_shared::config::Fast2SmsSettings;

use crate::sms::fast2sms::{BulkRequest, BulkResponse, Fast2SmsProvider};

#[test]
fn test_bulk_request_shape() {
    let numbers = vec!["9876543210".to_string(), "8123456789".to_string()];
    let value = serde_json::to_value(BulkRequest::quick("Flood alert", &numbers)).unwrap();

    assert_eq!(value["route"], "q");
    assert_eq!(value["language"], "english");
    assert_eq!(value["flash"], 0);
    assert_eq!(value["message"], "Flood alert");
    assert_eq!(value["numbers"], "9876543210,8123456789");
}

#[test]
fn test_accepted_response() {
    let body: BulkResponse =
        serde_json::from_str(r#"{"return": true, "request_id": "abc123", "message": ["SMS sent successfully."]}"#)
            .unwrap();
    assert_eq!(body.into_result().unwrap(), "abc123");
}

#[test]
fn test_rejected_response_messages() {
    let body: BulkResponse = serde_json::from_str(r#"{"return": false, "message": "Invalid Authentication"}"#).unwrap();
    assert_eq!(body.into_result().unwrap_err(), "Invalid Authentication");

    let body: BulkResponse = serde_json::from_str(r#"{"status_code": 412, "message": ["Bad", "Numbers"]}"#).unwrap();
    assert_eq!(body.into_result().unwrap_err(), "Bad; Numbers");

    let body: BulkResponse = serde_json::from_str(r#"{"return": false}"#).unwrap();
    assert_eq!(body.into_result().unwrap_err(), "Failed to send SMS");
}

#[test]
fn test_provider_is_bulk() {
    let provider = Fast2SmsProvider::new(reqwest::Client::new(), Fast2SmsSettings::default());
    assert_eq!(provider.dispatch_mode(), DispatchMode::Bulk);
    assert!(!provider.is_configured());
}

#[tokio::test]
async fn test_send_without_key_fails_fast() {
    let provider = Fast2SmsProvider::new(reqwest::Client::new(), Fast2SmsSettings::default());

    let err = provider
        .send_bulk(&["9876543210".to_string()], "Alert")
        .await
        .unwrap_err();
    assert!(err.contains("FAST2SMS_API_KEY"));
}

#[tokio::test]
async fn test_single_send_requires_indian_mobile() {
    let provider = Fast2SmsProvider::new(
        reqwest::Client::new(),
        Fast2SmsSettings {
            api_key: Some("key".to_string()),
        },
    );

    let err = provider.send_sms("15551234567", "Alert").await.unwrap_err();
    assert!(err.contains("Not an Indian mobile number"));
}
