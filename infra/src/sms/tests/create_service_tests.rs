//! Tests for provider chain construction

use dr_shared::config::{Fast2SmsSettings, SmsConfig, TwilioSettings};

use crate::sms::create_sms_providers;

fn twilio_settings() -> TwilioSettings {
    TwilioSettings {
        account_sid: Some("ACtest_account_sid".to_string()),
        auth_token: Some("test_auth_token".to_string()),
        from_number: Some("+15551234567".to_string()),
    }
}

#[test]
fn test_chain_order_is_twilio_then_fast2sms() {
    let providers = create_sms_providers(&SmsConfig::default()).unwrap();
    let names: Vec<&str> = providers.iter().map(|p| p.provider_name()).collect();
    assert_eq!(names, vec!["Twilio", "Fast2SMS"]);
}

#[test]
fn test_nothing_configured_by_default() {
    let providers = create_sms_providers(&SmsConfig::default()).unwrap();
    assert!(providers.iter().all(|p| !p.is_configured()));
}

#[test]
fn test_only_fast2sms_configured() {
    let config = SmsConfig {
        fast2sms: Fast2SmsSettings {
            api_key: Some("key".to_string()),
        },
        ..Default::default()
    };

    let providers = create_sms_providers(&config).unwrap();
    let configured: Vec<&str> = providers
        .iter()
        .filter(|p| p.is_configured())
        .map(|p| p.provider_name())
        .collect();
    assert_eq!(configured, vec!["Fast2SMS"]);
}

#[test]
fn test_partial_twilio_credentials_are_not_configured() {
    let mut twilio = twilio_settings();
    twilio.from_number = None;
    let config = SmsConfig {
        twilio,
        ..Default::default()
    };

    let providers = create_sms_providers(&config).unwrap();
    assert!(!providers[0].is_configured());

    let config = SmsConfig {
        twilio: twilio_settings(),
        ..Default::default()
    };
    assert!(create_sms_providers(&config).unwrap()[0].is_configured());
}
