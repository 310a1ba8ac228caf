//! SMS provider and rescue-crew configuration

use serde::{Deserialize, Serialize};

/// Twilio credentials (primary provider)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TwilioSettings {
    /// Twilio Account SID
    pub account_sid: Option<String>,
    /// Twilio Auth Token
    pub auth_token: Option<String>,
    /// Sender number owned by the Twilio account
    pub from_number: Option<String>,
}

impl TwilioSettings {
    /// All three credentials are present and non-empty
    pub fn is_complete(&self) -> bool {
        [&self.account_sid, &self.auth_token, &self.from_number]
            .iter()
            .all(|value| value.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }
}

/// Fast2SMS credentials (secondary provider)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Fast2SmsSettings {
    /// API key sent in the `authorization` header
    pub api_key: Option<String>,
}

impl Fast2SmsSettings {
    /// The API key is present and non-empty
    pub fn is_complete(&self) -> bool {
        self.api_key.as_deref().is_some_and(|v| !v.trim().is_empty())
    }
}

/// SMS gateway configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// Primary provider credentials
    pub twilio: TwilioSettings,
    /// Secondary provider credentials
    pub fast2sms: Fast2SmsSettings,
    /// Timeout for a single provider request in seconds
    pub request_timeout_secs: u64,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            twilio: TwilioSettings::default(),
            fast2sms: Fast2SmsSettings::default(),
            request_timeout_secs: 30,
        }
    }
}

impl SmsConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            twilio: TwilioSettings {
                account_sid: non_empty_var("TWILIO_ACCOUNT_SID"),
                auth_token: non_empty_var("TWILIO_AUTH_TOKEN"),
                from_number: non_empty_var("TWILIO_PHONE_NUMBER"),
            },
            fast2sms: Fast2SmsSettings {
                api_key: non_empty_var("FAST2SMS_API_KEY"),
            },
            request_timeout_secs: std::env::var("SMS_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

/// Rescue-crew numbers alerted for SMS-originated reports
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RescueConfig {
    /// Raw numbers as configured; validated by the gateway
    pub numbers: Vec<String>,
}

impl RescueConfig {
    /// Parse a comma separated list, dropping blank entries
    pub fn parse_list(raw: &str) -> Self {
        Self {
            numbers: raw
                .split(',')
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    /// Create from the `RESCUE_CREW_NUMBERS` variable
    pub fn from_env() -> Self {
        std::env::var("RESCUE_CREW_NUMBERS")
            .map(|raw| Self::parse_list(&raw))
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

pub(crate) fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
