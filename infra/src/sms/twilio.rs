//! Twilio SMS provider
//!
//! Sends one message per recipient through the Twilio REST API using basic
//! auth and a form-encoded body.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use dr_core::services::alert::{DispatchMode, SmsProvider};
use dr_shared::config::TwilioSettings;
use dr_shared::utils::phone::mask_phone_number;

/// Twilio rejects longer bodies
pub const MAX_BODY_LENGTH: usize = 1600;

const API_BASE: &str = "https://api.twilio.com/2010-04-01";

#[derive(Debug, Deserialize)]
struct MessageResponse {
    sid: Option<String>,
    message: Option<String>,
    code: Option<i64>,
}

/// Twilio SMS provider
pub struct TwilioSmsProvider {
    client: reqwest::Client,
    settings: TwilioSettings,
    api_base: String,
}

impl TwilioSmsProvider {
    pub fn new(client: reqwest::Client, settings: TwilioSettings) -> Self {
        Self {
            client,
            settings,
            api_base: API_BASE.to_string(),
        }
    }

    /// Point the provider at another API host
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn messages_url(&self, account_sid: &str) -> String {
        format!("{}/Accounts/{}/Messages.json", self.api_base, account_sid)
    }

    fn credentials(&self) -> Result<(&str, &str, &str), String> {
        match (
            self.settings.account_sid.as_deref(),
            self.settings.auth_token.as_deref(),
            self.settings.from_number.as_deref(),
        ) {
            (Some(sid), Some(token), Some(from)) => Ok((sid, token, from)),
            _ => Err("Twilio credentials not configured".to_string()),
        }
    }
}

/// E.164 form of a canonical number
pub fn to_e164(number: &str) -> String {
    if number.starts_with('+') {
        number.to_string()
    } else {
        format!("+{}", number)
    }
}

/// Reject bodies Twilio would refuse
pub fn check_body_length(message: &str) -> Result<(), String> {
    let length = message.chars().count();
    if length > MAX_BODY_LENGTH {
        return Err(format!(
            "Message too long for Twilio ({} characters, max {})",
            length, MAX_BODY_LENGTH
        ));
    }
    Ok(())
}

#[async_trait]
impl SmsProvider for TwilioSmsProvider {
    fn provider_name(&self) -> &str {
        "Twilio"
    }

    fn is_configured(&self) -> bool {
        self.settings.is_complete()
    }

    fn dispatch_mode(&self) -> DispatchMode {
        DispatchMode::PerRecipient
    }

    async fn send_sms(&self, to: &str, message: &str) -> Result<String, String> {
        let (account_sid, auth_token, from) = self.credentials()?;
        check_body_length(message)?;

        let to = to_e164(to);
        debug!(to = %mask_phone_number(&to), "Sending SMS via Twilio");

        let response = self
            .client
            .post(self.messages_url(account_sid))
            .basic_auth(account_sid, Some(auth_token))
            .form(&[("To", to.as_str()), ("From", from), ("Body", message)])
            .send()
            .await
            .map_err(|e| format!("Twilio request failed: {}", e))?;

        let status = response.status();
        let body: MessageResponse = response
            .json()
            .await
            .map_err(|e| format!("Invalid Twilio response ({}): {}", status, e))?;

        match body.sid {
            Some(sid) if status.is_success() => Ok(sid),
            _ => Err(match (body.code, body.message) {
                (Some(code), Some(message)) => format!("Twilio error {}: {}", code, message),
                (None, Some(message)) => message,
                _ => format!("Twilio returned status {}", status),
            }),
        }
    }
}
