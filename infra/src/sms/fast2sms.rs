//! Fast2SMS provider
//!
//! A single bulk request carries every recipient as a comma-joined list of
//! 10-digit local numbers. The API reports success in a `return` flag, so a
//! failure applies to the whole batch.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use dr_core::services::alert::{DispatchMode, SmsProvider};
use dr_shared::config::Fast2SmsSettings;
use dr_shared::utils::phone::to_local_number;

const BULK_URL: &str = "https://www.fast2sms.com/dev/bulkV2";

#[derive(Debug, Serialize)]
pub struct BulkRequest<'a> {
    pub route: &'a str,
    pub message: &'a str,
    pub language: &'a str,
    pub flash: u8,
    pub numbers: String,
}

impl<'a> BulkRequest<'a> {
    /// Quick-route English text to the given local numbers
    pub fn quick(message: &'a str, numbers: &[String]) -> Self {
        Self {
            route: "q",
            message,
            language: "english",
            flash: 0,
            numbers: numbers.join(","),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BulkResponse {
    #[serde(rename = "return", default)]
    pub accepted: bool,
    pub request_id: Option<String>,
    /// A string or a list of strings depending on the error
    pub message: Option<Value>,
}

impl BulkResponse {
    pub fn into_result(self) -> Result<String, String> {
        if self.accepted {
            return Ok(self.request_id.unwrap_or_default());
        }
        Err(match self.message {
            Some(Value::String(message)) => message,
            Some(Value::Array(parts)) => parts
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join("; "),
            _ => "Failed to send SMS".to_string(),
        })
    }
}

/// Fast2SMS bulk provider
pub struct Fast2SmsProvider {
    client: reqwest::Client,
    settings: Fast2SmsSettings,
    url: String,
}

impl Fast2SmsProvider {
    pub fn new(client: reqwest::Client, settings: Fast2SmsSettings) -> Self {
        Self {
            client,
            settings,
            url: BULK_URL.to_string(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

#[async_trait]
impl SmsProvider for Fast2SmsProvider {
    fn provider_name(&self) -> &str {
        "Fast2SMS"
    }

    fn is_configured(&self) -> bool {
        self.settings.is_complete()
    }

    fn dispatch_mode(&self) -> DispatchMode {
        DispatchMode::Bulk
    }

    async fn send_sms(&self, to: &str, message: &str) -> Result<String, String> {
        let local = to_local_number(to).ok_or_else(|| format!("Not an Indian mobile number: {}", to))?;
        self.send_bulk(&[local], message).await
    }

    async fn send_bulk(&self, numbers: &[String], message: &str) -> Result<String, String> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or_else(|| "SMS service not configured. Please add FAST2SMS_API_KEY.".to_string())?;

        debug!(recipients = numbers.len(), "Sending bulk SMS via Fast2SMS");

        let response = self
            .client
            .post(&self.url)
            .header("authorization", api_key)
            .json(&BulkRequest::quick(message, numbers))
            .send()
            .await
            .map_err(|e| format!("Fast2SMS request failed: {}", e))?;

        let status = response.status();
        let body: BulkResponse = response
            .json()
            .await
            .map_err(|e| format!("Invalid Fast2SMS response ({}): {}", status, e))?;

        body.into_result()
    }
}
