//! Provider seam for outbound SMS

use async_trait::async_trait;

/// How a provider accepts recipients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    /// One request per recipient, each with its own outcome
    PerRecipient,
    /// One request carrying every recipient
    Bulk,
}

/// Trait for SMS provider integration
///
/// Errors are plain strings; they end up verbatim in per-recipient outcomes.
#[async_trait]
pub trait SmsProvider: Send + Sync {
    /// Human readable provider name for logs
    fn provider_name(&self) -> &str;

    /// Whether credentials for this provider are present
    fn is_configured(&self) -> bool;

    fn dispatch_mode(&self) -> DispatchMode {
        DispatchMode::PerRecipient
    }

    /// Send a message to one canonical (`91XXXXXXXXXX`) number
    async fn send_sms(&self, to: &str, message: &str) -> Result<String, String>;

    /// Send a message to many 10-digit local numbers in a single request
    async fn send_bulk(&self, numbers: &[String], message: &str) -> Result<String, String> {
        let _ = (numbers, message);
        Err(format!("{} does not support bulk sends", self.provider_name()))
    }
}
