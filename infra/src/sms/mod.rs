//! SMS provider module
//!
//! Providers are built from configuration in priority order; the gateway in
//! `dr_core` uses the first one that has credentials.

use std::sync::Arc;
use std::time::Duration;

use dr_core::services::alert::SmsProvider;
use dr_shared::config::SmsConfig;

pub mod fast2sms;
pub mod mock_sms;
pub mod twilio;

pub use fast2sms::Fast2SmsProvider;
pub use mock_sms::MockSmsProvider;
pub use twilio::TwilioSmsProvider;

use crate::InfrastructureError;

#[cfg(test)]
mod tests;

/// Build the provider chain: Twilio first, then Fast2SMS
///
/// Unconfigured providers stay in the chain and report
/// `is_configured() == false`.
pub fn create_sms_providers(config: &SmsConfig) -> Result<Vec<Arc<dyn SmsProvider>>, InfrastructureError> {
    let client = http_client(config.request_timeout_secs)?;

    Ok(vec![
        Arc::new(TwilioSmsProvider::new(client.clone(), config.twilio.clone())),
        Arc::new(Fast2SmsProvider::new(client, config.fast2sms.clone())),
    ])
}

pub(crate) fn http_client(timeout_secs: u64) -> Result<reqwest::Client, InfrastructureError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(InfrastructureError::from)
}
