//! Outbound alert fan-out over the first configured SMS provider

use std::collections::HashSet;
use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{error, info, warn};

use dr_shared::utils::phone::{is_valid_mobile, mask_phone_number, normalize_mobile, to_local_number};

use crate::domain::value_objects::{AlertBatch, AlertOutcome};
use crate::errors::{DomainError, DomainResult, ValidationError};

use super::traits::{DispatchMode, SmsProvider};

/// Sends one alert text to a list of recipients
pub struct SmsGateway {
    providers: Vec<Arc<dyn SmsProvider>>,
}

impl SmsGateway {
    /// Providers are tried in the given order when resolving
    pub fn new(providers: Vec<Arc<dyn SmsProvider>>) -> Self {
        Self { providers }
    }

    /// First provider with credentials, if any
    pub fn resolve_provider(&self) -> Option<Arc<dyn SmsProvider>> {
        self.providers.iter().find(|p| p.is_configured()).cloned()
    }

    pub fn has_provider(&self) -> bool {
        self.resolve_provider().is_some()
    }

    /// Drop invalid entries, normalize the rest and remove duplicates
    pub fn prepare_recipients<S: AsRef<str>>(recipients: &[S]) -> Vec<String> {
        let mut seen = HashSet::new();
        recipients
            .iter()
            .map(|raw| raw.as_ref())
            .filter(|raw| is_valid_mobile(raw))
            .map(normalize_mobile)
            .filter(|number| seen.insert(number.clone()))
            .collect()
    }

    /// Send `message` to every valid recipient
    ///
    /// Per-recipient failures are reported in the batch, never as an error.
    /// An error is returned only when nothing could be attempted.
    pub async fn send_alert<S: AsRef<str>>(&self, recipients: &[S], message: &str) -> DomainResult<AlertBatch> {
        let provider = self.resolve_provider().ok_or_else(|| {
            error!(event = "sms_provider_missing", "No SMS provider configured");
            DomainError::Configuration {
                message: "No SMS provider configured".to_string(),
            }
        })?;

        if message.trim().is_empty() {
            return Err(ValidationError::EmptyMessage.into());
        }

        let numbers = Self::prepare_recipients(recipients);
        if numbers.is_empty() {
            warn!(
                event = "alert_no_valid_recipients",
                requested = recipients.len(),
                "No valid phone numbers in alert request"
            );
            return Err(ValidationError::NoValidRecipients.into());
        }

        info!(
            event = "alert_dispatch_started",
            provider = provider.provider_name(),
            recipients = numbers.len(),
            "Sending alert"
        );

        let outcomes = match provider.dispatch_mode() {
            DispatchMode::PerRecipient => Self::send_each(provider.as_ref(), &numbers, message).await,
            DispatchMode::Bulk => Self::send_bulk(provider.as_ref(), &numbers, message).await,
        };

        let batch = AlertBatch::from_outcomes(outcomes);
        info!(
            event = "alert_dispatch_finished",
            provider = provider.provider_name(),
            sent = batch.sent,
            total = batch.total,
            "Alert dispatch finished"
        );
        Ok(batch)
    }

    async fn send_each(provider: &dyn SmsProvider, numbers: &[String], message: &str) -> Vec<AlertOutcome> {
        let sends = numbers.iter().map(|number| async move {
            match provider.send_sms(number, message).await {
                Ok(message_id) => {
                    info!(
                        event = "sms_sent",
                        provider = provider.provider_name(),
                        to = %mask_phone_number(number),
                        message_id = %message_id,
                        "SMS sent"
                    );
                    AlertOutcome::delivered(number.clone())
                }
                Err(e) => {
                    error!(
                        event = "sms_send_failed",
                        provider = provider.provider_name(),
                        to = %mask_phone_number(number),
                        error = %e,
                        "SMS send failed"
                    );
                    AlertOutcome::failed(number.clone(), e)
                }
            }
        });
        join_all(sends).await
    }

    async fn send_bulk(provider: &dyn SmsProvider, numbers: &[String], message: &str) -> Vec<AlertOutcome> {
        let local: Vec<String> = numbers.iter().filter_map(|n| to_local_number(n)).collect();

        match provider.send_bulk(&local, message).await {
            Ok(request_id) => {
                info!(
                    event = "sms_bulk_sent",
                    provider = provider.provider_name(),
                    recipients = local.len(),
                    request_id = %request_id,
                    "Bulk SMS accepted"
                );
                numbers.iter().map(|n| AlertOutcome::delivered(n.clone())).collect()
            }
            Err(e) => {
                error!(
                    event = "sms_bulk_failed",
                    provider = provider.provider_name(),
                    recipients = local.len(),
                    error = %e,
                    "Bulk SMS failed"
                );
                numbers.iter().map(|n| AlertOutcome::failed(n.clone(), e.clone())).collect()
            }
        }
    }
}
