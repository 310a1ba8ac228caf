//! Turns inbound SMS into reports and alerts the rescue crews

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use dr_shared::utils::phone::mask_phone_number;

use crate::domain::entities::{DisasterReport, ReferenceCode, ReportSource, Severity};
use crate::repositories::ReportRepository;
use crate::services::alert::{compose_alert, AlertContent, SmsGateway};

use super::parser::parse_sms_body;
use super::types::{InboundAck, InboundSms};

/// Placeholder for fields an SMS cannot carry
pub const UNKNOWN_REGION: &str = "Unknown";

/// Victim text is cut to this many characters in the crew alert
pub const ALERT_VICTIM_MESSAGE_CHARS: usize = 100;

/// Handles provider webhooks for inbound SMS reports
pub struct InboundSmsService {
    repository: Arc<dyn ReportRepository>,
    gateway: Arc<SmsGateway>,
    rescue_numbers: Vec<String>,
}

impl InboundSmsService {
    pub fn new(repository: Arc<dyn ReportRepository>, gateway: Arc<SmsGateway>, rescue_numbers: Vec<String>) -> Self {
        Self {
            repository,
            gateway,
            rescue_numbers,
        }
    }

    /// Process one inbound message
    ///
    /// Never fails: the sender always gets an acknowledgment, and storage or
    /// delivery problems are logged instead.
    pub async fn handle(&self, sms: InboundSms) -> InboundAck {
        let body = match sms.body.as_deref().filter(|b| !b.trim().is_empty()) {
            Some(body) => body,
            None => {
                info!(event = "inbound_sms_empty", "Empty SMS received");
                return InboundAck::Empty;
            }
        };

        let sender = sms.from.as_deref().map(str::trim).filter(|f| !f.is_empty());
        info!(
            event = "inbound_sms_received",
            from = %sender.map(mask_phone_number).unwrap_or_default(),
            message_sid = sms.message_sid.as_deref().unwrap_or(""),
            "Inbound SMS received"
        );

        let report = Self::build_report(body, sender);
        let reference_code = report.reference_code.clone();

        match self.repository.create(&report).await {
            Ok(()) => {
                info!(
                    event = "inbound_report_created",
                    reference = %reference_code,
                    disaster_type = %report.disaster_type,
                    "Report created from SMS"
                );
                self.alert_rescue_crews(&report).await;
            }
            Err(e) => {
                error!(
                    event = "inbound_report_store_failed",
                    reference = %reference_code,
                    error = %e,
                    "Failed to store SMS report, rescue alert skipped"
                );
            }
        }

        InboundAck::Received { reference_code }
    }

    fn build_report(body: &str, sender: Option<&str>) -> DisasterReport {
        let parsed = parse_sms_body(body);

        let mut report = DisasterReport::new(
            ReferenceCode::for_sms(Utc::now()),
            parsed.disaster_type,
            Severity::High,
            ReportSource::Sms,
        );
        report.state = UNKNOWN_REGION.to_string();
        report.district = UNKNOWN_REGION.to_string();
        report.location = parsed.location;
        report.description = parsed.description;
        report.victim_message = Some(body.to_string());
        report.reporter_contact = sender.map(str::to_string);
        report
    }

    async fn alert_rescue_crews(&self, report: &DisasterReport) {
        if self.rescue_numbers.is_empty() {
            warn!(event = "rescue_numbers_missing", "No rescue crew numbers configured");
            return;
        }

        let mut content = AlertContent::from_report(report);
        content.victim_message = report
            .victim_message
            .as_deref()
            .map(|m| m.chars().take(ALERT_VICTIM_MESSAGE_CHARS).collect());

        match self.gateway.send_alert(self.rescue_numbers.as_slice(), &compose_alert(&content)).await {
            Ok(batch) => info!(
                event = "rescue_alert_sent",
                reference = %report.reference_code,
                sent = batch.sent,
                total = batch.total,
                "Rescue crews alerted"
            ),
            Err(e) => error!(
                event = "rescue_alert_failed",
                reference = %report.reference_code,
                error = %e,
                "Failed to alert rescue crews"
            ),
        }
    }
}
