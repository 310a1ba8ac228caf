//! Input and result types for web report submission

use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::ReferenceCode;
use crate::domain::value_objects::AlertBatch;
use crate::services::verification::VerificationResult;

/// Upper bound on alert recipients per web submission
pub const MAX_RECIPIENTS: usize = 5;

/// A report as entered in the web form
#[derive(Debug, Clone, Default)]
pub struct ReportSubmission {
    pub disaster_type: Option<String>,
    pub severity: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: Option<String>,
    pub victim_message: Option<String>,
    pub reporter_contact: Option<String>,
    pub people_affected: Option<String>,
    /// Rescue numbers to alert
    pub recipients: Vec<String>,
    /// Raw base64 or `data:` URL
    pub image_base64: Option<String>,
}

/// What the reporter gets back after submitting
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub reference_code: ReferenceCode,
    pub report_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<AlertBatch>,
    /// Set when the report was stored but alerting failed outright
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<VerificationResult>,
    /// State disaster-management number for follow-up
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_helpline: Option<String>,
}

impl SubmissionReceipt {
    /// At least one rescue crew was reached
    pub fn alerted(&self) -> bool {
        self.alert.as_ref().map(|b| b.success).unwrap_or(false)
    }
}
