//! Outbound alert request and response bodies

use serde::{Deserialize, Serialize};
use validator::Validate;

use dr_core::domain::value_objects::{AlertBatch, AlertOutcome};

/// Body of `POST /api/v1/alerts`
///
/// The single-number `phoneNumber` shape from older clients is still
/// accepted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendAlertRequest {
    #[validate(length(max = 5, message = "At most 5 phone numbers per alert"))]
    pub phone_numbers: Option<Vec<String>>,

    pub phone_number: Option<String>,

    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub message: String,
}

impl SendAlertRequest {
    /// Recipient list regardless of request shape
    pub fn recipients(&self) -> Vec<String> {
        match (&self.phone_numbers, &self.phone_number) {
            (Some(numbers), _) if !numbers.is_empty() => numbers.clone(),
            (_, Some(number)) => vec![number.clone()],
            _ => Vec::new(),
        }
    }
}

/// Aggregate delivery result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertResponse {
    pub success: bool,
    pub sent: usize,
    pub total: usize,
    pub results: Vec<AlertOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AlertResponse {
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            sent: 0,
            total: 0,
            results: Vec::new(),
            error: Some(error.into()),
        }
    }
}

impl From<AlertBatch> for AlertResponse {
    fn from(batch: AlertBatch) -> Self {
        let error = (!batch.success).then(|| "Failed to send SMS to any recipient".to_string());
        Self {
            success: batch.success,
            sent: batch.sent,
            total: batch.total,
            results: batch.results,
            error,
        }
    }
}
