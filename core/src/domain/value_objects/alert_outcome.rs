//! Per-recipient delivery outcomes and their aggregate.

use serde::{Deserialize, Serialize};

/// Result of delivering an alert to one recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertOutcome {
    /// Recipient number after normalization
    pub number: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AlertOutcome {
    pub fn delivered(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            success: true,
            error: None,
        }
    }

    pub fn failed(number: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Aggregate of one fan-out: `success` holds as long as one recipient got the alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertBatch {
    pub success: bool,
    pub sent: usize,
    pub total: usize,
    pub results: Vec<AlertOutcome>,
}

impl AlertBatch {
    pub fn from_outcomes(results: Vec<AlertOutcome>) -> Self {
        let sent = results.iter().filter(|r| r.success).count();
        Self {
            success: sent > 0,
            sent,
            total: results.len(),
            results,
        }
    }

    pub fn failed_count(&self) -> usize {
        self.total - self.sent
    }
}
