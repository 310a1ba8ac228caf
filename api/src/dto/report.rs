//! Report submission and query bodies

use serde::{Deserialize, Serialize};
use validator::Validate;

use dr_core::services::submission::ReportSubmission;

/// Body of `POST /api/v1/reports`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReportRequest {
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50))]
    pub disaster_type: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub severity: Option<String>,

    #[validate(length(max = 100))]
    pub state: Option<String>,

    #[validate(length(max = 100))]
    pub district: Option<String>,

    #[validate(length(max = 500))]
    pub location: Option<String>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,

    #[validate(length(max = 5000))]
    pub description: Option<String>,

    #[validate(length(max = 1000))]
    pub victim_message: Option<String>,

    #[validate(length(max = 50))]
    pub reporter_contact: Option<String>,

    #[validate(length(max = 50))]
    pub people_affected: Option<String>,

    #[serde(default)]
    #[validate(length(max = 5, message = "At most 5 phone numbers per report"))]
    pub phone_numbers: Vec<String>,

    pub image_base64: Option<String>,
}

impl From<SubmitReportRequest> for ReportSubmission {
    fn from(request: SubmitReportRequest) -> Self {
        Self {
            disaster_type: request.disaster_type,
            severity: request.severity,
            state: request.state,
            district: request.district,
            location: request.location,
            latitude: request.latitude,
            longitude: request.longitude,
            description: request.description,
            victim_message: request.victim_message,
            reporter_contact: request.reporter_contact,
            people_affected: request.people_affected,
            recipients: request.phone_numbers,
            image_base64: request.image_base64,
        }
    }
}

/// Query string of `GET /api/v1/reports`
#[derive(Debug, Clone, Deserialize)]
pub struct ListReportsQuery {
    pub limit: Option<usize>,
}

impl ListReportsQuery {
    pub const DEFAULT_LIMIT: usize = 100;
    pub const MAX_LIMIT: usize = 500;

    pub fn effective_limit(&self) -> usize {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_maps_type_and_numbers() {
        let request: SubmitReportRequest = serde_json::from_str(
            r#"{"type": "flood", "severity": "high", "phoneNumbers": ["9876543210"], "peopleAffected": "20"}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());

        let submission = ReportSubmission::from(request);
        assert_eq!(submission.disaster_type.as_deref(), Some("flood"));
        assert_eq!(submission.recipients, vec!["9876543210"]);
        assert_eq!(submission.people_affected.as_deref(), Some("20"));
    }

    #[test]
    fn test_bad_coordinates_fail_validation() {
        let request: SubmitReportRequest =
            serde_json::from_str(r#"{"type": "flood", "severity": "high", "latitude": 123.0}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_limit_is_clamped() {
        assert_eq!(ListReportsQuery { limit: None }.effective_limit(), 100);
        assert_eq!(ListReportsQuery { limit: Some(0) }.effective_limit(), 1);
        assert_eq!(ListReportsQuery { limit: Some(10_000) }.effective_limit(), 500);
    }
}
