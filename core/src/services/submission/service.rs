//! Web report submission: validate, verify, store, alert

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use crate::domain::entities::{DisasterReport, ReferenceCode, ReportSource, Severity};
use crate::domain::ReportCatalog;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::ReportRepository;
use crate::services::alert::{compose_alert, AlertContent, SmsGateway};
use crate::services::verification::{ImageVerifier, VerificationResult};

use super::types::{ReportSubmission, SubmissionReceipt, MAX_RECIPIENTS};

/// Coordinates a web report from form data to rescue alert
pub struct ReportSubmissionFlow {
    repository: Arc<dyn ReportRepository>,
    gateway: Arc<SmsGateway>,
    verifier: Arc<dyn ImageVerifier>,
    catalog: Arc<ReportCatalog>,
}

impl ReportSubmissionFlow {
    pub fn new(
        repository: Arc<dyn ReportRepository>,
        gateway: Arc<SmsGateway>,
        verifier: Arc<dyn ImageVerifier>,
        catalog: Arc<ReportCatalog>,
    ) -> Self {
        Self {
            repository,
            gateway,
            verifier,
            catalog,
        }
    }

    /// Submit a report
    ///
    /// Validation and image rejection fail before anything is stored. Once the
    /// report is stored, alerting problems are reported in the receipt
    /// instead of failing the call.
    pub async fn submit(&self, submission: ReportSubmission) -> DomainResult<SubmissionReceipt> {
        let (disaster_type, severity) = Self::validate(&submission)?;

        let verification = match submission.image_base64.as_deref().filter(|i| !i.trim().is_empty()) {
            Some(image) => Some(self.verify_image(image, &disaster_type).await?),
            None => None,
        };

        let mut report = DisasterReport::new(
            ReferenceCode::for_web(Utc::now()),
            disaster_type,
            severity,
            ReportSource::Web,
        );
        self.fill_report(&mut report, &submission);
        report.image_verified = verification.as_ref().map(VerificationResult::is_confirmed).unwrap_or(false);

        let message = compose_alert(&AlertContent::from_report(&report));

        self.repository.create(&report).await.map_err(|e| {
            error!(
                event = "report_store_failed",
                reference = %report.reference_code,
                error = %e,
                "Failed to store report"
            );
            e
        })?;
        info!(
            event = "report_created",
            reference = %report.reference_code,
            disaster_type = %report.disaster_type,
            severity = %report.severity,
            image_verified = report.image_verified,
            "Report created"
        );

        let (alert, alert_error) = match self.gateway.send_alert(submission.recipients.as_slice(), &message).await {
            Ok(batch) => {
                if !batch.success {
                    warn!(
                        event = "report_alert_undelivered",
                        reference = %report.reference_code,
                        total = batch.total,
                        "No rescue crew could be reached"
                    );
                }
                (Some(batch), None)
            }
            Err(e) => {
                error!(
                    event = "report_alert_failed",
                    reference = %report.reference_code,
                    error = %e,
                    "Report stored but alert failed"
                );
                (None, Some(e.to_string()))
            }
        };

        Ok(SubmissionReceipt {
            state_helpline: self.catalog.helpline_for_state(&report.state).map(str::to_string),
            reference_code: report.reference_code,
            report_id: report.id,
            alert,
            alert_error,
            verification,
        })
    }

    fn validate(submission: &ReportSubmission) -> DomainResult<(String, Severity)> {
        let disaster_type = submission
            .disaster_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ValidationError::RequiredField {
                field: "type".to_string(),
            })?
            .to_lowercase();

        let severity = submission
            .severity
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ValidationError::RequiredField {
                field: "severity".to_string(),
            })?
            .parse::<Severity>()
            .map_err(|_| ValidationError::InvalidFormat {
                field: "severity".to_string(),
            })?;

        if submission.recipients.len() > MAX_RECIPIENTS {
            return Err(ValidationError::TooManyRecipients {
                max: MAX_RECIPIENTS,
                actual: submission.recipients.len(),
            }
            .into());
        }
        if SmsGateway::prepare_recipients(submission.recipients.as_slice()).is_empty() {
            return Err(ValidationError::NoValidRecipients.into());
        }

        Ok((disaster_type, severity))
    }

    async fn verify_image(&self, image: &str, disaster_type: &str) -> DomainResult<VerificationResult> {
        let result = match self.verifier.verify(image, Some(disaster_type)).await {
            Ok(result) => result,
            Err(e) => {
                warn!(
                    event = "image_verification_unavailable",
                    error = %e,
                    "Image verification failed, accepting with low confidence"
                );
                VerificationResult::soft_pass("Verification service unavailable, proceeding with caution")
            }
        };

        if !result.is_legitimate {
            info!(
                event = "image_rejected",
                confidence = %result.confidence,
                reason = %result.reason,
                "Attached image rejected"
            );
            return Err(DomainError::ImageRejected { reason: result.reason });
        }
        Ok(result)
    }

    fn fill_report(&self, report: &mut DisasterReport, submission: &ReportSubmission) {
        let text = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let state = text(&submission.state).unwrap_or_default();
        report.state = self
            .catalog
            .canonical_state(&state)
            .map(str::to_string)
            .unwrap_or(state);
        report.district = text(&submission.district).unwrap_or_default();
        report.location = text(&submission.location).unwrap_or_default();
        report.latitude = submission.latitude;
        report.longitude = submission.longitude;
        report.description = text(&submission.description).unwrap_or_default();
        report.victim_message = text(&submission.victim_message);
        report.reporter_contact = text(&submission.reporter_contact);
        report.people_affected = text(&submission.people_affected);
    }
}
