//! Unit tests for InboundSmsService

use std::sync::Arc;

use crate::domain::entities::{ReportSource, Severity};
use crate::repositories::InMemoryReportRepository;
use crate::services::alert::tests::mocks::RecordingProvider;
use crate::services::alert::{SmsGateway, SmsProvider};
use crate::services::inbound::{InboundAck, InboundSms, InboundSmsService};

fn service_with(
    repository: InMemoryReportRepository,
    provider: Arc<RecordingProvider>,
    rescue_numbers: &[&str],
) -> InboundSmsService {
    let gateway = SmsGateway::new(vec![provider as Arc<dyn SmsProvider>]);
    InboundSmsService::new(
        Arc::new(repository),
        Arc::new(gateway),
        rescue_numbers.iter().map(|n| n.to_string()).collect(),
    )
}

fn sms(body: &str) -> InboundSms {
    InboundSms {
        from: Some("+919876543210".to_string()),
        body: Some(body.to_string()),
        message_sid: Some("SM123".to_string()),
    }
}

#[tokio::test]
async fn test_structured_sms_creates_high_severity_report() {
    let repository = InMemoryReportRepository::new();
    let provider = Arc::new(RecordingProvider::new("twilio"));
    let service = service_with(repository.clone(), provider.clone(), &["8123456789"]);

    let ack = service.handle(sms("FLOOD|Mumbai, Maharashtra|50 people stranded")).await;

    let reference = ack.reference_code().unwrap().clone();
    assert!(reference.as_str().starts_with("DR-SMS-"));

    let stored = repository.all();
    assert_eq!(stored.len(), 1);
    let report = &stored[0];
    assert_eq!(report.reference_code, reference);
    assert_eq!(report.disaster_type, "flood");
    assert_eq!(report.location, "Mumbai, Maharashtra");
    assert_eq!(report.description, "50 people stranded");
    assert_eq!(report.severity, Severity::High);
    assert_eq!(report.state, "Unknown");
    assert_eq!(report.district, "Unknown");
    assert_eq!(report.source, ReportSource::Sms);
    assert_eq!(report.reporter_contact.as_deref(), Some("+919876543210"));
    assert_eq!(
        report.victim_message.as_deref(),
        Some("FLOOD|Mumbai, Maharashtra|50 people stranded")
    );

    assert_eq!(provider.sent_to(), vec!["918123456789"]);
    let alert = provider.last_message().unwrap();
    assert!(alert.contains("Type: FLOOD"));
    assert!(alert.contains(&format!("Ref: {}", reference)));
}

#[tokio::test]
async fn test_empty_body_is_ignored() {
    let repository = InMemoryReportRepository::new();
    let provider = Arc::new(RecordingProvider::new("twilio"));
    let service = service_with(repository.clone(), provider.clone(), &["8123456789"]);

    assert_eq!(service.handle(sms("   ")).await, InboundAck::Empty);
    assert_eq!(service.handle(InboundSms::default()).await, InboundAck::Empty);
    assert!(repository.is_empty());
    assert_eq!(provider.attempts(), 0);
}

#[tokio::test]
async fn test_store_failure_still_acknowledges() {
    let repository = InMemoryReportRepository::new();
    repository.set_should_fail(true);
    let provider = Arc::new(RecordingProvider::new("twilio"));
    let service = service_with(repository, provider.clone(), &["8123456789"]);

    let ack = service.handle(sms("fire|Delhi|smoke")).await;

    assert!(matches!(ack, InboundAck::Received { .. }));
    assert_eq!(provider.attempts(), 0);
}

#[tokio::test]
async fn test_gateway_failure_still_acknowledges() {
    let repository = InMemoryReportRepository::new();
    let provider = Arc::new(RecordingProvider::new("twilio").failing());
    let service = service_with(repository.clone(), provider.clone(), &["8123456789", "7012345678"]);

    let ack = service.handle(sms("cyclone|Puri|roof blown off")).await;

    assert!(matches!(ack, InboundAck::Received { .. }));
    assert_eq!(repository.len(), 1);
    assert_eq!(provider.attempts(), 2);
}

#[tokio::test]
async fn test_no_rescue_numbers_skips_alert() {
    let repository = InMemoryReportRepository::new();
    let provider = Arc::new(RecordingProvider::new("twilio"));
    let service = service_with(repository.clone(), provider.clone(), &[]);

    let ack = service.handle(sms("just help me")).await;

    assert!(ack.reference_code().is_some());
    assert_eq!(repository.len(), 1);
    assert_eq!(repository.all()[0].disaster_type, "unknown");
    assert_eq!(provider.attempts(), 0);
}

#[tokio::test]
async fn test_alert_truncates_long_victim_message() {
    let repository = InMemoryReportRepository::new();
    let provider = Arc::new(RecordingProvider::new("twilio"));
    let service = service_with(repository.clone(), provider.clone(), &["8123456789"]);

    let body = format!("flood|Patna|{}", "x".repeat(300));
    service.handle(sms(&body)).await;

    let alert = provider.last_message().unwrap();
    let victim_line = alert
        .lines()
        .find(|l| l.starts_with("Victim Message: "))
        .unwrap();
    assert_eq!(victim_line.chars().count(), "Victim Message: ".len() + 100);

    assert_eq!(repository.all()[0].victim_message.as_deref(), Some(body.as_str()));
}
