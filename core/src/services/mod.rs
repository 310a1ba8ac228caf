//! Business services containing domain logic and use cases.

pub mod alert;
pub mod inbound;
pub mod submission;
pub mod verification;

// Re-export commonly used types
pub use alert::{compose_alert, AlertContent, DispatchMode, SmsGateway, SmsProvider};
pub use inbound::{parse_sms_body, InboundAck, InboundSms, InboundSmsService, ParsedSms};
pub use submission::{ReportSubmission, ReportSubmissionFlow, SubmissionReceipt};
pub use verification::{Confidence, ImageVerifier, VerificationResult};
