pub mod alert;
pub mod image;
pub mod report;
pub mod sms;

pub use alert::{AlertResponse, SendAlertRequest};
pub use image::{VerifyImageError, VerifyImageRequest};
pub use report::{ListReportsQuery, SubmitReportRequest};
pub use sms::InboundSmsForm;
