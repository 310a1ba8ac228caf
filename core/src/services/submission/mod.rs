//! Web report submission flow

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::ReportSubmissionFlow;
pub use types::{ReportSubmission, SubmissionReceipt, MAX_RECIPIENTS};
