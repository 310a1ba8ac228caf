//! Domain entities representing core business objects.

pub mod reference;
pub mod report;

// Re-export commonly used types
pub use reference::ReferenceCode;
pub use report::{DisasterReport, ReportSource, ReportStatus, Severity};
