pub mod report;

pub use report::{InMemoryReportRepository, ReportRepository};
