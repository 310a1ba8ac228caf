//! Report repository module.

mod r#trait;
pub use r#trait::ReportRepository;

mod memory;
pub use memory::InMemoryReportRepository;
