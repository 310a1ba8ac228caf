//! Database module - Postgres implementation using SQLx

pub mod connection;
pub mod postgres;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use postgres::{PgReportRepository, ReportRow};
