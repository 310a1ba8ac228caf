//! Report repository trait defining the interface for report persistence.

use async_trait::async_trait;

use crate::domain::entities::DisasterReport;
use crate::errors::DomainError;

/// Repository trait for DisasterReport persistence
///
/// The store is an external collaborator: this service only creates reports
/// and reads them back. Status changes and deletion happen elsewhere.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Persist a new report
    ///
    /// # Returns
    /// * `Ok(())` on successful creation
    /// * `Err(DomainError)` if the store rejects the write
    async fn create(&self, report: &DisasterReport) -> Result<(), DomainError>;

    /// Find a report by its reference code
    async fn find_by_reference(&self, reference_code: &str) -> Result<Option<DisasterReport>, DomainError>;

    /// Active reports, newest first, for the live map
    async fn list_active(&self, limit: usize) -> Result<Vec<DisasterReport>, DomainError>;
}
