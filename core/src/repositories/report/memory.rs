//! In-memory implementation of ReportRepository.
//!
//! Used when no database is configured and as the test double for services.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::entities::DisasterReport;
use crate::errors::DomainError;

use super::ReportRepository;

/// In-memory report store
#[derive(Clone, Default)]
pub struct InMemoryReportRepository {
    reports: Arc<Mutex<Vec<DisasterReport>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl InMemoryReportRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether operations should fail
    pub fn set_should_fail(&self, should_fail: bool) {
        *self.lock_flag() = should_fail;
    }

    /// Snapshot of every stored report
    pub fn all(&self) -> Vec<DisasterReport> {
        self.lock_reports().clone()
    }

    pub fn len(&self) -> usize {
        self.lock_reports().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock_reports(&self) -> std::sync::MutexGuard<'_, Vec<DisasterReport>> {
        self.reports.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_flag(&self) -> std::sync::MutexGuard<'_, bool> {
        self.should_fail.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if *self.lock_flag() {
            return Err(DomainError::Internal {
                message: "In-memory report store unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn create(&self, report: &DisasterReport) -> Result<(), DomainError> {
        self.check_failure()?;
        self.lock_reports().push(report.clone());
        Ok(())
    }

    async fn find_by_reference(&self, reference_code: &str) -> Result<Option<DisasterReport>, DomainError> {
        self.check_failure()?;
        Ok(self
            .lock_reports()
            .iter()
            .find(|r| r.reference_code.as_str() == reference_code)
            .cloned())
    }

    async fn list_active(&self, limit: usize) -> Result<Vec<DisasterReport>, DomainError> {
        self.check_failure()?;
        let mut active: Vec<DisasterReport> = self
            .lock_reports()
            .iter()
            .filter(|r| r.is_active())
            .cloned()
            .collect();

        active.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        active.truncate(limit);
        Ok(active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ReferenceCode, ReportSource, ReportStatus, Severity};
    use chrono::{Duration, Utc};

    fn report(code: &str, minutes_ago: i64) -> DisasterReport {
        let mut report = DisasterReport::new(
            ReferenceCode::new(code),
            "flood",
            Severity::High,
            ReportSource::Web,
        );
        report.created_at = Utc::now() - Duration::minutes(minutes_ago);
        report
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryReportRepository::new();
        repo.create(&report("DR-1", 0)).await.unwrap();

        let found = repo.find_by_reference("DR-1").await.unwrap();
        assert!(found.is_some());
        assert!(repo.find_by_reference("DR-2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_active_newest_first_and_limited() {
        let repo = InMemoryReportRepository::new();
        repo.create(&report("DR-OLD", 30)).await.unwrap();
        repo.create(&report("DR-NEW", 1)).await.unwrap();
        repo.create(&report("DR-MID", 10)).await.unwrap();

        let mut resolved = report("DR-RESOLVED", 0);
        resolved.status = ReportStatus::Resolved;
        repo.create(&resolved).await.unwrap();

        let active = repo.list_active(2).await.unwrap();
        let codes: Vec<&str> = active.iter().map(|r| r.reference_code.as_str()).collect();
        assert_eq!(codes, vec!["DR-NEW", "DR-MID"]);
    }

    #[tokio::test]
    async fn test_failure_mode() {
        let repo = InMemoryReportRepository::new();
        repo.set_should_fail(true);

        assert!(repo.create(&report("DR-1", 0)).await.is_err());
        assert!(repo.is_empty());
    }
}
