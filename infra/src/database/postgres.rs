//! Postgres implementation of the ReportRepository trait.
//!
//! Reports live in the `disaster_reports` table that the live map reads.
//! Queries are checked at runtime so the crate builds without a database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use dr_core::domain::entities::{DisasterReport, ReferenceCode, ReportSource, ReportStatus, Severity};
use dr_core::errors::DomainError;
use dr_core::repositories::ReportRepository;

use crate::InfrastructureError;

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS disaster_reports (
    id UUID PRIMARY KEY,
    reference_id TEXT NOT NULL UNIQUE,
    type TEXT NOT NULL,
    severity TEXT NOT NULL,
    state TEXT NOT NULL DEFAULT '',
    district TEXT NOT NULL DEFAULT '',
    location TEXT NOT NULL DEFAULT '',
    latitude DOUBLE PRECISION,
    longitude DOUBLE PRECISION,
    description TEXT NOT NULL DEFAULT '',
    victim_message TEXT,
    reporter_contact TEXT,
    people_affected TEXT,
    source TEXT NOT NULL DEFAULT 'web',
    image_verified BOOLEAN NOT NULL DEFAULT FALSE,
    status TEXT NOT NULL DEFAULT 'active',
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)"#;

const CREATE_STATUS_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_disaster_reports_status_created ON disaster_reports (status, created_at DESC)";

const SELECT_COLUMNS: &str = "id, reference_id, type, severity, state, district, location, latitude, longitude, \
     description, victim_message, reporter_contact, people_affected, source, image_verified, status, created_at";

/// One row of `disaster_reports`
#[derive(Debug, Clone, FromRow)]
pub struct ReportRow {
    pub id: Uuid,
    pub reference_id: String,
    #[sqlx(rename = "type")]
    pub disaster_type: String,
    pub severity: String,
    pub state: String,
    pub district: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: String,
    pub victim_message: Option<String>,
    pub reporter_contact: Option<String>,
    pub people_affected: Option<String>,
    pub source: String,
    pub image_verified: bool,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl ReportRow {
    /// Convert a row into the domain entity
    pub fn into_report(self) -> Result<DisasterReport, DomainError> {
        let severity = self.severity.parse::<Severity>().map_err(|_| DomainError::Internal {
            message: format!("Unknown severity in store: {}", self.severity),
        })?;
        let source = self.source.parse::<ReportSource>().map_err(|_| DomainError::Internal {
            message: format!("Unknown source in store: {}", self.source),
        })?;
        let status = self.status.parse::<ReportStatus>().map_err(|_| DomainError::Internal {
            message: format!("Unknown status in store: {}", self.status),
        })?;

        Ok(DisasterReport {
            id: self.id,
            reference_code: ReferenceCode::new(self.reference_id),
            disaster_type: self.disaster_type,
            severity,
            state: self.state,
            district: self.district,
            location: self.location,
            latitude: self.latitude,
            longitude: self.longitude,
            description: self.description,
            victim_message: self.victim_message,
            reporter_contact: self.reporter_contact,
            people_affected: self.people_affected,
            source,
            image_verified: self.image_verified,
            status,
            created_at: self.created_at,
        })
    }
}

/// Postgres implementation of ReportRepository
pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the reports table and its index if missing
    pub async fn ensure_schema(&self) -> Result<(), InfrastructureError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_STATUS_INDEX).execute(&self.pool).await?;
        tracing::info!("disaster_reports schema ready");
        Ok(())
    }
}

fn store_error(action: &str, e: sqlx::Error) -> DomainError {
    tracing::error!(error = %e, "Failed to {} report", action);
    DomainError::Internal {
        message: format!("Failed to {} report: {}", action, e),
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    async fn create(&self, report: &DisasterReport) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO disaster_reports (
                id, reference_id, type, severity, state, district, location,
                latitude, longitude, description, victim_message, reporter_contact,
                people_affected, source, image_verified, status, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            "#,
        )
        .bind(report.id)
        .bind(report.reference_code.as_str())
        .bind(&report.disaster_type)
        .bind(report.severity.as_str())
        .bind(&report.state)
        .bind(&report.district)
        .bind(&report.location)
        .bind(report.latitude)
        .bind(report.longitude)
        .bind(&report.description)
        .bind(&report.victim_message)
        .bind(&report.reporter_contact)
        .bind(&report.people_affected)
        .bind(report.source.as_str())
        .bind(report.image_verified)
        .bind(report.status.as_str())
        .bind(report.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| store_error("insert", e))?;

        Ok(())
    }

    async fn find_by_reference(&self, reference_code: &str) -> Result<Option<DisasterReport>, DomainError> {
        let query = format!("SELECT {} FROM disaster_reports WHERE reference_id = $1", SELECT_COLUMNS);
        let row = sqlx::query_as::<_, ReportRow>(&query)
            .bind(reference_code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("fetch", e))?;

        row.map(ReportRow::into_report).transpose()
    }

    async fn list_active(&self, limit: usize) -> Result<Vec<DisasterReport>, DomainError> {
        let query = format!(
            "SELECT {} FROM disaster_reports WHERE status = 'active' ORDER BY created_at DESC LIMIT $1",
            SELECT_COLUMNS
        );
        let rows = sqlx::query_as::<_, ReportRow>(&query)
            .bind(i64::try_from(limit).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("list", e))?;

        rows.into_iter().map(ReportRow::into_report).collect()
    }
}
