//! Disaster report entity representing one reported incident.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::reference::ReferenceCode;

/// Severity of a reported incident
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Minor damage, no immediate danger
    Low,
    /// Significant damage, potential danger
    Medium,
    /// Severe damage, immediate danger
    High,
    /// Life-threatening emergency
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    /// Human-readable description shown next to the level in the report form
    pub fn description(&self) -> &'static str {
        match self {
            Severity::Low => "Minor damage, no immediate danger",
            Severity::Medium => "Significant damage, potential danger",
            Severity::High => "Severe damage, immediate danger",
            Severity::Critical => "Life-threatening emergency",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            other => Err(format!("Unknown severity: {}", other)),
        }
    }
}

/// Lifecycle status; changed only by external moderation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    #[default]
    Active,
    Monitoring,
    Resolved,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Active => "active",
            ReportStatus::Monitoring => "monitoring",
            ReportStatus::Resolved => "resolved",
        }
    }
}

impl FromStr for ReportStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ReportStatus::Active),
            "monitoring" => Ok(ReportStatus::Monitoring),
            "resolved" => Ok(ReportStatus::Resolved),
            other => Err(format!("Unknown report status: {}", other)),
        }
    }
}

/// Channel the report arrived through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSource {
    Web,
    Sms,
}

impl ReportSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportSource::Web => "web",
            ReportSource::Sms => "sms",
        }
    }
}

impl FromStr for ReportSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "web" => Ok(ReportSource::Web),
            "sms" => Ok(ReportSource::Sms),
            other => Err(format!("Unknown report source: {}", other)),
        }
    }
}

/// Disaster report entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisasterReport {
    /// Unique identifier
    pub id: Uuid,

    /// Short reference code quoted back to the reporter
    pub reference_code: ReferenceCode,

    /// Free-text category (flood, earthquake, ...)
    #[serde(rename = "type")]
    pub disaster_type: String,

    pub severity: Severity,

    pub state: String,

    pub district: String,

    /// Free-text location description
    pub location: String,

    pub latitude: Option<f64>,

    pub longitude: Option<f64>,

    pub description: String,

    /// Message from the people affected, verbatim
    pub victim_message: Option<String>,

    /// Reporter's phone number or other contact
    pub reporter_contact: Option<String>,

    /// Estimated number of people affected (free text)
    pub people_affected: Option<String>,

    pub source: ReportSource,

    /// Whether an attached photo passed AI verification
    pub image_verified: bool,

    pub status: ReportStatus,

    pub created_at: DateTime<Utc>,
}

impl DisasterReport {
    /// Creates a new active report
    pub fn new(
        reference_code: ReferenceCode,
        disaster_type: impl Into<String>,
        severity: Severity,
        source: ReportSource,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            reference_code,
            disaster_type: disaster_type.into(),
            severity,
            state: String::new(),
            district: String::new(),
            location: String::new(),
            latitude: None,
            longitude: None,
            description: String::new(),
            victim_message: None,
            reporter_contact: None,
            people_affected: None,
            source,
            image_verified: false,
            status: ReportStatus::Active,
            created_at: Utc::now(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ReportStatus::Active
    }

    /// Both coordinates are known, so the report can be pinned on the map
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}
