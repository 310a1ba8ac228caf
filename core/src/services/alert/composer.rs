//! Renders the fixed-template alert text sent to rescue crews

use crate::domain::entities::{DisasterReport, Severity};

/// Placeholder for an unknown affected-people count
pub const UNKNOWN_AFFECTED: &str = "Unknown";

/// Longest alert that still goes out as a single provider request
pub const MAX_ALERT_CHARS: usize = 1600;

const HEADER: &str = "🚨 DISASTER ALERT 🚨";
const SIGNATURE: &str = "- India Disaster Response";

// Per-field caps; together they keep a full alert under MAX_ALERT_CHARS
const SHORT_FIELD_CHARS: usize = 50;
const LOCATION_CHARS: usize = 300;
const DETAILS_CHARS: usize = 400;
const VICTIM_MESSAGE_CHARS: usize = 300;
const ELLIPSIS: &str = "...";

/// Report fields that go into an alert
#[derive(Debug, Clone, PartialEq)]
pub struct AlertContent {
    pub disaster_type: String,
    pub severity: Severity,
    pub location: String,
    pub district: String,
    pub state: String,
    pub people_affected: Option<String>,
    pub description: Option<String>,
    pub victim_message: Option<String>,
    pub reporter_contact: Option<String>,
    pub image_verified: bool,
    pub reference_code: String,
}

impl AlertContent {
    pub fn from_report(report: &DisasterReport) -> Self {
        Self {
            disaster_type: report.disaster_type.clone(),
            severity: report.severity,
            location: report.location.clone(),
            district: report.district.clone(),
            state: report.state.clone(),
            people_affected: report.people_affected.clone(),
            description: Some(report.description.clone()),
            victim_message: report.victim_message.clone(),
            reporter_contact: report.reporter_contact.clone(),
            image_verified: report.image_verified,
            reference_code: report.reference_code.to_string(),
        }
    }
}

/// Compose the alert text
///
/// Lines appear in a stable order; optional fields that are absent or blank
/// are left out entirely. Free-text fields are clipped so the whole alert
/// stays within `MAX_ALERT_CHARS`.
pub fn compose_alert(content: &AlertContent) -> String {
    let mut lines = vec![
        HEADER.to_string(),
        format!("Type: {}", clip(&content.disaster_type.trim().to_uppercase(), SHORT_FIELD_CHARS)),
        format!("Severity: {}", content.severity.as_str().to_uppercase()),
        format!("Location: {}", clip(&place_line(content), LOCATION_CHARS)),
        format!(
            "People Affected: {}",
            clip(present(&content.people_affected).unwrap_or(UNKNOWN_AFFECTED), SHORT_FIELD_CHARS)
        ),
    ];

    if let Some(description) = present(&content.description) {
        lines.push(format!("Details: {}", clip(description, DETAILS_CHARS)));
    }
    if let Some(message) = present(&content.victim_message) {
        lines.push(format!("Victim Message: {}", clip(message, VICTIM_MESSAGE_CHARS)));
    }
    if let Some(contact) = present(&content.reporter_contact) {
        lines.push(format!("Contact: {}", clip(contact, SHORT_FIELD_CHARS)));
    }
    if content.image_verified {
        lines.push("Image: AI verified".to_string());
    }

    lines.push(format!("Ref: {}", content.reference_code));
    lines.push(SIGNATURE.to_string());
    lines.join("\n")
}

/// Cut `text` to at most `max` characters, marking the cut
fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max - ELLIPSIS.len()).collect();
    format!("{}{}", kept.trim_end(), ELLIPSIS)
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

// "Unknown" placeholders from the SMS path carry no information
fn place_line(content: &AlertContent) -> String {
    let parts: Vec<&str> = [&content.location, &content.district, &content.state]
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty() && !p.eq_ignore_ascii_case("unknown"))
        .collect();

    if parts.is_empty() {
        "Location not specified".to_string()
    } else {
        parts.join(", ")
    }
}
