//! Static lookup data for the report form and contact directory.
//!
//! The catalog is built once at startup and injected into the services and
//! handlers that need it.

use serde::{Deserialize, Serialize};

use super::entities::Severity;

/// Grouping used by the contact directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactCategory {
    Emergency,
    Government,
    DisasterManagement,
}

/// A public emergency helpline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub number: String,
    pub description: String,
    pub category: ContactCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// State disaster-management helpline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateHelpline {
    pub state: String,
    pub number: String,
}

/// Severity level with the label shown in the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityOption {
    pub value: Severity,
    pub description: String,
}

/// Allowed enumerations for reports plus the public contact directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportCatalog {
    pub disaster_types: Vec<String>,
    pub severities: Vec<SeverityOption>,
    pub states: Vec<String>,
    pub contacts: Vec<EmergencyContact>,
    pub state_helplines: Vec<StateHelpline>,
}

impl ReportCatalog {
    /// Catalog for Indian deployments
    pub fn india() -> Self {
        let disaster_types = [
            "Flood",
            "Earthquake",
            "Wildfire",
            "Hurricane",
            "Tornado",
            "Landslide",
            "Tsunami",
            "Industrial Accident",
            "Other",
        ];

        let states = [
            "Andhra Pradesh", "Arunachal Pradesh", "Assam", "Bihar", "Chhattisgarh",
            "Goa", "Gujarat", "Haryana", "Himachal Pradesh", "Jharkhand", "Karnataka",
            "Kerala", "Madhya Pradesh", "Maharashtra", "Manipur", "Meghalaya", "Mizoram",
            "Nagaland", "Odisha", "Punjab", "Rajasthan", "Sikkim", "Tamil Nadu",
            "Telangana", "Tripura", "Uttar Pradesh", "Uttarakhand", "West Bengal",
            "Andaman and Nicobar Islands", "Chandigarh",
            "Dadra and Nagar Haveli and Daman and Diu", "Delhi", "Jammu and Kashmir",
            "Ladakh", "Lakshadweep", "Puducherry",
        ];

        let contact = |name: &str, number: &str, description: &str, category, website: Option<&str>| {
            EmergencyContact {
                name: name.to_string(),
                number: number.to_string(),
                description: description.to_string(),
                category,
                website: website.map(String::from),
            }
        };

        let contacts = vec![
            contact("National Emergency Number", "112", "Police, Fire, Ambulance - Single emergency number", ContactCategory::Emergency, None),
            contact("NDRF Control Room", "011-24363260", "National Disaster Response Force", ContactCategory::Emergency, None),
            contact("Police", "100", "Police emergency helpline", ContactCategory::Government, None),
            contact("Fire Service", "101", "Fire emergency helpline", ContactCategory::Government, None),
            contact("Ambulance", "102", "Medical emergency ambulance", ContactCategory::Government, None),
            contact("Women Helpline", "1091", "Women in distress helpline", ContactCategory::Government, None),
            contact("Child Helpline", "1098", "Child protection helpline", ContactCategory::Government, None),
            contact("Road Accident", "1073", "Road accident emergency", ContactCategory::Government, None),
            contact("NDMA (National Disaster Management)", "1078", "National Disaster Management Authority toll-free", ContactCategory::DisasterManagement, Some("https://ndma.gov.in")),
            contact("Indian Meteorological Department", "1800-180-1717", "Weather warnings and cyclone alerts", ContactCategory::DisasterManagement, Some("https://mausam.imd.gov.in")),
            contact("Central Water Commission", "011-26109590", "Flood forecasting and warnings", ContactCategory::DisasterManagement, Some("https://cwc.gov.in")),
            contact("Earthquake Helpline", "011-24619943", "Indian National Center for Seismology", ContactCategory::DisasterManagement, Some("https://seismo.gov.in")),
        ];

        let state_helplines = [
            ("Maharashtra", "1916"),
            ("Kerala", "1070"),
            ("Tamil Nadu", "1070"),
            ("Karnataka", "1070"),
            ("Andhra Pradesh", "1070"),
            ("Gujarat", "1070"),
            ("Rajasthan", "1070"),
            ("West Bengal", "1070"),
            ("Uttar Pradesh", "1070"),
            ("Delhi", "1077"),
        ]
        .into_iter()
        .map(|(state, number)| StateHelpline {
            state: state.to_string(),
            number: number.to_string(),
        })
        .collect();

        Self {
            disaster_types: disaster_types.iter().map(|t| t.to_string()).collect(),
            severities: Severity::ALL
                .iter()
                .map(|s| SeverityOption {
                    value: *s,
                    description: s.description().to_string(),
                })
                .collect(),
            states: states.iter().map(|s| s.to_string()).collect(),
            contacts,
            state_helplines,
        }
    }

    /// Case-insensitive lookup returning the catalog spelling of a state
    pub fn canonical_state(&self, state: &str) -> Option<&str> {
        let wanted = state.trim();
        self.states
            .iter()
            .find(|s| s.eq_ignore_ascii_case(wanted))
            .map(String::as_str)
    }

    /// State disaster-management number, if the state runs one
    pub fn helpline_for_state(&self, state: &str) -> Option<&str> {
        self.state_helplines
            .iter()
            .find(|h| h.state.eq_ignore_ascii_case(state.trim()))
            .map(|h| h.number.as_str())
    }
}

impl Default for ReportCatalog {
    fn default() -> Self {
        Self::india()
    }
}
