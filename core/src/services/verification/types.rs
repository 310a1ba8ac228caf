//! Types for image verification results

use serde::{Deserialize, Serialize};
use std::fmt;

/// How sure the verifier is about its verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict on a submitted disaster image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub is_legitimate: bool,
    pub confidence: Confidence,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl VerificationResult {
    /// Let the report through with low confidence
    ///
    /// A flaky verifier must not block a real emergency.
    pub fn soft_pass(reason: impl Into<String>) -> Self {
        Self {
            is_legitimate: true,
            confidence: Confidence::Low,
            reason: reason.into(),
            warnings: vec!["Manual verification recommended".to_string()],
        }
    }

    /// The image passed a real check, not a soft pass
    ///
    /// Soft passes always carry low confidence, so a low-confidence verdict
    /// never counts as verified.
    pub fn is_confirmed(&self) -> bool {
        self.is_legitimate && self.confidence != Confidence::Low
    }
}
