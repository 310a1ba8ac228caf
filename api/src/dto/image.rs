//! Image verification request and error bodies

use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/images/verify`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyImageRequest {
    pub image_base64: Option<String>,
    pub disaster_type: Option<String>,
}

/// Failure body; a failed check never counts as legitimate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyImageError {
    pub error: String,
    pub is_legitimate: bool,
}

impl VerifyImageError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            is_legitimate: false,
        }
    }
}
