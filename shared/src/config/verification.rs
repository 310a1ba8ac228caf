//! AI image verification configuration

use serde::{Deserialize, Serialize};

use super::sms::non_empty_var;

/// Settings for the hosted vision model used to vet report photos
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AiVisionConfig {
    /// Bearer token for the AI gateway
    pub api_key: Option<String>,
    /// OpenAI-compatible chat completions endpoint
    pub endpoint: String,
    /// Model identifier
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for AiVisionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: String::from("https://ai.gateway.lovable.dev/v1/chat/completions"),
            model: String::from("google/gemini-2.5-flash"),
            timeout_secs: 30,
        }
    }
}

impl AiVisionConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: non_empty_var("AI_VISION_API_KEY"),
            endpoint: non_empty_var("AI_VISION_ENDPOINT").unwrap_or(defaults.endpoint),
            model: non_empty_var("AI_VISION_MODEL").unwrap_or(defaults.model),
            timeout_secs: std::env::var("AI_VISION_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
