//! AI vision check for disaster report photos
//!
//! Sends the image to an OpenAI-compatible chat completions endpoint and asks
//! the model for a JSON verdict. Model output that cannot be read is treated
//! as a low-confidence pass so a real emergency is never blocked by a
//! confused model.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, error, info, warn};

use dr_core::errors::{DomainError, DomainResult};
use dr_core::services::verification::{ImageVerifier, VerificationResult};
use dr_shared::config::AiVisionConfig;

use crate::InfrastructureError;

/// Reason given when the model's answer could not be parsed
pub const UNPARSEABLE_REASON: &str = "Unable to fully verify image, proceeding with caution";

const USER_PROMPT: &str =
    "Please analyze this disaster report image and verify if it shows a legitimate emergency situation.";

static JSON_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("valid JSON block regex"));

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Verifier backed by a hosted vision model
pub struct AiVisionVerifier {
    client: reqwest::Client,
    config: AiVisionConfig,
}

impl AiVisionVerifier {
    pub fn new(config: AiVisionConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    fn request_body(&self, image_url: &str, disaster_type: Option<&str>) -> Value {
        json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": system_prompt(disaster_type) },
                {
                    "role": "user",
                    "content": [
                        { "type": "text", "text": USER_PROMPT },
                        { "type": "image_url", "image_url": { "url": image_url } }
                    ]
                }
            ]
        })
    }
}

/// Instructions for the model, naming the reported disaster type
pub fn system_prompt(disaster_type: Option<&str>) -> String {
    let disaster_type = disaster_type.map(str::trim).filter(|t| !t.is_empty()).unwrap_or("unspecified");
    format!(
        r#"You are a disaster verification expert for the Indian Disaster Response System. Your job is to analyze images submitted with disaster reports and determine if they show a legitimate emergency situation.

IMPORTANT: Lives depend on accurate assessment. Be thorough but also understand that during emergencies, image quality may be poor.

Analyze the image for:
1. Does it show signs of a disaster or emergency (flooding, fire, collapsed structures, accidents, etc.)?
2. Does the image appear to be a real photograph (not AI-generated, stock photo, or screenshot from movies/games)?
3. Is the image relevant to the reported disaster type: "{}"?

Respond ONLY with a JSON object in this exact format:
{{
  "isLegitimate": true/false,
  "confidence": "high"/"medium"/"low",
  "reason": "Brief explanation in 1-2 sentences",
  "warnings": ["any concerns or notes"]
}}"#,
        disaster_type
    )
}

/// Turn the submitted image into a data URL
///
/// `data:` URLs pass through untouched; raw payloads must be valid base64
/// and are assumed to be JPEG.
pub fn image_data_url(image_base64: &str) -> Result<String, InfrastructureError> {
    let image = image_base64.trim();
    if image.starts_with("data:") {
        return Ok(image.to_string());
    }

    base64::engine::general_purpose::STANDARD
        .decode(image)
        .map_err(|e| InfrastructureError::Verification(format!("Image is not valid base64: {}", e)))?;
    Ok(format!("data:image/jpeg;base64,{}", image))
}

/// Read the verdict out of the model's reply
pub fn parse_verdict(content: &str) -> VerificationResult {
    let parsed = JSON_BLOCK
        .find(content)
        .ok_or_else(|| "No JSON found in response".to_string())
        .and_then(|m| serde_json::from_str::<VerificationResult>(m.as_str()).map_err(|e| e.to_string()));

    match parsed {
        Ok(result) => result,
        Err(e) => {
            warn!(event = "verification_unparseable", error = %e, "Failed to parse AI response");
            VerificationResult::soft_pass(UNPARSEABLE_REASON)
        }
    }
}

#[async_trait]
impl ImageVerifier for AiVisionVerifier {
    async fn verify(&self, image_base64: &str, disaster_type: Option<&str>) -> DomainResult<VerificationResult> {
        if image_base64.trim().is_empty() {
            return Err(DomainError::Validation {
                message: "No image provided".to_string(),
            });
        }

        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            error!(event = "verification_unconfigured", "AI_VISION_API_KEY not configured");
            DomainError::Configuration {
                message: "AI service not configured".to_string(),
            }
        })?;

        let image_url = image_data_url(image_base64).map_err(|e| DomainError::Validation {
            message: e.to_string(),
        })?;

        debug!(
            event = "verification_requested",
            disaster_type = disaster_type.unwrap_or("unspecified"),
            "Requesting image verification"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&self.request_body(&image_url, disaster_type))
            .send()
            .await
            .map_err(|e| {
                error!(event = "verification_request_failed", error = %e, "AI request failed");
                DomainError::from(InfrastructureError::Verification(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                event = "verification_api_error",
                status = status.as_u16(),
                body = %body,
                "AI API error"
            );
            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(DomainError::ServiceBusy {
                    message: "Service busy, please try again".to_string(),
                });
            }
            return Err(DomainError::Verification {
                message: "Verification service unavailable".to_string(),
            });
        }

        let body: ChatResponse = response.json().await.map_err(|e| DomainError::Verification {
            message: format!("Invalid AI response: {}", e),
        })?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .unwrap_or_default();

        let result = parse_verdict(&content);
        info!(
            event = "verification_completed",
            is_legitimate = result.is_legitimate,
            confidence = %result.confidence,
            "Image verification completed"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dr_core::services::verification::Confidence;

    fn verifier(api_key: Option<&str>) -> AiVisionVerifier {
        AiVisionVerifier::new(AiVisionConfig {
            api_key: api_key.map(str::to_string),
            endpoint: "http://127.0.0.1:9/v1/chat/completions".to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_parse_plain_json() {
        let result = parse_verdict(
            r#"{"isLegitimate": true, "confidence": "high", "reason": "Flooded street", "warnings": []}"#,
        );
        assert!(result.is_legitimate);
        assert_eq!(result.confidence, Confidence::High);
        assert_eq!(result.reason, "Flooded street");
    }

    #[test]
    fn test_parse_json_inside_markdown() {
        let content = "Here you go:\n```json\n{\n  \"isLegitimate\": false,\n  \"confidence\": \"medium\",\n  \"reason\": \"Movie still\",\n  \"warnings\": [\"Looks staged\"]\n}\n```";
        let result = parse_verdict(content);
        assert!(!result.is_legitimate);
        assert_eq!(result.confidence, Confidence::Medium);
        assert_eq!(result.warnings, vec!["Looks staged"]);
    }

    #[test]
    fn test_unparseable_reply_is_soft_pass() {
        for content in ["", "I cannot tell", "{not json}"] {
            let result = parse_verdict(content);
            assert!(result.is_legitimate);
            assert_eq!(result.confidence, Confidence::Low);
            assert_eq!(result.reason, UNPARSEABLE_REASON);
            assert_eq!(result.warnings, vec!["Manual verification recommended"]);
        }
    }

    #[test]
    fn test_image_data_url() {
        assert_eq!(
            image_data_url("data:image/png;base64,aGVsbG8=").unwrap(),
            "data:image/png;base64,aGVsbG8="
        );
        assert_eq!(image_data_url("aGVsbG8=").unwrap(), "data:image/jpeg;base64,aGVsbG8=");
        assert!(image_data_url("not base64!!").is_err());
    }

    #[test]
    fn test_system_prompt_names_type() {
        assert!(system_prompt(Some("flood")).contains("\"flood\""));
        assert!(system_prompt(None).contains("\"unspecified\""));
    }

    #[tokio::test]
    async fn test_empty_image_is_validation_error() {
        let result = verifier(Some("key")).verify("  ", Some("flood")).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_missing_key_is_configuration_error() {
        let result = verifier(None).verify("aGVsbG8=", Some("flood")).await;
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[tokio::test]
    async fn test_invalid_base64_rejected_before_request() {
        let result = verifier(Some("key")).verify("%%%", None).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }
}
