//! Trait for image verification integration

use async_trait::async_trait;

use crate::errors::DomainResult;

use super::types::VerificationResult;

/// Judges whether an attached image shows a real emergency
#[async_trait]
pub trait ImageVerifier: Send + Sync {
    /// Verify a base64 image (raw or `data:` URL) for the given disaster type
    ///
    /// # Returns
    /// * `Ok(VerificationResult)` with the verdict
    /// * `Err(DomainError)` when the service is unconfigured, busy or unreachable
    async fn verify(&self, image_base64: &str, disaster_type: Option<&str>) -> DomainResult<VerificationResult>;
}
