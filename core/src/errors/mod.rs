//! Domain-specific error types and error handling.

mod types;

pub use types::ValidationError;

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// No SMS provider (or other external service) has credentials
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// An external provider rejected or failed a request
    #[error("{provider} error: {message}")]
    Provider { provider: String, message: String },

    /// The image verification service failed or timed out
    #[error("Verification service error: {message}")]
    Verification { message: String },

    /// An upstream service is rate limiting us
    #[error("{message}")]
    ServiceBusy { message: String },

    /// The attached image did not pass verification
    #[error("Image rejected: {reason}")]
    ImageRejected { reason: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// Whether the error is a user-facing rejection rather than a system fault
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::Validation { .. }
                | DomainError::ValidationErr(_)
                | DomainError::ImageRejected { .. }
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_convert() {
        let error: DomainError = ValidationError::NoValidRecipients.into();
        assert!(error.is_validation());
        assert_eq!(error.to_string(), "No valid phone numbers provided");
    }

    #[test]
    fn test_configuration_error_is_not_validation() {
        let error = DomainError::Configuration {
            message: "No SMS provider configured".to_string(),
        };
        assert!(!error.is_validation());
        assert!(error.to_string().contains("No SMS provider configured"));
    }

    #[test]
    fn test_validation_error_codes() {
        assert_eq!(ValidationError::EmptyMessage.code(), "empty_message");
        assert_eq!(
            ValidationError::TooManyRecipients { max: 5, actual: 6 }.code(),
            "too_many_recipients"
        );
    }
}
