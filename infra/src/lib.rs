//! # Infrastructure Layer
//!
//! Concrete implementations of the seams defined in `dr_core`:
//!
//! - **SMS**: Twilio (per-recipient) and Fast2SMS (bulk) providers over
//!   plain HTTPS, plus a mock provider for development
//! - **Verification**: AI vision check for report photos
//! - **Database**: Postgres report store using SQLx

use dr_core::errors::DomainError;

/// Database module - Postgres implementation using SQLx
pub mod database;

/// SMS provider module
pub mod sms;

/// AI image verification module
pub mod verification;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS provider error
    #[error("SMS service error: {0}")]
    Sms(String),

    /// Image verification error
    #[error("Verification error: {0}")]
    Verification(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Config(message) => DomainError::Configuration { message },
            InfrastructureError::Verification(message) => DomainError::Verification { message },
            InfrastructureError::Sms(message) => DomainError::Provider {
                provider: "sms".to_string(),
                message,
            },
            other => DomainError::Internal {
                message: other.to_string(),
            },
        }
    }
}
