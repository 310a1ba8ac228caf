//! Typed validation errors raised before any external call is made

use thiserror::Error;

/// Validation errors for report submissions and alert requests
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid value for field: {field}")]
    InvalidFormat { field: String },

    #[error("No valid phone numbers provided")]
    NoValidRecipients,

    #[error("Too many recipients (max: {max}, actual: {actual})")]
    TooManyRecipients { max: usize, actual: usize },

    #[error("Message must not be empty")]
    EmptyMessage,
}

impl ValidationError {
    /// Stable machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::RequiredField { .. } => "required_field",
            ValidationError::InvalidFormat { .. } => "invalid_format",
            ValidationError::NoValidRecipients => "no_valid_recipients",
            ValidationError::TooManyRecipients { .. } => "too_many_recipients",
            ValidationError::EmptyMessage => "empty_message",
        }
    }
}
