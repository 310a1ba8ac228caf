//! Maps domain errors onto HTTP responses

use actix_web::{http::StatusCode, HttpResponse};

use dr_core::errors::DomainError;
use dr_shared::types::ApiResponse;
use validator::ValidationErrors;

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation { .. } | DomainError::ValidationErr(_) => StatusCode::BAD_REQUEST,
        DomainError::ImageRejected { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::ServiceBusy { .. } => StatusCode::TOO_MANY_REQUESTS,
        DomainError::Provider { .. } | DomainError::Verification { .. } => StatusCode::BAD_GATEWAY,
        DomainError::Configuration { .. } | DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Message safe to show to the caller
pub fn public_message(error: &DomainError) -> String {
    match error {
        DomainError::Internal { .. } => "An internal error occurred".to_string(),
        other => other.to_string(),
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let status = status_for(&error);
    if error.is_validation() {
        tracing::info!(event = "request_rejected", status = status.as_u16(), error = %error, "Request rejected");
    } else {
        tracing::error!(event = "request_failed", status = status.as_u16(), error = %error, "Request failed");
    }

    HttpResponse::build(status).json(ApiResponse::<()>::error(public_message(&error)))
}

/// Flatten request validation errors into one message
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for field: {}", field))
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

/// 400 response for a request that failed DTO validation
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    handle_domain_error(DomainError::Validation {
        message: validation_message(&errors),
    })
}
