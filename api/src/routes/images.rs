//! Image verification endpoint

use actix_web::{http::StatusCode, web, HttpResponse};

use dr_core::errors::DomainError;

use crate::dto::{VerifyImageError, VerifyImageRequest};
use crate::state::AppState;

/// Handler for POST /api/v1/images/verify
pub async fn verify_image(state: web::Data<AppState>, request: web::Json<VerifyImageRequest>) -> HttpResponse {
    let request = request.into_inner();

    let image = match request.image_base64.as_deref().filter(|i| !i.trim().is_empty()) {
        Some(image) => image,
        None => return HttpResponse::BadRequest().json(VerifyImageError::new("No image provided")),
    };

    match state.verifier.verify(image, request.disaster_type.as_deref()).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(error) => {
            let status = match &error {
                DomainError::Validation { .. } | DomainError::ValidationErr(_) => StatusCode::BAD_REQUEST,
                DomainError::ServiceBusy { .. } => StatusCode::TOO_MANY_REQUESTS,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            tracing::warn!(
                event = "image_verification_failed",
                status = status.as_u16(),
                error = %error,
                "Image verification failed"
            );
            HttpResponse::build(status).json(VerifyImageError::new(error_text(&error)))
        }
    }
}

fn error_text(error: &DomainError) -> String {
    match error {
        DomainError::Configuration { message }
        | DomainError::Verification { message }
        | DomainError::ServiceBusy { message }
        | DomainError::Validation { message } => message.clone(),
        other => other.to_string(),
    }
}
