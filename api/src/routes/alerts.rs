//! Outbound alert endpoint

use actix_web::{web, HttpResponse};
use validator::Validate;

use dr_core::errors::DomainError;

use crate::dto::{AlertResponse, SendAlertRequest};
use crate::handlers::error::{status_for, validation_message};
use crate::state::AppState;

/// Handler for POST /api/v1/alerts
///
/// Sends one message to every valid number. Always answers with the
/// aggregate shape; per-recipient failures are in `results`.
pub async fn send_alert(state: web::Data<AppState>, request: web::Json<SendAlertRequest>) -> HttpResponse {
    let request = request.into_inner();

    if let Err(errors) = request.validate() {
        return HttpResponse::BadRequest().json(AlertResponse::failed(validation_message(&errors)));
    }

    let recipients = request.recipients();
    if recipients.is_empty() {
        return HttpResponse::BadRequest().json(AlertResponse::failed("Phone number and message are required"));
    }

    match state.gateway.send_alert(recipients.as_slice(), &request.message).await {
        Ok(batch) => HttpResponse::Ok().json(AlertResponse::from(batch)),
        Err(error) => alert_failure(error),
    }
}

fn alert_failure(error: DomainError) -> HttpResponse {
    let status = status_for(&error);
    if error.is_validation() {
        tracing::info!(event = "alert_rejected", error = %error, "Alert request rejected");
    } else {
        tracing::error!(event = "alert_failed", error = %error, "Alert request failed");
    }
    HttpResponse::build(status).json(AlertResponse::failed(error.to_string()))
}
