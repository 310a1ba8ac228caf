//! Route table and request configuration
//!
//! Shared by `main` and the integration tests so both serve the same routes.

use actix_web::{error, web, HttpResponse};

use dr_shared::types::ApiResponse;

use crate::routes::{alerts, catalog, images, reports, sms};

/// Register every route under `/health` and `/api/v1`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check)).service(
        web::scope("/api/v1")
            .route("/alerts", web::post().to(alerts::send_alert))
            .route("/sms/inbound", web::post().to(sms::receive_sms))
            .route("/images/verify", web::post().to(images::verify_image))
            .service(
                web::scope("/reports")
                    .route("", web::post().to(reports::submit_report))
                    .route("", web::get().to(reports::list_reports))
                    .route("/{reference}", web::get().to(reports::get_report)),
            )
            .route("/catalog", web::get().to(catalog::get_catalog))
            .route("/contacts", web::get().to(catalog::get_contacts)),
    );
}

/// JSON extractor settings: the payload limit has to fit base64 images
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            tracing::debug!(event = "json_rejected", error = %err, "Rejected request body");
            let message = match &err {
                error::JsonPayloadError::OverflowKnownLength { .. } | error::JsonPayloadError::Overflow { .. } => {
                    "Request body too large".to_string()
                }
                error::JsonPayloadError::ContentType => "Expected application/json".to_string(),
                other => format!("Invalid request body: {}", other),
            };
            let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error(message));
            error::InternalError::from_response(err, response).into()
        })
}

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "disaster-response-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::error("The requested resource was not found"))
}
