//! Report submission and lookup

use actix_web::{web, HttpResponse};
use validator::Validate;

use dr_core::errors::DomainError;
use dr_shared::types::ApiResponse;

use crate::dto::{ListReportsQuery, SubmitReportRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::state::AppState;

/// Handler for POST /api/v1/reports
pub async fn submit_report(state: web::Data<AppState>, request: web::Json<SubmitReportRequest>) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state.submission.submit(request.into()).await {
        Ok(receipt) => HttpResponse::Created().json(ApiResponse::success(receipt)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/reports
pub async fn list_reports(state: web::Data<AppState>, query: web::Query<ListReportsQuery>) -> HttpResponse {
    match state.repository.list_active(query.effective_limit()).await {
        Ok(reports) => HttpResponse::Ok().json(ApiResponse::success(reports)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/reports/{reference}
pub async fn get_report(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let reference = path.into_inner();

    match state.repository.find_by_reference(&reference).await {
        Ok(Some(report)) => HttpResponse::Ok().json(ApiResponse::success(report)),
        Ok(None) => handle_domain_error(DomainError::NotFound {
            resource: format!("report {}", reference),
        }),
        Err(error) => handle_domain_error(error),
    }
}
