//! Form enumerations and the emergency contact directory

use actix_web::{web, HttpResponse};
use serde::Serialize;

use dr_core::domain::catalog::{EmergencyContact, SeverityOption, StateHelpline};
use dr_shared::types::ApiResponse;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse<'a> {
    pub disaster_types: &'a [String],
    pub severities: &'a [SeverityOption],
    pub states: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactsResponse<'a> {
    pub contacts: &'a [EmergencyContact],
    pub state_helplines: &'a [StateHelpline],
}

/// Handler for GET /api/v1/catalog
pub async fn get_catalog(state: web::Data<AppState>) -> HttpResponse {
    let catalog = &state.catalog;
    HttpResponse::Ok().json(ApiResponse::success(CatalogResponse {
        disaster_types: &catalog.disaster_types,
        severities: &catalog.severities,
        states: &catalog.states,
    }))
}

/// Handler for GET /api/v1/contacts
pub async fn get_contacts(state: web::Data<AppState>) -> HttpResponse {
    let catalog = &state.catalog;
    HttpResponse::Ok().json(ApiResponse::success(ContactsResponse {
        contacts: &catalog.contacts,
        state_helplines: &catalog.state_helplines,
    }))
}
