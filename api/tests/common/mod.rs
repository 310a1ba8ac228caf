//! Shared setup for the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{dev::ServiceResponse, web, App};
use async_trait::async_trait;

use dr_api::app::{configure, json_config, not_found};
use dr_api::AppState;
use dr_core::domain::ReportCatalog;
use dr_core::errors::{DomainError, DomainResult};
use dr_core::repositories::InMemoryReportRepository;
use dr_core::services::verification::{Confidence, ImageVerifier, VerificationResult};
use dr_infra::sms::MockSmsProvider;

pub const RESCUE_NUMBER: &str = "9123456789";

/// Verifier returning a canned answer
#[derive(Clone, Copy)]
pub enum FixedVerifier {
    Legitimate,
    Rejected,
    Busy,
    Unconfigured,
}

#[async_trait]
impl ImageVerifier for FixedVerifier {
    async fn verify(&self, _image_base64: &str, _disaster_type: Option<&str>) -> DomainResult<VerificationResult> {
        match self {
            FixedVerifier::Legitimate => Ok(VerificationResult {
                is_legitimate: true,
                confidence: Confidence::High,
                reason: "Flood water visible in a residential street".to_string(),
                warnings: Vec::new(),
            }),
            FixedVerifier::Rejected => Ok(VerificationResult {
                is_legitimate: false,
                confidence: Confidence::High,
                reason: "Image is a cartoon".to_string(),
                warnings: Vec::new(),
            }),
            FixedVerifier::Busy => Err(DomainError::ServiceBusy {
                message: "Service busy, please try again".to_string(),
            }),
            FixedVerifier::Unconfigured => Err(DomainError::Configuration {
                message: "AI service not configured".to_string(),
            }),
        }
    }
}

pub struct TestContext {
    pub sms: MockSmsProvider,
    pub repository: InMemoryReportRepository,
    pub state: AppState,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with(MockSmsProvider::new(), FixedVerifier::Legitimate)
    }

    pub fn with(sms: MockSmsProvider, verifier: FixedVerifier) -> Self {
        let repository = InMemoryReportRepository::new();
        let state = AppState::new(
            vec![Arc::new(sms.clone())],
            Arc::new(repository.clone()),
            Arc::new(verifier),
            ReportCatalog::india(),
            vec![RESCUE_NUMBER.to_string()],
        );

        Self { sms, repository, state }
    }
}

/// App with the production routes mounted over the given state
pub fn app(
    state: AppState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config(1024 * 1024))
        .configure(configure)
        .default_service(web::route().to(not_found))
}
