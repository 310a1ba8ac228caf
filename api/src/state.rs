//! Shared application state
//!
//! Services are built once at startup and shared by every worker through
//! `web::Data`.

use std::sync::Arc;

use tracing::{info, warn};

use dr_core::domain::ReportCatalog;
use dr_core::repositories::{InMemoryReportRepository, ReportRepository};
use dr_core::services::alert::{SmsGateway, SmsProvider};
use dr_core::services::inbound::InboundSmsService;
use dr_core::services::submission::ReportSubmissionFlow;
use dr_core::services::verification::ImageVerifier;
use dr_infra::database::{DatabasePool, PgReportRepository};
use dr_infra::sms::create_sms_providers;
use dr_infra::verification::AiVisionVerifier;
use dr_infra::InfrastructureError;
use dr_shared::config::AppConfig;

/// Application state that holds shared services
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<SmsGateway>,
    pub inbound: Arc<InboundSmsService>,
    pub submission: Arc<ReportSubmissionFlow>,
    pub verifier: Arc<dyn ImageVerifier>,
    pub repository: Arc<dyn ReportRepository>,
    pub catalog: Arc<ReportCatalog>,
}

impl AppState {
    /// Wire the services from their collaborators
    pub fn new(
        providers: Vec<Arc<dyn SmsProvider>>,
        repository: Arc<dyn ReportRepository>,
        verifier: Arc<dyn ImageVerifier>,
        catalog: ReportCatalog,
        rescue_numbers: Vec<String>,
    ) -> Self {
        let gateway = Arc::new(SmsGateway::new(providers));
        let catalog = Arc::new(catalog);

        let inbound = Arc::new(InboundSmsService::new(
            repository.clone(),
            gateway.clone(),
            rescue_numbers,
        ));
        let submission = Arc::new(ReportSubmissionFlow::new(
            repository.clone(),
            gateway.clone(),
            verifier.clone(),
            catalog.clone(),
        ));

        Self {
            gateway,
            inbound,
            submission,
            verifier,
            repository,
            catalog,
        }
    }

    /// Build production state from configuration
    ///
    /// Without a database URL reports are kept in memory.
    pub async fn from_config(config: &AppConfig) -> Result<Self, InfrastructureError> {
        let providers = create_sms_providers(&config.sms)?;
        if config.rescue.is_empty() {
            warn!(event = "rescue_numbers_missing", "RESCUE_CREW_NUMBERS is empty");
        }

        let repository: Arc<dyn ReportRepository> = if config.database.url.is_some() {
            let pool = DatabasePool::new(&config.database).await?;
            let repository = PgReportRepository::new(pool.get_pool().clone());
            repository.ensure_schema().await?;
            info!(event = "report_store_ready", store = "postgres", "Report store ready");
            Arc::new(repository)
        } else {
            warn!(
                event = "report_store_ready",
                store = "memory",
                "DATABASE_URL not set, reports are kept in memory"
            );
            Arc::new(InMemoryReportRepository::new())
        };

        let verifier = Arc::new(AiVisionVerifier::new(config.ai_vision.clone())?);
        if !verifier.is_configured() {
            warn!(event = "verification_unconfigured", "AI_VISION_API_KEY not set");
        }

        let state = Self::new(
            providers,
            repository,
            verifier,
            ReportCatalog::india(),
            config.rescue.numbers.clone(),
        );
        if !state.gateway.has_provider() {
            warn!(event = "sms_unconfigured", "No SMS provider configured, alerts will fail");
        }

        Ok(state)
    }
}
