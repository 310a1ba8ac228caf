//! Configuration module with business-specific sub-modules
//!
//! - `database` - report store connection settings
//! - `environment` - environment detection
//! - `server` - HTTP server binding and CORS
//! - `sms` - SMS provider credentials and the rescue-crew list
//! - `verification` - AI image verification service

pub mod database;
pub mod environment;
pub mod server;
pub mod sms;
pub mod verification;

use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::ServerConfig;
pub use sms::{Fast2SmsSettings, RescueConfig, SmsConfig, TwilioSettings};
pub use verification::AiVisionConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Report store configuration
    pub database: DatabaseConfig,

    /// SMS provider configuration
    pub sms: SmsConfig,

    /// Numbers alerted for SMS-originated reports
    pub rescue: RescueConfig,

    /// AI image verification configuration
    pub ai_vision: AiVisionConfig,
}

impl AppConfig {
    /// Load configuration from environment, reading `.env` first if present
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            sms: SmsConfig::from_env(),
            rescue: RescueConfig::from_env(),
            ai_vision: AiVisionConfig::from_env(),
        }
    }
}
