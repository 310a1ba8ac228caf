//! Shared utilities and common types for the disaster response server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Response wrappers
//! - Phone number validation and normalization

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AiVisionConfig, AppConfig, DatabaseConfig, Environment, RescueConfig, ServerConfig,
    SmsConfig,
};
pub use types::ApiResponse;
pub use utils::phone;
