//! # Disaster Response Core
//!
//! Domain layer for the disaster response alert service: report entities,
//! error types, the report store interface and the services that turn web
//! and SMS reports into rescue-crew alerts.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::*;
pub use services::*;
pub use repositories::*;
pub use errors::*;
