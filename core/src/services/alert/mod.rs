//! Alert composition and outbound SMS fan-out

pub mod composer;
mod gateway;
mod traits;

#[cfg(test)]
pub(crate) mod tests;

pub use composer::{compose_alert, AlertContent, MAX_ALERT_CHARS};
pub use gateway::SmsGateway;
pub use traits::{DispatchMode, SmsProvider};
