//! Route handlers
//!
//! - `alerts` - outbound rescue-crew alerts
//! - `sms` - inbound SMS webhook
//! - `images` - image verification
//! - `reports` - report submission and lookup
//! - `catalog` - form enumerations and emergency contacts

pub mod alerts;
pub mod catalog;
pub mod images;
pub mod reports;
pub mod sms;
