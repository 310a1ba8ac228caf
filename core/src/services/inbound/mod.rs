//! Inbound SMS reporting channel

mod parser;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use parser::{parse_sms_body, ParsedSms, UNKNOWN_TYPE, UNSPECIFIED_LOCATION};
pub use service::InboundSmsService;
pub use types::{InboundAck, InboundSms};
