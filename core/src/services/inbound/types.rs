//! Webhook input and acknowledgment types

use crate::domain::entities::ReferenceCode;

/// An SMS delivered by the provider webhook
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboundSms {
    pub from: Option<String>,
    pub body: Option<String>,
    pub message_sid: Option<String>,
}

/// What the sender gets back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundAck {
    /// Nothing to report, reply with an empty response
    Empty,
    /// A report was opened under this reference
    Received { reference_code: ReferenceCode },
}

impl InboundAck {
    pub fn reference_code(&self) -> Option<&ReferenceCode> {
        match self {
            InboundAck::Empty => None,
            InboundAck::Received { reference_code } => Some(reference_code),
        }
    }
}
