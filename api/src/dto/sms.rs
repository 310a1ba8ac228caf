//! Form body posted by the SMS provider webhook

use serde::Deserialize;

use dr_core::services::inbound::InboundSms;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundSmsForm {
    #[serde(rename = "From")]
    pub from: Option<String>,
    #[serde(rename = "Body")]
    pub body: Option<String>,
    #[serde(rename = "MessageSid")]
    pub message_sid: Option<String>,
}

impl From<InboundSmsForm> for InboundSms {
    fn from(form: InboundSmsForm) -> Self {
        Self {
            from: form.from,
            body: form.body,
            message_sid: form.message_sid,
        }
    }
}
