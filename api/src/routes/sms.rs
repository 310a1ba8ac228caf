//! Inbound SMS webhook

use actix_web::{web, HttpResponse};

use dr_core::services::inbound::InboundAck;

use crate::dto::InboundSmsForm;
use crate::state::AppState;
use crate::twiml::twiml_response;

/// Handler for POST /api/v1/sms/inbound
///
/// Always answers with TwiML; a body that cannot be read is treated like an
/// empty message.
pub async fn receive_sms(state: web::Data<AppState>, form: Option<web::Form<InboundSmsForm>>) -> HttpResponse {
    let ack = match form {
        Some(form) => state.inbound.handle(form.into_inner().into()).await,
        None => {
            tracing::warn!(event = "inbound_sms_unreadable", "Unreadable SMS webhook body");
            InboundAck::Empty
        }
    };

    twiml_response(&ack)
}
