//! TwiML replies for the inbound SMS webhook

use actix_web::HttpResponse;

use dr_core::services::inbound::InboundAck;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Render the acknowledgment as a TwiML document
pub fn render(ack: &InboundAck) -> String {
    match ack {
        InboundAck::Empty => format!("{}<Response></Response>", XML_DECLARATION),
        InboundAck::Received { reference_code } => format!(
            "{}\n<Response>\n  <Message>Alert received. Reference: {}. Help is on the way. For immediate emergency, call 112.</Message>\n</Response>",
            XML_DECLARATION,
            escape_xml(reference_code.as_str())
        ),
    }
}

pub fn twiml_response(ack: &InboundAck) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/xml")
        .body(render(ack))
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
