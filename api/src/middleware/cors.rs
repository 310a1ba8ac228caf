//! CORS middleware configuration for cross-origin requests.
//!
//! The report form and the live map are served from other origins. In
//! development any origin is accepted; in production only the configured
//! origins are.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use dr_shared::config::{Environment, ServerConfig};

/// Creates a CORS middleware instance configured for the current environment.
pub fn create_cors(environment: Environment, server: &ServerConfig) -> Cors {
    if environment.is_production() {
        create_production_cors(server)
    } else {
        create_development_cors(server.cors_max_age)
    }
}

fn create_development_cors(max_age: usize) -> Cors {
    tracing::debug!(event = "cors_configured", mode = "development", "Configuring permissive CORS");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::USER_AGENT,
            header::CACHE_CONTROL,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(max_age)
}

/// Only origins listed in ALLOWED_ORIGINS are accepted. The inbound SMS
/// webhook is called server-to-server and needs no CORS at all.
fn create_production_cors(server: &ServerConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(server.cors_max_age);

    for origin in &server.allowed_origins {
        tracing::info!(event = "cors_origin_allowed", origin = %origin, "Adding allowed origin");
        cors = cors.allowed_origin(origin);
    }

    if server.allowed_origins.is_empty() {
        tracing::warn!(event = "cors_no_origins", "ALLOWED_ORIGINS is empty, browsers will be refused");
    }

    cors
}
