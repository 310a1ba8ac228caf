use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use dr_api::app::{configure, json_config, not_found};
use dr_api::middleware::create_cors;
use dr_api::AppState;
use dr_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.environment.default_log_filter())),
        )
        .init();

    info!(
        event = "server_starting",
        environment = %config.environment,
        "Starting disaster response API server"
    );

    let state = AppState::from_config(&config)
        .await
        .context("failed to initialise application state")?;
    let state = web::Data::new(state);

    let bind_address = config.server.bind_address();
    let environment = config.environment;
    let server_config = config.server.clone();
    info!(event = "server_binding", address = %bind_address, "Server will bind");

    HttpServer::new(move || {
        App::new()
            .wrap(create_cors(environment, &server_config))
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .app_data(json_config(server_config.max_payload_size))
            .configure(configure)
            .default_service(web::route().to(not_found))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("failed to bind {}", bind_address))?
    .run()
    .await?;

    Ok(())
}
