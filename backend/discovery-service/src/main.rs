use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use discovery_service::config::{Config, LogFormat};
use discovery_service::handlers::configure_routes;
use discovery_service::services::{Catalog, DiscoveryService, SystemClock};

#[actix_web::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,actix_web=info,discovery_service=debug".into());
    match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }

    info!("Starting discovery-service v{}", env!("CARGO_PKG_VERSION"));

    config
        .validate()
        .context("Configuration validation failed")?;
    info!("Configuration loaded and validated");

    let catalog = Catalog::from_path(&config.catalog_path)
        .with_context(|| format!("Failed to load catalog from {}", config.catalog_path))?;

    let policy = config.policy();
    info!(
        radius_km = policy.radius_km,
        section_limit = policy.section_limit,
        new_max_months = policy.new_max_months,
        "Discovery policy active"
    );

    let service = web::Data::new(DiscoveryService::new(
        Arc::new(catalog),
        policy,
        Arc::new(SystemClock),
    ));

    info!("Starting HTTP server on {}:{}", config.http_host, config.http_port);

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(configure_routes)
    })
    .bind((config.http_host.as_str(), config.http_port))
    .context("Failed to bind HTTP server")?
    .run()
    .await
    .context("HTTP server error")?;

    info!("Server closed");
    Ok(())
}
