//! # Chat API
//!
//! HTTP service for chats and their messages, backed by PostgreSQL.
//!
//! This is the application entry point that initializes:
//! - Configuration loading
//! - Tracing/logging subsystem
//! - Database connection pool
//! - HTTP server with graceful shutdown

use anyhow::Result;
use tracing::info;

use chat_api::config::Settings;
use chat_api::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment and config files
    let settings = Settings::load()?;

    // Initialize tracing subscriber for structured logging
    chat_api::telemetry::init_tracing(settings.is_production());

    info!("Starting Chat API...");
    info!(
        environment = %settings.environment,
        host = %settings.server.host,
        port = settings.server.port,
        max_body_bytes = settings.server.max_body_bytes,
        db_host = %settings.database.host,
        db_port = settings.database.port,
        db_user = %settings.database.user,
        db_name = %settings.database.name,
        db_ssl_mode = %settings.database.ssl_mode,
        db_max_connections = settings.database.max_connections,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    info!("Chat API stopped");
    Ok(())
}
