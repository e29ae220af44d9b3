//! Application Startup
//!
//! Application building, server initialization and graceful shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::{ChatService, ChatServiceImpl};
use crate::config::Settings;
use crate::domain::StoreHealth;
use crate::infrastructure::database::{self, PgStoreHealth};
use crate::infrastructure::repositories::{PgChatRepository, PgMessageRepository};
use crate::presentation::http::routes;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<dyn ChatService>,
    pub store_health: Arc<dyn StoreHealth>,
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
    pool: PgPool,
    settings: Settings,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        // Create database pool
        let pool = database::create_pool(&settings.database)
            .await
            .context("Failed to connect to the database")?;
        tracing::info!("Database connection pool created");

        let operation_timeout = settings.database.operation_timeout();
        let chats = Arc::new(PgChatRepository::with_timeout(pool.clone(), operation_timeout));
        let messages = Arc::new(PgMessageRepository::with_timeout(
            pool.clone(),
            operation_timeout,
        ));

        // Create app state
        let state = AppState {
            chat_service: Arc::new(ChatServiceImpl::new(chats, messages)),
            store_health: Arc::new(PgStoreHealth::new(pool.clone(), operation_timeout)),
        };

        // Build router with middleware
        let router = routes::create_router(state, &settings.server, &settings.cors);

        // Bind to address
        let addr = settings.server_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        tracing::info!("Listening on {}", addr);

        Ok(Self {
            listener,
            router,
            pool,
            settings,
        })
    }

    /// Serve until SIGINT/SIGTERM, drain in-flight requests, then close the
    /// pool within the shutdown timeout.
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("Server stopped accepting connections");

        database::close_pool(&self.pool, self.settings.server.shutdown_timeout()).await?;
        tracing::info!("Database connection pool closed");
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Resolves on the first SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
