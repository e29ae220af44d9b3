//! Application settings and configuration structures.

use std::time::Duration;

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// Environment name that runs the binary on the host against a containerised database.
pub const LOCAL_ENVIRONMENT: &str = "local";

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port, limits)
    pub server: ServerSettings,

    /// Database configuration (PostgreSQL)
    pub database: DatabaseSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Current environment (local, development, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,

    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,

    /// Time allowed for in-flight work and the pool to wind down, in seconds
    pub shutdown_timeout_secs: u64,
}

/// PostgreSQL database configuration.
///
/// `Debug` is implemented by hand so the password never reaches a log line.
#[derive(Clone, Deserialize)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,

    /// libpq-style sslmode ("disable", "prefer", "require", ...)
    pub ssl_mode: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of idle connections to maintain
    pub min_connections: u32,

    /// Maximum lifetime of a single connection in seconds
    pub max_lifetime_secs: u64,

    /// Connection acquire timeout in seconds
    pub acquire_timeout_secs: u64,

    /// Upper bound for a single store operation in seconds
    pub operation_timeout_secs: u64,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins; empty means any origin
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. compiled defaults
    /// 2. config/default.* (base configuration)
    /// 3. config/{RUN_ENV}.* (environment-specific overrides)
    /// 4. `APP__` prefixed environment variables
    /// 5. plain deployment variables (`POSTGRES_*`, `SERVER_*`)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed, or
    /// if a required database credential is missing.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Self::defaults(&environment)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__SERVER__PORT=8080 -> server.port = 8080
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("database.host", std::env::var("POSTGRES_HOST").ok())?
            .set_override_option("database.port", std::env::var("POSTGRES_PORT").ok())?
            .set_override_option("database.user", std::env::var("POSTGRES_USER").ok())?
            .set_override_option("database.password", std::env::var("POSTGRES_PASSWORD").ok())?
            .set_override_option("database.name", std::env::var("POSTGRES_DB").ok())?
            .build()?
            .try_deserialize()
            .map(Self::finalize)
    }

    /// Builder pre-populated with every compiled default.
    pub(crate) fn defaults(environment: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("environment", environment)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.max_body_bytes", 1_048_576_i64)?
            .set_default("server.shutdown_timeout_secs", 5)?
            .set_default("database.host", "localhost")?
            .set_default("database.port", 5432)?
            .set_default("database.ssl_mode", "disable")?
            .set_default("database.max_connections", 25)?
            .set_default("database.min_connections", 5)?
            .set_default("database.max_lifetime_secs", 300)?
            .set_default("database.acquire_timeout_secs", 5)?
            .set_default("database.operation_timeout_secs", 5)?
            .set_default("cors.allowed_origins", Vec::<String>::new())
    }

    fn finalize(mut self) -> Self {
        if self.environment == LOCAL_ENVIRONMENT {
            self.database.host = "localhost".into();
        }
        self
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Whether log output should be machine-readable JSON.
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl ServerSettings {
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

impl DatabaseSettings {
    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.operation_timeout_secs)
    }
}

impl std::fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("ssl_mode", &self.ssl_mode)
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("max_lifetime_secs", &self.max_lifetime_secs)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .field("operation_timeout_secs", &self.operation_timeout_secs)
            .finish()
    }
}
