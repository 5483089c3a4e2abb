//! API configuration

use std::time::Duration;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use infra_db::DatabaseConfig;

/// API configuration
///
/// Every field can be set through an `API_`-prefixed environment variable
/// (`API_PORT`, `API_DB_MAX_CONNECTIONS`, ...). `DATABASE_URL` takes
/// precedence over `API_DATABASE_URL`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL
    pub database_url: String,
    /// Log level or `EnvFilter` directive
    pub log_level: String,
    /// Log output format: `pretty` or `json`
    pub log_format: String,
    /// Upper bound on pooled connections
    pub db_max_connections: u32,
    /// Connections kept open while idle
    pub db_min_connections: u32,
    /// Seconds to wait for a pooled connection
    pub db_acquire_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "postgres://localhost/claims_db".to_string(),
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            db_max_connections: 10,
            db_min_connections: 2,
            db_acquire_timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(
            Environment::with_prefix("API"),
            std::env::var("DATABASE_URL").ok(),
        )
    }

    /// Layers `environment` and the optional database URL override over the defaults
    fn load(environment: Environment, database_url: Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("database_url", defaults.database_url)?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", defaults.log_format)?
            .set_default("db_max_connections", i64::from(defaults.db_max_connections))?
            .set_default("db_min_connections", i64::from(defaults.db_min_connections))?
            .set_default("db_acquire_timeout_secs", defaults.db_acquire_timeout_secs as i64)?
            .add_source(environment.try_parsing(true))
            .set_override_option("database_url", database_url)?
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether logs should be emitted as JSON lines
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }

    /// Pool settings for the claims database
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::new(self.database_url.clone())
            .max_connections(self.db_max_connections)
            .min_connections(self.db_min_connections)
            .connect_timeout(Duration::from_secs(self.db_acquire_timeout_secs))
    }
}
