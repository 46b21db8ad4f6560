//! Configuration management for the catalog server

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Author store configuration
    #[serde(default)]
    pub store: StoreConfig,
}

/// Server-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

/// Author store configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    /// Database directory; the in-memory collection is used when unset
    pub path: Option<String>,
    /// Insert demo authors into an empty collection on startup
    #[serde(default)]
    pub seed_demo_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl AppConfig {
    /// Load configuration from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with("config/catalog", "CATALOG")
    }

    /// Load defaults, then `file` (optional), then `<env_prefix>_*` variables
    fn load_with(file: &str, env_prefix: &str) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            // Default configuration
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("store.seed_demo_data", false)?
            // Configuration file
            .add_source(config::File::with_name(file).required(false))
            // Environment variables, e.g. CATALOG_SERVER__PORT
            .add_source(
                config::Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Get the socket address for the server
    pub fn socket_addr(&self) -> AppResult<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|e| AppError::InvalidAddress(format!("{}: {}", addr, e)))
    }
}
