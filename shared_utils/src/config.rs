//! Application configuration.
//!
//! Loaded from a TOML file (path in `LEASING_CONFIG`, default
//! `configs/leasing.toml`); `LEASING_DATABASE_URL` and `LEASING_ADDR`
//! override the file. When no file exists the defaults plus environment
//! overrides are used, so a bare `LEASING_DATABASE_URL=dev.db` is enough to
//! run locally.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors related to application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("cannot read config file {path}")]
    Read {
        /// Path of the offending file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid TOML for [`AppConfig`].
    #[error("cannot parse config file {path}")]
    Parse {
        /// Path of the offending file.
        path: String,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

/// Root configuration for the leasing binaries.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// CORS settings for the HTTP binding.
    pub cors: CorsConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ServerConfig {
    /// Listen address, e.g. "127.0.0.1:8080".
    pub address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Database settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct DatabaseConfig {
    /// SQLite path or PostgreSQL URL.
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "leasing.db".to_string(),
        }
    }
}

/// CORS settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CorsConfig {
    /// Allowed origins; an empty list means permissive.
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Parse a TOML string into an [`AppConfig`] without environment overrides.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load the configuration: TOML file if present, then environment
    /// overrides on top.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("LEASING_CONFIG")
            .unwrap_or_else(|_| "configs/leasing.toml".to_string());

        let mut cfg = if Path::new(&path).is_file() {
            let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
            Self::from_toml_str(&text).map_err(|source| ConfigError::Parse { path, source })?
        } else {
            Self::default()
        };

        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("LEASING_DATABASE_URL") {
            self.database.url = url;
        }
        if let Ok(addr) = std::env::var("LEASING_ADDR") {
            self.server.address = addr;
        }
    }
}
