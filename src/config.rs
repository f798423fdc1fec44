//! Service configuration, loaded from environment variables.
//!
//! - `BANK_API_HOST`: bind host (default `0.0.0.0`)
//! - `BANK_API_PORT`: bind port (default `8080`)
//! - `BANK_API_DATABASE`: SQLite file path (default `bank-api.db`)

use std::path::PathBuf;

pub const HOST_VAR: &str = "BANK_API_HOST";
pub const PORT_VAR: &str = "BANK_API_PORT";
pub const DATABASE_VAR: &str = "BANK_API_DATABASE";

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Environment variable has empty value.
    #[error("environment variable {0} cannot be empty")]
    EmptyValue(String),
}

/// HTTP server and storage settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_path: PathBuf::from("bank-api.db"),
        }
    }
}

impl ServerConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = non_empty(&lookup, HOST_VAR)?.unwrap_or(defaults.host);

        let port = lookup(PORT_VAR)
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.port);

        let database_path = non_empty(&lookup, DATABASE_VAR)?
            .map(PathBuf::from)
            .unwrap_or(defaults.database_path);

        Ok(Self {
            host,
            port,
            database_path,
        })
    }

    /// Address to bind the listener to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::EmptyValue(key.to_string())),
        other => Ok(other),
    }
}

/// Load a `.env` file from the current directory, if any.
pub fn load_dotenv() {
    if dotenvy::dotenv().is_err() {
        tracing::debug!("No .env file found, using process environment");
    }
}
