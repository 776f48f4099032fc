use serde::Deserialize;
use thiserror::Error;
use crate::config::env::{self, EnvKey};

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or not valid unicode.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            database_url: env::get(EnvKey::DatabaseUrl)
                .map_err(|_| ConfigError::MissingEnvVar(EnvKey::DatabaseUrl.as_str()))?,
            database_max_connections: env::get_parsed(EnvKey::DatabaseMaxConnections, 20),
        })
    }
}
