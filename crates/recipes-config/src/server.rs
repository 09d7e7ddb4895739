//! HTTP server configuration.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address `recipes serve` listens on.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl ServerConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        self.bind
            .parse::<SocketAddr>()
            .map(|_| ())
            .map_err(|e| ConfigError::invalid("server.bind", e.to_string()))
    }
}
