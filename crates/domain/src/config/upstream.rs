use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Address of the upstream recursive resolver.
    #[serde(default = "default_address")]
    pub address: String,

    /// How long to wait for an upstream reply before dropping the request.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl UpstreamConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.address.parse().map_err(|_| {
            ConfigError::Validation(format!("Invalid upstream address '{}'", self.address))
        })
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_address() -> String {
    "8.8.8.8:53".to_string()
}

fn default_timeout_ms() -> u64 {
    5_000
}
