use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_address: default_bind_address(),
        }
    }
}

fn default_port() -> u16 {
    // Port 53 is normally reserved for DNS; run unprivileged by default.
    8053
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}
