use std::net::SocketAddr;

use serde::Deserialize;

use crate::{cors::CorsConfig, health::HealthConfig};

/// Port used when no listen address is configured
pub const DEFAULT_PORT: u16 = 3000;

/// HTTP server configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind, defaults to `0.0.0.0:3000`
    pub listen_address: Option<SocketAddr>,
    #[serde(default)]
    pub health: HealthConfig,
    /// CORS policy for browser renderers served from another origin
    #[serde(default)]
    pub cors: Option<CorsConfig>,
}

impl ServerConfig {
    /// Configured listen address or the default
    pub fn listen_address(&self) -> SocketAddr {
        self.listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)))
    }
}
