use std::net::SocketAddr;

use serde::Deserialize;

use crate::health::HealthConfig;

/// Port the gateway listens on when no address is configured
pub const DEFAULT_PORT: u16 = 4000;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub listen_address: Option<SocketAddr>,
    #[serde(default)]
    pub health: HealthConfig,
}
