//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;
use std::path::Path;

use parley_config::Config;
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults and a test credential
    pub fn new() -> Self {
        let mut config = Config::default();
        config.server.listen_address = Some(SocketAddr::from(([127, 0, 0, 1], 0)));
        config.groq.api_key = Some(SecretString::from("gsk-test-key"));

        Self { config }
    }

    /// Point the upstream at a mock backend
    pub fn with_groq_base_url(mut self, base_url: &str) -> Self {
        self.config.groq.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Spool uploads into the given directory
    pub fn with_upload_dir(mut self, dir: &Path) -> Self {
        self.config.uploads.dir = dir.to_path_buf();
        self
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
