#![allow(clippy::must_use_candidate)]

mod env;
pub mod groq;
pub mod health;
mod loader;
pub mod server;
pub mod uploads;

use serde::Deserialize;

pub use groq::GroqConfig;
pub use health::HealthConfig;
pub use server::ServerConfig;
pub use uploads::UploadConfig;

/// Top-level Parley configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream Groq provider configuration
    #[serde(default)]
    pub groq: GroqConfig,
    /// Transient upload spool configuration
    #[serde(default)]
    pub uploads: UploadConfig,
}
