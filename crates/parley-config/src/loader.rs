use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// The upstream credential is checked here so a process without one
    /// fails before binding a socket.
    ///
    /// # Errors
    ///
    /// Returns an error if the Groq credential is missing or empty, or a
    /// model identifier is blank
    pub fn validate(&self) -> anyhow::Result<()> {
        let Some(ref api_key) = self.groq.api_key else {
            anyhow::bail!("groq.api_key is required (set GROQ_API_KEY in the environment)");
        };

        if api_key.expose_secret().is_empty() {
            anyhow::bail!("groq.api_key must not be empty");
        }

        if self.groq.chat_model.is_empty() {
            anyhow::bail!("groq.chat_model must not be empty");
        }

        if self.groq.transcription_model.is_empty() {
            anyhow::bail!("groq.transcription_model must not be empty");
        }

        if !(0.0..=2.0).contains(&self.groq.temperature) {
            anyhow::bail!("groq.temperature must be between 0.0 and 2.0");
        }

        Ok(())
    }
}
