use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Chat completion model sent with every `/chat` request
pub const DEFAULT_CHAT_MODEL: &str = "llama-3.3-70b-versatile";

/// Transcription model sent with every `/voice-to-text` request
pub const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-large-v3-turbo";

/// Low sampling temperature favoring focused chat replies
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Upstream Groq provider configuration
///
/// The API key is required; `Config::validate` rejects an empty value so
/// the process never serves traffic without a credential.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroqConfig {
    /// API key, normally fed from `{{ env.GROQ_API_KEY }}`
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override (OpenAI-compatible surface)
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Chat completion model identifier
    #[serde(default = "default_chat_model")]
    pub chat_model: String,
    /// Transcription model identifier
    #[serde(default = "default_transcription_model")]
    pub transcription_model: String,
    /// Chat sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            chat_model: default_chat_model(),
            transcription_model: default_transcription_model(),
            temperature: default_temperature(),
        }
    }
}

fn default_chat_model() -> String {
    DEFAULT_CHAT_MODEL.to_string()
}

fn default_transcription_model() -> String {
    DEFAULT_TRANSCRIPTION_MODEL.to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}
