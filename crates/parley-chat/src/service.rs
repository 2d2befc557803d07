use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::error::ChatError;
use crate::reply::extract_reply;
use crate::types::{CompletionMessage, CompletionRequest};

/// Default Groq OpenAI-compatible API base URL
const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Cap on a single completion round trip
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Chat completion service backed by the Groq API
#[derive(Debug)]
pub struct ChatService {
    client: Client,
    base_url: String,
    api_key: SecretString,
    model: String,
    temperature: f32,
}

impl ChatService {
    pub(crate) fn new(
        api_key: SecretString,
        base_url: Option<String>,
        model: String,
        temperature: f32,
    ) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .tcp_nodelay(true)
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build chat HTTP client: {e}"))?;

        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            client,
            base_url,
            api_key,
            model,
            temperature,
        })
    }

    fn completions_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}/chat/completions")
    }

    /// Send a message as a single user turn and extract the reply
    pub(crate) async fn reply(&self, message: String) -> crate::error::Result<String> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![CompletionMessage::user(message)],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "chat completion request failed");
                ChatError::Upstream(e.to_string())
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "chat completion upstream returned error");
            return Err(ChatError::Upstream(format!("provider returned {status}: {body}")));
        }

        let raw: Value = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "failed to parse chat completion response");
            ChatError::Upstream(format!("failed to parse response: {e}"))
        })?;

        tracing::debug!(response = %raw, "chat completion raw response");

        Ok(extract_reply(&raw))
    }
}
