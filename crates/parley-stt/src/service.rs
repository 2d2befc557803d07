use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::error::SttError;
use crate::store::{SpooledAudio, UploadStore};
use crate::types::{AudioUpload, TranscriptionResponse};

/// Default Groq OpenAI-compatible API base URL
const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Content type sent when the upload did not declare one
const DEFAULT_CONTENT_TYPE: &str = "audio/webm";

/// Cap on a single transcription round trip; uploads are up to 32 MiB
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Transcription service backed by the Groq Whisper API
#[derive(Debug)]
pub struct SttService {
    client: Client,
    base_url: String,
    api_key: SecretString,
    model: String,
    store: UploadStore,
}

impl SttService {
    pub(crate) fn new(
        api_key: SecretString,
        base_url: Option<String>,
        model: String,
        store: UploadStore,
    ) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build transcription HTTP client: {e}"))?;

        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            client,
            base_url,
            api_key,
            model,
            store,
        })
    }

    fn transcriptions_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}/audio/transcriptions")
    }

    /// Spool the upload, transcribe it, and remove the spool file
    ///
    /// The spooled file is dropped on every exit path, including upstream
    /// failures.
    pub(crate) async fn transcribe(&self, upload: AudioUpload) -> crate::error::Result<TranscriptionResponse> {
        let spooled = self.store.spool(&upload).await?;

        // `spooled` is dropped when this frame unwinds, so the file never
        // survives an early return below
        self.transcribe_spooled(&spooled, upload.content_type.as_deref()).await
    }

    async fn transcribe_spooled(
        &self,
        spooled: &SpooledAudio,
        content_type: Option<&str>,
    ) -> crate::error::Result<TranscriptionResponse> {
        let audio = tokio::fs::read(spooled.path()).await?;

        tracing::debug!(
            bytes = audio.len(),
            model = %self.model,
            "transcription request"
        );

        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(audio)
                    .file_name(spooled.file_name())
                    .mime_str(content_type.unwrap_or(DEFAULT_CONTENT_TYPE))
                    .map_err(|e| SttError::InvalidRequest(format!("Invalid content type: {e}")))?,
            )
            .text("model", self.model.clone());

        let response = self
            .client
            .post(self.transcriptions_url())
            .bearer_auth(self.api_key.expose_secret())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "transcription request failed");
                SttError::Upstream(e.to_string())
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "transcription upstream returned error");
            return Err(SttError::Upstream(format!("provider returned {status}: {body}")));
        }

        let result: TranscriptionResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "failed to parse transcription response");
            SttError::Upstream(format!("failed to parse response: {e}"))
        })?;

        tracing::debug!("transcription complete");

        Ok(result)
    }
}
