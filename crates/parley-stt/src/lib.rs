#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod request;
mod service;
mod store;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::DefaultBodyLimit, extract::State, routing::post};

pub use error::{Result, SttError};
pub use service::SttService;
pub use store::{SpooledAudio, UploadStore};
pub use types::{AudioUpload, TranscriptionResponse};
use request::ExtractAudio;

/// Build the transcription service from configuration
///
/// Opens the spool directory, creating it if absent.
///
/// # Errors
///
/// Returns an error if the credential is missing from configuration or
/// the spool directory cannot be created
pub fn build_service(config: &parley_config::Config) -> anyhow::Result<Arc<SttService>> {
    let api_key = config
        .groq
        .api_key
        .clone()
        .ok_or_else(|| anyhow::anyhow!("transcription service requires groq.api_key"))?;

    let store = UploadStore::open(&config.uploads.dir)
        .map_err(|e| anyhow::anyhow!("failed to open upload dir {}: {e}", config.uploads.dir.display()))?;

    let service = Arc::new(SttService::new(
        api_key,
        config.groq.base_url.as_ref().map(|u| u.as_str().to_string()),
        config.groq.transcription_model.clone(),
        store,
    )?);

    Ok(service)
}

/// Create the endpoint router for transcription
pub fn endpoint_router() -> Router<Arc<SttService>> {
    Router::new()
        .route("/voice-to-text", post(voice_to_text))
        .layer(DefaultBodyLimit::max(request::BODY_LIMIT_BYTES))
}

/// Handle transcription requests
async fn voice_to_text(
    State(service): State<Arc<SttService>>,
    ExtractAudio(upload): ExtractAudio,
) -> Result<Json<TranscriptionResponse>> {
    tracing::debug!(
        filename = upload.filename.as_deref().unwrap_or("<unnamed>"),
        bytes = upload.data.len(),
        "transcription handler called"
    );

    let response = service.transcribe(upload).await?;

    Ok(Json(response))
}
