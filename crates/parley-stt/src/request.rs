use axum::body::Body;
use axum::extract::{FromRequest, Multipart};

use crate::error::SttError;
use crate::types::AudioUpload;

/// Multipart field carrying the uploaded audio file
const AUDIO_FIELD: &str = "audio";

/// Body limit for audio uploads (32 MiB)
pub(crate) const BODY_LIMIT_BYTES: usize = 32 << 20;

/// Extractor pulling the `audio` file out of a multipart form
///
/// Rejects with [`SttError::MissingAudio`] when the form has no audio
/// field, before anything touches the spool directory.
pub struct ExtractAudio(pub AudioUpload);

impl<S> FromRequest<S> for ExtractAudio
where
    S: Send + Sync,
{
    type Rejection = SttError;

    async fn from_request(request: http::Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(request, state)
            .await
            .map_err(|e| SttError::InvalidRequest(format!("Failed to parse multipart form: {e}")))?;

        let mut upload: Option<AudioUpload> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| SttError::InvalidRequest(format!("Failed to read multipart field: {e}")))?
        {
            if field.name() != Some(AUDIO_FIELD) {
                // Unknown fields are skipped
                continue;
            }

            let filename = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|e| SttError::InvalidRequest(format!("Failed to read audio data: {e}")))?
                .to_vec();

            upload = Some(AudioUpload {
                data,
                filename,
                content_type,
            });
        }

        upload.map(Self).ok_or(SttError::MissingAudio)
    }
}
