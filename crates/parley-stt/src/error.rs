use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SttError>;

/// Fallback client message when an error carries nothing meaningful
const GENERIC_MESSAGE: &str = "Internal server error";

/// Errors that can occur while handling a transcription request
#[derive(Debug, Error)]
pub enum SttError {
    /// Multipart form lacked the `audio` file field; nothing is spooled
    /// and upstream is never contacted
    #[error("audio file is required")]
    MissingAudio,

    /// Request body could not be read as a multipart form
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Upstream provider rejected the request or could not be reached
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Spool file could not be written or read back
    #[error("spool i/o error: {0}")]
    Spool(#[from] std::io::Error),
}

impl IntoResponse for SttError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingAudio => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Audio file is required." })),
            )
                .into_response(),
            Self::InvalidRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            Self::Upstream(message) => {
                let message = if message.is_empty() {
                    GENERIC_MESSAGE.to_string()
                } else {
                    message
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": message }))).into_response()
            }
            Self::Spool(error) => {
                tracing::error!(error = %error, "spool i/o failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": GENERIC_MESSAGE })),
                )
                    .into_response()
            }
        }
    }
}
