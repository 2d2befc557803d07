use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChatError>;

/// Fallback client message when an error carries nothing meaningful
const GENERIC_MESSAGE: &str = "Internal server error";

/// Errors that can occur while handling a chat request
#[derive(Debug, Error)]
pub enum ChatError {
    /// Request body lacked a usable `message`; upstream is never contacted
    #[error("message is required")]
    MissingMessage,

    /// Upstream provider rejected the request or could not be reached
    #[error("upstream error: {0}")]
    Upstream(String),
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        match self {
            // The API contract answers a missing message under the `reply`
            // key, not `error`
            Self::MissingMessage => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "reply": "Message is required" })),
            )
                .into_response(),
            Self::Upstream(message) => {
                let message = if message.is_empty() {
                    GENERIC_MESSAGE.to_string()
                } else {
                    message
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": message }))).into_response()
            }
        }
    }
}
