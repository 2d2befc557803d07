#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod reply;
mod service;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};

pub use error::{ChatError, Result};
pub use reply::{FALLBACK_REPLY, extract_reply};
pub use service::ChatService;
pub use types::{ChatReply, ChatRequest};

/// Build the chat service from configuration
///
/// # Errors
///
/// Returns an error if the credential is missing from configuration
pub fn build_service(config: &parley_config::Config) -> anyhow::Result<Arc<ChatService>> {
    let api_key = config
        .groq
        .api_key
        .clone()
        .ok_or_else(|| anyhow::anyhow!("chat service requires groq.api_key"))?;

    let service = Arc::new(ChatService::new(
        api_key,
        config.groq.base_url.as_ref().map(|u| u.as_str().to_string()),
        config.groq.chat_model.clone(),
        config.groq.temperature,
    )?);

    Ok(service)
}

/// Create the endpoint router for chat
pub fn endpoint_router() -> Router<Arc<ChatService>> {
    Router::new().route("/chat", post(chat))
}

/// Handle chat requests
async fn chat(
    State(service): State<Arc<ChatService>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>> {
    if request.message.is_empty() {
        return Err(ChatError::MissingMessage);
    }

    tracing::debug!("chat handler called");

    let reply = service.reply(request.message).await?;

    Ok(Json(ChatReply { reply }))
}
