use serde::{Deserialize, Serialize};

/// Inbound chat request body
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// User message; absent and empty are treated the same
    #[serde(default)]
    pub message: String,
}

/// Outbound chat reply body
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Chat completion request in the OpenAI wire format Groq speaks
#[derive(Debug, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<CompletionMessage>,
    pub temperature: f32,
}

/// A single chat turn
#[derive(Debug, Serialize)]
pub struct CompletionMessage {
    pub role: &'static str,
    pub content: String,
}

impl CompletionMessage {
    pub fn user(content: String) -> Self {
        Self { role: "user", content }
    }
}
