//! Mock Groq backend for integration tests
//!
//! Implements the two OpenAI-compatible endpoints the gateway calls,
//! returning canned responses in selectable shapes

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

/// Where a canned chat reply is placed in the response body
#[derive(Debug, Clone, Copy)]
pub enum ChatShape {
    /// `choices[0].message.content`
    NestedContent,
    /// `choices[0].message` as an object with no content field
    RawMessageObject,
    /// `choices[0].content`
    TopLevelContent,
    /// No recognizable content anywhere
    NoContent,
}

/// Mock upstream that returns predictable responses
pub struct MockGroq {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockGroqState>,
}

struct MockGroqState {
    chat_count: AtomicU32,
    transcription_count: AtomicU32,
    fail: bool,
    chat_shape: ChatShape,
    chat_content: String,
    transcription_text: String,
    last_chat_request: Mutex<Option<Value>>,
    last_audio_filename: Mutex<Option<String>>,
}

impl MockGroq {
    /// Start a mock that replies `"hi there"` in the nested-content shape
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(false, ChatShape::NestedContent, "hi there", "transcribed audio").await
    }

    /// Start a mock replying with the given content in the given shape
    pub async fn start_with_chat(shape: ChatShape, content: &str) -> anyhow::Result<Self> {
        Self::start_inner(false, shape, content, "transcribed audio").await
    }

    /// Start a mock whose transcription endpoint returns the given text
    pub async fn start_with_transcription(text: &str) -> anyhow::Result<Self> {
        Self::start_inner(false, ChatShape::NestedContent, "hi there", text).await
    }

    /// Start a mock that fails every request with a 500
    pub async fn start_failing() -> anyhow::Result<Self> {
        Self::start_inner(true, ChatShape::NestedContent, "hi there", "transcribed audio").await
    }

    async fn start_inner(
        fail: bool,
        chat_shape: ChatShape,
        chat_content: &str,
        transcription_text: &str,
    ) -> anyhow::Result<Self> {
        let state = Arc::new(MockGroqState {
            chat_count: AtomicU32::new(0),
            transcription_count: AtomicU32::new(0),
            fail,
            chat_shape,
            chat_content: chat_content.to_owned(),
            transcription_text: transcription_text.to_owned(),
            last_chat_request: Mutex::new(None),
            last_audio_filename: Mutex::new(None),
        });

        let app = Router::new()
            .route("/chat/completions", routing::post(handle_chat_completions))
            .route("/audio/transcriptions", routing::post(handle_transcriptions))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the upstream provider
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of chat completion requests received
    pub fn chat_count(&self) -> u32 {
        self.state.chat_count.load(Ordering::Relaxed)
    }

    /// Number of transcription requests received
    pub fn transcription_count(&self) -> u32 {
        self.state.transcription_count.load(Ordering::Relaxed)
    }

    /// Body of the most recent chat completion request
    pub fn last_chat_request(&self) -> Option<Value> {
        self.state.last_chat_request.lock().unwrap().clone()
    }

    /// Filename of the most recent uploaded audio file
    pub fn last_audio_filename(&self) -> Option<String> {
        self.state.last_audio_filename.lock().unwrap().clone()
    }
}

impl Drop for MockGroq {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_chat_completions(
    State(state): State<Arc<MockGroqState>>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    state.chat_count.fetch_add(1, Ordering::Relaxed);
    *state.last_chat_request.lock().unwrap() = Some(body);

    if state.fail {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": { "message": "mock upstream failure" } })),
        );
    }

    let choice = match state.chat_shape {
        ChatShape::NestedContent => json!({
            "index": 0,
            "message": { "role": "assistant", "content": state.chat_content },
            "finish_reason": "stop"
        }),
        ChatShape::RawMessageObject => json!({
            "index": 0,
            "message": { "role": "assistant" },
            "finish_reason": "stop"
        }),
        ChatShape::TopLevelContent => json!({
            "index": 0,
            "content": state.chat_content,
            "finish_reason": "stop"
        }),
        ChatShape::NoContent => json!({ "index": 0, "finish_reason": "stop" }),
    };

    (
        StatusCode::OK,
        Json(json!({
            "id": "chatcmpl-mock",
            "object": "chat.completion",
            "model": "llama-3.3-70b-versatile",
            "choices": [choice]
        })),
    )
}

async fn handle_transcriptions(
    State(state): State<Arc<MockGroqState>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    state.transcription_count.fetch_add(1, Ordering::Relaxed);

    let mut saw_file = false;

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") {
            saw_file = true;
            *state.last_audio_filename.lock().unwrap() = field.file_name().map(str::to_string);
        }
        // Drain the field so the next one can be read
        let _ = field.bytes().await;
    }

    if !saw_file {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": { "message": "file part missing" } })),
        );
    }

    if state.fail {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": { "message": "mock upstream failure" } })),
        );
    }

    (StatusCode::OK, Json(json!({ "text": state.transcription_text })))
}
