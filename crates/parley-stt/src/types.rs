use serde::{Deserialize, Serialize};

/// An audio file pulled out of the multipart form, not yet on disk
#[derive(Debug)]
pub struct AudioUpload {
    /// Raw audio data
    pub data: Vec<u8>,
    /// Client-supplied filename, if any
    pub filename: Option<String>,
    /// Content type of the audio part
    pub content_type: Option<String>,
}

/// Transcription response, also the gateway's own response body
///
/// `text` defaults to empty: the upstream may legitimately transcribe
/// silence to nothing.
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    #[serde(default)]
    pub text: String,
}
