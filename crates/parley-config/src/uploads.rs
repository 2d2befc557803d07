use std::path::PathBuf;

use serde::Deserialize;

/// Transient upload spool configuration
///
/// The directory holds an uploaded audio file only for the duration of a
/// single transcription request; in steady state it is empty.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UploadConfig {
    /// Spool directory, created at startup if absent
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("uploads")
}
