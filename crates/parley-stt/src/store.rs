//! Spool directory for transient audio uploads
//!
//! Every upload gets a collision-resistant name and lives exactly as long
//! as the request handling it: [`SpooledAudio`] deletes the file when
//! dropped, so cleanup happens on success, upstream failure, and panic
//! unwinding alike.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::types::AudioUpload;

/// Extension used when the client supplies none
const DEFAULT_EXTENSION: &str = ".webm";

/// Spool directory handle
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Open the spool directory, creating it if absent
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created
    pub fn open(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory uploads are spooled into
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write an upload to disk under a generated name
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub async fn spool(&self, upload: &AudioUpload) -> std::io::Result<SpooledAudio> {
        let name = generated_name(upload.filename.as_deref());
        let path = self.dir.join(&name);

        tokio::fs::write(&path, &upload.data).await?;

        tracing::debug!(path = %path.display(), bytes = upload.data.len(), "audio spooled");

        Ok(SpooledAudio { path })
    }
}

/// Generate a spool filename: epoch millis, a UUID, and the original
/// extension (default `.webm`)
///
/// The UUID makes concurrent uploads within the same clock tick safe; the
/// timestamp prefix keeps directory listings in arrival order.
fn generated_name(original: Option<&str>) -> String {
    let ext = original
        .map(Path::new)
        .and_then(Path::extension)
        .and_then(|e| e.to_str())
        .map_or_else(|| DEFAULT_EXTENSION.to_string(), |e| format!(".{e}"));

    let millis = jiff::Timestamp::now().as_millisecond();

    format!("{millis}-{}{ext}", Uuid::new_v4())
}

/// A spooled upload, removed from disk on drop
///
/// Deletion is best-effort: attempted only if the file still exists, and
/// failures are logged rather than raised.
#[derive(Debug)]
pub struct SpooledAudio {
    path: PathBuf,
}

impl SpooledAudio {
    /// Path of the spooled file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Generated filename of the spooled file
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| "audio.webm".to_string(), |n| n.to_string_lossy().into_owned())
    }
}

impl Drop for SpooledAudio {
    fn drop(&mut self) {
        if !self.path.exists() {
            return;
        }

        if let Err(e) = std::fs::remove_file(&self.path) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to remove spooled audio");
        }
    }
}
