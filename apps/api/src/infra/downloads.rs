//! Saving a `Download` to disk for callers outside a browser.
//!
//! The contents are staged in a hidden temp file next to the target and
//! renamed into place. The staged file is removed when the guard drops, so
//! nothing is left behind whether the write succeeds or fails.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::app_error::{AppError, AppResult};
use crate::export::Download;

struct StagedFile {
    path: PathBuf,
}

impl StagedFile {
    fn new(dir: &Path, filename: &str) -> Self {
        Self {
            path: dir.join(format!(".{}.{}.part", filename, Uuid::new_v4())),
        }
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        // Already renamed on success; only a failed write leaves it here.
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Write `download` into `dir` under its (sanitized) filename, replacing any
/// existing file. Returns the final path.
pub async fn emit_download(dir: &Path, download: &Download) -> AppResult<PathBuf> {
    let target = dir.join(&download.filename);
    let staged = StagedFile::new(dir, &download.filename);

    tokio::fs::write(&staged.path, &download.contents)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to stage download: {}", e)))?;

    tokio::fs::rename(&staged.path, &target)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to save download: {}", e)))?;

    tracing::info!(
        path = %target.display(),
        mime_type = %download.mime_type,
        bytes = download.contents.len(),
        "Saved download"
    );

    Ok(target)
}
