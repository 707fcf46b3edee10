//! Atomic writes and content checksums for rewritten files.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Canonical checksum prefix.
const PREFIX: &str = "sha256:";

/// Write content atomically: stage into a temp file in the same directory
/// under an advisory lock, then rename into place. The file handle is
/// closed on every exit path, including errors.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Temp file in the same directory keeps the rename on one filesystem.
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: path.to_path_buf(),
        })?;

    let result = temp_file
        .write_all(content)
        .and_then(|()| temp_file.sync_all())
        .map_err(|e| Error::io(&temp_path, e));

    let _ = temp_file.unlock();
    drop(temp_file);

    if let Err(e) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))
}

/// Compute the SHA-256 checksum of in-memory content, in the canonical
/// `sha256:<hex>` form.
pub fn content_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{}{:x}", PREFIX, hasher.finalize())
}

/// Compute the SHA-256 checksum of a file's contents.
pub fn file_checksum(path: &Path) -> Result<String> {
    let content = fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(content_checksum(&content))
}
