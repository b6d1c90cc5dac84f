//! JSON artifact I/O.
//!
//! Artifacts are written to a sibling `.tmp` file and renamed into place, so
//! a reader never sees a half-written file.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::ArtifactError;

/// Serializes `value` as pretty-printed UTF-8 JSON and atomically replaces
/// `path` with it.
///
/// # Errors
///
/// Returns [`ArtifactError`] if serialization, the temp write, or the rename fails.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), ArtifactError> {
    let body = serde_json::to_vec_pretty(value).map_err(|e| ArtifactError::Json {
        path: path.display().to_string(),
        source: e,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }

    let tmp = tmp_path(path);
    std::fs::write(&tmp, body).map_err(|e| io_error(&tmp, e))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_error(path, e));
    }

    tracing::debug!(path = %path.display(), "artifact written");
    Ok(())
}

/// Reads and deserializes a JSON file.
///
/// # Errors
///
/// Returns [`ArtifactError`] if the file cannot be read or parsed as `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let content = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    serde_json::from_str(&content).map_err(|e| ArtifactError::Json {
        path: path.display().to_string(),
        source: e,
    })
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn io_error(path: &Path, source: std::io::Error) -> ArtifactError {
    ArtifactError::Io {
        path: path.display().to_string(),
        source,
    }
}
