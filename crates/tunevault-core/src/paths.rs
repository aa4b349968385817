//! Path resolution for tunevault data locations.
//!
//! Canonical resolution for the data root, the database file, and the
//! default blob store directory. No interactive I/O; adapters decide how
//! overrides reach these functions.

use std::env;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from path resolution and directory operations.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the system data directory.
    #[error("Cannot determine system data directory")]
    NoDataDir,

    /// Failed to create a directory.
    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },
}

/// Root directory for application data (database, blob store).
///
/// Resolution order:
/// 1. `TUNEVAULT_DATA_DIR` environment variable
/// 2. System data directory (e.g. `~/.local/share/tunevault`)
///
/// The directory is created if it doesn't exist.
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var("TUNEVAULT_DATA_DIR") {
        return Ok(PathBuf::from(path));
    }

    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    let root = data_dir.join("tunevault");

    if !root.exists() {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(root)
}

/// Path to the tunevault database file.
///
/// Returns the path to `tunevault.db` in the data root.
pub fn database_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join("tunevault.db"))
}

/// Default directory for content-addressed blobs.
///
/// Blob shard directories sit directly beneath this path.
pub fn default_store_dir() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join("store"))
}
