//! Content-addressed blob store.
//!
//! Audio payloads land under a two-level fan-out keyed by their content
//! hash, so re-acquiring identical bytes is a no-op at the filesystem
//! level and directories stay small.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use tunevault_core::{UnknownFileType, content_address};

/// Errors from blob writes.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Payload matched no known file signature; nothing was written.
    #[error(transparent)]
    UnknownFileType(#[from] UnknownFileType),

    /// Filesystem failure under the store root.
    #[error("failed to write blob at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Blob storage rooted at one directory.
pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Address the payload and write it, returning the store-relative
    /// path it now lives at.
    ///
    /// Addressing runs before any filesystem work, so unrecognized
    /// content leaves the store untouched.
    ///
    /// # Errors
    ///
    /// Fails when the payload has no recognizable file signature or
    /// when the blob cannot be written.
    pub async fn write(&self, data: &[u8]) -> Result<PathBuf, StoreError> {
        let address = content_address(data)?;
        let relative = address.relative_path();
        let absolute = self.root.join(&relative);

        if let Some(parent) = absolute.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
        tokio::fs::write(&absolute, data)
            .await
            .map_err(|source| StoreError::Io {
                path: absolute.clone(),
                source,
            })?;

        debug!(path = %relative.display(), bytes = data.len(), "blob written");
        Ok(relative)
    }
}
