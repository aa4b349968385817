//! Per-song acquisition failure taxonomy.
//!
//! Each variant names the pipeline step that failed. All of them are
//! caught at the per-song boundary in the pass loop; none aborts the
//! pass itself.

use thiserror::Error;
use tunevault_core::{GatewayError, RepositoryError};

use crate::store::StoreError;

/// Why a single song failed to acquire.
#[derive(Debug, Error)]
pub enum AcquireError {
    /// No provider produced a usable search response.
    #[error("{0}")]
    SearchFailed(GatewayError),

    /// The search worked but no candidate was eligible.
    #[error("no eligible candidate for '{artist} - {song}'")]
    NoMatchFound { artist: String, song: String },

    /// The chosen candidate's download URL could not be resolved.
    #[error("{0}")]
    ResolveFailed(GatewayError),

    /// The audio bytes could not be downloaded.
    #[error("{0}")]
    FetchFailed(GatewayError),

    /// Downloaded bytes match no known file signature; nothing was
    /// written.
    #[error("unknown file type: content matches no known signature")]
    UnknownFileType,

    /// Writing the blob or recording the resource failed.
    #[error("store failed: {0}")]
    StoreFailed(String),
}

impl From<StoreError> for AcquireError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UnknownFileType(_) => Self::UnknownFileType,
            StoreError::Io { .. } => Self::StoreFailed(err.to_string()),
        }
    }
}

impl From<RepositoryError> for AcquireError {
    fn from(err: RepositoryError) -> Self {
        Self::StoreFailed(err.to_string())
    }
}
