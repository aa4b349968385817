//! Song repository trait definition.
//!
//! This port defines the interface for catalog persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{CatalogStats, NewSong, Song, SongStatus};

/// Repository for song catalog persistence.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - The pending-selection logic (status `pending`, zero resources) lives
///   here so storage can express it in a single query
#[async_trait]
pub trait SongRepository: Send + Sync {
    /// List songs in the catalog, optionally filtered by status.
    async fn list(&self, status: Option<SongStatus>) -> Result<Vec<Song>, RepositoryError>;

    /// Get a song by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the song doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Song, RepositoryError>;

    /// List songs eligible for an acquisition pass: status `pending` and
    /// owning zero resources.
    ///
    /// Errored songs and songs that already own a resource are excluded,
    /// which is what makes resolution implicit.
    async fn list_pending(&self) -> Result<Vec<Song>, RepositoryError>;

    /// Insert a new song into the catalog.
    ///
    /// Returns the persisted song with its assigned ID.
    async fn insert(&self, song: &NewSong) -> Result<Song, RepositoryError>;

    /// Set a song's lifecycle status.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the song doesn't exist.
    async fn set_status(&self, id: i64, status: SongStatus) -> Result<(), RepositoryError>;

    /// Count songs matching a prospective entry's identity fields
    /// (source, artist, album, song). Used by import deduplication.
    async fn count_matching(&self, song: &NewSong) -> Result<u64, RepositoryError>;

    /// Flip every `errored` song back to `pending`.
    ///
    /// Returns how many rows changed.
    async fn reset_errored(&self) -> Result<u64, RepositoryError>;

    /// Aggregate counts over the catalog.
    async fn stats(&self) -> Result<CatalogStats, RepositoryError>;
}
