//! Resource repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewSongResource, ResourceKey, SongResource};

/// Repository for acquired resource persistence.
///
/// Resources are write-once: there is no update or delete surface.
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    /// Count resources matching the uniqueness key tuple.
    ///
    /// The pipeline calls this before any network fetch; a non-zero count
    /// means the resource was already acquired.
    async fn count_matching(&self, key: &ResourceKey) -> Result<u64, RepositoryError>;

    /// Insert a new resource row.
    ///
    /// Returns the persisted resource with its assigned ID. A violation of
    /// the uniqueness tuple surfaces as `RepositoryError::Constraint`.
    async fn insert(&self, resource: &NewSongResource) -> Result<SongResource, RepositoryError>;

    /// List all resources owned by a song.
    async fn list_for_song(&self, song_id: i64) -> Result<Vec<SongResource>, RepositoryError>;
}
