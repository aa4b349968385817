//! Acquired resource domain types.
//!
//! A `SongResource` is one concrete downloaded asset matched to a song.
//! Resources are created exactly once per successful acquisition and never
//! mutated or deleted afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::candidate::{Provider, Quality, TrackCandidate};

/// A downloaded, playable asset that exists with a database ID.
///
/// The name fields hold what the matched provider reported, which may
/// differ from the owning song's own fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongResource {
    /// Database ID (always present for persisted resources).
    pub id: i64,
    /// Owning song's database ID.
    pub song_id: i64,
    /// Album name as reported by the provider.
    pub album_name: String,
    /// Artist name as reported by the provider.
    pub artist_name: String,
    /// Song title as reported by the provider.
    pub song_name: String,
    /// Provider the bytes came from.
    pub source: Provider,
    /// Quality tier the asset was acquired at.
    pub quality: Quality,
    /// Blob path relative to the data directory; the last two path segments
    /// always match the blob's content hash.
    pub path: PathBuf,
    /// Constant `valid`; kept for schema fidelity.
    pub status: String,
    /// UTC timestamp of when the resource was acquired.
    pub created_at: DateTime<Utc>,
    /// UTC timestamp of the last write to this row.
    pub updated_at: DateTime<Utc>,
}

/// A resource to be inserted (no ID yet).
///
/// After insertion, the repository returns a [`SongResource`] with the
/// assigned ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSongResource {
    /// Owning song's database ID.
    pub song_id: i64,
    /// Album name as reported by the provider.
    pub album_name: String,
    /// Artist name as reported by the provider.
    pub artist_name: String,
    /// Song title as reported by the provider.
    pub song_name: String,
    /// Provider the bytes came from.
    pub source: Provider,
    /// Quality tier the asset was acquired at.
    pub quality: Quality,
    /// Blob path relative to the data directory.
    pub path: PathBuf,
}

impl NewSongResource {
    /// Build the row for a chosen candidate and its stored blob path.
    pub fn for_candidate(song_id: i64, candidate: &TrackCandidate, path: PathBuf) -> Self {
        Self {
            song_id,
            album_name: candidate.album_name.clone(),
            artist_name: candidate.artist_name.clone(),
            song_name: candidate.song_name.clone(),
            source: candidate.source,
            quality: candidate.quality(),
            path,
        }
    }
}

/// The tuple treated as a resource uniqueness key.
///
/// The pipeline must never insert a second resource matching an existing
/// key; the duplicate check on this tuple runs before any network fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceKey {
    /// Provider the candidate came from.
    pub source: Provider,
    /// Album name as reported by the provider.
    pub album_name: String,
    /// Artist name as reported by the provider.
    pub artist_name: String,
    /// Song title as reported by the provider.
    pub song_name: String,
    /// Quality tier the candidate would be stored at.
    pub quality: Quality,
}

impl ResourceKey {
    /// Prospective identity of the resource a candidate would become.
    pub fn for_candidate(candidate: &TrackCandidate) -> Self {
        Self {
            source: candidate.source,
            album_name: candidate.album_name.clone(),
            artist_name: candidate.artist_name.clone(),
            song_name: candidate.song_name.clone(),
            quality: candidate.quality(),
        }
    }
}
