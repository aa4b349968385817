//! Song catalog domain types.
//!
//! A `Song` is one catalog entry the system wants a playable resource for.
//! Songs are created by catalog import and only ever mutated by the
//! acquisition pipeline (status transition on failure) or the manual
//! errored-reset; they are never deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a catalog entry.
///
/// There is no explicit "resolved" state: a song counts as resolved once at
/// least one resource references it, and the pending-selection query filters
/// on exactly that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SongStatus {
    /// Waiting for a resource; selected by acquisition passes.
    Pending,
    /// A pass failed on this entry; skipped until manually reset.
    Errored,
}

impl SongStatus {
    /// Stable string form used in storage and display.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Errored => "errored",
        }
    }
}

impl fmt::Display for SongStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SongStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "errored" => Ok(Self::Errored),
            other => Err(format!("unknown song status '{other}'")),
        }
    }
}

/// A song that exists in the catalog with a database ID.
///
/// Use [`NewSong`] for entries that haven't been persisted yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    /// Database ID (always present for persisted songs).
    pub id: i64,
    /// Album name as imported.
    pub album_name: String,
    /// Artist name as imported.
    pub artist_name: String,
    /// Song title as imported.
    pub song_name: String,
    /// Tag of the catalog the entry was imported from (e.g. "xiami").
    pub raw_source: String,
    /// Original import payload, kept verbatim.
    pub raw_data: Option<serde_json::Value>,
    /// Lifecycle status.
    pub status: SongStatus,
    /// UTC timestamp of when the song was imported.
    pub created_at: DateTime<Utc>,
    /// UTC timestamp of the last write to this row.
    pub updated_at: DateTime<Utc>,
}

/// A song to be inserted into the catalog (no ID yet).
///
/// After insertion, the repository returns a [`Song`] with the assigned ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSong {
    /// Album name as imported.
    pub album_name: String,
    /// Artist name as imported.
    pub artist_name: String,
    /// Song title as imported.
    pub song_name: String,
    /// Tag of the catalog the entry was imported from.
    pub raw_source: String,
    /// Original import payload, kept verbatim.
    pub raw_data: Option<serde_json::Value>,
}

/// Aggregate counts over the catalog, for status reporting.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CatalogStats {
    /// All songs in the catalog.
    pub total_songs: u64,
    /// Songs still awaiting a resource (status `pending`, zero resources).
    pub pending: u64,
    /// Songs marked `errored` by a failed pass.
    pub errored: u64,
    /// Songs owning at least one resource.
    pub resolved: u64,
    /// All resource rows.
    pub total_resources: u64,
}
