//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, network, filesystem).
//!
//! # Structure
//!
//! - `song` - Catalog entry types (`Song`, `NewSong`, `SongStatus`)
//! - `resource` - Acquired asset types (`SongResource`, `ResourceKey`)
//! - `candidate` - Provider search types (`TrackHit`, `TrackCandidate`, `Quality`)
//! - `artist` - Unused artist record, kept for schema fidelity

mod artist;
mod candidate;
mod resource;
mod song;

pub use artist::Artist;
pub use candidate::{Provider, Quality, TrackCandidate, TrackHit};
pub use resource::{NewSongResource, ResourceKey, SongResource};
pub use song::{CatalogStats, NewSong, Song, SongStatus};
