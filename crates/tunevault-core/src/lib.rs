//! Core domain types and port definitions for tunevault.
//!
//! This crate holds the pure domain model (songs, resources, search
//! candidates), the port traits adapters implement (repositories and the
//! music gateway), the content addresser that derives blob storage paths,
//! and canonical path resolution for tunevault data directories.
//!
//! No adapter-specific crates (sqlx, reqwest, clap) appear here; adapters
//! depend on this crate, never the other way around.

pub mod blob;
pub mod domain;
pub mod paths;
pub mod ports;

// Re-export commonly used types for convenience
pub use blob::{ContentAddress, UnknownFileType, content_address};
pub use domain::{
    Artist, CatalogStats, NewSong, NewSongResource, Provider, Quality, ResourceKey, Song,
    SongResource, SongStatus, TrackCandidate, TrackHit,
};
pub use paths::{PathError, data_root, database_path, default_store_dir};
pub use ports::{
    GatewayError, MusicGateway, ProviderHits, RepositoryError, ResourceRepository, SearchHits,
    SongRepository,
};
