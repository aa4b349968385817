//! Port definitions for external collaborators.
//!
//! Ports follow the hexagonal pattern: the core defines traits, adapter
//! crates implement them. Repository ports cover the relational store,
//! the gateway port covers everything provider-facing.
//!
//! # Design Rules
//!
//! - No adapter types (sqlx, reqwest) in any signature
//! - Errors are domain-level; adapters map their own errors in

mod gateway;
mod resource_repository;
mod song_repository;

pub use gateway::{GatewayError, MusicGateway, ProviderHits, SearchHits};
pub use resource_repository::ResourceRepository;
pub use song_repository::SongRepository;

use thiserror::Error;

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint was violated (unique index, foreign key).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}
