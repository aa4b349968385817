//! Composition utilities for building repositories with `SQLite` backends.
//!
//! This module is focused purely on construction and contains no domain
//! logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use tunevault_core::{ResourceRepository, SongRepository};

use crate::repositories::{SqliteResourceRepository, SqliteSongRepository};

/// Factory for creating repository instances with `SQLite` backends.
pub struct SqliteFactory;

impl SqliteFactory {
    /// Create a song repository from a pool.
    pub fn song_repository(pool: SqlitePool) -> Arc<dyn SongRepository> {
        Arc::new(SqliteSongRepository::new(pool))
    }

    /// Create a resource repository from a pool.
    pub fn resource_repository(pool: SqlitePool) -> Arc<dyn ResourceRepository> {
        Arc::new(SqliteResourceRepository::new(pool))
    }
}
