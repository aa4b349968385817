//! `SQLite` repository implementations for tunevault.
//!
//! Implements the repository ports from `tunevault-core` on top of a
//! `SQLite` database. The `SqlitePool` is confined to this crate and never
//! exposed through port trait signatures.

#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::SqliteFactory;

// Re-export repository implementations
pub use repositories::{SqliteResourceRepository, SqliteSongRepository};

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
