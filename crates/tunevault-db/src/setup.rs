//! Database setup and initialization.
//!
//! This module provides the `setup_database()` function for initializing
//! the `SQLite` database with full schema. Entry points call this with the
//! resolved database path.

use anyhow::Result;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use std::path::Path;

/// Sets up the `SQLite` database connection and ensures the schema exists.
///
/// This function:
/// 1. Establishes a connection to the `SQLite` database file
/// 2. Creates the database file if it doesn't exist
/// 3. Creates all tables and indexes
///
/// # Arguments
///
/// * `db_path` - Path to the `SQLite` database file
///
/// # Errors
///
/// Returns an error if:
/// - The database file cannot be opened or created
/// - Schema creation fails
///
/// # Example
///
/// ```rust,no_run
/// use tunevault_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let db_path = Path::new("/path/to/tunevault.db");
/// let pool = setup_database(db_path).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true),
    )
    .await?;

    create_schema(&pool).await?;

    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// Creates a fresh in-memory database with the full production schema.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    let pool = SqlitePool::connect("sqlite::memory:").await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates the complete database schema.
///
/// Safe to call multiple times: all operations use IF NOT EXISTS.
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    // Song catalog. Status carries the pending -> errored lifecycle; there
    // is no resolved value because resolution is the existence of a resource.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS songs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            album_name TEXT NOT NULL,
            artist_name TEXT NOT NULL,
            song_name TEXT NOT NULL,
            raw_source TEXT NOT NULL,
            raw_data TEXT,
            status TEXT NOT NULL DEFAULT 'pending' CHECK(status IN ('pending', 'errored')),
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Index on status for the pass selection query
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_songs_status ON songs(status)")
        .execute(pool)
        .await?;

    // Index on identity fields for import deduplication counts
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_songs_identity ON songs(raw_source, artist_name, album_name, song_name)",
    )
    .execute(pool)
    .await?;

    // Acquired resources, write-once rows
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS song_resources (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            song_id INTEGER NOT NULL,
            album_name TEXT NOT NULL,
            artist_name TEXT NOT NULL,
            song_name TEXT NOT NULL,
            source TEXT NOT NULL,
            quality TEXT NOT NULL,
            path TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'valid',
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now')),
            FOREIGN KEY (song_id) REFERENCES songs(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Index on song_id for per-song lookups
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_resources_song ON song_resources(song_id)")
        .execute(pool)
        .await?;

    // The resource uniqueness tuple, enforced store-side so the pipeline's
    // check-then-insert can never silently duplicate
    sqlx::query(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_resources_identity ON song_resources(source, album_name, artist_name, song_name, quality)",
    )
    .execute(pool)
    .await?;

    // Artist records, kept for schema fidelity; nothing in this core
    // populates them
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS artists (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            aliases TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
