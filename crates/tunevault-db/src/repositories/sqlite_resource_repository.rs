//! `SQLite` implementation of the `ResourceRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use tunevault_core::{
    NewSongResource, RepositoryError, ResourceKey, ResourceRepository, SongResource,
};

use super::row_mappers::{RESOURCE_SELECT_COLUMNS, row_to_resource};

/// `SQLite` implementation of the `ResourceRepository` trait.
///
/// Resource rows are write-once; this repository exposes no update or
/// delete operations.
pub struct SqliteResourceRepository {
    pool: SqlitePool,
}

impl SqliteResourceRepository {
    /// Create a new `SQLite` resource repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn get_by_id(&self, id: i64) -> Result<SongResource, RepositoryError> {
        let query = format!("SELECT {RESOURCE_SELECT_COLUMNS} FROM song_resources WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("Resource with ID {id}")))?;

        row_to_resource(&row)
    }
}

#[async_trait]
impl ResourceRepository for SqliteResourceRepository {
    async fn count_matching(&self, key: &ResourceKey) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM song_resources WHERE source = ? AND album_name = ? AND artist_name = ? AND song_name = ? AND quality = ?",
        )
        .bind(key.source.as_str())
        .bind(&key.album_name)
        .bind(&key.artist_name)
        .bind(&key.song_name)
        .bind(key.quality.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn insert(&self, resource: &NewSongResource) -> Result<SongResource, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO song_resources (song_id, album_name, artist_name, song_name, source, quality, path) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(resource.song_id)
        .bind(&resource.album_name)
        .bind(&resource.artist_name)
        .bind(&resource.song_name)
        .bind(resource.source.as_str())
        .bind(resource.quality.as_str())
        .bind(resource.path.to_string_lossy().into_owned())
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Constraint(
                format!("resource already exists for this identity tuple: {db}"),
            ),
            _ => RepositoryError::Storage(e.to_string()),
        })?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    async fn list_for_song(&self, song_id: i64) -> Result<Vec<SongResource>, RepositoryError> {
        let query = format!(
            "SELECT {RESOURCE_SELECT_COLUMNS} FROM song_resources WHERE song_id = ? ORDER BY id"
        );

        let rows = sqlx::query(&query)
            .bind(song_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_resource).collect()
    }
}
