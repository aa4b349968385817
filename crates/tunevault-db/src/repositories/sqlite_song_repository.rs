//! `SQLite` implementation of the `SongRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use tunevault_core::{CatalogStats, NewSong, RepositoryError, Song, SongRepository, SongStatus};

use super::row_mappers::{SONG_SELECT_COLUMNS, row_to_song};

/// Songs with status `pending` that own zero resources; the acquisition
/// pass selection query.
const PENDING_FILTER: &str =
    "status = 'pending' AND NOT EXISTS (SELECT 1 FROM song_resources r WHERE r.song_id = songs.id)";

/// `SQLite` implementation of the `SongRepository` trait.
///
/// Holds a connection pool and implements all catalog operations using
/// `SQLite`.
pub struct SqliteSongRepository {
    pool: SqlitePool,
}

impl SqliteSongRepository {
    /// Create a new `SQLite` song repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn count_where(&self, filter: &str) -> Result<u64, RepositoryError> {
        let query = format!("SELECT COUNT(*) FROM songs WHERE {filter}");
        let count: i64 = sqlx::query_scalar(&query)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}

#[async_trait]
impl SongRepository for SqliteSongRepository {
    async fn list(&self, status: Option<SongStatus>) -> Result<Vec<Song>, RepositoryError> {
        let rows = match status {
            Some(status) => {
                let query = format!(
                    "SELECT {SONG_SELECT_COLUMNS} FROM songs WHERE status = ? ORDER BY id"
                );
                sqlx::query(&query)
                    .bind(status.as_str())
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let query = format!("SELECT {SONG_SELECT_COLUMNS} FROM songs ORDER BY id");
                sqlx::query(&query).fetch_all(&self.pool).await
            }
        }
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_song).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Song, RepositoryError> {
        let query = format!("SELECT {SONG_SELECT_COLUMNS} FROM songs WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("Song with ID {id}")))?;

        row_to_song(&row)
    }

    async fn list_pending(&self) -> Result<Vec<Song>, RepositoryError> {
        let query =
            format!("SELECT {SONG_SELECT_COLUMNS} FROM songs WHERE {PENDING_FILTER} ORDER BY id");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_song).collect()
    }

    async fn insert(&self, song: &NewSong) -> Result<Song, RepositoryError> {
        let raw_data_json = song
            .raw_data
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        let result = sqlx::query(
            "INSERT INTO songs (album_name, artist_name, song_name, raw_source, raw_data) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&song.album_name)
        .bind(&song.artist_name)
        .bind(&song.song_name)
        .bind(&song.raw_source)
        .bind(&raw_data_json)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    async fn set_status(&self, id: i64, status: SongStatus) -> Result<(), RepositoryError> {
        let result =
            sqlx::query("UPDATE songs SET status = ?, updated_at = datetime('now') WHERE id = ?")
                .bind(status.as_str())
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Song with ID {id}")));
        }

        Ok(())
    }

    async fn count_matching(&self, song: &NewSong) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM songs WHERE raw_source = ? AND artist_name = ? AND album_name = ? AND song_name = ?",
        )
        .bind(&song.raw_source)
        .bind(&song.artist_name)
        .bind(&song.album_name)
        .bind(&song.song_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn reset_errored(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            "UPDATE songs SET status = 'pending', updated_at = datetime('now') WHERE status = 'errored'",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(result.rows_affected())
    }

    async fn stats(&self) -> Result<CatalogStats, RepositoryError> {
        let total_songs = self.count_where("1 = 1").await?;
        let pending = self.count_where(PENDING_FILTER).await?;
        let errored = self.count_where("status = 'errored'").await?;
        let resolved = self
            .count_where("EXISTS (SELECT 1 FROM song_resources r WHERE r.song_id = songs.id)")
            .await?;

        let resource_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM song_resources")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(CatalogStats {
            total_songs,
            pending,
            errored,
            resolved,
            total_resources: u64::try_from(resource_count).unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    fn new_song(artist: &str, song: &str) -> NewSong {
        NewSong {
            album_name: "Album".to_string(),
            artist_name: artist.to_string(),
            song_name: song.to_string(),
            raw_source: "xiami".to_string(),
            raw_data: Some(serde_json::json!({"songName": song})),
        }
    }

    #[tokio::test]
    async fn insert_assigns_id_and_defaults_to_pending() {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteSongRepository::new(pool);

        let song = repo.insert(&new_song("Artist", "Track")).await.unwrap();

        assert!(song.id > 0);
        assert_eq!(song.status, SongStatus::Pending);
        assert_eq!(
            song.raw_data,
            Some(serde_json::json!({"songName": "Track"}))
        );
    }

    #[tokio::test]
    async fn list_pending_excludes_errored_songs() {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteSongRepository::new(pool);

        let keep = repo.insert(&new_song("A", "keep")).await.unwrap();
        let fail = repo.insert(&new_song("A", "fail")).await.unwrap();
        repo.set_status(fail.id, SongStatus::Errored).await.unwrap();

        let pending = repo.list_pending().await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, keep.id);
    }

    #[tokio::test]
    async fn list_pending_excludes_songs_with_resources() {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteSongRepository::new(pool.clone());

        let resolved = repo.insert(&new_song("A", "done")).await.unwrap();
        repo.insert(&new_song("A", "waiting")).await.unwrap();

        sqlx::query(
            "INSERT INTO song_resources (song_id, album_name, artist_name, song_name, source, quality, path) VALUES (?, 'Album', 'A', 'done', 'qq', 'lossless', 'ab/cd/abcd.flac')",
        )
        .bind(resolved.id)
        .execute(&pool)
        .await
        .unwrap();

        let pending = repo.list_pending().await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].song_name, "waiting");
    }

    #[tokio::test]
    async fn count_matching_sees_identical_identity() {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteSongRepository::new(pool);

        let song = new_song("Artist", "Track");
        assert_eq!(repo.count_matching(&song).await.unwrap(), 0);
        repo.insert(&song).await.unwrap();
        assert_eq!(repo.count_matching(&song).await.unwrap(), 1);

        // A different title is a different identity
        assert_eq!(
            repo.count_matching(&new_song("Artist", "Other")).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn reset_errored_flips_back_to_pending() {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteSongRepository::new(pool);

        let song = repo.insert(&new_song("A", "retry me")).await.unwrap();
        repo.set_status(song.id, SongStatus::Errored).await.unwrap();

        assert_eq!(repo.reset_errored().await.unwrap(), 1);
        let reloaded = repo.get_by_id(song.id).await.unwrap();
        assert_eq!(reloaded.status, SongStatus::Pending);

        // Nothing left to reset
        assert_eq!(repo.reset_errored().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn stats_counts_each_bucket() {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteSongRepository::new(pool.clone());

        let resolved = repo.insert(&new_song("A", "resolved")).await.unwrap();
        repo.insert(&new_song("A", "pending")).await.unwrap();
        let errored = repo.insert(&new_song("A", "errored")).await.unwrap();
        repo.set_status(errored.id, SongStatus::Errored).await.unwrap();

        sqlx::query(
            "INSERT INTO song_resources (song_id, album_name, artist_name, song_name, source, quality, path) VALUES (?, 'Album', 'A', 'resolved', 'netease', '320kbps', 'ab/cd/abcd.mp3')",
        )
        .bind(resolved.id)
        .execute(&pool)
        .await
        .unwrap();

        let stats = repo.stats().await.unwrap();
        assert_eq!(stats.total_songs, 3);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.errored, 1);
        assert_eq!(stats.resolved, 1);
        assert_eq!(stats.total_resources, 1);
    }

    #[tokio::test]
    async fn set_status_on_missing_song_is_not_found() {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteSongRepository::new(pool);

        let err = repo.set_status(999, SongStatus::Errored).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }
}
