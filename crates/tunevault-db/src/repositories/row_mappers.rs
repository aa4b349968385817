//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::Row;
use tunevault_core::{RepositoryError, Song, SongResource};

/// Shared SELECT column list for song queries.
pub const SONG_SELECT_COLUMNS: &str =
    "id, album_name, artist_name, song_name, raw_source, raw_data, status, created_at, updated_at";

/// Shared SELECT column list for resource queries.
pub const RESOURCE_SELECT_COLUMNS: &str = "id, song_id, album_name, artist_name, song_name, source, quality, path, status, created_at, updated_at";

/// Helper to parse datetime strings that may have a "UTC" suffix.
pub fn parse_datetime(datetime_str: Option<String>) -> Option<DateTime<Utc>> {
    datetime_str.and_then(|s| {
        let trimmed = s.trim_end_matches(" UTC");
        NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f")
            .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
            .ok()
    })
}

/// Parse a database row into a Song.
pub fn row_to_song(row: &sqlx::sqlite::SqliteRow) -> Result<Song, RepositoryError> {
    let raw_data_json: Option<String> = row
        .try_get("raw_data")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    let status_str: String = row
        .try_get("status")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    let created_at_str: Option<String> = row
        .try_get("created_at")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    let updated_at_str: Option<String> = row
        .try_get("updated_at")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    Ok(Song {
        id: row
            .try_get::<i64, _>("id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        album_name: row
            .try_get("album_name")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        artist_name: row
            .try_get("artist_name")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        song_name: row
            .try_get("song_name")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        raw_source: row
            .try_get("raw_source")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        raw_data: raw_data_json
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?,
        status: status_str.parse().map_err(RepositoryError::Serialization)?,
        created_at: parse_datetime(created_at_str).unwrap_or_else(Utc::now),
        updated_at: parse_datetime(updated_at_str).unwrap_or_else(Utc::now),
    })
}

/// Parse a database row into a `SongResource`.
pub fn row_to_resource(row: &sqlx::sqlite::SqliteRow) -> Result<SongResource, RepositoryError> {
    let source_str: String = row
        .try_get("source")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    let quality_str: String = row
        .try_get("quality")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    let created_at_str: Option<String> = row
        .try_get("created_at")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    let updated_at_str: Option<String> = row
        .try_get("updated_at")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    Ok(SongResource {
        id: row
            .try_get::<i64, _>("id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        song_id: row
            .try_get::<i64, _>("song_id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        album_name: row
            .try_get("album_name")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        artist_name: row
            .try_get("artist_name")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        song_name: row
            .try_get("song_name")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        source: source_str.parse().map_err(RepositoryError::Serialization)?,
        quality: quality_str.parse().map_err(RepositoryError::Serialization)?,
        path: row
            .try_get::<String, _>("path")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .into(),
        status: row
            .try_get("status")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        created_at: parse_datetime(created_at_str).unwrap_or_else(Utc::now),
        updated_at: parse_datetime(updated_at_str).unwrap_or_else(Utc::now),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_datetime_handles_sqlite_format() {
        let parsed = parse_datetime(Some("2024-03-01 12:30:45".to_string()));
        assert!(parsed.is_some());
    }

    #[test]
    fn parse_datetime_trims_utc_suffix() {
        let parsed = parse_datetime(Some("2024-03-01 12:30:45.123 UTC".to_string()));
        assert!(parsed.is_some());
    }

    #[test]
    fn parse_datetime_rejects_garbage() {
        assert!(parse_datetime(Some("soon".to_string())).is_none());
        assert!(parse_datetime(None).is_none());
    }
}
