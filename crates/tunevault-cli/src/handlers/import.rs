//! Import exported favorites files into the song catalog.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::warn;
use tunevault_core::NewSong;

use crate::bootstrap::CliContext;

/// Execute the import command.
///
/// Reads every `*.json` export file in `path`, extracts the song entries,
/// and inserts the ones the catalog doesn't already have.
pub async fn execute(ctx: &CliContext, path: &str, source: &str) -> Result<()> {
    let dir = Path::new(path);
    if !dir.is_dir() {
        bail!("{path} is not a directory");
    }

    let files = export_files(dir).with_context(|| format!("failed to read {path}"))?;
    if files.is_empty() {
        println!("No .json export files in {path}.");
        return Ok(());
    }

    let mut imported = 0u64;
    let mut duplicates = 0u64;
    let mut malformed = 0u64;

    for file in &files {
        let entries = match read_export(file) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(file = %file.display(), error = %err, "skipping unreadable export file");
                continue;
            }
        };

        for entry in entries {
            let Some(song) = song_from_entry(&entry, source) else {
                malformed += 1;
                continue;
            };

            if ctx.songs.count_matching(&song).await? > 0 {
                duplicates += 1;
                continue;
            }

            ctx.songs.insert(&song).await?;
            imported += 1;
        }
    }

    println!("Imported {imported} song(s) from {} file(s).", files.len());
    if duplicates > 0 {
        println!("Skipped {duplicates} already in the catalog.");
    }
    if malformed > 0 {
        println!("Skipped {malformed} entries without a song name.");
    }
    Ok(())
}

/// All `*.json` files directly inside the directory, sorted by name.
fn export_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    Ok(files)
}

/// Song entries carried by one export file.
///
/// Export shape: `{data: {result: {data: {songs: [...]}}}}`. A file that
/// parses but lacks that structure contributes nothing.
fn read_export(file: &Path) -> Result<Vec<Value>> {
    let text = fs::read_to_string(file)?;
    let export: Value = serde_json::from_str(&text)?;
    let songs = export
        .pointer("/data/result/data/songs")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    Ok(songs)
}

/// Map one export entry to a catalog row.
///
/// The first `artistVOs` entry wins over the flat `artistName` field;
/// entries without a song name are rejected. The whole entry is kept
/// verbatim as the row's raw payload.
fn song_from_entry(entry: &Value, source: &str) -> Option<NewSong> {
    let song_name = entry
        .get("songName")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())?
        .to_string();
    let album_name = entry
        .get("albumName")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let artist_name = entry
        .pointer("/artistVOs/0/artistName")
        .and_then(Value::as_str)
        .or_else(|| entry.get("artistName").and_then(Value::as_str))
        .unwrap_or_default()
        .to_string();

    Some(NewSong {
        album_name,
        artist_name,
        song_name,
        raw_source: source.to_string(),
        raw_data: Some(entry.clone()),
    })
}
