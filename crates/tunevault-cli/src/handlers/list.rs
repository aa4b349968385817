//! List songs in the catalog.

use anyhow::Result;
use tunevault_core::SongStatus;

use crate::bootstrap::CliContext;
use crate::presentation::{print_separator, truncate_string};

/// Execute the list command.
///
/// Prints one row per song with its status and how many resources it
/// owns, optionally filtered by status.
pub async fn execute(ctx: &CliContext, status: Option<&str>) -> Result<()> {
    let filter = status
        .map(str::parse::<SongStatus>)
        .transpose()
        .map_err(|err| anyhow::anyhow!(err))?;

    let songs = ctx.songs.list(filter).await?;
    if songs.is_empty() {
        println!("No songs in the catalog. Seed it with: tunevault import <dir>");
        return Ok(());
    }

    println!(
        "{:<6} {:<8} {:<4} {:<22} {:<30} {:<22}",
        "ID", "STATUS", "RES", "ARTIST", "SONG", "ALBUM"
    );
    print_separator(96);

    for song in &songs {
        let resources = ctx.resources.list_for_song(song.id).await?;
        println!(
            "{:<6} {:<8} {:<4} {:<22} {:<30} {:<22}",
            song.id,
            song.status,
            resources.len(),
            truncate_string(&song.artist_name, 20),
            truncate_string(&song.song_name, 28),
            truncate_string(&song.album_name, 20),
        );
    }

    println!();
    println!("{} song(s)", songs.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::bootstrap::testing;
    use tunevault_core::NewSong;

    #[tokio::test]
    async fn unknown_status_filter_is_an_error() {
        let (ctx, _dir) = testing::context().await;
        assert!(execute(&ctx, Some("resolved")).await.is_err());
    }

    #[tokio::test]
    async fn listing_prints_without_failing() {
        let (ctx, _dir) = testing::context().await;
        ctx.songs
            .insert(&NewSong {
                album_name: "唱游".to_string(),
                artist_name: "王菲".to_string(),
                song_name: "红豆".to_string(),
                raw_source: "xiami".to_string(),
                raw_data: None,
            })
            .await
            .unwrap();

        execute(&ctx, None).await.unwrap();
        execute(&ctx, Some("pending")).await.unwrap();
    }
}
