//! The acquisition pass.
//!
//! `run_pass` collects every pending song that owns no resource,
//! shuffles the order, and works through the list one song at a time.
//! A failing song is marked errored and the pass moves on; a pacing
//! sleep separates consecutive songs so the providers see a slow,
//! browser-like crawl instead of a burst.

use std::sync::Arc;
use std::time::Duration;

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use tracing::{info, warn};
use tunevault_core::{
    MusicGateway, NewSongResource, RepositoryError, ResourceKey, ResourceRepository, Song,
    SongRepository, SongResource, SongStatus, TrackCandidate,
};

use crate::error::AcquireError;
use crate::selector::pick_best;
use crate::store::BlobStore;

/// Pass tuning knobs.
#[derive(Debug, Clone)]
pub struct AcquireConfig {
    /// Sleep inserted between consecutive songs, successful or not.
    pub pause_between: Duration,
    /// Seed for the pass ordering shuffle. `None` draws from entropy.
    pub shuffle_seed: Option<u64>,
}

impl Default for AcquireConfig {
    fn default() -> Self {
        Self {
            pause_between: Duration::from_secs(10),
            shuffle_seed: None,
        }
    }
}

impl AcquireConfig {
    #[must_use]
    pub const fn with_pause_between(mut self, pause: Duration) -> Self {
        self.pause_between = pause;
        self
    }

    #[must_use]
    pub const fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }
}

/// How one song's acquisition ended.
#[derive(Debug)]
pub enum AcquireOutcome {
    /// Audio fetched, stored, and recorded.
    Stored(SongResource),
    /// An identical resource already existed; nothing was fetched.
    AlreadyPresent,
}

/// Tally for one pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PassSummary {
    /// Songs the pass attempted.
    pub attempted: u64,
    /// Songs that gained a new resource.
    pub stored: u64,
    /// Songs skipped because the resource already existed.
    pub already_present: u64,
    /// Songs marked errored.
    pub failed: u64,
}

/// Drives acquisition across the catalog.
pub struct Acquirer {
    songs: Arc<dyn SongRepository>,
    resources: Arc<dyn ResourceRepository>,
    gateway: Arc<dyn MusicGateway>,
    store: BlobStore,
    config: AcquireConfig,
}

impl Acquirer {
    pub fn new(
        songs: Arc<dyn SongRepository>,
        resources: Arc<dyn ResourceRepository>,
        gateway: Arc<dyn MusicGateway>,
        store: BlobStore,
        config: AcquireConfig,
    ) -> Self {
        Self {
            songs,
            resources,
            gateway,
            store,
            config,
        }
    }

    /// Run one pass over every song still waiting for audio.
    ///
    /// Per-song failures are absorbed: the song is marked errored and
    /// the pass continues. Only repository failures outside the
    /// per-song sequence abort the pass.
    ///
    /// # Errors
    ///
    /// Fails when the pending list cannot be read or a song's status
    /// cannot be updated.
    pub async fn run_pass(&self) -> Result<PassSummary, RepositoryError> {
        let mut pending = self.songs.list_pending().await?;

        let mut rng = match self.config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        pending.shuffle(&mut rng);

        info!(songs = pending.len(), "acquisition pass starting");

        let mut summary = PassSummary::default();
        let total = pending.len();
        for (index, song) in pending.into_iter().enumerate() {
            summary.attempted += 1;
            match self.acquire_one(&song).await {
                Ok(AcquireOutcome::Stored(resource)) => {
                    summary.stored += 1;
                    info!(
                        song_id = song.id,
                        path = %resource.path.display(),
                        quality = %resource.quality,
                        "song acquired"
                    );
                }
                Ok(AcquireOutcome::AlreadyPresent) => {
                    summary.already_present += 1;
                    info!(song_id = song.id, "resource already present, skipped");
                }
                Err(err) => {
                    summary.failed += 1;
                    warn!(
                        song_id = song.id,
                        artist = %song.artist_name,
                        song = %song.song_name,
                        error = %err,
                        "song failed to acquire"
                    );
                    self.songs.set_status(song.id, SongStatus::Errored).await?;
                }
            }
            if index + 1 < total {
                tokio::time::sleep(self.config.pause_between).await;
            }
        }

        info!(
            stored = summary.stored,
            already_present = summary.already_present,
            failed = summary.failed,
            "acquisition pass finished"
        );
        Ok(summary)
    }

    /// Acquire audio for one song.
    ///
    /// The duplicate check on the uniqueness key runs before URL
    /// resolution, so an already-acquired resource costs no fetch. The
    /// blob is written before the resource row so a crash between the
    /// two leaves an orphaned blob, never a dangling row.
    ///
    /// # Errors
    ///
    /// Any step failing surfaces as the matching [`AcquireError`]
    /// variant.
    pub async fn acquire_one(&self, song: &Song) -> Result<AcquireOutcome, AcquireError> {
        let keywords = format!("{} {}", song.artist_name, song.song_name);
        let hits = self
            .gateway
            .search_songs(&keywords)
            .await
            .map_err(AcquireError::SearchFailed)?;

        let candidates: Vec<TrackCandidate> = hits
            .providers
            .into_iter()
            .flat_map(|set| {
                let provider = set.provider;
                set.tracks
                    .into_iter()
                    .map(move |hit| TrackCandidate::tagged(provider, hit))
            })
            .collect();

        let pick = pick_best(&candidates, &song.artist_name, &song.song_name)?;

        let key = ResourceKey::for_candidate(&pick);
        if self.resources.count_matching(&key).await? > 0 {
            return Ok(AcquireOutcome::AlreadyPresent);
        }

        let url = self
            .gateway
            .resolve_download_url(pick.source, &pick.native_id)
            .await
            .map_err(AcquireError::ResolveFailed)?;

        let bytes = self
            .gateway
            .fetch_audio(pick.source, &url)
            .await
            .map_err(AcquireError::FetchFailed)?;

        let path = self.store.write(&bytes).await?;

        let resource = self
            .resources
            .insert(&NewSongResource::for_candidate(song.id, &pick, path))
            .await?;

        Ok(AcquireOutcome::Stored(resource))
    }
}
