//! End-to-end acquisition tests against an in-memory database and a
//! scripted gateway.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tunevault_acquire::{AcquireConfig, AcquireError, AcquireOutcome, Acquirer, BlobStore};
use tunevault_core::{
    GatewayError, MusicGateway, NewSong, Provider, ProviderHits, Quality, ResourceRepository,
    SearchHits, Song, SongRepository, SongStatus, TrackHit,
};
use tunevault_db::{SqliteFactory, setup_test_database};

/// A gateway whose answers are fixed per keyword string.
#[derive(Default)]
struct ScriptedGateway {
    hits_by_keywords: HashMap<String, Vec<ProviderHits>>,
    failing_keywords: HashSet<String>,
    payload: Vec<u8>,
    fetch_calls: AtomicU64,
}

impl ScriptedGateway {
    fn new(payload: Vec<u8>) -> Self {
        Self {
            payload,
            ..Self::default()
        }
    }

    fn with_hits(mut self, keywords: &str, provider: Provider, tracks: Vec<TrackHit>) -> Self {
        self.hits_by_keywords
            .entry(keywords.to_string())
            .or_default()
            .push(ProviderHits { provider, tracks });
        self
    }

    fn with_failing_search(mut self, keywords: &str) -> Self {
        self.failing_keywords.insert(keywords.to_string());
        self
    }

    fn fetch_count(&self) -> u64 {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MusicGateway for ScriptedGateway {
    async fn search_songs(&self, keywords: &str) -> Result<SearchHits, GatewayError> {
        if self.failing_keywords.contains(keywords) {
            return Err(GatewayError::Search("scripted failure".to_string()));
        }
        let providers = self
            .hits_by_keywords
            .get(keywords)
            .cloned()
            .unwrap_or_else(|| {
                Provider::ALL
                    .into_iter()
                    .map(|provider| ProviderHits {
                        provider,
                        tracks: Vec::new(),
                    })
                    .collect()
            });
        Ok(SearchHits { providers })
    }

    async fn resolve_download_url(
        &self,
        provider: Provider,
        native_id: &str,
    ) -> Result<String, GatewayError> {
        Ok(format!("http://audio.test/{provider}/{native_id}"))
    }

    async fn fetch_audio(&self, _provider: Provider, _url: &str) -> Result<Vec<u8>, GatewayError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.payload.clone())
    }
}

fn mp3_payload() -> Vec<u8> {
    let mut data = b"ID3\x04\x00\x00\x00\x00\x00\x00".to_vec();
    data.extend_from_slice(b"fixture audio payload");
    data
}

fn hit(artist: &str, song: &str, lossless: bool, kbps320: bool) -> TrackHit {
    TrackHit {
        native_id: format!("{artist}-{song}"),
        album_name: "album".to_string(),
        artist_name: artist.to_string(),
        song_name: song.to_string(),
        copyrighted: true,
        downloadable: true,
        lossless,
        kbps320,
        kbps192: false,
    }
}

fn new_song(artist: &str, song: &str) -> NewSong {
    NewSong {
        album_name: "album".to_string(),
        artist_name: artist.to_string(),
        song_name: song.to_string(),
        raw_source: "xiami".to_string(),
        raw_data: None,
    }
}

struct Harness {
    songs: Arc<dyn SongRepository>,
    resources: Arc<dyn ResourceRepository>,
    gateway: Arc<ScriptedGateway>,
    acquirer: Acquirer,
    _store_dir: tempfile::TempDir,
}

async fn harness(gateway: ScriptedGateway) -> Harness {
    let pool = setup_test_database().await.unwrap();
    let songs = SqliteFactory::song_repository(pool.clone());
    let resources = SqliteFactory::resource_repository(pool);
    let gateway = Arc::new(gateway);
    let store_dir = tempfile::tempdir().unwrap();

    let acquirer = Acquirer::new(
        songs.clone(),
        resources.clone(),
        gateway.clone(),
        BlobStore::new(store_dir.path()),
        AcquireConfig::default()
            .with_pause_between(Duration::ZERO)
            .with_shuffle_seed(7),
    );

    Harness {
        songs,
        resources,
        gateway,
        acquirer,
        _store_dir: store_dir,
    }
}

async fn insert_song(harness: &Harness, artist: &str, song: &str) -> Song {
    harness.songs.insert(&new_song(artist, song)).await.unwrap()
}

#[tokio::test]
async fn lossless_candidate_becomes_a_resource() {
    let gateway = ScriptedGateway::new(mp3_payload()).with_hits(
        "faye red bean",
        Provider::Qq,
        vec![hit("faye", "red bean", true, false)],
    );
    let h = harness(gateway).await;
    let song = insert_song(&h, "faye", "red bean").await;

    let summary = h.acquirer.run_pass().await.unwrap();
    assert_eq!(summary.attempted, 1);
    assert_eq!(summary.stored, 1);
    assert_eq!(summary.failed, 0);

    let resources = h.resources.list_for_song(song.id).await.unwrap();
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].quality, Quality::Lossless);
    assert_eq!(resources[0].source, Provider::Qq);

    // The song now owns audio, so it leaves the pending set without any
    // status write.
    let song = h.songs.get_by_id(song.id).await.unwrap();
    assert_eq!(song.status, SongStatus::Pending);
    assert!(h.songs.list_pending().await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_search_marks_the_song_errored() {
    // The gateway answers successfully with zero hits everywhere.
    let gateway = ScriptedGateway::new(mp3_payload());
    let h = harness(gateway).await;
    let song = insert_song(&h, "nobody", "nothing").await;

    let summary = h.acquirer.run_pass().await.unwrap();
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.stored, 0);

    let song = h.songs.get_by_id(song.id).await.unwrap();
    assert_eq!(song.status, SongStatus::Errored);
    assert!(h.resources.list_for_song(song.id).await.unwrap().is_empty());
    assert_eq!(h.gateway.fetch_count(), 0);
}

#[tokio::test]
async fn failed_search_marks_the_song_errored() {
    let gateway = ScriptedGateway::new(mp3_payload()).with_failing_search("faye red bean");
    let h = harness(gateway).await;
    let song = insert_song(&h, "faye", "red bean").await;

    let summary = h.acquirer.run_pass().await.unwrap();
    assert_eq!(summary.failed, 1);

    let song = h.songs.get_by_id(song.id).await.unwrap();
    assert_eq!(song.status, SongStatus::Errored);
}

#[tokio::test]
async fn one_bad_song_does_not_sink_the_pass() {
    let gateway = ScriptedGateway::new(mp3_payload())
        .with_failing_search("broken search")
        .with_hits(
            "faye red bean",
            Provider::Xiami,
            vec![hit("faye", "red bean", false, true)],
        );
    let h = harness(gateway).await;
    let failing = insert_song(&h, "broken", "search").await;
    let healthy = insert_song(&h, "faye", "red bean").await;

    let summary = h.acquirer.run_pass().await.unwrap();
    assert_eq!(summary.attempted, 2);
    assert_eq!(summary.stored, 1);
    assert_eq!(summary.failed, 1);

    assert_eq!(
        h.songs.get_by_id(failing.id).await.unwrap().status,
        SongStatus::Errored
    );
    let resources = h.resources.list_for_song(healthy.id).await.unwrap();
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].quality, Quality::Kbps320);
}

#[tokio::test]
async fn acquired_song_is_not_fetched_twice() {
    let gateway = ScriptedGateway::new(mp3_payload()).with_hits(
        "faye red bean",
        Provider::Qq,
        vec![hit("faye", "red bean", true, false)],
    );
    let h = harness(gateway).await;
    let song = insert_song(&h, "faye", "red bean").await;

    let first = h.acquirer.acquire_one(&song).await.unwrap();
    assert!(matches!(first, AcquireOutcome::Stored(_)));
    assert_eq!(h.gateway.fetch_count(), 1);

    // Same song again: the duplicate check answers before any network
    // fetch happens.
    let second = h.acquirer.acquire_one(&song).await.unwrap();
    assert!(matches!(second, AcquireOutcome::AlreadyPresent));
    assert_eq!(h.gateway.fetch_count(), 1);

    assert_eq!(h.resources.list_for_song(song.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn unrecognized_payload_is_an_acquire_error() {
    let gateway = ScriptedGateway::new(b"not audio at all".to_vec()).with_hits(
        "faye red bean",
        Provider::Qq,
        vec![hit("faye", "red bean", true, false)],
    );
    let h = harness(gateway).await;
    let song = insert_song(&h, "faye", "red bean").await;

    let err = h.acquirer.acquire_one(&song).await.unwrap_err();
    assert!(matches!(err, AcquireError::UnknownFileType));
    assert!(h.resources.list_for_song(song.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn near_miss_names_do_not_match() {
    // Provider reports a lowercase variant of the catalog entry.
    let gateway = ScriptedGateway::new(mp3_payload()).with_hits(
        "Faye red bean",
        Provider::Qq,
        vec![hit("faye", "red bean", true, true)],
    );
    let h = harness(gateway).await;
    let song = insert_song(&h, "Faye", "red bean").await;

    let err = h.acquirer.acquire_one(&song).await.unwrap_err();
    assert!(matches!(err, AcquireError::NoMatchFound { .. }));
}
