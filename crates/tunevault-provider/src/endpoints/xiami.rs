//! Xiami catalog endpoint.
//!
//! The friendliest of the three wire formats: quality arrives as three
//! booleans (`sq`/`hq`/`lq`) and licensing as plain `copyrighted` and
//! `downloadable` flags. Success is `state == 0`.

use crate::error::{ProviderError, ProviderResult};
use serde::Deserialize;
use tunevault_core::{Provider, TrackHit};
use url::Url;

const WEB_PATH: &str = "/web";

pub fn search_url(base: &Url, keywords: &str) -> Url {
    let mut url = base.clone();
    url.set_path(WEB_PATH);
    url.set_query(Some(&format!(
        "v=2.0&app_key=1&r=search/songs&limit=30&key={}",
        urlencoding::encode(keywords)
    )));
    url
}

pub fn resolve_url(base: &Url, native_id: &str) -> Url {
    let mut url = base.clone();
    url.set_path(WEB_PATH);
    url.set_query(Some(&format!(
        "v=2.0&app_key=1&r=song/playinfo&id={}",
        urlencoding::encode(native_id)
    )));
    url
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    state: i64,
    #[serde(default)]
    data: Option<SearchData>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchData {
    #[serde(default)]
    songs: Vec<Song>,
}

#[derive(Debug, Deserialize)]
struct Song {
    song_id: i64,
    song_name: String,
    #[serde(default)]
    album_name: String,
    #[serde(default)]
    artist_name: String,
    #[serde(default)]
    quality: QualityFlags,
    #[serde(default)]
    downloadable: bool,
    #[serde(default)]
    copyrighted: bool,
}

#[derive(Debug, Default, Deserialize)]
struct QualityFlags {
    #[serde(default)]
    sq: bool,
    #[serde(default)]
    hq: bool,
    #[serde(default)]
    lq: bool,
}

impl Song {
    fn into_hit(self) -> TrackHit {
        TrackHit {
            native_id: self.song_id.to_string(),
            album_name: self.album_name,
            artist_name: self.artist_name,
            song_name: self.song_name,
            copyrighted: self.copyrighted,
            downloadable: self.downloadable,
            lossless: self.quality.sq,
            kbps320: self.quality.hq,
            kbps192: self.quality.lq,
        }
    }
}

pub fn parse_search(response: SearchResponse) -> ProviderResult<Vec<TrackHit>> {
    if response.state != 0 {
        return Err(ProviderError::ApiRejected {
            provider: Provider::Xiami,
            message: format!("state {}", response.state),
        });
    }
    let songs = response.data.map(|d| d.songs).unwrap_or_default();
    Ok(songs.into_iter().map(Song::into_hit).collect())
}

#[derive(Debug, Deserialize)]
pub struct ResolveResponse {
    state: i64,
    #[serde(default)]
    data: Option<ResolveData>,
}

#[derive(Debug, Default, Deserialize)]
struct ResolveData {
    #[serde(default)]
    location: String,
}

pub fn parse_resolve(response: ResolveResponse, native_id: &str) -> ProviderResult<String> {
    if response.state != 0 {
        return Err(ProviderError::ApiRejected {
            provider: Provider::Xiami,
            message: format!("state {}", response.state),
        });
    }
    let location = response.data.map(|d| d.location).unwrap_or_default();
    if location.is_empty() {
        return Err(ProviderError::EmptyDownloadUrl {
            provider: Provider::Xiami,
            native_id: native_id.to_string(),
        });
    }
    Ok(location)
}
