//! Netease catalog endpoint.
//!
//! Availability comes from `privilege.maxbr`, the highest bitrate the
//! account may play: 999000 stands for lossless. `privilege.dl > 0`
//! permits download and `fee` values 0 and 8 are the licensed tiers.
//! Note the audio payload itself is NOT fetched over the normal HTTP
//! transport for this catalog; see the transport module.

use crate::error::{ProviderError, ProviderResult};
use serde::Deserialize;
use tunevault_core::{Provider, TrackHit};
use url::Url;

const SEARCH_PATH: &str = "/api/search/get";
const RESOLVE_PATH: &str = "/api/song/enhance/player/url";

const LOSSLESS_BR: i64 = 999_000;
const KBPS320_BR: i64 = 320_000;
const KBPS192_BR: i64 = 192_000;

pub fn search_url(base: &Url, keywords: &str) -> Url {
    let mut url = base.clone();
    url.set_path(SEARCH_PATH);
    url.set_query(Some(&format!(
        "type=1&limit=30&s={}",
        urlencoding::encode(keywords)
    )));
    url
}

pub fn resolve_url(base: &Url, native_id: &str) -> Url {
    let mut url = base.clone();
    url.set_path(RESOLVE_PATH);
    url.set_query(Some(&format!(
        "br={LOSSLESS_BR}&id={}",
        urlencoding::encode(native_id)
    )));
    url
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    code: i64,
    #[serde(default)]
    result: Option<SearchResult>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchResult {
    #[serde(default)]
    songs: Vec<Song>,
}

#[derive(Debug, Deserialize)]
struct Song {
    id: i64,
    name: String,
    #[serde(default)]
    artists: Vec<ArtistRef>,
    #[serde(default)]
    album: AlbumRef,
    #[serde(default)]
    privilege: Privilege,
}

#[derive(Debug, Deserialize)]
struct ArtistRef {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct AlbumRef {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct Privilege {
    #[serde(default)]
    maxbr: i64,
    #[serde(default)]
    fee: i64,
    #[serde(default)]
    dl: i64,
}

impl Song {
    fn into_hit(self) -> TrackHit {
        let artist_name = self
            .artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let maxbr = self.privilege.maxbr;
        TrackHit {
            native_id: self.id.to_string(),
            album_name: self.album.name,
            artist_name,
            song_name: self.name,
            copyrighted: self.privilege.fee == 0 || self.privilege.fee == 8,
            downloadable: self.privilege.dl > 0,
            lossless: maxbr >= LOSSLESS_BR,
            kbps320: maxbr >= KBPS320_BR,
            kbps192: maxbr >= KBPS192_BR,
        }
    }
}

pub fn parse_search(response: SearchResponse) -> ProviderResult<Vec<TrackHit>> {
    if response.code != 200 {
        return Err(ProviderError::ApiRejected {
            provider: Provider::Netease,
            message: format!("code {}", response.code),
        });
    }
    let songs = response.result.map(|r| r.songs).unwrap_or_default();
    Ok(songs.into_iter().map(Song::into_hit).collect())
}

#[derive(Debug, Deserialize)]
pub struct ResolveResponse {
    code: i64,
    #[serde(default)]
    data: Vec<ResolveEntry>,
}

#[derive(Debug, Deserialize)]
struct ResolveEntry {
    #[serde(default)]
    url: Option<String>,
}

pub fn parse_resolve(response: ResolveResponse, native_id: &str) -> ProviderResult<String> {
    if response.code != 200 {
        return Err(ProviderError::ApiRejected {
            provider: Provider::Netease,
            message: format!("code {}", response.code),
        });
    }
    response
        .data
        .into_iter()
        .find_map(|entry| entry.url.filter(|url| !url.is_empty()))
        .ok_or_else(|| ProviderError::EmptyDownloadUrl {
            provider: Provider::Netease,
            native_id: native_id.to_string(),
        })
}
