//! QQ catalog endpoint.
//!
//! Search reports per-encode file sizes; a size of zero means the encode
//! does not exist. Licensing lives under `pay`: `pay_play == 0` marks a
//! freely playable (licensed) track and `pay_down > 0` marks one the
//! catalog will hand out a download URL for.

use crate::error::{ProviderError, ProviderResult};
use serde::Deserialize;
use tunevault_core::{Provider, TrackHit};
use url::Url;

const SEARCH_PATH: &str = "/soso/fcgi-bin/client_search_cp";
const RESOLVE_PATH: &str = "/v8/fcg-bin/fcg_play_url.fcg";

pub fn search_url(base: &Url, keywords: &str) -> Url {
    let mut url = base.clone();
    url.set_path(SEARCH_PATH);
    url.set_query(Some(&format!(
        "format=json&n=30&w={}",
        urlencoding::encode(keywords)
    )));
    url
}

pub fn resolve_url(base: &Url, native_id: &str) -> Url {
    let mut url = base.clone();
    url.set_path(RESOLVE_PATH);
    url.set_query(Some(&format!(
        "format=json&songmid={}",
        urlencoding::encode(native_id)
    )));
    url
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    code: i64,
    #[serde(default)]
    data: Option<SearchData>,
}

#[derive(Debug, Deserialize)]
struct SearchData {
    #[serde(default)]
    song: SongList,
}

#[derive(Debug, Default, Deserialize)]
struct SongList {
    #[serde(default)]
    list: Vec<Song>,
}

#[derive(Debug, Deserialize)]
struct Song {
    songmid: String,
    songname: String,
    #[serde(default)]
    albumname: String,
    #[serde(default)]
    singer: Vec<Singer>,
    #[serde(default)]
    sizeflac: u64,
    #[serde(default)]
    size320: u64,
    #[serde(default)]
    size192: u64,
    #[serde(default)]
    pay: Pay,
}

#[derive(Debug, Deserialize)]
struct Singer {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct Pay {
    #[serde(default)]
    pay_play: i64,
    #[serde(default)]
    pay_down: i64,
}

impl Song {
    fn into_hit(self) -> TrackHit {
        // Multiple singers collapse into one space-joined artist name.
        let artist_name = self
            .singer
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        TrackHit {
            native_id: self.songmid,
            album_name: self.albumname,
            artist_name,
            song_name: self.songname,
            copyrighted: self.pay.pay_play == 0,
            downloadable: self.pay.pay_down > 0,
            lossless: self.sizeflac > 0,
            kbps320: self.size320 > 0,
            kbps192: self.size192 > 0,
        }
    }
}

pub fn parse_search(response: SearchResponse) -> ProviderResult<Vec<TrackHit>> {
    if response.code != 0 {
        return Err(ProviderError::ApiRejected {
            provider: Provider::Qq,
            message: format!("code {}", response.code),
        });
    }
    let songs = response.data.map(|d| d.song.list).unwrap_or_default();
    Ok(songs.into_iter().map(Song::into_hit).collect())
}

#[derive(Debug, Deserialize)]
pub struct ResolveResponse {
    code: i64,
    #[serde(default)]
    data: Option<ResolveData>,
}

#[derive(Debug, Default, Deserialize)]
struct ResolveData {
    #[serde(default)]
    url: String,
}

pub fn parse_resolve(response: ResolveResponse, native_id: &str) -> ProviderResult<String> {
    if response.code != 0 {
        return Err(ProviderError::ApiRejected {
            provider: Provider::Qq,
            message: format!("code {}", response.code),
        });
    }
    let url = response.data.map(|d| d.url).unwrap_or_default();
    if url.is_empty() {
        return Err(ProviderError::EmptyDownloadUrl {
            provider: Provider::Qq,
            native_id: native_id.to_string(),
        });
    }
    Ok(url)
}
