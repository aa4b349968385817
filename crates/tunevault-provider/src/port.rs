//! `MusicGateway` port implementation.
//!
//! A failing catalog degrades a search instead of sinking it: its slot
//! in the result set comes back empty and the failure is logged. Only
//! when every catalog fails does the search itself fail.

use async_trait::async_trait;
use tracing::warn;
use tunevault_core::{GatewayError, MusicGateway, Provider, ProviderHits, SearchHits};

use crate::client::MusicClient;
use crate::http::HttpBackend;

#[async_trait]
impl<B: HttpBackend> MusicGateway for MusicClient<B> {
    async fn search_songs(&self, keywords: &str) -> Result<SearchHits, GatewayError> {
        let mut providers = Vec::with_capacity(Provider::ALL.len());
        let mut failures = Vec::new();

        for provider in Provider::ALL {
            match self.search_provider(provider, keywords).await {
                Ok(tracks) => providers.push(ProviderHits { provider, tracks }),
                Err(err) => {
                    warn!(provider = %provider, error = %err, "catalog search failed");
                    failures.push(format!("{provider}: {err}"));
                    providers.push(ProviderHits {
                        provider,
                        tracks: Vec::new(),
                    });
                }
            }
        }

        if failures.len() == Provider::ALL.len() {
            return Err(GatewayError::Search(failures.join("; ")));
        }
        Ok(SearchHits { providers })
    }

    async fn resolve_download_url(
        &self,
        provider: Provider,
        native_id: &str,
    ) -> Result<String, GatewayError> {
        self.resolve(provider, native_id)
            .await
            .map_err(|err| GatewayError::Resolve(format!("{provider}: {err}")))
    }

    async fn fetch_audio(&self, provider: Provider, url: &str) -> Result<Vec<u8>, GatewayError> {
        self.fetch(provider, url)
            .await
            .map_err(|err| GatewayError::Fetch(format!("{provider}: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;

    fn gateway_with(backend: FakeBackend) -> MusicClient<FakeBackend> {
        MusicClient::with_backend(&ProviderConfig::default(), backend).unwrap()
    }

    fn qq_search_body() -> serde_json::Value {
        json!({"code": 0, "data": {"song": {"list": [
            {"songmid": "q1", "songname": "time", "singer": [{"name": "pink floyd"}], "sizeflac": 1}
        ]}}})
    }

    fn xiami_search_body() -> serde_json::Value {
        json!({"state": 0, "data": {"songs": [
            {"song_id": 77, "song_name": "time", "artist_name": "pink floyd",
             "quality": {"hq": true}, "downloadable": true, "copyrighted": true}
        ]}})
    }

    fn netease_search_body() -> serde_json::Value {
        json!({"code": 200, "result": {"songs": [
            {"id": 42, "name": "time", "artists": [{"name": "pink floyd"}],
             "privilege": {"maxbr": 320_000, "fee": 0, "dl": 1}}
        ]}})
    }

    #[tokio::test]
    async fn search_aggregates_hits_per_provider_in_order() {
        let backend = FakeBackend::new()
            .with_response("soso", CannedResponse { json: qq_search_body() })
            .with_response("search/songs", CannedResponse { json: xiami_search_body() })
            .with_response("search/get", CannedResponse { json: netease_search_body() });

        let gateway = gateway_with(backend);
        let hits = gateway.search_songs("pink floyd time").await.unwrap();

        let order: Vec<Provider> = hits.providers.iter().map(|set| set.provider).collect();
        assert_eq!(order, vec![Provider::Qq, Provider::Xiami, Provider::Netease]);
        assert_eq!(hits.total(), 3);
    }

    #[tokio::test]
    async fn failing_provider_contributes_an_empty_set() {
        // Netease has no canned response and fails with a 404.
        let backend = FakeBackend::new()
            .with_response("soso", CannedResponse { json: qq_search_body() })
            .with_response("search/songs", CannedResponse { json: xiami_search_body() });

        let gateway = gateway_with(backend);
        let hits = gateway.search_songs("pink floyd time").await.unwrap();

        assert_eq!(hits.providers.len(), 3);
        assert_eq!(hits.total(), 2);
        let netease = hits
            .providers
            .iter()
            .find(|set| set.provider == Provider::Netease)
            .unwrap();
        assert!(netease.tracks.is_empty());
    }

    #[tokio::test]
    async fn search_fails_only_when_every_provider_fails() {
        let gateway = gateway_with(FakeBackend::new());
        let err = gateway.search_songs("anything").await.unwrap_err();

        match err {
            GatewayError::Search(message) => {
                assert!(message.contains("qq:"));
                assert!(message.contains("xiami:"));
                assert!(message.contains("netease:"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn resolve_failure_names_the_provider() {
        let gateway = gateway_with(FakeBackend::new());
        let err = gateway
            .resolve_download_url(Provider::Xiami, "123")
            .await
            .unwrap_err();

        match err {
            GatewayError::Resolve(message) => assert!(message.starts_with("xiami:")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn resolved_url_passes_through_unchanged() {
        let backend = FakeBackend::new().with_response(
            "player/url",
            CannedResponse {
                json: json!({"code": 200, "data": [{"url": "http://m7.music.126.net/a.mp3"}]}),
            },
        );

        let gateway = gateway_with(backend);
        let url = gateway
            .resolve_download_url(Provider::Netease, "42")
            .await
            .unwrap();

        assert_eq!(url, "http://m7.music.126.net/a.mp3");
    }
}
