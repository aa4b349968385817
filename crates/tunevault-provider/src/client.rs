//! Catalog client assembly.
//!
//! Owns the JSON backend, the parsed endpoint table, and the transport
//! table, and dispatches each operation to the right provider module.

use tracing::debug;
use tunevault_core::{Provider, TrackHit};

use crate::config::ProviderConfig;
use crate::endpoints::{Endpoints, netease, qq, xiami};
use crate::error::ProviderResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::transport::{TransportError, TransportSet};

/// Default client with the production HTTP backend.
pub type DefaultMusicClient = MusicClient<ReqwestBackend>;

/// Catalog client, generic over the HTTP backend.
pub struct MusicClient<B: HttpBackend> {
    backend: B,
    endpoints: Endpoints,
    transports: TransportSet,
}

impl DefaultMusicClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Fails when a configured base URL does not parse.
    pub fn new(config: &ProviderConfig) -> ProviderResult<Self> {
        Ok(Self {
            backend: ReqwestBackend::new(config),
            endpoints: Endpoints::from_config(config)?,
            transports: TransportSet::from_config(config),
        })
    }
}

impl<B: HttpBackend> MusicClient<B> {
    #[cfg(test)]
    pub(crate) fn with_backend(config: &ProviderConfig, backend: B) -> ProviderResult<Self> {
        Ok(Self {
            backend,
            endpoints: Endpoints::from_config(config)?,
            transports: TransportSet::from_config(config),
        })
    }

    /// Search one catalog and normalize its hits.
    pub(crate) async fn search_provider(
        &self,
        provider: Provider,
        keywords: &str,
    ) -> ProviderResult<Vec<TrackHit>> {
        let base = self.endpoints.base(provider);
        let hits = match provider {
            Provider::Qq => {
                let url = qq::search_url(base, keywords);
                qq::parse_search(self.backend.get_json(&url).await?)?
            }
            Provider::Xiami => {
                let url = xiami::search_url(base, keywords);
                xiami::parse_search(self.backend.get_json(&url).await?)?
            }
            Provider::Netease => {
                let url = netease::search_url(base, keywords);
                netease::parse_search(self.backend.get_json(&url).await?)?
            }
        };
        debug!(provider = %provider, hits = hits.len(), keywords, "catalog search complete");
        Ok(hits)
    }

    /// Resolve a native track id to a download URL.
    pub(crate) async fn resolve(
        &self,
        provider: Provider,
        native_id: &str,
    ) -> ProviderResult<String> {
        let base = self.endpoints.base(provider);
        match provider {
            Provider::Qq => {
                let url = qq::resolve_url(base, native_id);
                qq::parse_resolve(self.backend.get_json(&url).await?, native_id)
            }
            Provider::Xiami => {
                let url = xiami::resolve_url(base, native_id);
                xiami::parse_resolve(self.backend.get_json(&url).await?, native_id)
            }
            Provider::Netease => {
                let url = netease::resolve_url(base, native_id);
                netease::parse_resolve(self.backend.get_json(&url).await?, native_id)
            }
        }
    }

    /// Download audio bytes using the provider's transport.
    pub(crate) async fn fetch(
        &self,
        provider: Provider,
        url: &str,
    ) -> Result<Vec<u8>, TransportError> {
        self.transports.for_provider(provider).fetch(url).await
    }
}
