//! Music gateway port: search, URL resolution, and byte fetch.
//!
//! The acquisition pipeline consumes this one capability for everything
//! provider-facing. Implementations own the provider wire formats and the
//! per-provider transport choice; the pipeline only ever sees normalized
//! hits, URLs, and bytes.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Provider, TrackHit};

/// One provider's result set for a search.
#[derive(Debug, Clone)]
pub struct ProviderHits {
    /// Provider that produced these hits.
    pub provider: Provider,
    /// Normalized hits in the provider's own result order.
    pub tracks: Vec<TrackHit>,
}

/// Search results grouped per provider, in the order providers were
/// queried. A provider that returned nothing contributes an empty set.
#[derive(Debug, Clone, Default)]
pub struct SearchHits {
    /// Per-provider result sets.
    pub providers: Vec<ProviderHits>,
}

impl SearchHits {
    /// Total number of hits across all providers.
    pub fn total(&self) -> usize {
        self.providers.iter().map(|set| set.tracks.len()).sum()
    }
}

/// Errors surfaced by the gateway.
///
/// These are domain-level; transport and parse detail is carried in the
/// message text only.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No provider produced a usable search response.
    #[error("search failed: {0}")]
    Search(String),

    /// The provider could not produce a download URL.
    #[error("download URL resolution failed: {0}")]
    Resolve(String),

    /// Transport-level download failure, including a non-zero exit from
    /// the external-process transport.
    #[error("fetch failed: {0}")]
    Fetch(String),
}

/// Capability for finding and downloading song audio across providers.
#[async_trait]
pub trait MusicGateway: Send + Sync {
    /// Search all configured providers for a song.
    ///
    /// Returns per-provider result sets; fails only when the search as a
    /// whole is unusable.
    async fn search_songs(&self, keywords: &str) -> Result<SearchHits, GatewayError>;

    /// Resolve a provider-native track id to a downloadable URL.
    async fn resolve_download_url(
        &self,
        provider: Provider,
        native_id: &str,
    ) -> Result<String, GatewayError>;

    /// Download the audio bytes behind a resolved URL, using the transport
    /// appropriate to the provider.
    async fn fetch_audio(&self, provider: Provider, url: &str) -> Result<Vec<u8>, GatewayError>;
}
