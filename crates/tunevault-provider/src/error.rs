use thiserror::Error;
use tunevault_core::Provider;

/// Result alias for provider API operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors from upstream catalog interactions.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("API request failed with status {status}: {url}")]
    ApiRequestFailed { status: u16, url: String },

    #[error("{provider} returned an error payload: {message}")]
    ApiRejected { provider: Provider, message: String },

    #[error("{provider} resolved no download URL for track {native_id}")]
    EmptyDownloadUrl { provider: Provider, native_id: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to parse API response: {0}")]
    JsonParse(#[from] serde_json::Error),
}
