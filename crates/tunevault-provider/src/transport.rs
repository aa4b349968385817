//! Byte-fetch transports.
//!
//! Resolved download URLs are not all fetched the same way. QQ and
//! Xiami payloads come through the in-process HTTP client, browser
//! user agent and all. Netease payloads are handed to an external
//! `curl` process whose stdout is the payload; that invocation runs
//! with no timeout and reports failure through its exit code and
//! captured stderr.

use async_trait::async_trait;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;
use tunevault_core::Provider;

use crate::config::ProviderConfig;

/// Errors from the byte-fetch transports.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("GET {url} failed with status {status}")]
    HttpStatus { status: u16, url: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with code {code}: {stderr}")]
    NonZeroExit {
        program: String,
        code: i32,
        stderr: String,
    },
}

/// One way of turning a resolved URL into audio bytes.
#[async_trait]
pub trait FetchTransport: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}

/// In-process HTTP transport with a bounded request timeout.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .expect("failed to create HTTP client");
        Self { client }
    }
}

#[async_trait]
impl FetchTransport for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// External-process transport. Invokes the configured program with the
/// URL as its only argument and takes its stdout as the payload. Runs
/// without a timeout.
pub struct CurlFetcher {
    program: String,
}

impl CurlFetcher {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl FetchTransport for CurlFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        debug!(program = %self.program, url, "fetching via external process");
        let output = Command::new(&self.program)
            .arg(url)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| TransportError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(TransportError::NonZeroExit {
                program: self.program.clone(),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}

/// Per-provider transport table.
pub struct TransportSet {
    http: Arc<dyn FetchTransport>,
    external: Arc<dyn FetchTransport>,
}

impl TransportSet {
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self {
            http: Arc::new(HttpFetcher::new(&config.user_agent, config.timeout)),
            external: Arc::new(CurlFetcher::new(config.curl_program.clone())),
        }
    }

    #[cfg(test)]
    pub fn with_transports(
        http: Arc<dyn FetchTransport>,
        external: Arc<dyn FetchTransport>,
    ) -> Self {
        Self { http, external }
    }

    /// Netease audio goes through the external process; everything else
    /// uses the in-process HTTP client.
    pub fn for_provider(&self, provider: Provider) -> &dyn FetchTransport {
        match provider {
            Provider::Netease => self.external.as_ref(),
            Provider::Qq | Provider::Xiami => self.http.as_ref(),
        }
    }
}
