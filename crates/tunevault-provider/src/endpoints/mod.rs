//! Per-provider endpoint definitions.
//!
//! Each submodule owns one upstream catalog: its URL shapes, its wire
//! format, and the mapping from that wire format into [`TrackHit`]s.
//! The response structs default missing fields aggressively; the
//! catalogs omit keys freely depending on region and track licensing.
//!
//! [`TrackHit`]: tunevault_core::TrackHit

pub mod netease;
pub mod qq;
pub mod xiami;

use crate::config::ProviderConfig;
use crate::error::ProviderResult;
use tunevault_core::Provider;
use url::Url;

/// Base URLs for the three catalogs, parsed once at client construction.
pub struct Endpoints {
    qq: Url,
    netease: Url,
    xiami: Url,
}

impl Endpoints {
    pub fn from_config(config: &ProviderConfig) -> ProviderResult<Self> {
        Ok(Self {
            qq: Url::parse(&config.qq_base_url)?,
            netease: Url::parse(&config.netease_base_url)?,
            xiami: Url::parse(&config.xiami_base_url)?,
        })
    }

    pub fn base(&self, provider: Provider) -> &Url {
        match provider {
            Provider::Qq => &self.qq,
            Provider::Netease => &self.netease,
            Provider::Xiami => &self.xiami,
        }
    }
}
