//! Provider gateway for tunevault.
//!
//! Talks to the three upstream music catalogs (QQ, Xiami, Netease) and
//! implements the [`tunevault_core::MusicGateway`] port on top of them.
//! Search and URL resolution go through a JSON-over-HTTP backend with a
//! browser user agent and bounded retries; audio payloads are pulled
//! through per-provider transports, one of which shells out to an
//! external `curl` binary.
//!
//! Only the assembled client and its configuration are exported. The
//! wire formats, URL builders, and transports stay private so upstream
//! schema churn never leaks into the rest of the workspace.

// `DefaultMusicClient` is an alias over backend types that stay unexported.
#![allow(private_interfaces)]

mod client;
mod config;
mod endpoints;
mod error;
mod http;
mod port;
mod transport;

pub use client::DefaultMusicClient;
pub use config::ProviderConfig;
