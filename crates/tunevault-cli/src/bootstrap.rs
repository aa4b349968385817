//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated
//! here:
//! - Database pool and repositories (via tunevault-db)
//! - Provider gateway client (via tunevault-provider)
//!
//! Command handlers receive the composed [`CliContext`] and delegate
//! work through it.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tunevault_core::paths::{data_root, database_path, default_store_dir};
use tunevault_core::{MusicGateway, ResourceRepository, SongRepository};
use tunevault_db::{SqliteFactory, setup_database};
use tunevault_provider::{DefaultMusicClient, ProviderConfig};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Root directory for all application data.
    pub data_dir: PathBuf,
    /// Path to the SQLite database file.
    pub database_path: PathBuf,
    /// Root directory for content-addressed audio blobs.
    pub store_dir: PathBuf,
    /// Provider gateway settings.
    pub provider: ProviderConfig,
}

impl CliConfig {
    /// Create config with default paths.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            data_dir: data_root()?,
            database_path: database_path()?,
            store_dir: default_store_dir()?,
            provider: ProviderConfig::default(),
        })
    }

    /// Re-root every data path at a different directory.
    #[must_use]
    pub fn with_data_dir(mut self, dir: PathBuf) -> Self {
        self.database_path = dir.join("tunevault.db");
        self.store_dir = dir.join("store");
        self.data_dir = dir;
        self
    }
}

/// Fully composed application context for CLI commands.
///
/// This struct owns the repositories and the gateway and hands them to
/// command handlers.
pub struct CliContext {
    /// Song catalog repository.
    pub songs: Arc<dyn SongRepository>,
    /// Acquired resource repository.
    pub resources: Arc<dyn ResourceRepository>,
    /// Gateway over the upstream music providers.
    pub gateway: Arc<dyn MusicGateway>,
    /// Resolved configuration the context was built from.
    pub config: CliConfig,
}

impl CliContext {
    /// Access the song repository.
    pub fn songs(&self) -> &Arc<dyn SongRepository> {
        &self.songs
    }

    /// Access the resource repository.
    pub fn resources(&self) -> &Arc<dyn ResourceRepository> {
        &self.resources
    }

    /// Access the provider gateway.
    pub fn gateway(&self) -> &Arc<dyn MusicGateway> {
        &self.gateway
    }

    /// Access the resolved configuration.
    pub fn config(&self) -> &CliConfig {
        &self.config
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Opens the database and ensures the schema exists
/// 2. Builds the repositories on the shared pool
/// 3. Builds the provider gateway client
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    // 1. Database pool and repositories
    let pool = setup_database(&config.database_path).await?;
    let songs = SqliteFactory::song_repository(pool.clone());
    let resources = SqliteFactory::resource_repository(pool);

    // 2. Provider gateway
    let gateway: Arc<dyn MusicGateway> = Arc::new(DefaultMusicClient::new(&config.provider)?);

    Ok(CliContext {
        songs,
        resources,
        gateway,
        config,
    })
}
