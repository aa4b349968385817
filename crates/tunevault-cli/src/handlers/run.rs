//! Run one acquisition pass.

use std::time::Duration;

use anyhow::Result;
use tunevault_acquire::{AcquireConfig, Acquirer, BlobStore};

use crate::bootstrap::CliContext;

/// Execute the run command.
///
/// Wires the repositories, the gateway, and the blob store into the
/// acquisition pipeline and runs a single pass over every pending song.
pub async fn execute(ctx: &CliContext, pause_secs: u64, seed: Option<u64>) -> Result<()> {
    let mut config = AcquireConfig::default().with_pause_between(Duration::from_secs(pause_secs));
    if let Some(seed) = seed {
        config = config.with_shuffle_seed(seed);
    }

    let acquirer = Acquirer::new(
        ctx.songs.clone(),
        ctx.resources.clone(),
        ctx.gateway.clone(),
        BlobStore::new(ctx.config.store_dir.clone()),
        config,
    );

    let summary = acquirer.run_pass().await?;

    if summary.attempted == 0 {
        println!("No pending songs to acquire.");
        return Ok(());
    }

    println!(
        "Pass complete: {} attempted, {} stored, {} already present, {} failed.",
        summary.attempted, summary.stored, summary.already_present, summary.failed
    );
    Ok(())
}
