//! Show aggregate catalog and resource counts.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::print_separator;

/// Execute the status command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let stats = ctx.songs.stats().await?;

    println!("Catalog");
    print_separator(32);
    println!("{:<18} {}", "total songs", stats.total_songs);
    println!("{:<18} {}", "pending", stats.pending);
    println!("{:<18} {}", "errored", stats.errored);
    println!("{:<18} {}", "resolved", stats.resolved);
    println!("{:<18} {}", "total resources", stats.total_resources);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::bootstrap::testing;

    #[tokio::test]
    async fn empty_catalog_reports_zeroes() {
        let (ctx, _dir) = testing::context().await;
        execute(&ctx).await.unwrap();

        let stats = ctx.songs.stats().await.unwrap();
        assert_eq!(stats.total_songs, 0);
        assert_eq!(stats.total_resources, 0);
    }
}
