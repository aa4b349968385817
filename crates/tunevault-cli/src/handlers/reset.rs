//! Flip errored songs back to pending.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute the reset-errored command.
///
/// Every song a failed pass marked `errored` becomes `pending` again, so
/// the next pass retries it.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let reset = ctx.songs.reset_errored().await?;
    if reset == 0 {
        println!("No errored songs to reset.");
    } else {
        println!("Reset {reset} errored song(s) back to pending.");
    }
    Ok(())
}
