//! Print resolved data locations.

use anyhow::Result;

use crate::bootstrap::CliConfig;

/// Execute the paths command.
///
/// Shows where this invocation would put its data, after any
/// `--data-dir` or environment override.
pub fn execute(config: &CliConfig) -> Result<()> {
    println!("{:<10} {}", "data dir", config.data_dir.display());
    println!("{:<10} {}", "database", config.database_path.display());
    println!("{:<10} {}", "store", config.store_dir.display());
    Ok(())
}
