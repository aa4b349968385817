//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the tunevault acquisition tool.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "tunevault")]
#[command(about = "Import song catalogs and acquire playable audio for them")]
#[command(version)]
pub struct Cli {
    /// Override the data directory for this invocation
    #[arg(long = "data-dir", env = "TUNEVAULT_DATA_DIR", global = true)]
    pub data_dir: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        // Verify the CLI parser can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from(["tunevault", "--verbose", "--data-dir", "/tmp/tv", "status"]);
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some("/tmp/tv".to_string()));
    }

    #[test]
    fn test_import_defaults_to_xiami_source() {
        let cli = Cli::parse_from(["tunevault", "import", "./favorites"]);
        let Some(Commands::Import { path, source }) = cli.command else {
            panic!("expected import command");
        };
        assert_eq!(path, "./favorites");
        assert_eq!(source, "xiami");
    }

    #[test]
    fn test_run_accepts_pacing_and_seed() {
        let cli = Cli::parse_from(["tunevault", "run", "--pause-secs", "0", "--seed", "42"]);
        let Some(Commands::Run { pause_secs, seed }) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(pause_secs, 0);
        assert_eq!(seed, Some(42));
    }

    #[test]
    fn test_list_takes_a_status_filter() {
        let cli = Cli::parse_from(["tunevault", "list", "--status", "errored"]);
        let Some(Commands::List { status }) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(status, Some("errored".to_string()));
    }
}
