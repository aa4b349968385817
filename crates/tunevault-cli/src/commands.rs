//! Subcommand definitions for the CLI.
//!
//! Doc comments on variants double as the help text clap prints.

use clap::Subcommand;

/// All available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Import exported favorites JSON files into the song catalog
    Import {
        /// Directory containing catalog export files; every *.json inside
        /// is processed
        path: String,

        /// Catalog tag recorded on every imported song
        #[arg(short, long, default_value = "xiami")]
        source: String,
    },

    /// Run one acquisition pass over pending songs
    Run {
        /// Seconds to pause between consecutive songs
        #[arg(long, default_value = "10")]
        pause_secs: u64,

        /// Fixed seed for the pass ordering shuffle (defaults to entropy)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List songs in the catalog
    List {
        /// Only show songs with this status (pending or errored)
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Show aggregate catalog and resource counts
    Status,

    /// Flip every errored song back to pending
    ResetErrored,

    /// Check the tools and directories an acquisition pass depends on
    Check,

    /// Print resolved data locations
    Paths,
}
