//! Command-line interface for tunevault.
//!
//! This crate is the CLI adapter: argument parsing, the composition root
//! that wires repositories, the provider gateway, and the acquisition
//! pipeline together, and one handler per subcommand. Domain logic stays
//! in the inner crates; handlers only orchestrate and print.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary entry point only
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use parser::Cli;
