//! Command handlers for the CLI.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call repositories, the gateway, or the pipeline through the context
//!   3. Format output for the terminal
//!
//! Handlers should NOT contain business logic or touch the database pool;
//! everything flows through the ports the context carries.

pub mod check;
pub mod import;
pub mod list;
pub mod paths;
pub mod reset;
pub mod run;
pub mod status;
