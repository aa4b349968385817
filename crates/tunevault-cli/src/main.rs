//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via
//! bootstrap. Command dispatch routes to handlers, which delegate to the
//! inner crates through the composed context.

use clap::Parser;

use tunevault_cli::{Cli, CliConfig, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over the verbose flag
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    // Bootstrap the CLI context (composition root)
    let mut config = CliConfig::with_defaults()?;
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir.into());
    }
    let ctx = bootstrap(config).await?;

    // Dispatch to the appropriate handler
    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Import { path, source } => {
            handlers::import::execute(&ctx, &path, &source).await?;
        }
        Commands::Run { pause_secs, seed } => {
            handlers::run::execute(&ctx, pause_secs, seed).await?;
        }
        Commands::List { status } => {
            handlers::list::execute(&ctx, status.as_deref()).await?;
        }
        Commands::Status => {
            handlers::status::execute(&ctx).await?;
        }
        Commands::ResetErrored => {
            handlers::reset::execute(&ctx).await?;
        }
        Commands::Check => {
            handlers::check::execute(&ctx).await?;
        }
        Commands::Paths => {
            handlers::paths::execute(ctx.config())?;
        }
    }

    Ok(())
}
