//! listkeeper CLI - HTTP/JSON API server for lists and dated items
//!
//! Subcommands:
//! - `serve`: run the API (PostgreSQL, or `--in-memory`)
//! - `schema`: create missing tables and exit

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "listkeeper",
    author,
    version,
    about = "CRUD API for lists and their dated items",
    long_about = "Serve lists and items over HTTP/JSON, backed by PostgreSQL. \
                  Reads DATABASE_URL and PORT from the environment or config.env."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the database tables if they are missing
    Schema(commands::schema::SchemaArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // env files must be read before clap resolves `env = ...` defaults
    let env_files = config::load_env_files()?;
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();
    if env_files.is_empty() {
        tracing::debug!("No env file found, using process environment only");
    } else {
        for path in &env_files {
            tracing::info!("Loaded configuration from {}", path.display());
        }
    }

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Schema(args) => commands::run_schema(args).await?,
    }
    Ok(())
}
