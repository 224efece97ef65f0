//! Schema bootstrap command
//!
//! Creates the `lists` and `items` tables if missing, then exits.

use anyhow::{Context, Result};
use clap::Parser;

use listkeeper_server::db::{create_pool_with_options, ensure_schema};

use crate::config::require_database_url;

/// Arguments for the schema command
#[derive(Parser, Debug)]
pub struct SchemaArgs {
    /// Database URL (overrides environment/config.env)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}

pub async fn run_schema(args: SchemaArgs) -> Result<()> {
    let database_url = require_database_url(args.database_url)?;

    let pool = create_pool_with_options(&database_url, 1)
        .await
        .context("Failed to create database pool")?;

    ensure_schema(&pool)
        .await
        .context("Failed to bootstrap database schema")?;

    pool.close().await;
    Ok(())
}
