//! HTTP server command
//!
//! Runs the listkeeper API against PostgreSQL, or against the in-memory
//! store with `--in-memory`.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;

use listkeeper_server::db::{create_pool_with_options, ensure_schema, pool::DEFAULT_MAX_CONNECTIONS};
use listkeeper_server::http::server::DEFAULT_CORS_ORIGINS;
use listkeeper_server::{run_server, AppState, ServerConfig};

use crate::config::require_database_url;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Interface to bind to
    #[arg(long, env = "LISTKEEPER_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Database URL (overrides environment/config.env)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "LISTKEEPER_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Allowed CORS origins (comma separated)
    #[arg(
        long = "cors-origin",
        env = "LISTKEEPER_CORS_ORIGINS",
        value_delimiter = ',',
        default_values_t = DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string())
    )]
    pub cors_origins: Vec<String>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Don't create missing tables on startup
    #[arg(long)]
    pub skip_schema: bool,

    /// Keep all data in process memory instead of PostgreSQL
    #[arg(long)]
    pub in_memory: bool,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            cors_origins: self.cors_origins.clone(),
            cors_permissive: self.cors_permissive,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.server_config();

    let state = if args.in_memory {
        if args.database_url.is_some() {
            tracing::info!("--in-memory set, ignoring DATABASE_URL");
        }
        tracing::warn!("Using in-memory store - data is lost on shutdown");
        AppState::in_memory()
    } else {
        let database_url = require_database_url(args.database_url)?;

        let pool = create_pool_with_options(&database_url, args.max_connections)
            .await
            .context("Failed to create database pool")?;

        if !args.skip_schema {
            ensure_schema(&pool)
                .await
                .context("Failed to bootstrap database schema")?;
        }

        AppState::postgres(pool)
    };

    tracing::info!("Starting listkeeper server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(state, config).await.context("Server error")?;

    Ok(())
}
