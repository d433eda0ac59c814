//! Roster student records server
//!
//! Serves the `/students` JSON API and the browser page that edits it.
//!
//! Usage:
//!   roster-server --port 3000 --database student.db
//!
//! The store is opened once at startup and closed after shutdown.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use roster_server::{log_directive, LogFilterSource, ServerConfig};
use roster_store::StudentStore;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "roster-server")]
#[command(about = "Student records HTTP API")]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, env = "ROSTER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "ROSTER_PORT", default_value = "3000")]
    port: u16,

    /// Path to the SQLite database file (created if absent)
    #[arg(short, long, env = "ROSTER_DATABASE", default_value = "student.db")]
    database: PathBuf,

    /// Directory served for every non-API path
    #[arg(long, env = "ROSTER_PUBLIC_DIR", default_value = "public")]
    public_dir: PathBuf,

    /// Insert sample students if the store is empty
    #[arg(long)]
    seed: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            database: args.database,
            public_dir: args.public_dir,
            seed: args.seed,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (directive, source) = log_directive(args.verbose, rust_log.as_deref());
    let filter = match EnvFilter::try_new(&directive) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("Ignoring invalid log filter {directive:?}: {e}");
            EnvFilter::new("info")
        }
    };
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let config = ServerConfig::from(args);
    info!("Roster server starting...");
    match source {
        LogFilterSource::Verbose if rust_log.is_some() => {
            info!("--verbose given; ignoring {}", EnvFilter::DEFAULT_ENV)
        }
        LogFilterSource::Env => info!("Log filter from {}: {}", EnvFilter::DEFAULT_ENV, directive),
        _ => {}
    }

    let store = StudentStore::open(&config.database)
        .with_context(|| format!("Failed to open database {}", config.database.display()))?;
    if config.seed {
        let inserted = store.seed_sample_data().context("Failed to seed sample data")?;
        if inserted == 0 {
            info!("Store not empty, skipping sample data");
        }
    }
    if !config.public_dir.is_dir() {
        warn!(
            "Public directory {} not found; only the API will be served",
            config.public_dir.display()
        );
    }

    roster_server::serve(&config, store.clone(), shutdown_signal())
        .await
        .with_context(|| format!("HTTP server failed on {}", config.socket_addr()))?;

    info!("Shutting down");
    store.close().context("Failed to close database")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
