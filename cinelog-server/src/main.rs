//! cinelog server
//!
//! HTTP front-end for the movie catalog: serves the REST surface over an
//! in-memory collection or a SQLite database.

mod error;
mod routes;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use log::info;

use cinelog_catalog::{MemoryStore, MovieStore, load_movies};
use cinelog_db::SqliteStore;

/// Port used when neither `--port` nor `PORT` is set.
const DEFAULT_PORT: u16 = 1234;

#[derive(Parser)]
#[command(name = "cinelog")]
#[command(about = "Movie catalog REST API", long_about = None)]
struct Cli {
    /// Listen port (overrides the PORT environment variable)
    #[arg(short, long)]
    port: Option<u16>,

    /// SQLite database path; omit to keep the catalog in memory
    #[arg(long)]
    db: Option<PathBuf>,

    /// JSON file with an initial movie collection (in-memory store only)
    #[arg(long)]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let port = resolve_port(cli.port)?;
    let store = build_store(&cli)?;

    let app = routes::router(store);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("Server listening on http://localhost:{port}");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Resolve the listen port: flag, then `PORT` env, then the default.
fn resolve_port(flag: Option<u16>) -> anyhow::Result<u16> {
    if let Some(port) = flag {
        return Ok(port);
    }
    match std::env::var("PORT") {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("invalid PORT value '{raw}'")),
        Err(std::env::VarError::NotPresent) => Ok(DEFAULT_PORT),
        Err(e) => Err(e.into()),
    }
}

/// Pick the store implementation from the CLI flags.
fn build_store(cli: &Cli) -> anyhow::Result<Arc<dyn MovieStore>> {
    match &cli.db {
        Some(path) => {
            if cli.seed.is_some() {
                anyhow::bail!("--seed applies to the in-memory store only");
            }
            let store = SqliteStore::open(path)
                .with_context(|| format!("opening database {}", path.display()))?;
            info!("Using SQLite store at {}", path.display());
            Ok(Arc::new(store))
        }
        None => {
            let movies = match &cli.seed {
                Some(path) => load_movies(path)
                    .with_context(|| format!("loading seed file {}", path.display()))?,
                None => Vec::new(),
            };
            info!("Using in-memory store ({} seeded movies)", movies.len());
            Ok(Arc::new(MemoryStore::with_movies(movies)))
        }
    }
}
