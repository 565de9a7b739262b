//! albums-api - in-memory album catalog service
//!
//! Serves list, search, lookup, create, replace and delete over HTTP/JSON.
//! State lives only in memory; an optional seed file provides the starting
//! catalog.

use std::path::PathBuf;

use albums_api::{build_router, AlbumStore, AppState};
use albums_common::config::{ConfigOverrides, ServiceConfig};
use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for albums-api
#[derive(Parser, Debug)]
#[command(name = "albums-api")]
#[command(about = "In-memory album catalog HTTP service")]
#[command(version)]
struct Args {
    /// Port to listen on [env: PORT, default 4000]
    #[arg(short, long)]
    port: Option<u16>,

    /// Address to bind [env: ALBUMS_BIND, default 0.0.0.0]
    #[arg(short, long)]
    bind: Option<String>,

    /// JSON file with the initial albums [env: ALBUMS_SEED]
    #[arg(short, long)]
    seed: Option<PathBuf>,

    /// TOML config file [env: ALBUMS_CONFIG]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tracing level when RUST_LOG is unset [env: ALBUMS_LOG_LEVEL]
    #[arg(long)]
    log_level: Option<String>,
}

impl From<Args> for ConfigOverrides {
    fn from(args: Args) -> Self {
        Self {
            config_file: args.config,
            bind_address: args.bind,
            port: args.port,
            seed_file: args.seed,
            log_level: args.log_level,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = ServiceConfig::resolve(&args.into()).context("Failed to resolve configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("albums_api={0},albums_common={0},tower_http={0}", config.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting albums-api v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let store = match &config.seed_file {
        Some(path) => {
            let store = AlbumStore::load_seed(path)
                .with_context(|| format!("Failed to load seed file {}", path.display()))?;
            info!("Seeded {} albums from {}", store.len(), path.display());
            store
        }
        None => {
            let store = AlbumStore::bundled().context("Bundled catalog is invalid")?;
            info!("Serving bundled catalog of {} albums", store.len());
            store
        }
    };

    let app = build_router(AppState::new(store));

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Server running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
