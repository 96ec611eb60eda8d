//! Climate API Server
//!
//! Read-only HTTP API over the Hawaii climate observation dataset.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use climate_api::config::{ApiConfig, ErrorMode, DEFAULT_DATABASE_PATH, DEFAULT_MAX_CONNECTIONS};
use climate_api::metrics;
use climate_api::routes::build_router;
use climate_api::state::AppState;

/// Climate API Server
#[derive(Parser, Debug)]
#[command(name = "climate-api")]
#[command(about = "Read-only HTTP API over the Hawaii climate observation dataset")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:5000", env = "CLIMATE_LISTEN_ADDR")]
    listen: String,

    /// SQLite dataset file
    #[arg(short, long, default_value = DEFAULT_DATABASE_PATH, env = "CLIMATE_DATABASE_PATH")]
    database: PathBuf,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Number of worker threads
    #[arg(long, env = "CLIMATE_WORKER_THREADS")]
    worker_threads: Option<usize>,

    /// Maximum pooled dataset connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS, env = "CLIMATE_MAX_CONNECTIONS")]
    max_connections: u32,

    /// Report bad dates and empty results with HTTP 200 (v1.0 compatibility)
    #[arg(long, env = "CLIMATE_LEGACY_ERRORS")]
    legacy_errors: bool,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Build runtime with configured threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder
        .build()
        .context("Failed to create Tokio runtime")?;

    runtime.block_on(run_server(args))
}

async fn run_server(args: Args) -> Result<()> {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    info!("Starting climate API server");

    let prometheus = metrics::install_recorder()?;

    let config = ApiConfig::new(&args.database)
        .with_max_connections(args.max_connections)
        .with_error_mode(ErrorMode::from_legacy_flag(args.legacy_errors));

    info!(
        database = %config.database_path.display(),
        error_mode = ?config.error_mode,
        "Resolved configuration"
    );

    // Initialize application state; a missing dataset stops startup here
    let state = match AppState::new(config, prometheus).await {
        Ok(state) => Arc::new(state),
        Err(e) => {
            error!("Failed to initialize application state: {:#}", e);
            std::process::exit(1);
        }
    };

    let stations = state.store.station_count().await?;
    let measurements = state.store.measurement_count().await?;
    info!(stations, measurements, "Dataset loaded");

    let app = build_router(state);

    // Parse listen address
    let addr: SocketAddr = args
        .listen
        .parse()
        .with_context(|| format!("Invalid listen address: {}", args.listen))?;

    info!("Climate API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server failed")?;

    Ok(())
}
