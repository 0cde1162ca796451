//! workwise-web - WorkWise marketplace server
//!
//! Serves registration, sessions, jobs and bids, and the insight endpoints
//! over HTTP, backed by a SQLite database in the resolved root folder.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::signal;
use tracing::{error, info, warn};
use workwise_common::config::{
    load_toml_config, CompiledDefaults, RootFolderInitializer, RootFolderResolver, TomlConfig,
};
use workwise_common::db::init_database;
use workwise_web::{build_router, AppState};

const MODULE_NAME: &str = "workwise-web";

/// Command-line arguments for workwise-web
#[derive(Parser, Debug)]
#[command(name = "workwise-web")]
#[command(about = "WorkWise freelance marketplace server")]
#[command(version)]
struct Args {
    /// Address to bind (overrides the config file)
    #[arg(long, env = "WORKWISE_HOST")]
    host: Option<String>,

    /// Port to listen on (overrides the config file)
    #[arg(short, long, env = "WORKWISE_PORT")]
    port: Option<u16>,

    /// Root folder holding workwise.db
    #[arg(short, long, env = "WORKWISE_ROOT_FOLDER")]
    root_folder: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let defaults = CompiledDefaults::for_current_platform();
    let resolver = RootFolderResolver::new(MODULE_NAME).with_cli_arg(args.root_folder.clone());

    // Read before tracing starts so the file can set the log level
    let file_config = resolver
        .config_file_path()
        .filter(|path| path.exists())
        .map(|path| load_toml_config(&path));
    let config = match &file_config {
        Some(Ok(config)) => config.clone(),
        _ => TomlConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .init();

    info!(
        "Starting WorkWise (workwise-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    if let Some(Err(e)) = &file_config {
        warn!("Config file ignored, using defaults: {}", e);
    }

    let root_folder = resolver.resolve();
    let initializer = RootFolderInitializer::new(root_folder);
    initializer
        .ensure_directory_exists()
        .context("Failed to create root folder")?;
    info!("Root folder: {}", initializer.root_folder().display());

    let db_path = initializer.database_path();
    if !initializer.database_exists() {
        info!("Creating new database at {}", db_path.display());
    }
    let pool = match init_database(&db_path).await {
        Ok(pool) => {
            info!("✓ Database ready: {}", db_path.display());
            pool
        }
        Err(e) => {
            error!("Failed to open database {}: {}", db_path.display(), e);
            return Err(e.into());
        }
    };

    let state = AppState::new(pool);
    let app = build_router(state);

    let host = args.host.or(config.host).unwrap_or(defaults.host);
    let port = args.port.or(config.port).unwrap_or(defaults.port);
    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("Failed to bind to {}:{}", host, port))?;
    let addr = listener.local_addr()?;
    info!("workwise-web listening on http://{}", addr);
    info!("Registration page: http://{}/register", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
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
