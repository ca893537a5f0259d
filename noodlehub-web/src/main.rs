//! noodlehub-web - Noodle & Pasta Hub recipe browser
//!
//! Serves the recipe list from a static JSON file through a read-only API,
//! together with the homepage and recipe detail pages.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use noodlehub_common::config::{CliOverrides, ConfigResolver};
use noodlehub_common::RecipeSource;
use noodlehub_web::{build_router, AppState};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for noodlehub-web
#[derive(Parser, Debug)]
#[command(name = "noodlehub-web")]
#[command(about = "Recipe browsing service for the Noodle & Pasta Hub")]
#[command(version)]
struct Args {
    /// Recipes JSON file
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// Address to listen on (host:port)
    #[arg(short, long)]
    bind: Option<String>,

    /// Re-read the recipes file on every request
    #[arg(long)]
    reload: bool,

    /// Config file (default: <config dir>/noodlehub/config.toml)
    #[arg(short, long, env = "NOODLEHUB_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = ConfigResolver::new(CliOverrides {
        data_file: args.data_file,
        bind_addr: args.bind,
        reload_per_request: args.reload,
        config_file: args.config,
    })
    .resolve();

    // RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Noodle Hub (noodlehub-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    match &config.config_file {
        Some(path) => info!("Config file: {}", path.display()),
        None => info!("No config file loaded, using defaults and overrides"),
    }
    info!("Recipe data file: {}", config.data_file.display());

    let source = if config.reload_per_request {
        info!("Reloading recipe data on every request");
        RecipeSource::Reload(config.data_file.clone())
    } else {
        let source = RecipeSource::cached(&config.data_file)
            .await
            .context("Failed to load recipe data")?;
        if let RecipeSource::Cached(store) = &source {
            info!("✓ Loaded {} recipes", store.len());
        }
        source
    };

    let app = build_router(AppState::new(source));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;
    info!("noodlehub-web listening on http://{}", config.bind_addr);
    info!("Health check: http://{}/health", config.bind_addr);

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
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
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
