//! sommelier-api - Wine pairing service
//!
//! Recommends one wine for a free-text dish description using the local
//! dish and wine catalogs, with an optional model-generated justification.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sommelier_common::config::load_toml_config;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sommelier_api::{build_router, AppState};

/// Command-line arguments for sommelier-api
#[derive(Parser, Debug)]
#[command(name = "sommelier-api")]
#[command(about = "Wine pairing recommendation service")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "SOMMELIER_PORT")]
    port: Option<u16>,

    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// TOML configuration file
    #[arg(short, long, env = "SOMMELIER_CONFIG")]
    config: Option<PathBuf>,

    /// Dish catalog file
    #[arg(long)]
    dishes: Option<PathBuf>,

    /// Wine catalog file
    #[arg(long)]
    wines: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Priority: CLI > environment > TOML file > defaults
    let mut config = load_toml_config(args.config.as_deref()).context("Failed to load configuration")?;
    config.apply_env_overrides();
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(dishes) = args.dishes {
        config.catalog.dishes_path = dishes;
    }
    if let Some(wines) = args.wines {
        config.catalog.wines_path = wines;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting sommelier-api v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    info!("Dish catalog: {}", config.catalog.dishes_path.display());
    info!("Wine catalog: {}", config.catalog.wines_path.display());

    let state = AppState::from_config(&config);

    // Warm the cache so the first request does not pay for the load
    let catalog = state.catalog.load_if_absent().await;
    info!(
        dishes = catalog.dishes.len(),
        wines = catalog.wines.len(),
        llm_configured = state.llm_configured,
        "Catalog ready"
    );

    let app = build_router(state, &config.cors);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid listen address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("Listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

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
                tracing::error!("Failed to install terminate handler: {}", e);
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
