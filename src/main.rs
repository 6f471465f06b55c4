//! EstateHub Server: property listings and enquiries over HTTP.
//!
//! Main entry point that loads configuration, wires the stores and
//! services together, and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use estatehub_api::{AppState, build_app};
use estatehub_core::config::{AppConfig, DatabaseProvider};
use estatehub_core::error::AppError;
use estatehub_database::{DatabasePool, Stores, migration};

#[tokio::main]
async fn main() {
    let env = std::env::var("ESTATEHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting EstateHub v{}", env!("CARGO_PKG_VERSION"));

    if config.server.production && !config.auth.cookie_secure {
        tracing::warn!("Production mode with auth.cookie_secure = false; session cookies will travel over plain HTTP");
    }

    // ── Step 1: Stores ───────────────────────────────────────────
    let (stores, pool) = match config.database.provider {
        DatabaseProvider::Postgres => {
            let pool = DatabasePool::connect(&config.database).await?;
            migration::run_migrations(pool.pool()).await?;
            (Stores::postgres(pool.pool().clone()), Some(pool))
        }
        DatabaseProvider::Memory => {
            tracing::warn!("Using the in-memory store; data is lost on shutdown");
            (Stores::memory(), None)
        }
    };

    // ── Step 2: Build and start HTTP server ──────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = build_app(AppState::new(config, stores));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("EstateHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(pool) = pool {
        pool.close().await;
    }

    tracing::info!("EstateHub server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
