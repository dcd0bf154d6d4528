//! PhotoShare Backend - entry point
//!
//! Loads configuration, opens the document store and serves the GraphQL API
//! at /graphql until Ctrl-C or SIGTERM.

use std::net::SocketAddr;

use anyhow::Context;

use photoshare::cli::CliOptions;
use photoshare::config::{Config, StoreBackend};
use photoshare::db::Database;
use photoshare::{AppState, build_app, graphql};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliOptions::from_args();

    if cli.print_schema {
        let schema = graphql::build_schema(Database::in_memory());
        println!("{}", schema.sdl());
        return Ok(());
    }

    dotenvy::dotenv().ok();
    photoshare::logging::init();

    let mut config = Config::from_env()?;
    if cli.memory {
        config.store_backend = StoreBackend::Memory;
    }
    if let Some(port) = cli.port_override {
        config.port = port;
    }

    tracing::info!("Starting PhotoShare Backend");
    tracing::info!(backend = ?config.store_backend, database = %config.database_name, "Configuration loaded");

    let db = match Database::connect(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start backend: database unreachable");
            return Err(e).context("database connection failed");
        }
    };

    let schema = graphql::build_schema(db.clone());
    tracing::info!("GraphQL schema built");

    let app = build_app(AppState { schema });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "Failed to start backend: bind failed");
            db.close().await;
            return Err(e).context("HTTP server: bind failed");
        }
    };
    tracing::info!("Listening on {}", addr);
    tracing::info!("GraphQL playground: http://localhost:{}/graphql", config.port);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("axum::serve");

    db.close().await;
    tracing::info!("PhotoShare Backend stopped");
    served
}

/// Resolve on Ctrl-C or, on unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
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
                tracing::warn!(error = %e, "Failed to listen for SIGTERM");
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
