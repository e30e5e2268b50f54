//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection, index bootstrap, and Axum server lifecycle.

use crate::application::services::StudentService;
use crate::config::{Config, mask_connection_string};
use crate::infrastructure::persistence::{MongoStudentRepository, connect};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - MongoDB connection (verified with a ping)
/// - Unique `rollNumber` index
/// - Axum HTTP server with graceful shutdown
///
/// The listener is only bound once the database is reachable.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Index creation fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    tracing::info!(
        "Connecting to MongoDB at {}",
        mask_connection_string(&config.mongodb_uri)
    );

    let database = connect(&config.mongodb_uri, config.mongodb_connect_timeout())
        .await
        .context("Error connecting to MongoDB")?;
    tracing::info!(database = %database.name(), "Connected to MongoDB successfully");

    let repository = MongoStudentRepository::new(database);
    repository
        .ensure_indexes()
        .await
        .context("Failed to create student indexes")?;

    let student_service = Arc::new(StudentService::new(Arc::new(repository)));
    let state = AppState::new(student_service);

    let app = app_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server started on port {}", config.port);

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
