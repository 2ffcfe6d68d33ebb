//! Graceful shutdown and signal handling.
//!
//! On SIGTERM or SIGINT the process first reports DOWN so load balancers stop
//! routing to it, then stops accepting connections and drains the rest.

use std::time::Duration;

use axum_server::Handle;

use crate::config::SHUTDOWN_REASON;
use crate::status::HealthStore;

/// Setup graceful shutdown on SIGTERM and SIGINT.
///
/// When either signal is received, the server will:
/// 1. Mark the health store DOWN with a shutdown reason
/// 2. Keep serving for `drain` so pollers observe the DOWN status
/// 3. Stop accepting new connections and wait up to `grace` for the rest
pub fn setup_shutdown_handler(handle: Handle, health: HealthStore, drain: Duration, grace: Duration) {
    tokio::spawn(async move {
        let ctrl_c = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C, initiating graceful shutdown");
            }
            _ = terminate => {
                tracing::info!("Received SIGTERM, initiating graceful shutdown");
            }
        }

        health.set_unhealthy(SHUTDOWN_REASON);
        tokio::time::sleep(drain).await;

        handle.graceful_shutdown(Some(grace));
        tracing::info!(
            grace_seconds = grace.as_secs(),
            "Graceful shutdown initiated, waiting for connections to close"
        );
    });
}
