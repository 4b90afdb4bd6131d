//! Application builder and server runner.

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use checkin_core::config::AppConfig;
use checkin_core::error::{AppError, ErrorKind};
use checkin_core::result::AppResult;
use checkin_core::traits::sink::RecordSink;
use checkin_storage::AppendFileSink;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state).layer(TraceLayer::new_for_http())
}

/// Runs the check-in server until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    info!("Starting Host Check-in v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Sink ─────────────────────────────────────────────
    let sink = AppendFileSink::from_config(&config.storage);
    if sink.health_check().await? {
        info!(target_file = %sink.path().display(), "Check-in sink ready");
    } else {
        // Requests will fail with the create-file body until this is fixed.
        warn!(
            target_file = %sink.path().display(),
            "Target directory does not exist"
        );
    }

    // ── Step 2: Router ───────────────────────────────────────────
    let state = AppState::new(config.clone(), Arc::new(sink));
    let app = build_app(state);

    // ── Step 3: Listener ─────────────────────────────────────────
    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
        })?;

    info!(
        "Host Check-in listening on {} (route {})",
        addr, config.server.route_path
    );

    // ── Step 4: Serve with graceful shutdown ─────────────────────
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            info!("Shutdown signal received, draining in-flight requests...");
            let _ = shutdown_tx.send(true);
        })
        .into_future();

    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let deadline = async move {
        let _ = shutdown_rx.wait_for(|stop| *stop).await;
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        result = server => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
        }
        _ = deadline => {
            warn!("Graceful shutdown timed out after {}s", grace.as_secs());
        }
    }

    info!("Host Check-in shut down");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
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
                warn!("Failed to install SIGTERM handler: {e}");
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
}
