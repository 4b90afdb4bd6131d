//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use checkin_core::config::AppConfig;
use checkin_core::traits::sink::RecordSink;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Destination for rendered check-in lines
    pub sink: Arc<dyn RecordSink>,
    /// When the state was built, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Build the state from configuration and a sink.
    pub fn new(config: AppConfig, sink: Arc<dyn RecordSink>) -> Self {
        Self {
            config: Arc::new(config),
            sink,
            started_at: Instant::now(),
        }
    }
}
