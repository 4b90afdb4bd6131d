//! Host Check-in Server
//!
//! Accepts check-in forms from hosts and appends one colon-delimited line per
//! check-in to a flat text file.

use tracing_subscriber::{EnvFilter, fmt};

use checkin_core::config::AppConfig;
use checkin_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = checkin_api::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file, environment overlay, and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("CHECKIN_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());

    let env = std::env::var("CHECKIN_ENV").unwrap_or_else(|_| "development".to_string());
    let env_config_path = format!("config/{}.toml", env);

    AppConfig::load_layered(&[config_path.as_str(), env_config_path.as_str()])
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
