//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Every field carries a default, so an empty or missing file
//! yields a working configuration.

pub mod app;
pub mod client;
pub mod logging;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use self::app::ServerConfig;
pub use self::client::ClientConfig;
pub use self::logging::LoggingConfig;
pub use self::storage::StorageConfig;

use crate::error::AppError;

/// Prefix for environment variable overrides (`CHECKIN_SERVER__PORT=9000`).
pub const ENV_PREFIX: &str = "CHECKIN";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Target file settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Check-in client settings.
    #[serde(default)]
    pub client: ClientConfig,
}

impl AppConfig {
    /// Load configuration from a single TOML file plus environment overrides.
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load(path: &str) -> Result<Self, AppError> {
        Self::load_layered(&[path])
    }

    /// Load configuration from several TOML files, later files overriding
    /// earlier ones, then environment variables prefixed with `CHECKIN_`.
    pub fn load_layered(paths: &[&str]) -> Result<Self, AppError> {
        let mut builder = config::Config::builder();
        for path in paths {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
