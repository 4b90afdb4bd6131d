//! Configuration management CLI commands.

use std::path::Path;

use clap::{Args, Subcommand};
use dialoguer::Confirm;

use crate::output::{self, OutputFormat};
use checkin_core::error::{AppError, ErrorKind};

/// Bundled default configuration, written by `config generate`.
const DEFAULT_CONFIG: &str = include_str!("../../../../config/default.toml");

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Validate configuration file
    Validate,
    /// Generate a default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = super::load_config(config_path).await?;
            output::print_item(&config, format);
        }
        ConfigCommand::Validate => match super::load_config(config_path).await {
            Ok(config) => {
                output::print_success(&format!("Configuration '{}' is valid", config_path));
                output::print_kv("Server", &config.server.bind_address());
                output::print_kv("Route", &config.server.route_path);
                output::print_kv("Target file", &config.storage.target_file);
                output::print_kv("Log level", &config.logging.level);
                output::print_kv("Client endpoint", &config.client.server_url);
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {}", e));
                return Err(e);
            }
        },
        ConfigCommand::Generate {
            output: out_path,
            force,
        } => {
            if Path::new(out_path).exists() && !force && !confirm_overwrite(out_path)? {
                output::print_warning(&format!("Left '{}' untouched", out_path));
                return Ok(());
            }
            write_default_config(out_path).await?;
            output::print_success(&format!("Default config written to '{}'", out_path));
        }
    }

    Ok(())
}

fn confirm_overwrite(path: &str) -> Result<bool, AppError> {
    Confirm::new()
        .with_prompt(format!("'{}' exists. Overwrite?", path))
        .default(false)
        .interact()
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Prompt failed", e))
}

async fn write_default_config(out_path: &str) -> Result<(), AppError> {
    if let Some(parent) = Path::new(out_path).parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| AppError::internal(format!("Failed to create dir: {}", e)))?;
    }

    tokio::fs::write(out_path, DEFAULT_CONFIG)
        .await
        .map_err(|e| AppError::internal(format!("Failed to write config: {}", e)))
}
