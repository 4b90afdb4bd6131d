//! `checkin send`: gather host facts and post them to the server.

use std::time::Duration;

use clap::Args;
use tracing::info;

use crate::host;
use crate::output::{self, OutputFormat};
use checkin_core::error::{AppError, ErrorKind};
use checkin_core::record::CheckInFields;

/// Note used when nothing else selects one.
pub const DEFAULT_NOTE: &str = "Manual Update";

/// `strftime` pattern of the client-side date field.
pub const CLIENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Arguments for the send command
#[derive(Debug, Args)]
pub struct SendArgs {
    /// Note to send
    #[arg(short = 'm', long)]
    pub note: Option<String>,

    /// Send the note REBOOT
    #[arg(long)]
    pub reboot: bool,

    /// Send the note SCHEDULED
    #[arg(long)]
    pub scheduled: bool,

    /// Override the client-side date field
    #[arg(long)]
    pub date: Option<String>,

    /// Override the check-in endpoint URL
    #[arg(short, long)]
    pub server: Option<String>,

    /// Print what would be sent without sending
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Note words, joined with spaces when no other note is given
    pub words: Vec<String>,
}

impl SendArgs {
    /// Pick the note: `--reboot`, `--scheduled`, `--note`, positional words, default.
    pub fn resolve_note(&self) -> String {
        if self.reboot {
            "REBOOT".to_string()
        } else if self.scheduled {
            "SCHEDULED".to_string()
        } else if let Some(note) = &self.note {
            note.clone()
        } else if !self.words.is_empty() {
            self.words.join(" ")
        } else {
            DEFAULT_NOTE.to_string()
        }
    }
}

/// Execute the send command
pub async fn execute(
    args: &SendArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path).await?;
    let client = &config.client;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(client.request_timeout_seconds))
        .user_agent(concat!("checkin/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to build HTTP client", e))?;

    let fields = CheckInFields {
        hostname: host::hostname().await,
        intip: host::wait_for_internal_ip(client).await,
        extip: host::external_ip(&http, &client.external_ip_services).await,
        mydate: args.date.clone().unwrap_or_else(|| {
            chrono::Local::now().format(CLIENT_DATE_FORMAT).to_string()
        }),
        note: args.resolve_note(),
    };

    let url = args.server.as_deref().unwrap_or(&client.server_url);

    if args.dry_run {
        output::print_fields(&fields, format);
        output::print_warning(&format!("Dry run: nothing sent to {url}"));
        return Ok(());
    }

    info!(url, hostname = %fields.hostname, "Posting check-in");

    let response = http.post(url).form(&fields).send().await.map_err(|e| {
        AppError::with_source(ErrorKind::ExternalService, format!("Failed to reach {url}"), e)
    })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| {
        AppError::with_source(ErrorKind::ExternalService, "Failed to read server response", e)
    })?;

    if !status.is_success() {
        return Err(AppError::external_service(format!(
            "Server answered {status}: {body}"
        )));
    }

    output::print_success(body.trim());
    Ok(())
}
