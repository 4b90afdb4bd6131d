//! Local append-only file sink.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fs2::FileExt;
use tracing::debug;

use checkin_core::config::StorageConfig;
use checkin_core::error::{AppError, ErrorKind};
use checkin_core::result::AppResult;
use checkin_core::traits::sink::RecordSink;

/// Appends check-in lines to a single text file.
///
/// Each append opens the file, takes an exclusive `flock`, writes the whole
/// line with one `write_all`, and releases the lock. The lock is advisory and
/// spans processes, so several servers may share one target file.
#[derive(Debug, Clone)]
pub struct AppendFileSink {
    /// Target file path.
    path: PathBuf,
    /// Whether to fsync after each append.
    sync_on_append: bool,
}

impl AppendFileSink {
    /// Create a sink writing to the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sync_on_append: false,
        }
    }

    /// Create a sink from the storage configuration section.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.target_file).with_sync(config.sync_on_append)
    }

    /// Enable or disable fsync after each append.
    pub fn with_sync(mut self, sync_on_append: bool) -> Self {
        self.sync_on_append = sync_on_append;
        self
    }

    /// The target file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory that must exist for the target to be creatable.
    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

#[async_trait]
impl RecordSink for AppendFileSink {
    fn sink_type(&self) -> &str {
        "file"
    }

    async fn health_check(&self) -> AppResult<bool> {
        let dir = self.parent_dir();
        Ok(dir.exists() && dir.is_dir())
    }

    async fn append(&self, line: &str) -> AppResult<u64> {
        let path = self.path.clone();
        let data = line.as_bytes().to_vec();
        let sync = self.sync_on_append;

        let written = tokio::task::spawn_blocking(move || append_locked(&path, &data, sync))
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Append task failed", e))??;

        debug!(path = %self.path.display(), bytes = written, "Appended record");
        Ok(written)
    }
}

/// Open the target for appending, creating it when absent.
///
/// Only the creation attempt maps to [`ErrorKind::FileCreate`]; failing to
/// open a file that already exists is a write failure.
fn open_target(path: &Path) -> AppResult<File> {
    match OpenOptions::new().append(true).open(path) {
        Ok(file) => Ok(file),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::FileCreate,
                    format!("Failed to create file: {}", path.display()),
                    e,
                )
            }),
        Err(e) => Err(AppError::with_source(
            ErrorKind::FileWrite,
            format!("Failed to open file: {}", path.display()),
            e,
        )),
    }
}

/// Write `data` to the end of `path` under an exclusive lock.
fn append_locked(path: &Path, data: &[u8], sync: bool) -> AppResult<u64> {
    let mut file = open_target(path)?;

    file.lock_exclusive().map_err(|e| {
        AppError::with_source(
            ErrorKind::FileWrite,
            format!("Failed to lock file: {}", path.display()),
            e,
        )
    })?;

    let result = write_all_synced(&mut file, data, sync);

    if let Err(e) = FileExt::unlock(&file) {
        debug!(path = %path.display(), error = %e, "Unlock failed; released on close");
    }

    result.map_err(|e| {
        AppError::with_source(
            ErrorKind::FileWrite,
            format!("Failed to write file: {}", path.display()),
            e,
        )
    })?;

    Ok(data.len() as u64)
}

fn write_all_synced(file: &mut File, data: &[u8], sync: bool) -> std::io::Result<()> {
    file.write_all(data)?;
    if sync {
        file.sync_data()?;
    }
    Ok(())
}
