//! Target file configuration.

use serde::{Deserialize, Serialize};

/// Where and how check-in lines are persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the append-only target file. Relative paths resolve against
    /// the server's working directory.
    #[serde(default = "default_target_file")]
    pub target_file: String,
    /// Call `fsync` after every append.
    #[serde(default)]
    pub sync_on_append: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            target_file: default_target_file(),
            sync_on_append: false,
        }
    }
}

fn default_target_file() -> String {
    "host-check-in.txt".to_string()
}
