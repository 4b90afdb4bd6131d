//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` when the sink can accept appends, `"degraded"` otherwise.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Sink type serving check-ins.
    pub sink: String,
    /// Seconds since the state was built.
    pub uptime_seconds: u64,
}
