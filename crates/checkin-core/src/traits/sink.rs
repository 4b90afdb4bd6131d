//! Record sink trait for the append-only check-in store.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for destinations that accept rendered check-in lines.
///
/// The sink is the only place that touches the target file. It is defined
/// here in `checkin-core` and implemented in `checkin-storage`.
#[async_trait]
pub trait RecordSink: Send + Sync + std::fmt::Debug + 'static {
    /// Return the sink type name (e.g., "file").
    fn sink_type(&self) -> &str;

    /// Check whether the sink can currently accept appends.
    async fn health_check(&self) -> AppResult<bool>;

    /// Append one complete line and return the number of bytes written.
    ///
    /// Implementations must make the append atomic with respect to other
    /// writers: either the whole line lands or none of it does.
    async fn append(&self, line: &str) -> AppResult<u64>;
}
