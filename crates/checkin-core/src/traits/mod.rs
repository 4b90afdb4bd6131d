//! Core traits implemented by other crates.

pub mod sink;

pub use sink::RecordSink;
