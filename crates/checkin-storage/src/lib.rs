//! # checkin-storage
//!
//! Sink implementations for Host Check-in. The only backend is a local
//! append-only text file guarded by an exclusive filesystem lock.

pub mod providers;

pub use providers::file::AppendFileSink;
