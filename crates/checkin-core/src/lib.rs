//! # checkin-core
//!
//! Core crate for Host Check-in. Contains the check-in record model,
//! configuration schemas, the record sink trait, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other Host Check-in crates.

pub mod config;
pub mod error;
pub mod record;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use record::CheckInRecord;
pub use result::AppResult;
