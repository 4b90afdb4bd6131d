//! # checkin-api
//!
//! HTTP API layer for Host Check-in built on Axum.
//!
//! Provides the check-in form endpoint, a health endpoint, request logging
//! middleware, the form extractor, and the mapping from [`AppError`] to the
//! fixed plain-text error bodies clients expect.
//!
//! [`AppError`]: checkin_core::AppError

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
