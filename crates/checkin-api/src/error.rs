//! Maps domain `AppError` to HTTP responses.
//!
//! Clients match on the exact response text, so every failure renders one of
//! a few fixed plain-text bodies rather than a structured payload.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use checkin_core::error::{AppError, ErrorKind};

/// Body returned when required form fields are absent.
pub const MISSING_INPUT_BODY: &str = "no post data to process";

/// Body returned when the target file cannot be created.
pub const FILE_CREATE_BODY: &str = "Can't create file";

/// Body returned when the append fails.
pub const FILE_WRITE_BODY: &str = "There was an error writing this file";

/// HTTP-facing wrapper around [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// Status code and fixed body for this error.
    pub fn status_and_body(&self) -> (StatusCode, &'static str) {
        match self.0.kind {
            ErrorKind::MissingInput => (StatusCode::BAD_REQUEST, MISSING_INPUT_BODY),
            ErrorKind::FileCreate => (StatusCode::INTERNAL_SERVER_ERROR, FILE_CREATE_BODY),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, FILE_WRITE_BODY),
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();

        match self.0.kind {
            ErrorKind::MissingInput => {
                tracing::warn!(reason = %self.0.message, "Rejected check-in");
            }
            _ => {
                let cause = self
                    .0
                    .source
                    .as_ref()
                    .map(|s| s.to_string())
                    .unwrap_or_default();
                tracing::error!(kind = %self.0.kind, error = %self.0.message, cause = %cause, "Check-in append failed");
            }
        }

        (status, body).into_response()
    }
}
