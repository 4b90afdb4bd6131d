//! Convenience result type alias for Host Check-in.

use crate::error::AppError;

/// A specialized `Result` type for check-in operations.
pub type AppResult<T> = Result<T, AppError>;
