//! Check-in handler.

use axum::extract::State;
use tracing::debug;

use checkin_core::error::AppError;
use checkin_core::record::CheckInRecord;

use crate::error::ApiError;
use crate::extractors::CheckInForm;
use crate::state::AppState;

/// POST /log-ips.php (and POST /)
///
/// Stamps the submitted fields with the current UTC time, appends the
/// rendered line to the target file, and reports the byte count.
pub async fn check_in(
    State(state): State<AppState>,
    CheckInForm(fields): CheckInForm,
) -> Result<String, ApiError> {
    let record = CheckInRecord::capture(fields);
    let line = record.to_line();

    let written = state.sink.append(&line).await?;

    debug!(
        hostname = %record.fields.hostname,
        stamp = %record.timestamp(),
        bytes = written,
        "Check-in recorded"
    );

    Ok(format!("{written} bytes written to file"))
}

/// Any non-POST method on the check-in route.
pub async fn no_post_data() -> ApiError {
    AppError::missing_input("Check-in route only accepts POST").into()
}
