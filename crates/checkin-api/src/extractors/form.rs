//! Check-in form extractor.
//!
//! Accepts `application/x-www-form-urlencoded` and `multipart/form-data`
//! bodies. Any body that cannot be read as a form, any value that does not
//! decode to UTF-8, and any form missing a required field is rejected as
//! missing input. Decoded values are never lossily rewritten.

use std::borrow::Cow;

use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::{HeaderMap, header::CONTENT_TYPE};
use percent_encoding::percent_decode;
use tracing::debug;

use checkin_core::error::AppError;
use checkin_core::record::{CheckInFields, REQUIRED_FIELDS};

use crate::error::ApiError;

const URLENCODED: &str = "application/x-www-form-urlencoded";
const MULTIPART: &str = "multipart/form-data";

/// The five check-in fields pulled from a POST body.
#[derive(Debug, Clone)]
pub struct CheckInForm(pub CheckInFields);

impl<S> FromRequest<S> for CheckInForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = if has_content_type(req.headers(), MULTIPART) {
            read_multipart(req, state).await?
        } else if has_content_type(req.headers(), URLENCODED) {
            let body = Bytes::from_request(req, state).await.map_err(|rejection| {
                debug!(error = %rejection, "Unreadable form body");
                AppError::missing_input(format!("Unreadable form body: {rejection}"))
            })?;
            parse_urlencoded(&body)?
        } else {
            return Err(AppError::missing_input("Body is not a form").into());
        };

        CheckInFields::from_pairs(pairs)
            .map(Self)
            .ok_or_else(|| {
                AppError::missing_input(format!(
                    "Form must carry all of: {}",
                    REQUIRED_FIELDS.join(", ")
                ))
                .into()
            })
    }
}

fn has_content_type(headers: &HeaderMap, expected: &str) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.trim_start().to_ascii_lowercase().starts_with(expected))
}

/// Split an urlencoded body into decoded `(name, value)` pairs.
fn parse_urlencoded(body: &[u8]) -> Result<Vec<(String, String)>, AppError> {
    body.split(|b| *b == b'&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let mut parts = pair.splitn(2, |b| *b == b'=');
            let name = decode_component(parts.next().unwrap_or_default())?;
            let value = decode_component(parts.next().unwrap_or_default())?;
            Ok((name, value))
        })
        .collect()
}

fn decode_component(raw: &[u8]) -> Result<String, AppError> {
    let spaced: Vec<u8> = raw
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();

    percent_decode(&spaced)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|e| AppError::missing_input(format!("Form value is not UTF-8: {e}")))
}

/// Collect the text parts of a multipart body. File parts are skipped.
async fn read_multipart<S>(req: Request, state: &S) -> Result<Vec<(String, String)>, AppError>
where
    S: Send + Sync,
{
    let mut multipart = Multipart::from_request(req, state).await.map_err(|rejection| {
        debug!(error = %rejection, "Unreadable multipart body");
        AppError::missing_input(format!("Unreadable multipart body: {rejection}"))
    })?;

    let mut pairs = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::missing_input(format!("Malformed multipart field: {e}")))?
    {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let raw = field
            .bytes()
            .await
            .map_err(|e| AppError::missing_input(format!("Unreadable multipart field: {e}")))?;
        let value = String::from_utf8(raw.to_vec()).map_err(|e| {
            AppError::missing_input(format!("Multipart field {name} is not UTF-8: {e}"))
        })?;
        pairs.push((name, value));
    }

    Ok(pairs)
}
