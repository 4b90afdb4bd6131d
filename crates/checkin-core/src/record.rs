//! The check-in record and its on-disk line format.
//!
//! A record only ever exists on disk as one colon-delimited line:
//!
//! ```text
//! YYYYMMDDHHMMSS:hostname:intip:extip:mydate:note\n
//! ```
//!
//! Field values are written verbatim. A `:` or newline inside a value is not
//! escaped and will shift field boundaries for anyone splitting the line.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// `strftime` pattern of the leading capture timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Separator placed between fields.
pub const FIELD_SEPARATOR: char = ':';

/// Names of the form fields a check-in must carry, in emission order.
pub const REQUIRED_FIELDS: [&str; 5] = ["hostname", "intip", "extip", "mydate", "note"];

/// The five values a host submits with a check-in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckInFields {
    /// Host name as reported by the client.
    pub hostname: String,
    /// Internal (LAN) address as reported by the client.
    pub intip: String,
    /// External (public) address as reported by the client.
    pub extip: String,
    /// Client-side date string; never parsed.
    pub mydate: String,
    /// Free-form note.
    pub note: String,
}

impl CheckInFields {
    /// Build the field set from `(name, value)` pairs.
    ///
    /// Returns `None` when any required field is absent. Empty values count
    /// as present. A repeated name keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Option<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut hostname = None;
        let mut intip = None;
        let mut extip = None;
        let mut mydate = None;
        let mut note = None;

        for (name, value) in pairs {
            let slot = match name.as_ref() {
                "hostname" => &mut hostname,
                "intip" => &mut intip,
                "extip" => &mut extip,
                "mydate" => &mut mydate,
                "note" => &mut note,
                _ => continue,
            };
            *slot = Some(value.into());
        }

        Some(Self {
            hostname: hostname?,
            intip: intip?,
            extip: extip?,
            mydate: mydate?,
            note: note?,
        })
    }
}

/// One check-in: the capture time plus the submitted fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInRecord {
    /// Server-side capture time.
    pub captured_at: DateTime<Utc>,
    /// Submitted values.
    pub fields: CheckInFields,
}

impl CheckInRecord {
    /// Create a record captured at the given instant.
    pub fn new(captured_at: DateTime<Utc>, fields: CheckInFields) -> Self {
        Self {
            captured_at,
            fields,
        }
    }

    /// Create a record captured now.
    pub fn capture(fields: CheckInFields) -> Self {
        Self::new(Utc::now(), fields)
    }

    /// The fixed-width `YYYYMMDDHHMMSS` stamp.
    pub fn timestamp(&self) -> String {
        self.captured_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Render the newline-terminated line that gets appended to the target file.
    pub fn to_line(&self) -> String {
        let f = &self.fields;
        let mut line = [
            self.timestamp().as_str(),
            f.hostname.as_str(),
            f.intip.as_str(),
            f.extip.as_str(),
            f.mydate.as_str(),
            f.note.as_str(),
        ]
        .join(&FIELD_SEPARATOR.to_string());
        line.push('\n');
        line
    }
}
