//! Timestamp utilities

use chrono::{DateTime, SecondsFormat, Utc};

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Format a timestamp the way it is stored in the database
///
/// RFC 3339 in UTC with a fixed nine-digit fraction and `Z`, so stored
/// values sort and compare correctly as text.
pub fn to_db(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Parse a stored timestamp
///
/// Accepts RFC 3339 as written by [`to_db`] and the `YYYY-MM-DD HH:MM:SS`
/// form SQLite's `CURRENT_TIMESTAMP` default produces.
pub fn from_db(value: &str) -> crate::Result<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| crate::Error::Internal(format!("Failed to parse timestamp '{}': {}", value, e)))
}
