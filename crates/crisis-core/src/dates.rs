//! Lenient parsing for the date formats the upstream sources emit.
//!
//! GDACS sends naive `2024-12-15T00:00:00`, ReliefWeb sends RFC 3339 with an
//! offset, and the embedded data uses bare `2024-12-15`. Anything unparseable is
//! treated as absent rather than as an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a timestamp in any of the accepted formats, normalized to UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    parse_date(raw).and_then(|date| date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc()))
}

/// Parse the calendar date part of a date or timestamp string.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let head = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}
