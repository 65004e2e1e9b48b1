//! Parsing and formatting for local (timezone-free) timestamps.
//!
//! The wire format is ISO-8601 without a zone or offset. Parsing accepts an
//! optional seconds component with an optional fraction; formatting emits
//! the shortest form that round-trips, so a midnight deadline comes back as
//! `2023-10-01T00:00`, not `2023-10-01T00:00:00`.

use chrono::{NaiveDateTime, Timelike};

use crate::error::CoreError;

/// Matches `2023-10-01T14:30:00` and `2023-10-01T14:30:00.123`.
const FORMAT_WITH_SECONDS: &str = "%Y-%m-%dT%H:%M:%S%.f";
/// Matches `2023-10-01T14:30`.
const FORMAT_MINUTES: &str = "%Y-%m-%dT%H:%M";

/// Parse an ISO-8601 local timestamp from a request payload.
///
/// # Examples
///
/// ```
/// use tasktrack_core::datetime::parse_local_date_time;
///
/// assert!(parse_local_date_time("2023-10-01T00:00").is_ok());
/// assert!(parse_local_date_time("2023-10-01T14:30:05.250").is_ok());
/// assert!(parse_local_date_time("tomorrow").is_err());
/// ```
pub fn parse_local_date_time(value: &str) -> Result<NaiveDateTime, CoreError> {
    NaiveDateTime::parse_from_str(value, FORMAT_WITH_SECONDS)
        .or_else(|_| NaiveDateTime::parse_from_str(value, FORMAT_MINUTES))
        .map_err(|_| CoreError::Validation(format!("Invalid deadline: {value}")))
}

/// Format a local timestamp in its shortest ISO-8601 form.
///
/// Seconds are omitted when both the seconds and the fractional part are
/// zero, mirroring how the values are rendered on the wire.
///
/// # Examples
///
/// ```
/// use tasktrack_core::datetime::{format_local_date_time, parse_local_date_time};
///
/// let midnight = parse_local_date_time("2023-10-01T00:00:00").unwrap();
/// assert_eq!(format_local_date_time(midnight), "2023-10-01T00:00");
/// ```
pub fn format_local_date_time(value: NaiveDateTime) -> String {
    if value.second() == 0 && value.nanosecond() == 0 {
        value.format(FORMAT_MINUTES).to_string()
    } else {
        value.format(FORMAT_WITH_SECONDS).to_string()
    }
}
