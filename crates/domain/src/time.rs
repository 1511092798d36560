//! Time and timestamp helpers.

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::error::TimestampError;

/// UTC timestamp used for history points.
pub type Timestamp = DateTime<Utc>;

/// Convert epoch milliseconds into a [`Timestamp`].
///
/// # Errors
///
/// Returns [`TimestampError::OutOfRange`] if chrono cannot represent the value.
pub fn from_epoch_millis(millis: i64) -> Result<Timestamp, TimestampError> {
    DateTime::from_timestamp_millis(millis).ok_or(TimestampError::OutOfRange(millis))
}

/// Parse an RFC 3339 / ISO 8601 string into a [`Timestamp`].
///
/// # Errors
///
/// Returns [`TimestampError::Unparseable`] if the string is not RFC 3339.
pub fn from_rfc3339(text: &str) -> Result<Timestamp, TimestampError> {
    DateTime::parse_from_rfc3339(text)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| TimestampError::Unparseable(text.to_string()))
}

/// Human-readable time of day (`HH:MM`) of `ts` in the viewer's `offset`.
#[must_use]
pub fn time_of_day(ts: Timestamp, offset: FixedOffset) -> String {
    ts.with_timezone(&offset).format("%H:%M").to_string()
}

/// The UTC offset, `offset_minutes` east of Greenwich, falling back to UTC
/// when the value is out of range.
#[must_use]
pub fn offset_from_minutes(offset_minutes: i32) -> FixedOffset {
    offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix())
}
