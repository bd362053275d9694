//! Fixed-pattern timestamp codec
//!
//! GitHub timestamps use `yyyy-MM-ddTHH:mm:ssZZZZZ`: whole seconds followed by
//! either `Z` or a `±hh:mm` offset. Anything else is rejected.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;
use std::borrow::Cow;
use thiserror::Error;

/// Human-readable form of the accepted pattern
pub const DATE_PATTERN: &str = "yyyy-MM-ddTHH:mm:ssZZZZZ";

/// chrono format string for [`DATE_PATTERN`] once `Z` is normalized
const CHRONO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Byte layout of the date and time part; `d` is any ASCII digit
const DATE_TIME_SHAPE: &[u8; 19] = b"dddd-dd-ddTdd:dd:dd";

/// Byte layout of a numeric offset after its sign
const OFFSET_SHAPE: &[u8; 5] = b"dd:dd";

/// A string did not match [`DATE_PATTERN`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("date string '{value}' does not match format {DATE_PATTERN}")]
pub struct DateFormatError {
    pub value: String,
}

/// Parse a timestamp in the fixed pattern
pub fn parse(value: &str) -> Result<DateTime<Utc>, DateFormatError> {
    if !has_fixed_shape(value.as_bytes()) {
        return Err(DateFormatError {
            value: value.to_string(),
        });
    }

    let normalized = match value.strip_suffix('Z') {
        Some(prefix) => Cow::Owned(format!("{prefix}+00:00")),
        None => Cow::Borrowed(value),
    };

    DateTime::parse_from_str(&normalized, CHRONO_FORMAT)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|_| DateFormatError {
            value: value.to_string(),
        })
}

/// Check the exact layout chrono is too lenient about: field widths,
/// separators, a `Z` or `±hh:mm` suffix, and no leap second
fn has_fixed_shape(bytes: &[u8]) -> bool {
    let Some((date_time, zone)) = bytes.split_first_chunk::<19>() else {
        return false;
    };

    let zone_ok = match zone {
        [b'Z'] => true,
        [b'+' | b'-', offset @ ..] => matches_shape(offset, OFFSET_SHAPE),
        _ => false,
    };

    zone_ok && matches_shape(date_time, DATE_TIME_SHAPE) && date_time[17] <= b'5'
}

fn matches_shape(bytes: &[u8], shape: &[u8]) -> bool {
    bytes.len() == shape.len()
        && bytes.iter().zip(shape).all(|(&byte, &expected)| match expected {
            b'd' => byte.is_ascii_digit(),
            literal => byte == literal,
        })
}

/// Format a timestamp in the fixed pattern (UTC renders as `Z`)
pub fn format(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Serialize an optional timestamp in the fixed pattern, `null` when absent
#[allow(clippy::ref_option)]
pub fn serialize_optional<S>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(date) => serializer.serialize_str(&format(date)),
        None => serializer.serialize_none(),
    }
}
