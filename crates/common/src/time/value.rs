//! Parsing loosely typed time values
//!
//! Ingested records carry timestamps as floats, integers or strings. This
//! module turns any of them into an instant:
//!
//! - numbers go through the magnitude heuristic in [`super::epoch`]
//! - strings are parsed with a format (RFC 3339 by default) in a zone
//! - the `epoch_millis` format reads a string as milliseconds since the epoch

use chrono::format::ParseErrorKind;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use tracing::debug;

use super::epoch::instant_from_epoch;
use super::error::TimeParseError;
use super::zone::{resolve_time_zone, ZoneRef};

/// Format token for string values holding milliseconds since the epoch
pub const EPOCH_MILLIS: &str = "epoch_millis";

/// A dynamically typed time value
///
/// Only the numeric variants and `Str` are accepted by
/// [`parse_time_value`]; the others exist so callers can pass through
/// whatever they decoded and get a typed error back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeValue<'a> {
    /// Epoch timestamp, truncated toward zero
    Float(f64),
    /// Epoch timestamp
    Int64(i64),
    /// Epoch timestamp
    Int(isize),
    /// Epoch timestamp
    Int32(i32),
    /// Formatted timestamp, read with the configured format and zone
    Str(&'a str),
    /// Rejected with `UnsupportedValueType`
    Bool(bool),
    /// Rejected with `UnsupportedValueType`
    UInt64(u64),
    /// Rejected with `UnsupportedValueType`
    Null,
    /// Rejected with `UnsupportedValueType`
    Array,
    /// Rejected with `UnsupportedValueType`
    Object,
}

impl TimeValue<'_> {
    /// Name of the underlying type, used in error messages
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Float(_) => "f64",
            Self::Int64(_) => "i64",
            Self::Int(_) => "isize",
            Self::Int32(_) => "i32",
            Self::Str(_) => "string",
            Self::Bool(_) => "bool",
            Self::UInt64(_) => "u64",
            Self::Null => "null",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl From<f64> for TimeValue<'_> {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for TimeValue<'_> {
    fn from(v: i64) -> Self {
        Self::Int64(v)
    }
}

impl From<isize> for TimeValue<'_> {
    fn from(v: isize) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for TimeValue<'_> {
    fn from(v: i32) -> Self {
        Self::Int32(v)
    }
}

impl<'a> From<&'a str> for TimeValue<'a> {
    fn from(v: &'a str) -> Self {
        Self::Str(v)
    }
}

impl From<bool> for TimeValue<'_> {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<u64> for TimeValue<'_> {
    fn from(v: u64) -> Self {
        Self::UInt64(v)
    }
}

#[cfg(feature = "serde")]
impl<'a> From<&'a serde_json::Value> for TimeValue<'a> {
    fn from(v: &'a serde_json::Value) -> Self {
        use serde_json::Value;

        match v {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => n
                .as_i64()
                .map_or_else(|| Self::Float(n.as_f64().unwrap_or(f64::NAN)), Self::Int64),
            Value::String(s) => Self::Str(s),
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

/// How a string value should be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat<'a> {
    /// Integer milliseconds since the epoch
    EpochMillis,
    /// RFC 3339, e.g. `2024-01-01T00:00:00Z`
    Rfc3339,
    /// RFC 2822, e.g. `Mon, 01 Jan 2024 00:00:00 +0000`
    Rfc2822,
    /// A `chrono` strftime pattern
    Pattern(&'a str),
}

impl<'a> TimeFormat<'a> {
    /// Interpret a configured format string
    ///
    /// An empty string means RFC 3339. The names `rfc3339` and `rfc2822` are
    /// matched case-insensitively, `epoch_millis` exactly; anything else is
    /// a strftime pattern.
    pub fn from_spec(spec: &'a str) -> Self {
        if spec == EPOCH_MILLIS {
            Self::EpochMillis
        } else if spec.is_empty() || spec.eq_ignore_ascii_case("rfc3339") {
            Self::Rfc3339
        } else if spec.eq_ignore_ascii_case("rfc2822") {
            Self::Rfc2822
        } else {
            Self::Pattern(spec)
        }
    }

    /// Name used in error messages
    pub const fn as_str(self) -> &'a str {
        match self {
            Self::EpochMillis => EPOCH_MILLIS,
            Self::Rfc3339 => "RFC3339",
            Self::Rfc2822 => "RFC2822",
            Self::Pattern(p) => p,
        }
    }
}

/// Parse a time value into an instant
///
/// Numbers are epoch timestamps of inferred precision and ignore `format`
/// and `time_zone`. Strings are read with `format` (see
/// [`TimeFormat::from_spec`]); wall-clock times without an offset are placed
/// in `time_zone` (see [`resolve_time_zone`]).
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use zinc_common::time::value::{parse_time_value, TimeValue};
///
/// let expected = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap();
/// assert_eq!(parse_time_value(TimeValue::Int64(1_700_000_000), "", "").unwrap(), expected);
/// assert_eq!(
///     parse_time_value(TimeValue::Str("1700000000000"), "epoch_millis", "").unwrap(),
///     expected
/// );
/// assert_eq!(
///     parse_time_value(TimeValue::Str("2023-11-14 23:13:20"), "%Y-%m-%d %H:%M:%S", "Europe/Paris")
///         .unwrap(),
///     expected
/// );
/// assert!(parse_time_value(TimeValue::Bool(true), "", "").is_err());
/// ```
pub fn parse_time_value(
    value: TimeValue<'_>,
    format: &str,
    time_zone: &str,
) -> Result<DateTime<FixedOffset>, TimeParseError> {
    let result = match value {
        TimeValue::Float(v) => parse_float(v),
        TimeValue::Int64(v) => parse_numeric(v),
        TimeValue::Int(v) => parse_numeric(v as i64),
        TimeValue::Int32(v) => parse_numeric(i64::from(v)),
        TimeValue::Str(s) => parse_string(s, format, time_zone),
        other => Err(TimeParseError::UnsupportedValueType(other.type_name())),
    };

    if let Err(err) = &result {
        debug!(kind = err.kind(), error = %err, "rejected time value");
    }
    result
}

fn parse_float(v: f64) -> Result<DateTime<FixedOffset>, TimeParseError> {
    if !v.is_finite() {
        return Err(TimeParseError::InvalidTimestamp(v.to_string()));
    }
    // Truncates toward zero and saturates at the i64 bounds.
    parse_numeric(v as i64)
}

fn parse_numeric(v: i64) -> Result<DateTime<FixedOffset>, TimeParseError> {
    let instant = instant_from_epoch(v);
    if instant == DateTime::<Utc>::UNIX_EPOCH && v != 0 {
        return Err(TimeParseError::InvalidTimestamp(v.to_string()));
    }
    Ok(instant.fixed_offset())
}

fn parse_string(
    value: &str,
    format: &str,
    time_zone: &str,
) -> Result<DateTime<FixedOffset>, TimeParseError> {
    if value.is_empty() {
        return Err(TimeParseError::EmptyValue);
    }

    let format = TimeFormat::from_spec(format);
    let parsed = match format {
        TimeFormat::EpochMillis => return parse_epoch_millis(value),
        // The zone is checked even when the format carries its own offset.
        TimeFormat::Rfc3339 => {
            resolve_time_zone(time_zone)?;
            DateTime::parse_from_rfc3339(value).map_err(|e| e.to_string())
        }
        TimeFormat::Rfc2822 => {
            resolve_time_zone(time_zone)?;
            DateTime::parse_from_rfc2822(value).map_err(|e| e.to_string())
        }
        TimeFormat::Pattern(pattern) => {
            parse_pattern_in_zone(value, pattern, resolve_time_zone(time_zone)?)
        }
    };

    parsed.map_err(|reason| TimeParseError::ParseFailure {
        format: format.as_str().to_string(),
        value: value.to_string(),
        reason,
    })
}

fn parse_epoch_millis(value: &str) -> Result<DateTime<FixedOffset>, TimeParseError> {
    let millis: i64 = value.parse().map_err(|_| TimeParseError::NotAnInteger {
        format: EPOCH_MILLIS.to_string(),
        value: value.to_string(),
    })?;
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.fixed_offset())
        .ok_or_else(|| TimeParseError::InvalidTimestamp(value.to_string()))
}

/// Parse `value` with a strftime pattern, placing offset-less times in `zone`
///
/// Ambiguous wall-clock times resolve to the earliest instant.
fn parse_pattern_in_zone(
    value: &str,
    pattern: &str,
    zone: ZoneRef,
) -> Result<DateTime<FixedOffset>, String> {
    match DateTime::parse_from_str(value, pattern) {
        Ok(dt) => return Ok(dt),
        Err(e) if e.kind() != ParseErrorKind::NotEnough => return Err(e.to_string()),
        Err(_) => {}
    }

    let naive = match NaiveDateTime::parse_from_str(value, pattern) {
        Ok(naive) => naive,
        Err(e) if e.kind() == ParseErrorKind::NotEnough => NaiveDate::parse_from_str(value, pattern)
            .map_err(|e| e.to_string())?
            .and_time(NaiveTime::MIN),
        Err(e) => return Err(e.to_string()),
    };

    zone.localize(&naive)
        .earliest()
        .ok_or_else(|| format!("local time {naive} does not exist in zone {zone}"))
}
