//! Duration parsing from strings
//!
//! Parses duration strings into a signed [`TimeDelta`] with nanosecond
//! resolution. Three strategies are tried in order:
//!
//! 1. A compound unit string such as `"1h30m"`, `"500ms"` or `"-1.5h"`.
//! 2. A whole number of days with a `d` suffix, e.g. `"7d"`.
//! 3. A bare integer, read as a nanosecond count.

use chrono::TimeDelta;
use thiserror::Error;
use tracing::debug;

use crate::error::{CommonError, ErrorClassification, ErrorSeverity};

/// Nanoseconds in one microsecond
pub const NANOS_PER_MICRO: i64 = 1_000;
/// Nanoseconds in one millisecond
pub const NANOS_PER_MILLI: i64 = 1_000_000;
/// Nanoseconds in one second
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;
/// Nanoseconds in one minute
pub const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SECOND;
/// Nanoseconds in one hour
pub const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;
/// Nanoseconds in one day (always 24 hours, calendar irregularities ignored)
pub const NANOS_PER_DAY: i64 = 24 * NANOS_PER_HOUR;

/// Error type for duration parsing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("invalid duration format: {0}")]
    InvalidFormat(String),

    #[error("duration out of range: {0}")]
    Overflow(String),
}

impl ErrorClassification for DurationParseError {
    fn is_retryable(&self) -> bool {
        false
    }

    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Error
    }

    fn is_critical(&self) -> bool {
        false
    }

    fn retry_after(&self) -> Option<std::time::Duration> {
        None
    }
}

impl From<DurationParseError> for CommonError {
    fn from(err: DurationParseError) -> Self {
        let value = match &err {
            DurationParseError::InvalidFormat(v) | DurationParseError::Overflow(v) => v.clone(),
        };
        Self::validation_with_value("duration", err.to_string(), value)
    }
}

/// Parse a duration string into a [`TimeDelta`]
///
/// Supports the following formats:
/// - `"90s"`, `"1m30s"`, `"250ms"`, `"1.5h"`, `"-2m"` - compound units
/// - `"3d"` - whole days (24 hours each)
/// - `"1500"` - a raw nanosecond count
///
/// Day counts cannot be combined with other units: `"1d2h"` is rejected.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use zinc_common::time::duration::parse_duration;
///
/// assert_eq!(parse_duration("1m30s").unwrap(), TimeDelta::seconds(90));
/// assert_eq!(parse_duration("2d").unwrap(), TimeDelta::hours(48));
/// assert_eq!(parse_duration("1500").unwrap(), TimeDelta::nanoseconds(1500));
/// assert!(parse_duration("2D").is_err());
/// ```
pub fn parse_duration(s: &str) -> Result<TimeDelta, DurationParseError> {
    if let Ok(duration) = parse_standard_duration(s) {
        return Ok(duration);
    }

    if let Some(days) = s.strip_suffix('d') {
        debug!(input = s, "falling back to day-suffix duration parsing");
        let days: i64 =
            days.parse().map_err(|_| DurationParseError::InvalidFormat(s.to_string()))?;
        let nanos = days
            .checked_mul(NANOS_PER_DAY)
            .ok_or_else(|| DurationParseError::Overflow(s.to_string()))?;
        return Ok(TimeDelta::nanoseconds(nanos));
    }

    debug!(input = s, "falling back to raw nanosecond duration parsing");
    s.parse::<i64>()
        .map(TimeDelta::nanoseconds)
        .map_err(|_| DurationParseError::InvalidFormat(s.to_string()))
}

/// Parse a compound unit duration string such as `"1h15m30.5s"`
///
/// Accepts an optional sign followed by one or more `<decimal><unit>` groups.
/// Valid units are `ns`, `us` (`µs`, `μs`), `ms`, `s`, `m` and `h`. The lone
/// string `"0"` is accepted without a unit.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use zinc_common::time::duration::parse_standard_duration;
///
/// assert_eq!(parse_standard_duration("1.5h").unwrap(), TimeDelta::minutes(90));
/// assert_eq!(parse_standard_duration("-250ms").unwrap(), TimeDelta::milliseconds(-250));
/// assert!(parse_standard_duration("3d").is_err());
/// ```
pub fn parse_standard_duration(s: &str) -> Result<TimeDelta, DurationParseError> {
    let invalid = || DurationParseError::InvalidFormat(s.to_string());

    let (negative, mut rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    if rest == "0" {
        return Ok(TimeDelta::zero());
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let (whole, after_whole) = split_digits(rest);
        let whole_value = if whole.is_empty() {
            0
        } else {
            parse_whole(whole).ok_or_else(|| DurationParseError::Overflow(s.to_string()))?
        };

        let mut fraction = (0_u64, 1.0_f64);
        let mut has_fraction = false;
        rest = after_whole;
        if let Some(after_dot) = rest.strip_prefix('.') {
            let (digits, after_digits) = split_digits(after_dot);
            has_fraction = !digits.is_empty();
            fraction = parse_fraction(digits);
            rest = after_digits;
        }

        if whole.is_empty() && !has_fraction {
            return Err(invalid());
        }

        let unit_end = rest.find(|c: char| c == '.' || c.is_ascii_digit()).unwrap_or(rest.len());
        let (unit, after_unit) = rest.split_at(unit_end);
        let unit_nanos = unit_in_nanos(unit).ok_or_else(invalid)?;
        rest = after_unit;

        let mut group = whole_value
            .checked_mul(unit_nanos)
            .ok_or_else(|| DurationParseError::Overflow(s.to_string()))?;
        let (fraction_value, scale) = fraction;
        if fraction_value > 0 {
            // Truncation matches the integer nanosecond resolution.
            let extra = (fraction_value as f64 * (unit_nanos as f64 / scale)) as u64;
            group =
                group.checked_add(extra).ok_or_else(|| DurationParseError::Overflow(s.to_string()))?;
        }

        total =
            total.checked_add(group).ok_or_else(|| DurationParseError::Overflow(s.to_string()))?;
    }

    let nanos = if negative {
        if total > i64::MAX as u64 + 1 {
            return Err(DurationParseError::Overflow(s.to_string()));
        }
        0_i64.wrapping_sub_unsigned(total)
    } else {
        i64::try_from(total).map_err(|_| DurationParseError::Overflow(s.to_string()))?
    };

    Ok(TimeDelta::nanoseconds(nanos))
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn parse_whole(digits: &str) -> Option<u64> {
    digits.bytes().try_fold(0_u64, |acc, b| {
        acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
    })
}

/// Returns the fraction digits as an integer together with their scale.
///
/// Digits past the point where the value would overflow are dropped.
fn parse_fraction(digits: &str) -> (u64, f64) {
    let mut value = 0_u64;
    let mut scale = 1.0_f64;
    for b in digits.bytes() {
        let Some(next) = value.checked_mul(10).and_then(|v| v.checked_add(u64::from(b - b'0')))
        else {
            break;
        };
        value = next;
        scale *= 10.0;
    }
    (value, scale)
}

fn unit_in_nanos(unit: &str) -> Option<u64> {
    let nanos = match unit {
        "ns" => 1,
        "us" | "\u{b5}s" | "\u{3bc}s" => NANOS_PER_MICRO,
        "ms" => NANOS_PER_MILLI,
        "s" => NANOS_PER_SECOND,
        "m" => NANOS_PER_MINUTE,
        "h" => NANOS_PER_HOUR,
        _ => return None,
    };
    Some(nanos as u64)
}
