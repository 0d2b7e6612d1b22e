//! Compact duration formatting
//!
//! Formats durations with a greedy largest-unit-first decomposition over a
//! fixed calendar approximation: a month is 30 days and a year is 12 months.
//! Output is meant for display, so it does not always parse back through
//! [`parse_duration`](super::duration::parse_duration).

use std::fmt::Write as _;

use chrono::TimeDelta;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_MONTH: u64 = 30 * SECONDS_PER_DAY;
const SECONDS_PER_YEAR: u64 = 12 * SECONDS_PER_MONTH;

/// Units in strictly descending order. `M` is months, `m` is minutes.
const UNITS: [(u64, char); 6] = [
    (SECONDS_PER_YEAR, 'y'),
    (SECONDS_PER_MONTH, 'M'),
    (SECONDS_PER_DAY, 'd'),
    (SECONDS_PER_HOUR, 'h'),
    (SECONDS_PER_MINUTE, 'm'),
    (1, 's'),
];

/// Format a duration as a compact string such as `"1y2M3d4h5m6s"`
///
/// Zero units are skipped and sub-second precision is dropped. Durations
/// shorter than one second format as `"0s"`; negative durations get a
/// leading `-`.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use zinc_common::time::format::format_duration;
///
/// assert_eq!(format_duration(TimeDelta::zero()), "0s");
/// assert_eq!(format_duration(TimeDelta::seconds(90)), "1m30s");
/// assert_eq!(format_duration(TimeDelta::hours(2)), "2h");
/// assert_eq!(format_duration(TimeDelta::days(45)), "1M15d");
/// ```
pub fn format_duration(duration: TimeDelta) -> String {
    let seconds = duration.num_seconds();
    let mut remaining = seconds.unsigned_abs();

    let mut out = String::with_capacity(16);
    if seconds < 0 {
        out.push('-');
    }

    for (unit, suffix) in UNITS {
        if remaining >= unit {
            let count = remaining / unit;
            // Writing to a String cannot fail.
            let _ = write!(out, "{count}{suffix}");
            remaining -= count * unit;
        }
    }

    if seconds == 0 {
        out.clear();
        out.push_str("0s");
    }

    out
}

/// A [`TimeDelta`] that displays and parses in the compact duration syntax
///
/// `Display` uses [`format_duration`] and `FromStr` uses
/// [`parse_duration`](super::duration::parse_duration), so the same
/// asymmetry applies: `"1M"` is displayed but not parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HumanDuration(pub TimeDelta);

impl HumanDuration {
    /// Returns the wrapped duration
    pub fn into_inner(self) -> TimeDelta {
        self.0
    }
}

impl From<TimeDelta> for HumanDuration {
    fn from(duration: TimeDelta) -> Self {
        Self(duration)
    }
}

impl std::fmt::Display for HumanDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_duration(self.0))
    }
}

impl std::str::FromStr for HumanDuration {
    type Err = super::duration::DurationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::duration::parse_duration(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for time::format.
    use super::*;
    use crate::time::duration::parse_duration;

    /// Validates the zero and sub-second cases.
    ///
    /// Assertions:
    /// - Confirms zero formats as `"0s"`.
    /// - Confirms 500ms formats as `"0s"` because sub-second precision is
    ///   dropped.
    #[test]
    fn test_format_zero_and_subsecond() {
        assert_eq!(format_duration(TimeDelta::zero()), "0s");
        assert_eq!(format_duration(TimeDelta::milliseconds(500)), "0s");
        assert_eq!(format_duration(TimeDelta::milliseconds(1500)), "1s");
    }

    /// Validates that trailing zero units are omitted.
    #[test]
    fn test_format_omits_zero_units() {
        assert_eq!(format_duration(TimeDelta::seconds(7200)), "2h");
        assert_eq!(format_duration(TimeDelta::seconds(90)), "1m30s");
        assert_eq!(format_duration(TimeDelta::seconds(3605)), "1h5s");
        assert_eq!(format_duration(TimeDelta::days(1)), "1d");
    }

    /// Validates the approximate calendar units.
    ///
    /// Assertions:
    /// - Confirms 30 days is one month (`M`), distinct from minutes (`m`).
    /// - Confirms 360 days is one year and 365 days is `"1y5d"`.
    #[test]
    fn test_format_calendar_units() {
        assert_eq!(format_duration(TimeDelta::days(30)), "1M");
        assert_eq!(format_duration(TimeDelta::days(360)), "1y");
        assert_eq!(format_duration(TimeDelta::days(365)), "1y5d");
        let mixed = TimeDelta::days(400) + TimeDelta::hours(3) + TimeDelta::minutes(4);
        assert_eq!(format_duration(mixed), "1y1M10d3h4m");
    }

    /// Validates negative durations are prefixed with `-`.
    #[test]
    fn test_format_negative() {
        assert_eq!(format_duration(TimeDelta::seconds(-90)), "-1m30s");
        assert_eq!(format_duration(TimeDelta::milliseconds(-10)), "0s");
    }

    /// Documents that formatted output is not always parseable.
    ///
    /// Assertions:
    /// - Confirms units below a day round-trip.
    /// - Confirms a single day count round-trips through the day fallback.
    /// - Ensures month and mixed day outputs are rejected by the parser.
    #[test]
    fn test_format_parse_asymmetry() {
        let short = TimeDelta::seconds(5_430);
        assert_eq!(parse_duration(&format_duration(short)).unwrap(), short);

        let days = TimeDelta::days(3);
        assert_eq!(parse_duration(&format_duration(days)).unwrap(), days);

        assert!(parse_duration(&format_duration(TimeDelta::days(30))).is_err());
        assert!(parse_duration(&format_duration(TimeDelta::hours(26))).is_err());
    }

    /// Validates the `HumanDuration` display and parse impls.
    #[test]
    fn test_human_duration() {
        let parsed: HumanDuration = "2h15m".parse().unwrap();
        assert_eq!(parsed.into_inner(), TimeDelta::minutes(135));
        assert_eq!(parsed.to_string(), "2h15m");
        assert!("1M".parse::<HumanDuration>().is_err());
    }
}
