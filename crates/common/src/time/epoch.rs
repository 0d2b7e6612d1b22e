//! Epoch timestamps of unknown precision
//!
//! Log sources disagree on the unit of numeric timestamps. The magnitude of
//! the value decides: anything above 10^18 is nanoseconds, above 10^15
//! microseconds, above 10^12 milliseconds, and everything else (negative
//! values included) is seconds.

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

const NANOS_THRESHOLD: i64 = 1_000_000_000_000_000_000;
const MICROS_THRESHOLD: i64 = 1_000_000_000_000_000;
const MILLIS_THRESHOLD: i64 = 1_000_000_000_000;

/// Unit inferred for a numeric epoch timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EpochUnit {
    /// 12 digits or fewer, and every negative value
    Seconds,
    /// 13 to 15 digits
    Milliseconds,
    /// 16 to 18 digits
    Microseconds,
    /// 19 digits
    Nanoseconds,
}

impl EpochUnit {
    /// Interpret `value` in this unit, or `None` if the instant is outside
    /// the representable calendar range
    pub fn to_instant(self, value: i64) -> Option<DateTime<Utc>> {
        match self {
            Self::Seconds => DateTime::from_timestamp(value, 0),
            Self::Milliseconds => DateTime::from_timestamp_millis(value),
            Self::Microseconds => DateTime::from_timestamp_micros(value),
            Self::Nanoseconds => Some(DateTime::from_timestamp_nanos(value)),
        }
    }

    /// Short name used in logs
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Seconds => "s",
            Self::Milliseconds => "ms",
            Self::Microseconds => "us",
            Self::Nanoseconds => "ns",
        }
    }
}

impl std::fmt::Display for EpochUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infer the unit of an epoch timestamp from its magnitude
///
/// Negative values are always seconds.
///
/// ```
/// use zinc_common::time::epoch::{classify_epoch, EpochUnit};
///
/// assert_eq!(classify_epoch(1_700_000_000), EpochUnit::Seconds);
/// assert_eq!(classify_epoch(1_700_000_000_000), EpochUnit::Milliseconds);
/// assert_eq!(classify_epoch(-1_700_000_000_000), EpochUnit::Seconds);
/// ```
pub const fn classify_epoch(value: i64) -> EpochUnit {
    if value > NANOS_THRESHOLD {
        EpochUnit::Nanoseconds
    } else if value > MICROS_THRESHOLD {
        EpochUnit::Microseconds
    } else if value > MILLIS_THRESHOLD {
        EpochUnit::Milliseconds
    } else {
        EpochUnit::Seconds
    }
}

/// Convert an epoch timestamp of unknown precision into an instant
///
/// Zero is the epoch itself. Values that cannot be represented collapse to
/// the epoch as well, so a nonzero input producing
/// [`DateTime::UNIX_EPOCH`] means the timestamp was invalid.
///
/// ```
/// use chrono::DateTime;
/// use zinc_common::time::epoch::instant_from_epoch;
///
/// assert_eq!(instant_from_epoch(0), DateTime::UNIX_EPOCH);
/// assert_eq!(instant_from_epoch(1_700_000_000), instant_from_epoch(1_700_000_000_000));
/// ```
pub fn instant_from_epoch(value: i64) -> DateTime<Utc> {
    if value == 0 {
        return DateTime::UNIX_EPOCH;
    }

    let unit = classify_epoch(value);
    trace!(value, %unit, "classified epoch timestamp");

    unit.to_instant(value).unwrap_or_else(|| {
        debug!(value, %unit, "epoch timestamp out of range");
        DateTime::UNIX_EPOCH
    })
}
