//! Time zone resolution
//!
//! Maps configured zone names to something that can place a wall-clock time
//! on the timeline. `""` and `"UTC"` are UTC, `"LOCAL"` and `"SYSTEM"` are the
//! host zone, and anything else is looked up in the IANA database.

use std::fmt;

use chrono::offset::LocalResult;
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use super::error::TimeParseError;

/// A resolved time zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneRef {
    /// Coordinated Universal Time
    #[default]
    Utc,
    /// The zone configured on the host
    Local,
    /// A zone from the IANA database
    Iana(Tz),
}

impl ZoneRef {
    /// Place a wall-clock time in this zone
    ///
    /// The result is ambiguous during a backward transition and empty during
    /// a forward one.
    pub fn localize(&self, naive: &NaiveDateTime) -> LocalResult<DateTime<FixedOffset>> {
        match self {
            Self::Utc => Utc.from_local_datetime(naive).map(|dt| dt.fixed_offset()),
            Self::Local => Local.from_local_datetime(naive).map(|dt| dt.fixed_offset()),
            Self::Iana(tz) => tz.from_local_datetime(naive).map(|dt| dt.fixed_offset()),
        }
    }
}

impl fmt::Display for ZoneRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utc => f.write_str("UTC"),
            Self::Local => f.write_str("LOCAL"),
            Self::Iana(tz) => f.write_str(tz.name()),
        }
    }
}

/// Resolve a zone name
///
/// # Examples
///
/// ```
/// use zinc_common::time::zone::{resolve_time_zone, ZoneRef};
///
/// assert_eq!(resolve_time_zone("").unwrap(), ZoneRef::Utc);
/// assert_eq!(resolve_time_zone("utc").unwrap(), ZoneRef::Utc);
/// assert_eq!(resolve_time_zone("System").unwrap(), ZoneRef::Local);
/// assert!(resolve_time_zone("Asia/Shanghai").is_ok());
/// assert!(resolve_time_zone("Nowhere/Special").is_err());
/// ```
pub fn resolve_time_zone(name: &str) -> Result<ZoneRef, TimeParseError> {
    if name.is_empty() || name.eq_ignore_ascii_case("UTC") {
        return Ok(ZoneRef::Utc);
    }
    if name.eq_ignore_ascii_case("LOCAL") || name.eq_ignore_ascii_case("SYSTEM") {
        return Ok(ZoneRef::Local);
    }

    name.parse::<Tz>().map(ZoneRef::Iana).map_err(|e| TimeParseError::InvalidTimeZone {
        zone: name.to_string(),
        reason: e.to_string(),
    })
}
