//! Time parsing and formatting helpers
//!
//! This module provides the conversions used when ingesting records:
//! - **[`duration`]**: Duration parsing (`"1h30m"`, `"7d"`, raw nanoseconds)
//! - **[`format`]**: Compact duration formatting (`"1y2M3d4h5m6s"`)
//! - **[`epoch`]**: Epoch timestamps of inferred precision
//! - **[`zone`]**: Time zone name resolution
//! - **[`value`]**: Parsing numeric or string time values into instants
//! - **[`config`]**: Serializable format and zone settings (`serde` feature)
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use zinc_common::time::{
//!     format_duration, instant_from_epoch, parse_duration, parse_time_value, TimeValue,
//! };
//!
//! let retention = parse_duration("30d").unwrap();
//! assert_eq!(retention, TimeDelta::days(30));
//! assert_eq!(format_duration(retention), "1M");
//!
//! let seconds = instant_from_epoch(1_700_000_000);
//! let millis = instant_from_epoch(1_700_000_000_000);
//! assert_eq!(seconds, millis);
//!
//! let parsed = parse_time_value(TimeValue::Str("2023-11-14T22:13:20Z"), "", "UTC").unwrap();
//! assert_eq!(parsed, seconds);
//! ```

#[cfg(feature = "serde")]
pub mod config;
pub mod duration;
pub mod epoch;
pub mod error;
pub mod format;
pub mod value;
pub mod zone;

// Re-export commonly used items
#[cfg(feature = "serde")]
pub use config::TimestampConfig;
pub use duration::{parse_duration, parse_standard_duration, DurationParseError};
pub use epoch::{classify_epoch, instant_from_epoch, EpochUnit};
pub use error::TimeParseError;
pub use format::{format_duration, HumanDuration};
pub use value::{parse_time_value, TimeFormat, TimeValue, EPOCH_MILLIS};
pub use zone::{resolve_time_zone, ZoneRef};
