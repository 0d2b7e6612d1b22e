//! Time and duration helpers shared across Zinc crates.
//!
//! # Safety and Quality
//!
//! Everything here is a pure function over its inputs: no I/O beyond the
//! time zone database lookup, no shared mutable state.
//!
//! # Feature Tiers
//!
//! - default: duration parsing/formatting, epoch classification, time value
//!   parsing and zone resolution
//! - `serde` (on by default): [`time::TimestampConfig`], TOML loading and
//!   conversion from `serde_json::Value`

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod error;
pub mod time;

// Re-export commonly used types and traits for convenience
pub use error::{CommonError, CommonResult, ErrorClassification, ErrorSeverity};
#[cfg(feature = "serde")]
pub use time::TimestampConfig;
pub use time::{
    format_duration, instant_from_epoch, parse_duration, parse_time_value, resolve_time_zone,
    DurationParseError, EpochUnit, HumanDuration, TimeParseError, TimeValue, ZoneRef,
};
