//! Timestamp field configuration
//!
//! Stream settings name the format and zone used for a record's timestamp
//! field. The same pair is handed to
//! [`parse_time_value`](super::value::parse_time_value) for every record, so
//! it is validated once up front.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::TimeParseError;
use super::value::{parse_time_value, TimeFormat, TimeValue};
use super::zone::resolve_time_zone;
use crate::error::{CommonError, CommonResult};

/// Format and zone for a timestamp field
///
/// Both fields default to empty: RFC 3339 in UTC.
///
/// ```toml
/// format = "%Y-%m-%d %H:%M:%S"
/// time_zone = "Asia/Shanghai"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimestampConfig {
    /// `""`, `rfc3339`, `rfc2822`, `epoch_millis` or a strftime pattern
    pub format: String,
    /// `""`, `UTC`, `LOCAL`, `SYSTEM` or an IANA zone name
    pub time_zone: String,
}

impl TimestampConfig {
    /// Create a config from a format and a zone name
    pub fn new<F: Into<String>, Z: Into<String>>(format: F, time_zone: Z) -> Self {
        Self { format: format.into(), time_zone: time_zone.into() }
    }

    /// Load and validate a config from TOML
    pub fn from_toml_str(input: &str) -> CommonResult<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the zone resolves and the pattern is well formed
    pub fn validate(&self) -> CommonResult<()> {
        self.check().inspect_err(|err| {
            warn!(fields = ?err.as_tracing_fields(), "rejected timestamp config");
        })
    }

    fn check(&self) -> CommonResult<()> {
        resolve_time_zone(&self.time_zone).map_err(|e| match e {
            TimeParseError::InvalidTimeZone { reason, .. } => {
                CommonError::config_field("time_zone", format!("{}: {reason}", self.time_zone))
            }
            other => CommonError::from(other),
        })?;

        if let TimeFormat::Pattern(pattern) = TimeFormat::from_spec(&self.format) {
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(CommonError::config_field(
                    "format",
                    format!("invalid strftime pattern: {pattern}"),
                ));
            }
        }

        Ok(())
    }

    /// Parse a value with this config's format and zone
    pub fn parse<'a, V: Into<TimeValue<'a>>>(
        &self,
        value: V,
    ) -> Result<DateTime<FixedOffset>, TimeParseError> {
        parse_time_value(value.into(), &self.format, &self.time_zone)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for time::config.
    use chrono::{TimeZone, Utc};

    use super::*;

    /// Validates defaults when fields are omitted.
    #[test]
    fn test_defaults() {
        let config = TimestampConfig::from_toml_str("").unwrap();
        assert_eq!(config, TimestampConfig::default());
        assert_eq!(
            config.parse("2024-01-01T00:00:00Z").unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
    }

    /// Validates a full TOML config drives parsing.
    #[test]
    fn test_from_toml() {
        let config = TimestampConfig::from_toml_str(
            r#"
            format = "%d/%m/%Y %H:%M"
            time_zone = "Europe/London"
            "#,
        )
        .unwrap();
        assert_eq!(config, TimestampConfig::new("%d/%m/%Y %H:%M", "Europe/London"));
        assert_eq!(
            config.parse("01/07/2024 13:00").unwrap(),
            Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap()
        );
        assert_eq!(
            config.parse(1_700_000_000_i64).unwrap(),
            Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap()
        );
    }

    /// Validates rejected configs.
    ///
    /// Assertions:
    /// - Ensures an unknown zone is a config error on `time_zone`.
    /// - Ensures a dangling `%` is a config error on `format`.
    /// - Ensures malformed TOML is a serialization error.
    #[test]
    fn test_invalid_configs() {
        let err = TimestampConfig::new("", "Atlantis/Capital").validate().unwrap_err();
        assert!(matches!(err, CommonError::Config { field: Some(ref f), .. } if f == "time_zone"));

        let err = TimestampConfig::new("%Y-%", "").validate().unwrap_err();
        assert!(matches!(err, CommonError::Config { field: Some(ref f), .. } if f == "format"));

        let err = TimestampConfig::from_toml_str("format = ").unwrap_err();
        assert!(matches!(err, CommonError::Serialization { .. }));
    }

    /// Validates named formats skip the pattern check.
    #[test]
    fn test_named_formats_validate() {
        assert!(TimestampConfig::new("epoch_millis", "").validate().is_ok());
        assert!(TimestampConfig::new("RFC2822", "local").validate().is_ok());
    }
}
