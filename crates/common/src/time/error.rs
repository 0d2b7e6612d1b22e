//! Errors raised while turning raw values into instants

use thiserror::Error;

use crate::error::{CommonError, ErrorClassification, ErrorSeverity};

/// Error type for timestamp parsing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("value [{0}] is not a valid timestamp")]
    InvalidTimestamp(String),

    #[error("invalid time zone [{zone}]: {reason}")]
    InvalidTimeZone { zone: String, reason: String },

    #[error("time format [{format}] value [{value}] parse error: {reason}")]
    ParseFailure { format: String, value: String, reason: String },

    #[error("time format is [{format}] but value [{value}] cannot be converted to int")]
    NotAnInteger { format: String, value: String },

    #[error("value type of time must be string or numeric, got {0}")]
    UnsupportedValueType(&'static str),

    #[error("time value is empty")]
    EmptyValue,
}

impl TimeParseError {
    /// Short identifier used as a structured logging field
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidTimestamp(_) => "invalid_timestamp",
            Self::InvalidTimeZone { .. } => "invalid_time_zone",
            Self::ParseFailure { .. } => "parse_failure",
            Self::NotAnInteger { .. } => "not_an_integer",
            Self::UnsupportedValueType(_) => "unsupported_value_type",
            Self::EmptyValue => "empty_value",
        }
    }
}

impl ErrorClassification for TimeParseError {
    fn is_retryable(&self) -> bool {
        false
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyValue => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }

    fn is_critical(&self) -> bool {
        false
    }

    fn retry_after(&self) -> Option<std::time::Duration> {
        None
    }
}

impl From<TimeParseError> for CommonError {
    fn from(err: TimeParseError) -> Self {
        match &err {
            TimeParseError::InvalidTimeZone { zone, .. } => {
                Self::validation_with_value("time_zone", err.to_string(), zone.clone())
            }
            TimeParseError::InvalidTimestamp(value)
            | TimeParseError::ParseFailure { value, .. }
            | TimeParseError::NotAnInteger { value, .. } => {
                Self::validation_with_value("time", err.to_string(), value.clone())
            }
            TimeParseError::UnsupportedValueType(_) | TimeParseError::EmptyValue => {
                Self::validation("time", err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_embed_context() {
        let err = TimeParseError::ParseFailure {
            format: "%Y".to_string(),
            value: "nope".to_string(),
            reason: "input contains invalid characters".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("[%Y]"));
        assert!(message.contains("[nope]"));
        assert!(message.contains("invalid characters"));
        assert_eq!(err.kind(), "parse_failure");
    }

    #[test]
    fn test_classification() {
        assert_eq!(TimeParseError::EmptyValue.severity(), ErrorSeverity::Warning);
        assert_eq!(TimeParseError::UnsupportedValueType("bool").severity(), ErrorSeverity::Error);
        assert!(!TimeParseError::InvalidTimestamp("1".to_string()).is_retryable());
    }

    #[test]
    fn test_into_common_error() {
        let err: CommonError = TimeParseError::InvalidTimeZone {
            zone: "Mars/Olympus".to_string(),
            reason: "unknown".to_string(),
        }
        .into();
        assert!(err.to_string().contains("time_zone"));
        assert!(err.to_string().contains("Mars/Olympus"));
    }
}
