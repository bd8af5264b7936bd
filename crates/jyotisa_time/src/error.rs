//! Error types for civil time parsing and normalization.

use thiserror::Error;

/// Errors from date, clock-time, or timezone normalization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
    /// Clock-time string is malformed or has out-of-range fields.
    #[error("invalid time '{input}': {reason}")]
    InvalidTime { input: String, reason: &'static str },
    /// Timezone name is not in the IANA database.
    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),
    /// Local time falls into a daylight-saving gap and never occurs.
    #[error("local time {0} does not exist in the given timezone")]
    NonexistentLocalTime(String),
    /// Instant string could not be parsed as RFC 3339 or a naive local datetime.
    #[error("invalid datetime '{0}'")]
    InvalidInstant(String),
    /// Julian date is outside the representable calendar range.
    #[error("julian date {0} is out of range")]
    JulianOutOfRange(String),
}

impl TimeError {
    pub(crate) fn time(input: &str, reason: &'static str) -> Self {
        Self::InvalidTime {
            input: input.to_string(),
            reason,
        }
    }
}
