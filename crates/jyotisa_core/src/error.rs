//! Error types for ephemeris providers.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::Body;

/// Errors raised by an [`EphemerisProvider`](crate::EphemerisProvider) or
/// [`SunTimesProvider`](crate::SunTimesProvider).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// Geographic coordinates failed validation.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Ayanamsha name not recognized.
    #[error("unknown ayanamsha '{0}'")]
    UnknownAyanamsha(String),
    /// Body name not recognized.
    #[error("unknown body '{0}'")]
    UnknownBody(String),
    /// Requested instant lies outside the provider's coverage.
    #[error("instant {0} is outside the ephemeris coverage")]
    OutOfRange(DateTime<Utc>),
    /// Provider has no data for the requested body.
    #[error("no ephemeris data for {0:?}")]
    MissingBody(Body),
    /// Reference table could not be read or is malformed.
    #[error("invalid ephemeris table: {0}")]
    InvalidTable(String),
    /// Sun does not rise or does not set on the requested date.
    #[error("no sunrise/sunset: {0}")]
    NoRiseSet(&'static str),
    /// Numerical computation failed.
    #[error("numerical failure: {0}")]
    Numerical(&'static str),
}
