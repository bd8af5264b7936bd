//! Error types for Vedic calculations.

use jyotisa_core::ProviderError;
use jyotisa_time::TimeError;
use thiserror::Error;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from the ephemeris or sun-times provider.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),
    /// Error from time conversion.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Invalid input parameter.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Dasha depth outside 1..=3.
    #[error("unsupported dasha depth {0}: expected 1, 2 or 3")]
    InvalidDashaLevel(u8),
    /// Iterative algorithm did not converge.
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
}
