//! Error types for search and orchestration.

use jyotisa_core::ProviderError;
use jyotisa_vedic_base::VedicError;
use thiserror::Error;

/// Errors from panchanga, chart and dasha searches.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Error from the ephemeris or sun-times provider.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),
    /// Error from Vedic base calculations.
    #[error("vedic error: {0}")]
    Vedic(#[from] VedicError),
    /// Invalid search configuration.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// Requested method exists by name but has no implementation.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}
