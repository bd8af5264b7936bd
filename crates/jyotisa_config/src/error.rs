//! Error types for configuration loading.

use jyotisa_core::ProviderError;
use jyotisa_search::SearchError;
use jyotisa_time::TimeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("cannot read config {path}: {message}")]
    Io { path: String, message: String },
    /// Config text is not valid TOML for this schema.
    #[error("invalid config: {0}")]
    Parse(String),
    /// A value parsed but is out of range.
    #[error("invalid config value: {0}")]
    Invalid(&'static str),
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Search(#[from] SearchError),
}
