//! Unified Error Model
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("CONFIG/{0}")]
    Config(String),

    #[error("CONFIG/UNKNOWN_FILTER: {0}")]
    UnknownFilterType(String),

    #[error("CONFIG/DUPLICATE_FILTER: {0}")]
    DuplicateFilterType(String),

    #[error("CONFIG/FILTER {filter_type}: {reason}")]
    InvalidFilterConfig { filter_type: String, reason: String },

    #[error("HARNESS/TIMEOUT: no output event within {0:?}")]
    Timeout(Duration),

    #[error("HARNESS/CLOSED: pipeline channel closed")]
    ChannelClosed,

    #[error("HARNESS/DEBUGCH: debug output channel is disabled")]
    DebugChannelDisabled,
}

impl PipelineError {
    /// Wraps a stage binding failure for the given filter type.
    pub fn invalid_filter(filter_type: &str, reason: impl ToString) -> Self {
        Self::InvalidFilterConfig {
            filter_type: filter_type.to_string(),
            reason: reason.to_string(),
        }
    }

    /// True for errors raised while loading configuration.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::UnknownFilterType(_)
                | Self::DuplicateFilterType(_)
                | Self::InvalidFilterConfig { .. }
        )
    }
}

impl From<serde_yaml::Error> for PipelineError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
