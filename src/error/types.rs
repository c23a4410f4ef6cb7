//! Main error type for the Grok video integration.

use thiserror::Error;
use super::categories::*;
use crate::transport::TransportError;

/// Result type alias for Grok video operations.
pub type GrokVideoResult<T> = Result<T, GrokVideoError>;

/// Top-level error type for the Grok video integration.
#[derive(Error, Debug, Clone)]
pub enum GrokVideoError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Stream error: {0}")]
    Stream(#[from] StreamError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),
}

impl GrokVideoError {
    /// Returns true if this error ends the stream it was raised on.
    ///
    /// Malformed spans and shape mismatches never surface as errors, so only
    /// transport and stream read failures qualify.
    pub fn is_fatal_to_stream(&self) -> bool {
        matches!(self, GrokVideoError::Transport(_) | GrokVideoError::Stream(_))
    }
}

impl From<serde_json::Error> for PromptError {
    fn from(err: serde_json::Error) -> Self {
        PromptError::InvalidJson {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for GrokVideoError {
    fn from(err: serde_json::Error) -> Self {
        GrokVideoError::Prompt(err.into())
    }
}

impl From<TransportError> for StreamError {
    fn from(err: TransportError) -> Self {
        StreamError::ReadFailed {
            message: err.to_string(),
        }
    }
}
