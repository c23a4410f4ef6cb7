//! Error category types for granular error handling.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Invalid environment variable {name}: {value}")]
    InvalidEnvironment { name: String, value: String },
}

/// Errors raised while reading an intercepted response stream.
///
/// These are fatal to the single stream that produced them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    #[error("Failed to read stream chunk: {message}")]
    ReadFailed { message: String },
}

/// Errors raised while converting or rendering a video prompt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    #[error("Prompt is not valid JSON: {message}")]
    InvalidJson { message: String },

    #[error("Prompt payload is not a JSON object")]
    NotAnObject,

    #[error("Unexpected prompt shape: {message}")]
    UnexpectedShape { message: String },
}
