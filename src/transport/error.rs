//! Transport layer error types.

/// Transport error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The connection could not be established or broke.
    #[error("Connection error: {0}")]
    Connection(String),
    /// The request timed out.
    #[error("Timeout")]
    Timeout,
    /// The request was rejected or its body could not be read.
    #[error("Request error: {0}")]
    Request(String),
}
