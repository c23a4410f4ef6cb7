//! Observability layer for the Grok video integration.
//!
//! Logging goes through the `tracing` ecosystem. Components that log request
//! metadata take a [`Logger`] so tests can swap in [`NoopLogger`]; the stream
//! machinery logs through `tracing` macros directly.
//!
//! ```rust
//! use integrations_grok_video::observability::{Logger, StructuredLogger};
//! use integrations_grok_video::config::LogLevel;
//! use serde_json::json;
//!
//! let logger = StructuredLogger::new("grok_video.interceptor")
//!     .with_level(LogLevel::Debug);
//!
//! logger.debug("Intercepted response stream", json!({
//!     "url": "https://grok.com/rest/app-chat/conversations/new",
//!     "cookie": "sso=abc"
//! }));
//! ```

pub mod logging;

pub use logging::{Logger, NoopLogger, StructuredLogger};

/// Create the default logger for a component.
pub fn create_logger(name: &str, level: crate::config::LogLevel) -> Box<dyn Logger> {
    Box::new(StructuredLogger::new(name).with_level(level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;
    use serde_json::json;

    #[test]
    fn test_create_logger() {
        let logger = create_logger("test", LogLevel::Debug);
        logger.debug("test", json!({}));
        logger.error("test", json!({"url": "https://example.com"}));
    }
}
