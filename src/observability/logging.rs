//! Structured logging with sensitive field redaction.

use serde_json::Value;
use crate::config::LogLevel;

/// Field names whose values never reach the log output.
const SENSITIVE_KEYS: [&str; 8] = [
    "authorization", "Authorization",
    "cookie", "Cookie",
    "x-csrf-token", "token",
    "secret", "password",
];

const REDACTED: &str = "***REDACTED***";

/// Logger trait for structured logging.
pub trait Logger: Send + Sync {
    /// Log a debug message with structured context.
    fn debug(&self, message: &str, fields: Value);

    /// Log an info message with structured context.
    fn info(&self, message: &str, fields: Value);

    /// Log a warning message with structured context.
    fn warn(&self, message: &str, fields: Value);

    /// Log an error message with structured context.
    fn error(&self, message: &str, fields: Value);
}

/// Structured logger backed by `tracing`.
///
/// Fields are emitted as a single JSON-rendered `fields` value after
/// sensitive keys (cookies, auth headers, tokens) are masked at any depth.
pub struct StructuredLogger {
    name: String,
    level: LogLevel,
}

impl StructuredLogger {
    /// Create a new structured logger with the given name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            level: LogLevel::Info,
        }
    }

    /// Set the minimum log level for this logger.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    fn should_log(&self, level: LogLevel) -> bool {
        level.rank() <= self.level.rank()
    }

    fn redact_sensitive_fields(fields: Value) -> Value {
        match fields {
            Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| {
                        if SENSITIVE_KEYS.contains(&key.as_str()) {
                            (key, Value::String(REDACTED.to_string()))
                        } else {
                            (key, Self::redact_sensitive_fields(value))
                        }
                    })
                    .collect(),
            ),
            Value::Array(items) => {
                Value::Array(items.into_iter().map(Self::redact_sensitive_fields).collect())
            }
            other => other,
        }
    }
}

impl StructuredLogger {
    fn emit(&self, level: LogLevel, message: &str, fields: Value) {
        if !self.should_log(level) {
            return;
        }

        let fields = Self::redact_sensitive_fields(fields);
        let name = self.name.as_str();
        match level {
            LogLevel::Error => tracing::error!(logger = name, %fields, "{}", message),
            LogLevel::Warn => tracing::warn!(logger = name, %fields, "{}", message),
            LogLevel::Info => tracing::info!(logger = name, %fields, "{}", message),
            LogLevel::Debug => tracing::debug!(logger = name, %fields, "{}", message),
            LogLevel::Trace => tracing::trace!(logger = name, %fields, "{}", message),
        }
    }
}

impl Logger for StructuredLogger {
    fn debug(&self, message: &str, fields: Value) {
        self.emit(LogLevel::Debug, message, fields);
    }

    fn info(&self, message: &str, fields: Value) {
        self.emit(LogLevel::Info, message, fields);
    }

    fn warn(&self, message: &str, fields: Value) {
        self.emit(LogLevel::Warn, message, fields);
    }

    fn error(&self, message: &str, fields: Value) {
        self.emit(LogLevel::Error, message, fields);
    }
}

/// Logger that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn debug(&self, _message: &str, _fields: Value) {}
    fn info(&self, _message: &str, _fields: Value) {}
    fn warn(&self, _message: &str, _fields: Value) {}
    fn error(&self, _message: &str, _fields: Value) {}
}
