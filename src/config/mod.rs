//! Configuration types for the Grok video integration.

use std::time::Duration;
use crate::error::{ConfigurationError, GrokVideoError};
use crate::transport::HttpMethod;

/// Substring identifying the conversation-creation endpoint whose responses
/// carry video generation progress.
pub const DEFAULT_ENDPOINT_PATTERN: &str = "/rest/app-chat/conversations/new";

/// Default request timeout (120 seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default connect timeout (30 seconds).
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Log level for the integration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Error level - only errors.
    Error,
    /// Warning level - errors and warnings.
    Warn,
    /// Info level - general information.
    #[default]
    Info,
    /// Debug level - detailed information.
    Debug,
    /// Trace level - very detailed information.
    Trace,
}

impl LogLevel {
    /// Parse a level name, ignoring case.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    /// Verbosity rank; higher is more verbose.
    pub(crate) fn rank(self) -> u8 {
        match self {
            LogLevel::Error => 0,
            LogLevel::Warn => 1,
            LogLevel::Info => 2,
            LogLevel::Debug => 3,
            LogLevel::Trace => 4,
        }
    }
}

/// Configuration for response interception and prompt handling.
#[derive(Clone, Debug)]
pub struct GrokVideoConfig {
    /// URL substring a request must contain to be observed.
    pub endpoint_pattern: String,
    /// HTTP method a request must use to be observed.
    pub intercept_method: HttpMethod,
    /// Play the success cue when a generation completes.
    pub sound_enabled: bool,
    /// Log level.
    pub log_level: LogLevel,
    /// Request timeout for the HTTP transport.
    pub timeout: Duration,
    /// Connect timeout for the HTTP transport.
    pub connect_timeout: Duration,
}

impl Default for GrokVideoConfig {
    fn default() -> Self {
        Self {
            endpoint_pattern: DEFAULT_ENDPOINT_PATTERN.to_string(),
            intercept_method: HttpMethod::Post,
            sound_enabled: true,
            log_level: LogLevel::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl GrokVideoConfig {
    /// Create a new configuration builder.
    pub fn builder() -> GrokVideoConfigBuilder {
        GrokVideoConfigBuilder::default()
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `GROK_VIDEO_ENDPOINT_PATTERN`, `GROK_VIDEO_SOUND_ENABLED`,
    /// `GROK_VIDEO_LOG_LEVEL` and `GROK_VIDEO_TIMEOUT_SECS`. Unset variables
    /// fall back to defaults; set but unparsable ones are rejected.
    pub fn from_env() -> Result<Self, GrokVideoError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, GrokVideoError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(pattern) = lookup("GROK_VIDEO_ENDPOINT_PATTERN") {
            builder = builder.endpoint_pattern(&pattern);
        }

        if let Some(value) = lookup("GROK_VIDEO_SOUND_ENABLED") {
            let enabled = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => return Err(invalid_env("GROK_VIDEO_SOUND_ENABLED", &value)),
            };
            builder = builder.sound_enabled(enabled);
        }

        if let Some(value) = lookup("GROK_VIDEO_LOG_LEVEL") {
            let level = LogLevel::parse(&value)
                .ok_or_else(|| invalid_env("GROK_VIDEO_LOG_LEVEL", &value))?;
            builder = builder.log_level(level);
        }

        if let Some(value) = lookup("GROK_VIDEO_TIMEOUT_SECS") {
            let secs: u64 = value
                .trim()
                .parse()
                .map_err(|_| invalid_env("GROK_VIDEO_TIMEOUT_SECS", &value))?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }
}

fn invalid_env(name: &str, value: &str) -> GrokVideoError {
    ConfigurationError::InvalidEnvironment {
        name: name.to_string(),
        value: value.to_string(),
    }
    .into()
}

/// Builder for GrokVideoConfig.
#[derive(Default)]
pub struct GrokVideoConfigBuilder {
    endpoint_pattern: Option<String>,
    intercept_method: Option<HttpMethod>,
    sound_enabled: Option<bool>,
    log_level: Option<LogLevel>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl GrokVideoConfigBuilder {
    /// Set the URL substring that selects requests to observe.
    pub fn endpoint_pattern(mut self, pattern: &str) -> Self {
        self.endpoint_pattern = Some(pattern.to_string());
        self
    }

    /// Set the HTTP method that selects requests to observe.
    pub fn intercept_method(mut self, method: HttpMethod) -> Self {
        self.intercept_method = Some(method);
        self
    }

    /// Enable or disable the success cue.
    pub fn sound_enabled(mut self, enabled: bool) -> Self {
        self.sound_enabled = Some(enabled);
        self
    }

    /// Set the log level.
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<GrokVideoConfig, GrokVideoError> {
        let defaults = GrokVideoConfig::default();

        let endpoint_pattern = self.endpoint_pattern.unwrap_or(defaults.endpoint_pattern);
        if endpoint_pattern.is_empty() {
            return Err(ConfigurationError::InvalidConfiguration {
                message: "endpoint pattern must not be empty".to_string(),
            }
            .into());
        }

        let timeout = self.timeout.unwrap_or(defaults.timeout);
        let connect_timeout = self.connect_timeout.unwrap_or(defaults.connect_timeout);
        if timeout.is_zero() || connect_timeout.is_zero() {
            return Err(ConfigurationError::InvalidConfiguration {
                message: "timeouts must be greater than zero".to_string(),
            }
            .into());
        }

        Ok(GrokVideoConfig {
            endpoint_pattern,
            intercept_method: self.intercept_method.unwrap_or(defaults.intercept_method),
            sound_enabled: self.sound_enabled.unwrap_or(defaults.sound_enabled),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            timeout,
            connect_timeout,
        })
    }
}
