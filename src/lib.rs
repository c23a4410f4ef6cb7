//! # Grok Video Prompt Capture
//!
//! Watches the response stream of Grok's conversation endpoint and captures
//! the structured video prompt once a generation finishes.
//!
//! ## Features
//!
//! - Transport decorator that tees matching response bodies without
//!   disturbing the caller's copy
//! - Incremental brace-depth scanner for undelimited JSON object streams
//! - Completion detection and merge over a fixed-shape prompt template
//! - Shared current-prompt slot with plain-text and JSON rendering
//! - Optional audible cue on completion
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integrations_grok_video::{create_client, GrokVideoConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GrokVideoConfig::builder()
//!         .sound_enabled(false)
//!         .build()?;
//!
//!     let client = create_client(config)?;
//!     println!("{}", client.export_json()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `client` - Composition root and factory functions
//! - `config` - Configuration types and builder
//! - `transport` - HTTP transport layer and stream tee
//! - `interceptor` - Request matching and per-stream monitoring
//! - `streaming` - Chunk decoding, scanning and completion detection
//! - `types` - Video prompt model and template merge
//! - `render` - Plain-text and JSON output
//! - `state` - Current prompt slot
//! - `notify` - Success cue
//! - `error` - Error types and taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod notify;
pub mod observability;
pub mod render;
pub mod state;
pub mod streaming;
pub mod transport;
pub mod types;

// Testing support - always available for integration tests
pub mod mocks;

pub use client::{create_client, create_client_from_env, GrokVideoClient};
pub use config::{
    GrokVideoConfig, GrokVideoConfigBuilder, LogLevel, DEFAULT_CONNECT_TIMEOUT_SECS,
    DEFAULT_ENDPOINT_PATTERN, DEFAULT_TIMEOUT_SECS,
};
pub use error::{GrokVideoError, GrokVideoResult, PromptError, StreamError};
pub use interceptor::{InterceptRule, InterceptingTransport, StreamMonitor, StreamOutcome};
pub use state::{CompletionDispatcher, PromptState};
pub use streaming::{CompletionEvent, StreamExtractor, StreamObserver};
pub use types::VideoPrompt;
