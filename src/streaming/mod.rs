//! Incremental extraction of JSON objects from an intercepted response body.
//!
//! The generation endpoint streams a sequence of JSON objects with no
//! delimiter between them. [`StreamExtractor`] accumulates decoded text,
//! runs a brace-depth scan over the whole buffer after every chunk, parses each
//! balanced `{...}` span it finds and hands the results to a
//! [`StreamObserver`]. Objects reporting a finished generation are turned into
//! [`CompletionEvent`]s by [`detect_completion`].
//!
//! The scan counts braces without tracking string literals, so a `{` or `}`
//! inside a string value shifts the depth count. Spans cut short this way fail
//! to parse and are dropped like any other malformed span.
//!
//! ```rust
//! use integrations_grok_video::streaming::{detect_completion, StreamExtractor};
//!
//! let mut extractor = StreamExtractor::new();
//! assert!(extractor.feed(r#"{"result":{"response":{"streamingVideoGeneration"#).is_empty());
//!
//! let objects = extractor.feed(
//!     r#"Response":{"progress":100,"videoPrompt":"{\"motion\":\"slow pan\"}"}}}}"#,
//! );
//! assert_eq!(objects.len(), 1);
//!
//! let event = detect_completion(&objects[0]).unwrap();
//! assert_eq!(event.prompt["motion"], "slow pan");
//! ```

mod completion;
mod decoder;
mod extractor;
mod observer;
mod scanner;

pub use completion::{detect_completion, CompletionEvent, COMPLETE_PROGRESS, PROGRESS_POINTER};
pub use decoder::Utf8ChunkDecoder;
pub use extractor::{try_parse, ExtractorPhase, StreamExtractor, StreamSummary};
pub use observer::StreamObserver;
pub use scanner::{scan_pass, ScanPass};
