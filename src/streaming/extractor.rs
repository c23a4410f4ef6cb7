//! Stateful extractor driving the scan over a chunked response body.

use bytes::Bytes;
use futures::{Stream, StreamExt};
use serde_json::Value;
use uuid::Uuid;

use super::completion::detect_completion;
use super::decoder::Utf8ChunkDecoder;
use super::observer::StreamObserver;
use super::scanner::scan_pass;
use crate::error::StreamError;
use crate::transport::TransportError;

/// Lifecycle of an extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractorPhase {
    /// Created, not yet pulling.
    Idle,
    /// Awaiting the next chunk.
    Reading,
    /// Scanning the buffer after a chunk arrived.
    Draining,
    /// Source ended or failed.
    Terminated,
}

/// Counts gathered while running over one stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    /// Chunks received from the source.
    pub chunks: usize,
    /// Spans that parsed as JSON.
    pub objects: usize,
    /// Objects that reported a finished generation.
    pub completions: usize,
}

/// Pulls complete JSON objects out of one response body.
///
/// One extractor serves exactly one stream; its buffer is never shared.
pub struct StreamExtractor {
    stream_id: Uuid,
    buffer: String,
    decoder: Utf8ChunkDecoder,
    phase: ExtractorPhase,
    summary: StreamSummary,
}

impl StreamExtractor {
    /// Create an idle extractor with an empty buffer.
    pub fn new() -> Self {
        Self {
            stream_id: Uuid::new_v4(),
            buffer: String::new(),
            decoder: Utf8ChunkDecoder::new(),
            phase: ExtractorPhase::Idle,
            summary: StreamSummary::default(),
        }
    }

    /// Identifier attached to this extractor's log events.
    pub fn stream_id(&self) -> Uuid {
        self.stream_id
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> ExtractorPhase {
        self.phase
    }

    /// Text received but not yet attributed to a completed object.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Counts gathered so far.
    pub fn summary(&self) -> StreamSummary {
        self.summary
    }

    /// Decode a raw chunk and run one scan pass.
    pub fn feed_bytes(&mut self, chunk: &[u8]) -> Vec<Value> {
        let text = self.decoder.decode(chunk);
        self.feed(&text)
    }

    /// Append `text` and run one scan pass over the whole buffer.
    ///
    /// Returns the spans that parsed, in order. Everything up to the end of the
    /// last balanced span is then dropped from the buffer, whether or not that
    /// span parsed; a trailing partial object stays for the next call.
    pub fn feed(&mut self, text: &str) -> Vec<Value> {
        self.buffer.push_str(text);

        let pass = scan_pass(&self.buffer);
        let objects: Vec<Value> = pass
            .spans
            .iter()
            .filter_map(|span| try_parse(&self.buffer[span.clone()]))
            .collect();

        if pass.consumed > 0 {
            self.buffer.drain(..pass.consumed);
        }

        objects
    }

    /// Consume `source` until it ends, reporting objects and completions to
    /// `observer` as each chunk is scanned.
    ///
    /// A source error stops the run immediately and is returned; the buffer is
    /// left as it was. Whatever is still buffered when the source ends is
    /// discarded without a final parse attempt.
    pub async fn run<S>(
        &mut self,
        mut source: S,
        observer: &dyn StreamObserver,
    ) -> Result<StreamSummary, StreamError>
    where
        S: Stream<Item = Result<Bytes, TransportError>> + Unpin,
    {
        self.phase = ExtractorPhase::Reading;

        while let Some(item) = source.next().await {
            let chunk = match item {
                Ok(chunk) => chunk,
                Err(e) => {
                    self.phase = ExtractorPhase::Terminated;
                    return Err(e.into());
                }
            };

            self.phase = ExtractorPhase::Draining;
            self.summary.chunks += 1;

            for object in self.feed_bytes(&chunk) {
                self.summary.objects += 1;
                observer.on_object(&object);

                if let Some(event) = detect_completion(&object) {
                    tracing::info!(
                        stream_id = %self.stream_id,
                        "Generation complete, found final videoPrompt"
                    );
                    self.summary.completions += 1;
                    observer.on_complete(event);
                }
            }

            self.phase = ExtractorPhase::Reading;
        }

        self.phase = ExtractorPhase::Terminated;
        tracing::debug!(
            stream_id = %self.stream_id,
            chunks = self.summary.chunks,
            objects = self.summary.objects,
            residual_len = self.buffer.len(),
            "Response stream ended"
        );

        Ok(self.summary)
    }
}

impl Default for StreamExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse one candidate span; `None` if it is not valid JSON.
pub fn try_parse(span: &str) -> Option<Value> {
    serde_json::from_str(span).ok()
}
