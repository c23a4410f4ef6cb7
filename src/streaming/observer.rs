//! Downstream seam of the extractor.

use serde_json::Value;

use super::completion::CompletionEvent;

/// Receives what an extractor pulls out of a stream.
///
/// Calls happen synchronously inside the scan pass, in stream order.
/// Any `Fn(CompletionEvent)` closure is an observer that only cares about
/// completions.
pub trait StreamObserver: Send + Sync {
    /// Called once for every span that parsed as JSON.
    fn on_object(&self, _object: &Value) {}

    /// Called for every object that reports a finished generation.
    fn on_complete(&self, event: CompletionEvent);
}

impl<F> StreamObserver for F
where
    F: Fn(CompletionEvent) + Send + Sync,
{
    fn on_complete(&self, event: CompletionEvent) {
        self(event);
    }
}
