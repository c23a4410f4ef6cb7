//! Mock implementations for testing.
//!
//! Stand-ins for the transport, the notifier and stream observers so the
//! interception pipeline can be exercised without a network or speaker.

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::notify::Notifier;
use crate::streaming::{CompletionEvent, StreamObserver};
use crate::transport::{ChunkedStream, HttpMethod, HttpRequest, HttpTransport, TransportError};

type StreamItems = Vec<Result<Bytes, TransportError>>;

/// Mock HTTP transport for testing.
///
/// Responses are served in the order they were enqueued. Every request is
/// recorded, including those that receive an error.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use futures::StreamExt;
/// use integrations_grok_video::mocks::MockHttpTransport;
/// use integrations_grok_video::transport::{HttpMethod, HttpRequest, HttpTransport};
///
/// # tokio_test::block_on(async {
/// let transport = MockHttpTransport::new();
/// transport.enqueue_streaming_response(vec![Bytes::from("{}")]);
///
/// let request = HttpRequest::new(HttpMethod::Post, "https://example.com");
/// let mut body = transport.send_streaming(request).await.unwrap();
/// assert_eq!(body.next().await.unwrap().unwrap(), Bytes::from("{}"));
///
/// transport.verify_request_count(1);
/// # });
/// ```
#[derive(Clone, Default)]
pub struct MockHttpTransport {
    streaming_responses: Arc<Mutex<VecDeque<Result<StreamItems, TransportError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockHttpTransport {
    /// Create a new mock HTTP transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a streaming response with multiple chunks.
    pub fn enqueue_streaming_response(&self, chunks: Vec<Bytes>) {
        self.enqueue_streaming_items(chunks.into_iter().map(Ok).collect());
    }

    /// Enqueue a streaming response whose items may fail mid-stream.
    pub fn enqueue_streaming_items(&self, items: Vec<Result<Bytes, TransportError>>) {
        self.streaming_responses.lock().unwrap().push_back(Ok(items));
    }

    /// Enqueue an error returned before any body is produced.
    pub fn enqueue_error(&self, error: TransportError) {
        self.streaming_responses.lock().unwrap().push_back(Err(error));
    }

    /// Get all requests that were made.
    pub fn get_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Get the last request that was made.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Verify that exactly `expected` requests were made.
    pub fn verify_request_count(&self, expected: usize) {
        let actual = self.requests.lock().unwrap().len();
        assert_eq!(actual, expected, "Expected {} requests, got {}", expected, actual);
    }

    /// Verify that a request was made with the expected method and URL.
    pub fn verify_request(&self, index: usize, method: HttpMethod, url_contains: &str) {
        let requests = self.requests.lock().unwrap();
        let request = requests
            .get(index)
            .unwrap_or_else(|| panic!("No request at index {}", index));

        assert_eq!(request.method, method, "Request method mismatch");
        assert!(
            request.url.contains(url_contains),
            "URL '{}' does not contain '{}'",
            request.url,
            url_contains
        );
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send_streaming(&self, request: HttpRequest) -> Result<ChunkedStream, TransportError> {
        self.requests.lock().unwrap().push(request);

        let next = self
            .streaming_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("No mock streaming response enqueued".to_string())));

        let items = next?;
        Ok(Box::pin(stream::iter(items)))
    }
}

/// Notifier that counts how often it was signalled.
#[derive(Debug, Default)]
pub struct MockNotifier {
    successes: AtomicUsize,
}

impl MockNotifier {
    /// Create a notifier with a zero count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Times `notify_success` has been called.
    pub fn success_count(&self) -> usize {
        self.successes.load(Ordering::SeqCst)
    }
}

impl Notifier for MockNotifier {
    fn notify_success(&self) {
        self.successes.fetch_add(1, Ordering::SeqCst);
    }
}

/// Observer that records everything it is told.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    objects: Mutex<Vec<Value>>,
    completions: Mutex<Vec<CompletionEvent>>,
}

impl RecordingObserver {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every parsed object, in arrival order.
    pub fn objects(&self) -> Vec<Value> {
        self.objects.lock().unwrap().clone()
    }

    /// Every completion event, in arrival order.
    pub fn completions(&self) -> Vec<CompletionEvent> {
        self.completions.lock().unwrap().clone()
    }
}

impl StreamObserver for RecordingObserver {
    fn on_object(&self, object: &Value) {
        self.objects.lock().unwrap().push(object.clone());
    }

    fn on_complete(&self, event: CompletionEvent) {
        self.completions.lock().unwrap().push(event);
    }
}
