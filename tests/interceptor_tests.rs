//! Integration tests for the intercepting transport.

use bytes::Bytes;
use futures::StreamExt;
use integrations_grok_video::interceptor::{
    InterceptRule, InterceptingTransport, StreamMonitor, StreamOutcome,
};
use integrations_grok_video::mocks::{MockHttpTransport, MockNotifier};
use integrations_grok_video::notify::Notifier;
use integrations_grok_video::observability::NoopLogger;
use integrations_grok_video::state::{CompletionDispatcher, PromptState};
use integrations_grok_video::transport::{HttpMethod, HttpRequest, HttpTransport, TransportError};
use integrations_grok_video::types::empty_template;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const ENDPOINT: &str = "https://grok.com/rest/app-chat/conversations/new";

struct Harness {
    inner: MockHttpTransport,
    transport: InterceptingTransport,
    state: PromptState,
    notifier: Arc<MockNotifier>,
    outcomes: mpsc::UnboundedReceiver<StreamOutcome>,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn harness() -> Harness {
    init_tracing();
    let inner = MockHttpTransport::new();
    let state = PromptState::new();
    let notifier = Arc::new(MockNotifier::new());
    let dispatcher = CompletionDispatcher::new(state.clone(), notifier.clone() as Arc<dyn Notifier>);
    let (tx, outcomes) = mpsc::unbounded_channel();
    let monitor = StreamMonitor::new(Arc::new(dispatcher)).with_outcome_sender(tx);

    let transport = InterceptingTransport::new(
        Arc::new(inner.clone()),
        InterceptRule::default(),
        monitor,
        Box::new(NoopLogger),
    );

    Harness {
        inner,
        transport,
        state,
        notifier,
        outcomes,
    }
}

fn completion_chunks() -> Vec<Bytes> {
    vec![
        Bytes::from(r#"{"result":{"response":{"streamingVideoGenerationResponse":{"progress":50}}}}"#),
        Bytes::from(r#"{"result":{"response":{"streamingVideoGenerationResponse":{"progress":100,"#),
        Bytes::from(r#""videoPrompt":"{\"motion\":\"gulls circle the pier\"}"}}}}"#),
    ]
}

async fn collect(stream: integrations_grok_video::transport::ChunkedStream) -> Vec<Bytes> {
    stream.map(|item| item.unwrap()).collect().await
}

async fn next_outcome(outcomes: &mut mpsc::UnboundedReceiver<StreamOutcome>) -> StreamOutcome {
    tokio::time::timeout(Duration::from_secs(5), outcomes.recv())
        .await
        .expect("monitor did not finish")
        .expect("outcome channel closed")
}

#[tokio::test]
async fn test_matching_request_updates_prompt_and_passes_body_through() {
    // Arrange
    let mut h = harness();
    h.inner.enqueue_streaming_response(completion_chunks());

    // Act
    let body = h
        .transport
        .send_streaming(HttpRequest::new(HttpMethod::Post, ENDPOINT))
        .await
        .unwrap();
    let received = collect(body).await;
    let outcome = next_outcome(&mut h.outcomes).await;

    // Assert
    assert_eq!(received, completion_chunks());
    assert!(outcome.is_complete());
    assert_eq!(outcome.summary.completions, 1);
    assert_eq!(h.state.current()["motion"], "gulls circle the pier");
    assert_eq!(h.state.current()["shot"], empty_template()["shot"]);
    assert_eq!(h.notifier.success_count(), 1);
    h.inner.verify_request(0, HttpMethod::Post, "/rest/app-chat/conversations/new");
    assert_eq!(h.transport.rule(), &InterceptRule::default());
}

#[tokio::test]
async fn test_monitor_runs_even_if_caller_drops_body() {
    let mut h = harness();
    h.inner.enqueue_streaming_response(completion_chunks());

    let body = h
        .transport
        .send_streaming(HttpRequest::new(HttpMethod::Post, ENDPOINT))
        .await
        .unwrap();
    drop(body);

    let outcome = next_outcome(&mut h.outcomes).await;
    assert_eq!(outcome.summary.completions, 1);
    assert_eq!(h.state.version(), 1);
}

#[tokio::test]
async fn test_non_matching_requests_are_not_observed() {
    let mut h = harness();
    h.inner.enqueue_streaming_response(completion_chunks());
    h.inner.enqueue_streaming_response(completion_chunks());

    let get = h
        .transport
        .send_streaming(HttpRequest::new(HttpMethod::Get, ENDPOINT))
        .await
        .unwrap();
    assert_eq!(collect(get).await, completion_chunks());

    let other = h
        .transport
        .send_streaming(HttpRequest::new(
            HttpMethod::Post,
            "https://grok.com/rest/app-chat/conversations/abc/responses",
        ))
        .await
        .unwrap();
    assert_eq!(collect(other).await, completion_chunks());

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(h.outcomes.try_recv().is_err());
    assert_eq!(h.state.version(), 0);
    assert_eq!(h.notifier.success_count(), 0);
    h.inner.verify_request_count(2);
    let methods: Vec<HttpMethod> = h.inner.get_requests().iter().map(|r| r.method).collect();
    assert_eq!(methods, vec![HttpMethod::Get, HttpMethod::Post]);
    assert!(h.inner.last_request().unwrap().url.ends_with("/responses"));
}

#[tokio::test]
async fn test_inner_error_passes_through_without_monitoring() {
    let mut h = harness();
    h.inner.enqueue_error(TransportError::Connection("refused".to_string()));

    let result = h
        .transport
        .send_streaming(HttpRequest::new(HttpMethod::Post, ENDPOINT))
        .await;

    assert_eq!(result.err(), Some(TransportError::Connection("refused".to_string())));
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(h.outcomes.try_recv().is_err());
}

#[tokio::test]
async fn test_stream_failure_leaves_prompt_untouched() {
    let mut h = harness();
    h.inner.enqueue_streaming_items(vec![
        Ok(Bytes::from(r#"{"result":{"response":{"streamingVideoGenerationResponse":{"progress":100,"#)),
        Err(TransportError::Connection("reset".to_string())),
    ]);

    let body = h
        .transport
        .send_streaming(HttpRequest::new(HttpMethod::Post, ENDPOINT))
        .await
        .unwrap();
    let items: Vec<_> = body.collect().await;
    let outcome = next_outcome(&mut h.outcomes).await;

    assert_eq!(items.len(), 2);
    assert!(items[1].is_err());
    assert!(!outcome.is_complete());
    assert_eq!(h.state.current(), empty_template());
    assert_eq!(h.notifier.success_count(), 0);
}

#[tokio::test]
async fn test_concurrent_streams_are_scanned_independently() {
    let mut h = harness();
    let first = r#"{"result":{"response":{"streamingVideoGenerationResponse":{"progress":100,"videoPrompt":"{\"motion\":\"one\"}"}}}}"#;
    let second = r#"{"result":{"response":{"streamingVideoGenerationResponse":{"progress":100,"videoPrompt":"{\"motion\":\"two\"}"}}}}"#;
    let (a1, a2) = first.split_at(40);
    let (b1, b2) = second.split_at(70);
    h.inner.enqueue_streaming_response(vec![Bytes::from(a1), Bytes::from(a2)]);
    h.inner.enqueue_streaming_response(vec![Bytes::from(b1), Bytes::from(b2)]);

    let (one, two) = tokio::join!(
        h.transport.send_streaming(HttpRequest::new(HttpMethod::Post, ENDPOINT)),
        h.transport.send_streaming(HttpRequest::new(HttpMethod::Post, ENDPOINT)),
    );
    drop((one.unwrap(), two.unwrap()));

    let first_outcome = next_outcome(&mut h.outcomes).await;
    let second_outcome = next_outcome(&mut h.outcomes).await;

    assert_ne!(first_outcome.stream_id, second_outcome.stream_id);
    assert_eq!(first_outcome.summary.completions, 1);
    assert_eq!(second_outcome.summary.completions, 1);
    assert_eq!(h.state.version(), 2);
    assert_eq!(h.notifier.success_count(), 2);

    let motion = h.state.current()["motion"].clone();
    assert!(motion == json!("one") || motion == json!("two"));
}
