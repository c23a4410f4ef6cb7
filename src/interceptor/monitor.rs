//! Background task owning one extractor per observed response.

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::error::StreamError;
use crate::streaming::{StreamExtractor, StreamObserver, StreamSummary};
use crate::transport::ChunkedStream;

/// How a monitored stream ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamOutcome {
    /// Identifier used in this stream's log events.
    pub stream_id: Uuid,
    /// Counts gathered before the stream ended.
    pub summary: StreamSummary,
    /// Set when the source failed mid-stream.
    pub error: Option<StreamError>,
}

impl StreamOutcome {
    /// Whether the stream ran to its end-of-stream signal.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Spawns and supervises extractors.
///
/// Each watched stream gets its own extractor and task; nothing is shared
/// between them except the observer.
#[derive(Clone)]
pub struct StreamMonitor {
    observer: Arc<dyn StreamObserver>,
    outcomes: Option<mpsc::UnboundedSender<StreamOutcome>>,
}

impl StreamMonitor {
    /// Create a monitor reporting to `observer`.
    pub fn new(observer: Arc<dyn StreamObserver>) -> Self {
        Self {
            observer,
            outcomes: None,
        }
    }

    /// Also publish every outcome on `sender`.
    pub fn with_outcome_sender(mut self, sender: mpsc::UnboundedSender<StreamOutcome>) -> Self {
        self.outcomes = Some(sender);
        self
    }

    /// Watch `stream` on a new task.
    pub fn spawn(&self, stream: ChunkedStream) -> JoinHandle<StreamOutcome> {
        let observer = Arc::clone(&self.observer);
        let outcomes = self.outcomes.clone();

        tokio::spawn(async move {
            let outcome = Self::watch(stream, observer.as_ref()).await;
            if let Some(sender) = outcomes {
                let _ = sender.send(outcome.clone());
            }
            outcome
        })
    }

    /// Run one extractor over `stream` to the end, logging a source failure.
    pub async fn watch(stream: ChunkedStream, observer: &dyn StreamObserver) -> StreamOutcome {
        let mut extractor = StreamExtractor::new();
        let stream_id = extractor.stream_id();

        match extractor.run(stream, observer).await {
            Ok(summary) => StreamOutcome {
                stream_id,
                summary,
                error: None,
            },
            Err(error) => {
                tracing::error!(
                    stream_id = %stream_id,
                    error = %error,
                    "Error processing network stream"
                );
                StreamOutcome {
                    stream_id,
                    summary: extractor.summary(),
                    error: Some(error),
                }
            }
        }
    }
}
