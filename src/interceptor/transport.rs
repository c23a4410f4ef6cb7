//! Transport decorator that taps matching response streams.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

use super::monitor::StreamMonitor;
use super::rule::InterceptRule;
use crate::observability::Logger;
use crate::transport::{tee_stream, ChunkedStream, HttpRequest, HttpTransport, TransportError};

/// Forwards every request to an inner transport and scans a copy of the
/// response body whenever the request matches the rule.
pub struct InterceptingTransport {
    inner: Arc<dyn HttpTransport>,
    rule: InterceptRule,
    monitor: StreamMonitor,
    logger: Box<dyn Logger>,
}

impl InterceptingTransport {
    /// Wrap `inner`.
    pub fn new(
        inner: Arc<dyn HttpTransport>,
        rule: InterceptRule,
        monitor: StreamMonitor,
        logger: Box<dyn Logger>,
    ) -> Self {
        Self {
            inner,
            rule,
            monitor,
            logger,
        }
    }

    /// The rule selecting observed requests.
    pub fn rule(&self) -> &InterceptRule {
        &self.rule
    }
}

#[async_trait]
impl HttpTransport for InterceptingTransport {
    async fn send_streaming(&self, request: HttpRequest) -> Result<ChunkedStream, TransportError> {
        if !self.rule.matches(&request) {
            return self.inner.send_streaming(request).await;
        }

        let fields = json!({
            "url": request.url,
            "method": request.method.to_string(),
            "headers": request.headers,
        });

        let stream = self.inner.send_streaming(request).await?;

        self.logger.debug("Intercepted video generation response stream", fields);
        let (primary, copy) = tee_stream(stream);
        self.monitor.spawn(copy);

        Ok(primary)
    }
}
