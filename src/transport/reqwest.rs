//! `reqwest` implementation of [`HttpTransport`].

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use std::collections::HashMap;
use std::time::Duration;

use super::error::TransportError;
use super::http::{ChunkedStream, HttpMethod, HttpRequest, HttpTransport};

/// Streams response bodies straight from `reqwest`.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with the given request and connect timeouts.
    pub fn new(timeout: Duration, connect_timeout: Duration) -> Result<Self, TransportError> {
        Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map(|client| Self { client })
            .map_err(|e| TransportError::Connection(format!("Failed to create HTTP client: {}", e)))
    }
}

fn method_of(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Headers that are not valid HTTP are dropped.
fn header_map(headers: HashMap<String, String>) -> HeaderMap {
    headers
        .into_iter()
        .filter_map(|(name, value)| {
            let name = HeaderName::from_bytes(name.as_bytes()).ok()?;
            let value = HeaderValue::from_str(&value).ok()?;
            Some((name, value))
        })
        .collect()
}

fn send_error(err: &reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Connection(err.to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send_streaming(&self, request: HttpRequest) -> Result<ChunkedStream, TransportError> {
        let HttpRequest { method, url, headers, body } = request;

        let mut builder = self
            .client
            .request(method_of(method), &url)
            .headers(header_map(headers));
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| send_error(&e))?;
        let status = response.status();
        tracing::trace!(%url, status = status.as_u16(), "Response headers received");

        if !status.is_success() {
            let text = response
                .text()
                .await
                .map_err(|e| TransportError::Request(format!("Failed to read error response: {}", e)))?;
            return Err(TransportError::Request(format!(
                "HTTP error {}: {}",
                status.as_u16(),
                text
            )));
        }

        let body = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| TransportError::Request(format!("Stream error: {}", e))));
        Ok(Box::pin(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        let transport = ReqwestTransport::new(Duration::from_secs(30), Duration::from_secs(10));
        assert!(transport.is_ok());
    }

    #[test]
    fn test_invalid_headers_are_dropped() {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        headers.insert("bad header".to_string(), "x".to_string());
        headers.insert("x-ok".to_string(), "line\nbreak".to_string());

        let map = header_map(headers);

        assert_eq!(map.len(), 1);
        assert_eq!(map["content-type"], "application/json");
    }

    #[test]
    fn test_method_mapping() {
        assert_eq!(method_of(HttpMethod::Post), Method::POST);
        assert_eq!(method_of(HttpMethod::Delete), Method::DELETE);
    }
}
