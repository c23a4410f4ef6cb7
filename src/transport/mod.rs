//! HTTP transport layer and response stream plumbing.

mod http;
mod error;
mod reqwest;
mod tee;

pub use http::{HttpTransport, HttpMethod, HttpRequest, ChunkedStream};
pub use error::TransportError;
pub use reqwest::ReqwestTransport;
pub use tee::tee_stream;
