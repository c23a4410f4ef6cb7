//! Observation of outgoing requests to the generation endpoint.
//!
//! [`InterceptingTransport`] wraps the real transport. Responses to requests
//! matching its [`InterceptRule`] are duplicated: the caller receives the
//! body untouched while a [`StreamMonitor`] task scans the copy.

mod monitor;
mod rule;
mod transport;

pub use monitor::{StreamMonitor, StreamOutcome};
pub use rule::InterceptRule;
pub use transport::InterceptingTransport;
