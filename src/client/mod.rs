//! Client interface and factory for the Grok video integration.
//!
//! [`GrokVideoClient`] wires the intercepting transport to the shared prompt
//! slot and the success cue.

mod client;

pub use client::{create_client, create_client_from_env, GrokVideoClient};
