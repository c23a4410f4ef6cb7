//! Error types for the Grok video integration.

mod types;
mod categories;

pub use types::*;
pub use categories::*;
