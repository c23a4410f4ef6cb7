//! Outbound forms of a prompt: pretty JSON and the plain-text description.

mod plain_text;

pub use plain_text::render_plain_text;

use serde_json::Value;

use crate::error::PromptError;

/// Pretty-printed JSON for export or sending.
pub fn render_json(prompt: &Value) -> Result<String, PromptError> {
    serde_json::to_string_pretty(prompt).map_err(Into::into)
}
