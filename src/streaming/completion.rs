//! Detection of the final progress event of a video generation.

use serde_json::Value;

use crate::types::parse_prompt;

/// JSON pointer to the progress node inside a streamed object.
pub const PROGRESS_POINTER: &str = "/result/response/streamingVideoGenerationResponse";

/// Progress value reported once generation has finished.
pub const COMPLETE_PROGRESS: f64 = 100.0;

/// A finished generation and the prompt it was generated from.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionEvent {
    /// The generated prompt overlaid on the empty template.
    pub prompt: Value,
    /// The `videoPrompt` string exactly as received.
    pub raw_prompt: String,
}

/// Extract a completion from one streamed object.
///
/// Returns `None` unless the progress node exists, `progress` is exactly 100,
/// and `videoPrompt` is a non-empty string holding a JSON object.
#[allow(clippy::float_cmp)]
pub fn detect_completion(object: &Value) -> Option<CompletionEvent> {
    let response = object.pointer(PROGRESS_POINTER)?;

    let progress = response.get("progress").and_then(Value::as_f64)?;
    if progress != COMPLETE_PROGRESS {
        return None;
    }

    let raw_prompt = response
        .get("videoPrompt")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())?;

    let prompt = parse_prompt(raw_prompt).ok()?;

    Some(CompletionEvent {
        prompt,
        raw_prompt: raw_prompt.to_string(),
    })
}
