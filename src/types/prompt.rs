//! Video generation prompt model.
//!
//! The prompt is a fixed-shape JSON document. The generation service returns
//! it as a JSON string inside the final progress event; the editor keeps it as
//! a [`serde_json::Value`] so that keys outside the known shape survive a
//! round trip, and converts to [`VideoPrompt`] when typed access is needed.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::PromptError;

/// Framing and camera settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shot {
    /// How much movement the shot has.
    pub motion_level: String,
    /// Shot distance, e.g. close-up.
    pub camera_depth: String,
    /// Camera angle.
    pub camera_view: String,
    /// Camera motion, e.g. pan or dolly.
    pub camera_movement: String,
}

/// Where the video takes place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    /// Setting.
    pub location: String,
    /// Weather, time of day, atmosphere.
    pub environment: String,
}

/// Lighting and look.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cinematography {
    /// Lighting setup.
    pub lighting: String,
    /// Visual style.
    pub style: String,
    /// Film or surface texture.
    pub texture: String,
    /// Focus depth.
    pub depth_of_field: String,
}

/// Subjects and on-screen elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualDetails {
    /// Things in frame.
    pub objects: Vec<String>,
    /// Where those things are.
    pub positioning: Vec<String>,
    /// On-screen text.
    pub text_elements: Vec<String>,
}

/// Soundtrack layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Audio {
    /// Score.
    pub music: String,
    /// Background sound.
    pub ambient: String,
    /// Spot effects.
    pub sound_effect: String,
    /// Relative loudness of the layers.
    pub mix_level: String,
}

/// A complete video generation prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct VideoPrompt {
    pub shot: Shot,
    pub scene: Scene,
    pub cinematography: Cinematography,
    pub visual_details: VisualDetails,
    /// Free-text description of what moves and how.
    pub motion: String,
    pub audio: Audio,
    /// Dialogue lines. Kept untyped: the service emits both plain strings and
    /// speaker/line objects here.
    pub dialogue: Vec<Value>,
    pub tags: Vec<String>,
    /// Top-level keys outside the known shape.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VideoPrompt {
    /// Typed view of a prompt value.
    pub fn from_value(value: &Value) -> Result<Self, PromptError> {
        if !value.is_object() {
            return Err(PromptError::NotAnObject);
        }
        Self::deserialize(value).map_err(|e| PromptError::UnexpectedShape {
            message: e.to_string(),
        })
    }

    /// JSON form of this prompt.
    pub fn to_value(&self) -> Result<Value, PromptError> {
        serde_json::to_value(self).map_err(Into::into)
    }
}

/// The empty prompt: every string field `""`, every list `[]`.
pub fn empty_template() -> Value {
    json!({
        "shot": { "motion_level": "", "camera_depth": "", "camera_view": "", "camera_movement": "" },
        "scene": { "location": "", "environment": "" },
        "cinematography": { "lighting": "", "style": "", "texture": "", "depth_of_field": "" },
        "visual_details": { "objects": [], "positioning": [], "text_elements": [] },
        "motion": "",
        "audio": { "music": "", "ambient": "", "sound_effect": "", "mix_level": "" },
        "dialogue": [],
        "tags": []
    })
}

/// Overlay `payload` on the empty template.
///
/// The merge is shallow: every top-level key of `payload` replaces the
/// template's entry wholesale, template keys missing from `payload` keep their
/// empty value, and payload keys unknown to the template are kept as-is.
pub fn merge_over_template(payload: Value) -> Result<Value, PromptError> {
    let Value::Object(fields) = payload else {
        return Err(PromptError::NotAnObject);
    };

    let mut merged = match empty_template() {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    merged.extend(fields);

    Ok(Value::Object(merged))
}

/// Parse a JSON prompt string and overlay it on the empty template.
pub fn parse_prompt(text: &str) -> Result<Value, PromptError> {
    let payload: Value = serde_json::from_str(text)?;
    merge_over_template(payload)
}
