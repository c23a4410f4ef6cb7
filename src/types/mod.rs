//! Core types for the Grok video integration.

mod prompt;

pub use prompt::{
    empty_template, merge_over_template, parse_prompt,
    Audio, Cinematography, Scene, Shot, VideoPrompt, VisualDetails,
};
