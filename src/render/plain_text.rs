//! Plain-text rendering of a prompt, for chat inputs that do better with
//! prose than with JSON.

use std::fmt::Write;

use crate::types::VideoPrompt;

/// Render `prompt` as the labelled plain-text description.
///
/// Section headers for shot, scene, visual details and audio are always
/// written; individual lines only for non-empty fields. Cinematography,
/// dialogue, sound effects and mix level are not part of this form.
pub fn render_plain_text(prompt: &VideoPrompt) -> String {
    let mut out = String::from("Video Generation Prompt:\n\n");

    out.push_str("Shot Settings:\n");
    push_line(&mut out, "Motion Level", &prompt.shot.motion_level);
    push_line(&mut out, "Camera Depth", &prompt.shot.camera_depth);
    push_line(&mut out, "Camera View", &prompt.shot.camera_view);
    push_line(&mut out, "Camera Movement", &prompt.shot.camera_movement);
    out.push('\n');

    out.push_str("Scene Settings:\n");
    push_line(&mut out, "Location", &prompt.scene.location);
    push_line(&mut out, "Environment", &prompt.scene.environment);
    out.push('\n');

    out.push_str("Visual Details:\n");
    push_line(&mut out, "Objects", &prompt.visual_details.objects.join(", "));
    push_line(&mut out, "Positioning", &prompt.visual_details.positioning.join(", "));
    out.push('\n');

    if !prompt.motion.is_empty() {
        let _ = write!(out, "Motion Description:\n{}\n\n", prompt.motion);
    }

    out.push_str("Audio Settings:\n");
    push_line(&mut out, "Music", &prompt.audio.music);
    push_line(&mut out, "Ambient", &prompt.audio.ambient);
    out.push('\n');

    if !prompt.tags.is_empty() {
        let _ = writeln!(out, "Tags: {}", prompt.tags.join(", "));
    }

    out
}

fn push_line(out: &mut String, label: &str, value: &str) {
    if !value.is_empty() {
        let _ = writeln!(out, "- {}: {}", label, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Audio, Scene, Shot, VisualDetails};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_prompt_renders_headers_only() {
        let text = render_plain_text(&VideoPrompt::default());
        assert_eq!(
            text,
            "Video Generation Prompt:\n\n\
             Shot Settings:\n\n\
             Scene Settings:\n\n\
             Visual Details:\n\n\
             Audio Settings:\n\n"
        );
    }

    #[test]
    fn test_full_prompt() {
        let prompt = VideoPrompt {
            shot: Shot {
                motion_level: "medium".into(),
                camera_depth: "medium shot".into(),
                camera_view: "eye level".into(),
                camera_movement: String::new(),
            },
            scene: Scene {
                location: "sandy beach by the ocean".into(),
                environment: String::new(),
            },
            visual_details: VisualDetails {
                objects: vec!["a red kite".into(), "a child".into()],
                positioning: vec![],
                text_elements: vec![],
            },
            motion: "The kite climbs.".into(),
            audio: Audio {
                music: "light acoustic guitar".into(),
                ambient: "waves".into(),
                sound_effect: "laughter".into(),
                mix_level: "balanced".into(),
            },
            tags: vec!["beach".into(), "summer".into()],
            ..VideoPrompt::default()
        };

        let expected = "Video Generation Prompt:\n\n\
            Shot Settings:\n\
            - Motion Level: medium\n\
            - Camera Depth: medium shot\n\
            - Camera View: eye level\n\n\
            Scene Settings:\n\
            - Location: sandy beach by the ocean\n\n\
            Visual Details:\n\
            - Objects: a red kite, a child\n\n\
            Motion Description:\nThe kite climbs.\n\n\
            Audio Settings:\n\
            - Music: light acoustic guitar\n\
            - Ambient: waves\n\n\
            Tags: beach, summer\n";

        assert_eq!(render_plain_text(&prompt), expected);
    }
}
