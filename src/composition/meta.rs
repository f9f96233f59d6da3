use serde::Serialize;

use crate::{
    foundation::core::{Canvas, Fps},
    foundation::error::ReelResult,
    props::model::InstaReelProps,
};

/// Identifier the reel composition is registered under.
pub const COMPOSITION_ID: &str = "InstaReel";

/// Placeholder duration used before props are known (15 s at 30 fps).
pub const PLACEHOLDER_DURATION_FRAMES: u64 = 450;

/// Registration record handed to the composition runtime.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionMeta {
    /// Composition identifier.
    pub id: String,
    /// Timeline frame rate.
    pub fps: Fps,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Total length in frames.
    pub duration_in_frames: u64,
    /// Props used when none are supplied.
    pub default_props: InstaReelProps,
}

impl Default for CompositionMeta {
    fn default() -> Self {
        let canvas = Canvas::default();
        Self {
            id: COMPOSITION_ID.to_string(),
            fps: Fps::default(),
            width: canvas.width,
            height: canvas.height,
            duration_in_frames: PLACEHOLDER_DURATION_FRAMES,
            default_props: InstaReelProps::default(),
        }
    }
}

/// `ceil((endTimeSec - startTimeSec) * fps)`, without validating the window.
pub fn duration_in_frames(props: &InstaReelProps, fps: Fps) -> u64 {
    fps.secs_to_frames_ceil(props.duration_sec())
}

/// Registration metadata with the duration derived from `props`.
pub fn calculate_metadata(
    props: &InstaReelProps,
    fps: Fps,
    canvas: Canvas,
) -> ReelResult<CompositionMeta> {
    props.validate()?;
    fps.validate()?;
    canvas.validate()?;
    Ok(CompositionMeta {
        fps,
        width: canvas.width,
        height: canvas.height,
        duration_in_frames: duration_in_frames(props, fps),
        ..CompositionMeta::default()
    })
}

#[cfg(test)]
#[path = "../../tests/unit/composition/meta.rs"]
mod tests;
