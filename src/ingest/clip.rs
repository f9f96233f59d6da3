use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    foundation::error::{ReelError, ReelResult},
    props::model::{InstaReelProps, WordTimestamp},
};

/// Hook line the clip picker emits when it has nothing better; never shown.
pub const PLACEHOLDER_HOOK_LINE: &str = "Chorus Loop";

/// A transcribed segment; only its word timings matter here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LyricsSegment {
    /// Segment text, if present.
    #[serde(default)]
    pub text: String,
    /// Word timings inside the segment.
    #[serde(default)]
    pub words: Vec<WordTimestamp>,
}

/// Analysis document produced by the transcription step.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Segments in source order.
    #[serde(default)]
    pub lyrics_segments: Vec<LyricsSegment>,
}

impl Analysis {
    /// Parse an analysis document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        read_json(path.as_ref(), "analysis")
    }

    /// All words of all segments, in order.
    pub fn words(&self) -> Vec<WordTimestamp> {
        collect_words(&self.lyrics_segments)
    }
}

/// One candidate clip chosen by the clip picker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClipSpec {
    /// Clip start in source seconds.
    pub start_time: f64,
    /// Clip end in source seconds.
    pub end_time: f64,
    /// Suggested banner text.
    #[serde(default)]
    pub hook_line: String,
    /// Target platform tag (for example `instagram_reel`).
    #[serde(default)]
    pub platform: String,
    /// Why the clip was picked.
    #[serde(default)]
    pub viral_reason: String,
    /// Ranking score.
    #[serde(default)]
    pub score: f64,
}

/// Parse a clip spec list from a JSON file on disk.
pub fn clip_specs_from_path(path: impl AsRef<Path>) -> ReelResult<Vec<ClipSpec>> {
    read_json(path.as_ref(), "clip specs")
}

/// Flatten segment words in order.
pub fn collect_words(segments: &[LyricsSegment]) -> Vec<WordTimestamp> {
    segments
        .iter()
        .flat_map(|s| s.words.iter().cloned())
        .collect()
}

/// Banner text for a clip; the placeholder hook line maps to no banner.
pub fn hook_line_for(spec: &ClipSpec) -> String {
    if spec.hook_line == PLACEHOLDER_HOOK_LINE {
        String::new()
    } else {
        spec.hook_line.clone()
    }
}

/// Build reel props for one clip.
pub fn props_for_clip(
    video_src: impl Into<String>,
    spec: &ClipSpec,
    words: Vec<WordTimestamp>,
) -> InstaReelProps {
    InstaReelProps {
        video_src: video_src.into(),
        start_time_sec: spec.start_time,
        end_time_sec: spec.end_time,
        words,
        hook_line: hook_line_for(spec),
    }
}

/// Output name for the `index`-th (0-based) reel.
pub fn reel_name(index: usize, spec: &ClipSpec) -> String {
    let reason: String = spec
        .viral_reason
        .chars()
        .take(10)
        .collect::<String>()
        .replace(' ', "_");
    format!("reel_{}_{}_{}", index + 1, spec.platform, reason)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> ReelResult<T> {
    let f = File::open(path).map_err(|e| {
        ReelError::validation(format!("open {what} JSON '{}': {e}", path.display()))
    })?;
    serde_json::from_reader(BufReader::new(f))
        .map_err(|e| ReelError::serde(format!("parse {what} JSON '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/ingest/clip.rs"]
mod tests;
