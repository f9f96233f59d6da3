use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::foundation::error::{ReelError, ReelResult};

/// One transcribed word with absolute times (seconds) into the full source video.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordTimestamp {
    /// Word text as produced by the transcriber (may carry leading whitespace).
    pub word: String,
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
}

impl WordTimestamp {
    /// Convenience constructor.
    pub fn new(word: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            word: word.into(),
            start,
            end,
        }
    }
}

/// Input contract for a reel.
///
/// This is the JSON document the clip pipeline writes next to the source video. Field names are
/// camelCase on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstaReelProps {
    /// Source video reference, resolved as a static asset.
    pub video_src: String,
    /// Clip window start in seconds (inclusive).
    pub start_time_sec: f64,
    /// Clip window end in seconds (exclusive).
    pub end_time_sec: f64,
    /// Word timestamps for the full source video.
    #[serde(default)]
    pub words: Vec<WordTimestamp>,
    /// Banner text; empty suppresses the banner.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hook_line: String,
}

impl Default for InstaReelProps {
    fn default() -> Self {
        Self {
            video_src: String::new(),
            start_time_sec: 0.0,
            end_time_sec: 15.0,
            words: Vec::new(),
            hook_line: String::new(),
        }
    }
}

impl InstaReelProps {
    /// Parse props from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        serde_json::from_reader(r).map_err(|e| ReelError::serde(format!("parse props JSON: {e}")))
    }

    /// Parse props from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::validation(format!("open props JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f)).map_err(|e| match e {
            ReelError::Serde(msg) => ReelError::serde(format!("{msg} ({})", path.display())),
            other => other,
        })
    }

    /// Clip duration in seconds (may be non-positive for invalid props).
    pub fn duration_sec(&self) -> f64 {
        self.end_time_sec - self.start_time_sec
    }

    /// Hook line to display, if any.
    ///
    /// Only the empty string suppresses the banner; whitespace-only text is still shown.
    pub fn hook_line(&self) -> Option<&str> {
        if self.hook_line.is_empty() {
            None
        } else {
            Some(self.hook_line.as_str())
        }
    }

    /// Validate the clip window.
    ///
    /// Word timestamps are not validated: malformed words degrade to empty or inverted tokens.
    pub fn validate(&self) -> ReelResult<()> {
        if !self.start_time_sec.is_finite() || !self.end_time_sec.is_finite() {
            return Err(ReelError::validation(
                "startTimeSec and endTimeSec must be finite",
            ));
        }
        if self.start_time_sec < 0.0 {
            return Err(ReelError::validation("startTimeSec must be >= 0"));
        }
        if self.end_time_sec <= self.start_time_sec {
            return Err(ReelError::validation(format!(
                "endTimeSec ({}) must be greater than startTimeSec ({})",
                self.end_time_sec, self.start_time_sec
            )));
        }
        Ok(())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "../../tests/unit/props/model.rs"]
mod tests;
