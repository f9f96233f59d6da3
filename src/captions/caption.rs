use serde::{Deserialize, Serialize};

use crate::props::model::WordTimestamp;

/// Default silence gap (milliseconds) above which a new caption page starts.
pub const SWITCH_CAPTIONS_EVERY_MS: f64 = 1500.0;

/// A word rebased to clip-relative milliseconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caption {
    /// Word text, unchanged from the transcript.
    pub text: String,
    /// Start in milliseconds relative to the clip start.
    pub start_ms: f64,
    /// End in milliseconds relative to the clip start.
    pub end_ms: f64,
    /// Transcriber confidence; supplied words are treated as certain.
    pub confidence: f64,
    /// Optional display timestamp; never set for rebased words.
    pub timestamp_ms: Option<f64>,
}

/// What to do with a word that starts inside the clip window but ends after it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordOverrun {
    /// Keep the word's end as transcribed, past the clip end.
    #[default]
    Allow,
    /// Clamp the word's end to the clip end.
    Clamp,
}

/// Caption grouping options.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaptionOptions {
    /// Gap threshold in milliseconds; larger gaps start a new page.
    pub combine_within_ms: f64,
    /// Policy for words overrunning the clip end.
    #[serde(default)]
    pub overrun: WordOverrun,
}

impl Default for CaptionOptions {
    fn default() -> Self {
        Self {
            combine_within_ms: SWITCH_CAPTIONS_EVERY_MS,
            overrun: WordOverrun::Allow,
        }
    }
}

/// Return `true` when a word starts inside `[start_time_sec, end_time_sec)`.
pub fn word_in_window(word: &WordTimestamp, start_time_sec: f64, end_time_sec: f64) -> bool {
    word.start >= start_time_sec && word.start < end_time_sec
}

/// Filter words to the clip window and rebase them to clip-relative milliseconds.
///
/// Input order is preserved. Words starting before the window or at/after its end are dropped.
pub fn captions_for_window(
    words: &[WordTimestamp],
    start_time_sec: f64,
    end_time_sec: f64,
    overrun: WordOverrun,
) -> Vec<Caption> {
    let clip_end_ms = (end_time_sec - start_time_sec) * 1000.0;

    words
        .iter()
        .filter(|w| word_in_window(w, start_time_sec, end_time_sec))
        .map(|w| {
            let start_ms = (w.start - start_time_sec) * 1000.0;
            let mut end_ms = (w.end - start_time_sec) * 1000.0;
            if overrun == WordOverrun::Clamp && end_ms > clip_end_ms {
                end_ms = clip_end_ms;
            }
            Caption {
                text: w.word.clone(),
                start_ms,
                end_ms,
                confidence: 1.0,
                timestamp_ms: None,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/captions/caption.rs"]
mod tests;
