use std::path::PathBuf;

use crate::{
    captions::cache::PageCache,
    captions::caption::{CaptionOptions, WordOverrun},
    composition::reel::{Reel, ReelConfig},
    foundation::core::{Canvas, Fps},
    foundation::error::ReelResult,
    props::model::{InstaReelProps, WordTimestamp},
};

/// Builder for [`Reel`](crate::Reel).
pub struct ReelBuilder {
    props: InstaReelProps,
    config: ReelConfig,
}

impl ReelBuilder {
    /// Create a builder for a reel over `video_src`.
    ///
    /// The clip window defaults to the registered default props (`0..15` s).
    pub fn new(video_src: impl Into<String>) -> Self {
        Self {
            props: InstaReelProps {
                video_src: video_src.into(),
                ..InstaReelProps::default()
            },
            config: ReelConfig::default(),
        }
    }

    /// Start from existing props.
    pub fn from_props(props: InstaReelProps) -> Self {
        Self {
            props,
            config: ReelConfig::default(),
        }
    }

    /// Set the clip window in seconds.
    pub fn window(mut self, start_time_sec: f64, end_time_sec: f64) -> Self {
        self.props.start_time_sec = start_time_sec;
        self.props.end_time_sec = end_time_sec;
        self
    }

    /// Replace the word list.
    pub fn words(mut self, words: impl IntoIterator<Item = WordTimestamp>) -> Self {
        self.props.words = words.into_iter().collect();
        self
    }

    /// Append one word.
    pub fn word(mut self, word: impl Into<String>, start: f64, end: f64) -> Self {
        self.props.words.push(WordTimestamp::new(word, start, end));
        self
    }

    /// Set the hook line (empty suppresses the banner).
    pub fn hook_line(mut self, hook_line: impl Into<String>) -> Self {
        self.props.hook_line = hook_line.into();
        self
    }

    /// Set the timeline frame rate.
    pub fn fps(mut self, fps: Fps) -> Self {
        self.config.fps = fps;
        self
    }

    /// Set the output canvas.
    pub fn canvas(mut self, canvas: Canvas) -> Self {
        self.config.canvas = canvas;
        self
    }

    /// Set the page gap threshold in milliseconds.
    pub fn combine_within_ms(mut self, ms: f64) -> Self {
        self.config.captions.combine_within_ms = ms;
        self
    }

    /// Set the word overrun policy.
    pub fn overrun(mut self, overrun: WordOverrun) -> Self {
        self.config.captions.overrun = overrun;
        self
    }

    /// Replace all caption options.
    pub fn captions(mut self, options: CaptionOptions) -> Self {
        self.config.captions = options;
        self
    }

    /// Resolve local video sources under `dir`.
    pub fn public_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.public_dir = Some(dir.into());
        self
    }

    /// Build and validate the final [`Reel`](crate::Reel).
    pub fn build(self) -> ReelResult<Reel> {
        Reel::new(self.props, self.config)
    }

    /// Build, reusing pages from `cache`.
    pub fn build_cached(self, cache: &mut PageCache) -> ReelResult<Reel> {
        Reel::with_cache(self.props, self.config, cache)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;
