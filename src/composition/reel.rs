use std::path::PathBuf;
use std::sync::Arc;

use crate::{
    assets::resolve::resolve_static_file,
    captions::cache::{PageCache, pages_for_window},
    captions::caption::CaptionOptions,
    captions::pages::Page,
    foundation::core::{Canvas, Fps, FrameIndex, FrameRange},
    foundation::error::{ReelError, ReelResult},
    props::model::InstaReelProps,
};

/// Reel-level settings that are not part of the props.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReelConfig {
    /// Timeline frame rate.
    pub fps: Fps,
    /// Output canvas.
    pub canvas: Canvas,
    /// Caption grouping options.
    pub captions: CaptionOptions,
    /// Directory local `videoSrc` values are resolved under.
    pub public_dir: Option<PathBuf>,
}

/// Frame window a page is mounted for, in timeline frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequenceWindow {
    /// First frame (may be fractional).
    pub from: f64,
    /// Length in frames (may be fractional).
    pub duration: f64,
}

impl SequenceWindow {
    /// Window of `page` at `fps`.
    pub fn for_page(page: &Page, fps: Fps) -> Self {
        Self {
            from: fps.ms_to_frames(page.start_ms),
            duration: fps.ms_to_frames(page.duration_ms),
        }
    }

    /// Return `true` when `frame` is inside `[from, from + duration)`.
    pub fn contains(self, frame: f64) -> bool {
        self.from <= frame && frame < self.from + self.duration
    }
}

/// A validated reel: props, configuration and the derived caption pages.
///
/// Pages are derived once at construction; frames are evaluated from this value without
/// mutating it, so a `Reel` can be shared across threads.
#[derive(Clone, Debug)]
pub struct Reel {
    props: InstaReelProps,
    config: ReelConfig,
    video_src: String,
    pages: Arc<[Page]>,
    windows: Vec<SequenceWindow>,
    duration: FrameIndex,
}

impl Reel {
    /// Validate props and derive pages.
    #[tracing::instrument(skip(props, config), fields(words = props.words.len()))]
    pub fn new(props: InstaReelProps, config: ReelConfig) -> ReelResult<Self> {
        props.validate()?;
        let pages = pages_for_window(
            &props.words,
            props.start_time_sec,
            props.end_time_sec,
            &config.captions,
        );
        Self::from_parts(props, config, pages.into())
    }

    /// Like [`Reel::new`], reusing pages from `cache` when the inputs repeat.
    #[tracing::instrument(skip(props, config, cache), fields(words = props.words.len()))]
    pub fn with_cache(
        props: InstaReelProps,
        config: ReelConfig,
        cache: &mut PageCache,
    ) -> ReelResult<Self> {
        props.validate()?;
        let pages = cache.get_or_compute(
            &props.words,
            props.start_time_sec,
            props.end_time_sec,
            &config.captions,
        );
        Self::from_parts(props, config, pages)
    }

    fn from_parts(
        props: InstaReelProps,
        config: ReelConfig,
        pages: Arc<[Page]>,
    ) -> ReelResult<Self> {
        config.fps.validate()?;
        config.canvas.validate()?;
        if !config.captions.combine_within_ms.is_finite() || config.captions.combine_within_ms < 0.0
        {
            return Err(ReelError::validation(
                "caption combine_within_ms must be finite and >= 0",
            ));
        }
        let video_src = resolve_static_file(&props.video_src, config.public_dir.as_deref())?;
        let duration = FrameIndex(config.fps.secs_to_frames_ceil(props.duration_sec()));
        let windows = pages
            .iter()
            .map(|p| SequenceWindow::for_page(p, config.fps))
            .collect();

        tracing::debug!(
            pages = pages.len(),
            duration_frames = duration.0,
            "reel ready"
        );

        Ok(Self {
            props,
            config,
            video_src,
            pages,
            windows,
            duration,
        })
    }

    /// Input props.
    pub fn props(&self) -> &InstaReelProps {
        &self.props
    }

    /// Reel configuration.
    pub fn config(&self) -> &ReelConfig {
        &self.config
    }

    /// Timeline frame rate.
    pub fn fps(&self) -> Fps {
        self.config.fps
    }

    /// Output canvas.
    pub fn canvas(&self) -> Canvas {
        self.config.canvas
    }

    /// Resolved video source.
    pub fn video_src(&self) -> &str {
        &self.video_src
    }

    /// Caption pages in time order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Shared handle to the caption pages.
    pub fn shared_pages(&self) -> Arc<[Page]> {
        Arc::clone(&self.pages)
    }

    /// Mount window of each page, parallel to [`Reel::pages`].
    pub fn sequence_windows(&self) -> &[SequenceWindow] {
        &self.windows
    }

    /// Total reel length in frames.
    pub fn duration_frames(&self) -> u64 {
        self.duration.0
    }

    /// All frames of the reel.
    pub fn frame_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: self.duration,
        }
    }

    /// Hook line to display, if any.
    pub fn hook_line(&self) -> Option<&str> {
        self.props.hook_line()
    }

    /// The page mounted at `frame`, with the frame relative to the page's start.
    ///
    /// Pages never overlap for well-formed words; if malformed input makes windows overlap, the
    /// latest page wins, matching painter's order.
    pub fn mounted_page(&self, frame: FrameIndex) -> Option<(usize, f64)> {
        let f = frame.0 as f64;
        self.windows
            .iter()
            .enumerate()
            .rev()
            .find(|(_, w)| w.contains(f))
            .map(|(i, w)| (i, f - w.from))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/reel.rs"]
mod tests;
