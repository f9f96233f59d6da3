//! InstaReel composes 9:16 reels from a source clip, word-level transcript timings and an
//! optional hook banner.
//!
//! Each frame is described by a declarative visual tree rather than pixels:
//!
//! - Build a [`Reel`] from [`InstaReelProps`] (directly or through [`ReelBuilder`])
//! - Evaluate single frames with [`render_frame`] or ranges with [`render_frames_with_stats`]
//! - Serialize the resulting [`FrameTree`]s for a downstream rasterizer
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Static asset path resolution.
pub mod assets;
/// Caption grouping into pages and tokens.
pub mod captions;
/// Reel assembly, metadata and the builder API.
pub mod composition;
mod foundation;
/// Props assembly from transcription analysis and clip picks.
pub mod ingest;
/// Input props model.
pub mod props;
/// Per-frame visual tree evaluation.
pub mod render;

pub use crate::foundation::core::{Affine, Canvas, Fps, FrameIndex, FrameRange, Vec2};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::assets::resolve::resolve_static_file;
pub use crate::captions::cache::{PageCache, PageCacheStats, PagesKey, pages_for_window};
pub use crate::captions::caption::{
    Caption, CaptionOptions, SWITCH_CAPTIONS_EVERY_MS, WordOverrun, captions_for_window,
};
pub use crate::captions::pages::{Page, Token, create_pages};
pub use crate::composition::dsl::ReelBuilder;
pub use crate::composition::meta::{
    COMPOSITION_ID, CompositionMeta, calculate_metadata, duration_in_frames,
};
pub use crate::composition::reel::{Reel, ReelConfig, SequenceWindow};
pub use crate::ingest::clip::{
    Analysis, ClipSpec, LyricsSegment, collect_words, props_for_clip, reel_name,
};
pub use crate::props::model::{InstaReelProps, WordTimestamp};
pub use crate::render::frame::FrameRenderer;
pub use crate::render::pipeline::{
    RenderStats, RenderThreading, render_frame, render_frames, render_frames_with_stats,
};
pub use crate::render::tree::{FrameTree, Node};
