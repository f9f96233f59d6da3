use rayon::prelude::*;

use crate::{
    composition::reel::Reel,
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{ReelError, ReelResult},
    render::frame::FrameRenderer,
    render::tree::FrameTree,
};

/// Threading options for [`render_frames_with_stats`].
#[derive(Clone, Debug)]
pub struct RenderThreading {
    /// Evaluate chunks on a rayon pool.
    pub parallel: bool,
    /// Frames per chunk (0 is treated as 1).
    pub chunk_size: usize,
    /// Worker thread override (parallel mode only).
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Counters collected while evaluating a range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RenderStats {
    /// Frames evaluated.
    pub frames_total: u64,
    /// Frames with a mounted caption page.
    pub frames_with_captions: u64,
    /// Frames with an active token.
    pub frames_with_active_token: u64,
}

impl RenderStats {
    fn record(&mut self, tree: &FrameTree) {
        self.frames_total += 1;
        if tree.page.is_some() {
            self.frames_with_captions += 1;
        }
        if tree.active_token.is_some() {
            self.frames_with_active_token += 1;
        }
    }
}

/// Evaluate a single frame.
pub fn render_frame(reel: &Reel, frame: FrameIndex) -> ReelResult<FrameTree> {
    FrameRenderer::eval_frame(reel, frame)
}

/// Evaluate a range of frames (inclusive start, exclusive end) sequentially.
pub fn render_frames(reel: &Reel, range: FrameRange) -> ReelResult<Vec<FrameTree>> {
    render_frames_with_stats(reel, range, &RenderThreading::default()).map(|(trees, _)| trees)
}

/// Evaluate a range of frames, optionally in parallel chunks.
///
/// Frames are independent, so parallel evaluation yields exactly the sequential output, in
/// timeline order.
#[tracing::instrument(skip(reel))]
pub fn render_frames_with_stats(
    reel: &Reel,
    range: FrameRange,
    threading: &RenderThreading,
) -> ReelResult<(Vec<FrameTree>, RenderStats)> {
    if range.is_empty() {
        return Err(ReelError::validation("render range must be non-empty"));
    }
    if range.end.0 > reel.duration_frames() {
        return Err(ReelError::evaluation(format!(
            "render range end {} exceeds reel duration {}",
            range.end.0,
            reel.duration_frames()
        )));
    }

    let len = range.len_frames();
    let mut out = Vec::with_capacity(len.min(4096) as usize);
    let mut stats = RenderStats::default();

    if !threading.parallel {
        for f in range.start.0..range.end.0 {
            let tree = FrameRenderer::eval_frame_unchecked(reel, FrameIndex(f));
            stats.record(&tree);
            out.push(tree);
        }
    } else {
        let pool = build_thread_pool(threading.threads)?;
        let chunk_size = normalized_chunk_size(threading.chunk_size);

        let mut chunk_start = range.start.0;
        while chunk_start < range.end.0 {
            let chunk_end = (chunk_start + chunk_size).min(range.end.0);
            let mut trees = pool.install(|| {
                (0..(chunk_end - chunk_start) as usize)
                    .into_par_iter()
                    .map(|i| {
                        FrameRenderer::eval_frame_unchecked(
                            reel,
                            FrameIndex(chunk_start + i as u64),
                        )
                    })
                    .collect::<Vec<_>>()
            });
            for tree in &trees {
                stats.record(tree);
            }
            out.append(&mut trees);
            chunk_start = chunk_end;
        }
    }

    tracing::debug!(
        frames = stats.frames_total,
        parallel = threading.parallel,
        "evaluated frame range"
    );
    Ok((out, stats))
}

fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ReelError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
