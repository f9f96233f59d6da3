use crate::{
    captions::pages::Page,
    composition::reel::Reel,
    foundation::core::{Fps, FrameIndex},
    foundation::error::{ReelError, ReelResult},
    render::style::{
        Align, banner_fill_style, banner_style, caption_fill_style, caption_row_style,
        root_fill_style, token_style,
    },
    render::tree::{BannerNode, FrameTree, Node, ObjectFit, TextNode, VideoNode},
};

/// Render one caption page at a frame relative to the page's start.
///
/// `absolute_time_ms = page.start_ms + local_frame / fps * 1000`; a token is active iff
/// `from_ms <= absolute_time_ms < to_ms`.
pub fn render_caption_page(page: &Page, local_frame: f64, fps: Fps) -> Node {
    let absolute_time_ms = page.start_ms + fps.frames_to_ms(local_frame);

    let spans = page
        .tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let active = token.is_active(absolute_time_ms);
            Node::Text(TextNode {
                key: format!("{}-{i}", token.from_ms),
                text: token.text.clone(),
                active,
                style: token_style(active),
            })
        })
        .collect();

    Node::Fill {
        style: caption_fill_style(),
        children: vec![Node::Row {
            style: caption_row_style(),
            children: spans,
        }],
    }
}

/// Render the hook banner layer.
pub fn render_hook_banner(text: &str) -> Node {
    Node::Fill {
        style: banner_fill_style(),
        children: vec![Node::Banner(BannerNode {
            text: text.to_string(),
            style: banner_style(),
        })],
    }
}

/// Render the video layer for `frame`.
pub fn render_video(reel: &Reel, frame: FrameIndex) -> Node {
    let fps = reel.fps();
    let props = reel.props();
    Node::Video(VideoNode {
        src: reel.video_src().to_string(),
        object_fit: ObjectFit::Cover,
        object_position_x: Align::Center,
        object_position_y: Align::Center,
        trim_before_frames: fps.secs_to_frames(props.start_time_sec),
        trim_after_frames: fps.secs_to_frames(props.end_time_sec),
        source_time_sec: props.start_time_sec + fps.frames_to_ms(frame.0 as f64) / 1000.0,
    })
}

/// Stateless evaluator from reel timeline to frame tree.
pub struct FrameRenderer;

impl FrameRenderer {
    /// Evaluate the visual tree for `frame`.
    ///
    /// Layers, bottom to top: black backdrop, video, mounted caption page, hook banner.
    #[tracing::instrument(skip(reel))]
    pub fn eval_frame(reel: &Reel, frame: FrameIndex) -> ReelResult<FrameTree> {
        if frame.0 >= reel.duration_frames() {
            return Err(ReelError::evaluation(format!(
                "frame {} is out of bounds (duration {})",
                frame.0,
                reel.duration_frames()
            )));
        }
        Ok(Self::eval_frame_unchecked(reel, frame))
    }

    pub(crate) fn eval_frame_unchecked(reel: &Reel, frame: FrameIndex) -> FrameTree {
        let fps = reel.fps();
        let mut layers = vec![render_video(reel, frame)];

        let mut page_index = None;
        let mut active_token = None;
        if let Some((idx, local_frame)) = reel.mounted_page(frame) {
            let page = &reel.pages()[idx];
            page_index = Some(idx);
            active_token = page.active_token(page.start_ms + fps.frames_to_ms(local_frame));
            layers.push(render_caption_page(page, local_frame, fps));
        }

        if let Some(hook) = reel.hook_line() {
            layers.push(render_hook_banner(hook));
        }

        FrameTree {
            frame,
            time_ms: fps.frames_to_ms(frame.0 as f64),
            page: page_index,
            active_token,
            root: Node::Fill {
                style: root_fill_style(),
                children: layers,
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
