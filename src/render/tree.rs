use serde::{Deserialize, Serialize};

use crate::foundation::core::FrameIndex;
use crate::render::style::{Align, BannerStyle, FillStyle, RowStyle, TextStyle};

/// How the video is scaled into its box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectFit {
    /// Scale to cover the whole box, cropping overflow.
    #[default]
    Cover,
    /// Scale to fit inside the box, letterboxing.
    Contain,
}

/// Video layer description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VideoNode {
    /// Resolved source reference.
    pub src: String,
    /// Scaling mode into the canvas.
    pub object_fit: ObjectFit,
    /// Horizontal anchor of the crop.
    pub object_position_x: Align,
    /// Vertical anchor of the crop.
    pub object_position_y: Align,
    /// Source frames skipped before the clip (`startTimeSec * fps`).
    pub trim_before_frames: f64,
    /// Source frame where the clip ends (`endTimeSec * fps`).
    pub trim_after_frames: f64,
    /// Source time shown on this frame, in seconds.
    pub source_time_sec: f64,
}

/// One caption token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    /// Stable key (`{from_ms}-{index}`).
    pub key: String,
    /// Token text.
    pub text: String,
    /// Whether the token is active on this frame.
    pub active: bool,
    /// Derived style.
    pub style: TextStyle,
}

/// Hook banner pill.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BannerNode {
    /// Banner text.
    pub text: String,
    /// Pill style.
    pub style: BannerStyle,
}

/// A node of the declarative visual tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Absolutely positioned layer filling the canvas.
    Fill {
        /// Layer style.
        style: FillStyle,
        /// Children in painter's order.
        children: Vec<Node>,
    },
    /// Flex row of tokens.
    Row {
        /// Row style.
        style: RowStyle,
        /// Children in reading order.
        children: Vec<Node>,
    },
    /// Video layer.
    Video(VideoNode),
    /// Caption token.
    Text(TextNode),
    /// Hook banner.
    Banner(BannerNode),
}

impl Node {
    /// Direct children of this node.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Fill { children, .. } | Self::Row { children, .. } => children,
            Self::Video(_) | Self::Text(_) | Self::Banner(_) => &[],
        }
    }

    /// This node and all descendants in depth-first pre-order.
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children().iter().rev());
        }
        out
    }
}

/// The visual tree for one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameTree {
    /// Evaluated frame.
    pub frame: FrameIndex,
    /// Clip-relative time of the frame in milliseconds.
    pub time_ms: f64,
    /// Index of the mounted caption page, if any.
    pub page: Option<usize>,
    /// Index of the active token within the mounted page, if any.
    pub active_token: Option<usize>,
    /// Root layer.
    pub root: Node,
}

impl FrameTree {
    /// The video layer, if present.
    pub fn video(&self) -> Option<&VideoNode> {
        self.root.descendants().into_iter().find_map(|n| match n {
            Node::Video(v) => Some(v),
            _ => None,
        })
    }

    /// All caption tokens in reading order.
    pub fn tokens(&self) -> Vec<&TextNode> {
        self.root
            .descendants()
            .into_iter()
            .filter_map(|n| match n {
                Node::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    /// The hook banner, if present.
    pub fn banner(&self) -> Option<&BannerNode> {
        self.root.descendants().into_iter().find_map(|n| match n {
            Node::Banner(b) => Some(b),
            _ => None,
        })
    }
}
