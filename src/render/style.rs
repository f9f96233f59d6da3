//! Style values and the style derivations used by the frame renderer.
//!
//! Every style here is a pure function of its inputs; the only per-frame input is whether a token
//! is active.

use serde::{Deserialize, Serialize};

use crate::foundation::core::{Affine, Vec2};

/// Highlight color for the active token.
pub const HIGHLIGHT_COLOR: Color = Color::rgb(0xFF, 0xD7, 0x00);

/// Scale applied to the active token.
pub const ACTIVE_TOKEN_SCALE: f64 = 1.15;

/// Straight-alpha RGBA8 color, serialized as `#RRGGBBAA`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque color from RGB bytes.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from RGB bytes and a `[0, 1]` alpha (CSS `rgba()` convention).
    pub fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
        }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional, case-insensitive).
    pub fn parse_hex(s: &str) -> Result<Self, String> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err("hex color must be #RRGGBB or #RRGGBBAA".to_owned());
        }

        fn hex_byte(pair: &str) -> Result<u8, String> {
            u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
        }

        match s.len() {
            6 => Ok(Self::rgb(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
            )),
            8 => Ok(Self {
                r: hex_byte(&s[0..2])?,
                g: hex_byte(&s[2..4])?,
                b: hex_byte(&s[4..6])?,
                a: hex_byte(&s[6..8])?,
            }),
            _ => Err("hex color must be #RRGGBB or #RRGGBBAA".to_owned()),
        }
    }

    /// Format as `#RRGGBBAA`.
    pub fn to_hex(self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            self.r, self.g, self.b, self.a
        )
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Box edges in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    /// Top edge.
    #[serde(default)]
    pub top: f64,
    /// Right edge.
    #[serde(default)]
    pub right: f64,
    /// Bottom edge.
    #[serde(default)]
    pub bottom: f64,
    /// Left edge.
    #[serde(default)]
    pub left: f64,
}

impl Edges {
    /// Same value on top/bottom and on left/right.
    pub fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

/// Main-axis distribution inside a flex container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justify {
    /// Pack at the start.
    #[default]
    Start,
    /// Centre.
    Center,
    /// Pack at the end.
    End,
}

/// Cross-axis alignment inside a flex container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    /// Stretch to fill.
    #[default]
    Stretch,
    /// Align to start.
    Start,
    /// Centre.
    Center,
    /// Align to end.
    End,
}

/// A drop shadow or glow.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Offset in pixels.
    pub offset: Vec2,
    /// Blur radius in pixels.
    pub blur_px: f64,
    /// Shadow color.
    pub color: Color,
}

impl Shadow {
    fn new(dx: f64, dy: f64, blur_px: f64, color: Color) -> Self {
        Self {
            offset: Vec2::new(dx, dy),
            blur_px,
            color,
        }
    }
}

/// Text case transform applied by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextTransform {
    /// Render as written.
    #[default]
    None,
    /// Render uppercase.
    Uppercase,
}

/// Animated style properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionProperty {
    /// The element transform.
    Transform,
    /// The text color.
    Color,
}

/// Style transition the engine applies between frames.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Properties that animate.
    pub properties: Vec<TransitionProperty>,
    /// Transition length in milliseconds.
    pub duration_ms: f64,
}

/// Style of one caption token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size_px: f64,
    /// CSS-style numeric font weight.
    pub font_weight: u16,
    /// Font family fallback list.
    pub font_family: String,
    /// Fill color.
    pub color: Color,
    /// Text shadows, painted in order.
    pub text_shadow: Vec<Shadow>,
    /// Case transform.
    pub text_transform: TextTransform,
    /// Uniform scale about the element centre.
    pub scale: f64,
    /// `scale` expressed as an affine matrix about the element origin.
    pub transform: Affine,
    /// Transition between active and inactive states.
    pub transition: Transition,
}

/// Derive a token's style from whether it is active.
pub fn token_style(is_active: bool) -> TextStyle {
    let (color, text_shadow, scale) = if is_active {
        (
            HIGHLIGHT_COLOR,
            vec![
                Shadow::new(0.0, 0.0, 20.0, Color::rgba(255, 215, 0, 0.8)),
                Shadow::new(2.0, 2.0, 4.0, Color::rgba(0, 0, 0, 0.9)),
            ],
            ACTIVE_TOKEN_SCALE,
        )
    } else {
        (
            Color::WHITE,
            vec![
                Shadow::new(2.0, 2.0, 4.0, Color::rgba(0, 0, 0, 0.9)),
                Shadow::new(0.0, 0.0, 10.0, Color::rgba(0, 0, 0, 0.5)),
            ],
            1.0,
        )
    };

    TextStyle {
        font_size_px: 64.0,
        font_weight: 900,
        font_family: "Arial Black, Arial, sans-serif".to_string(),
        color,
        text_shadow,
        text_transform: TextTransform::Uppercase,
        scale,
        transform: Affine::scale(scale),
        transition: Transition {
            properties: vec![TransitionProperty::Transform, TransitionProperty::Color],
            duration_ms: 100.0,
        },
    }
}

/// Style of a full-frame layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FillStyle {
    /// Optional background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    /// Vertical distribution of children.
    pub justify: Justify,
    /// Horizontal alignment of children.
    pub align: Align,
    /// Inner padding.
    pub padding: Edges,
}

/// Root layer: black backdrop behind the video.
pub fn root_fill_style() -> FillStyle {
    FillStyle {
        background: Some(Color::BLACK),
        ..FillStyle::default()
    }
}

/// Caption page layer: bottom-centre with room above the platform UI.
pub fn caption_fill_style() -> FillStyle {
    FillStyle {
        background: None,
        justify: Justify::End,
        align: Align::Center,
        padding: Edges {
            bottom: 280.0,
            ..Edges::default()
        },
    }
}

/// Hook banner layer: top-centre.
pub fn banner_fill_style() -> FillStyle {
    FillStyle {
        background: None,
        justify: Justify::Start,
        align: Align::Center,
        padding: Edges {
            top: 150.0,
            ..Edges::default()
        },
    }
}

/// Style of the wrapping token row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowStyle {
    /// Wrap onto new lines when full.
    pub wrap: bool,
    /// Main-axis distribution.
    pub justify: Justify,
    /// Gap between items in pixels.
    pub gap_px: f64,
    /// Maximum row width in pixels.
    pub max_width_px: f64,
    /// Inner padding.
    pub padding: Edges,
}

/// Token row style.
pub fn caption_row_style() -> RowStyle {
    RowStyle {
        wrap: true,
        justify: Justify::Center,
        gap_px: 8.0,
        max_width_px: 900.0,
        padding: Edges::symmetric(0.0, 40.0),
    }
}

/// Border description.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Border {
    /// Stroke width in pixels.
    pub width_px: f64,
    /// Stroke color.
    pub color: Color,
}

/// Style of the hook banner pill.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BannerStyle {
    /// Pill fill.
    pub background: Color,
    /// Inner padding.
    pub padding: Edges,
    /// Corner radius in pixels.
    pub border_radius_px: f64,
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub font_size_px: f64,
    /// Font weight.
    pub font_weight: u16,
    /// Pill outline.
    pub border: Border,
    /// Drop shadow under the pill.
    pub box_shadow: Shadow,
}

/// Hook banner style.
pub fn banner_style() -> BannerStyle {
    BannerStyle {
        background: Color::rgba(255, 61, 0, 0.9),
        padding: Edges::symmetric(10.0, 30.0),
        border_radius_px: 50.0,
        color: Color::WHITE,
        font_size_px: 50.0,
        font_weight: 900,
        border: Border {
            width_px: 4.0,
            color: Color::WHITE,
        },
        box_shadow: Shadow::new(0.0, 10.0, 30.0, Color::rgba(0, 0, 0, 0.5)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/style.rs"]
mod tests;
