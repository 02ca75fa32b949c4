//! Style property types.
//!
//! Styles are a CSS-like property bag. Values fall into a handful of
//! families: pixel counts (plain numbers), percentage strings, angle
//! strings, colors, enumerated tokens, and a few structured shapes
//! (offsets, gradients, transform and filter lists).

use serde::{Deserialize, Serialize};

/// A color value (hex codes, `rgb()`/`rgba()` and friends).
///
/// Only the string shape is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

/// A percentage value such as `"50%"`.
///
/// Only the string shape is enforced; the trailing `%` is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(pub String);

/// A CSS angle such as `"45deg"` or `"0.25turn"`.
///
/// Only the string shape is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle(pub String);

macro_rules! string_value {
    ($($ty:ident),*) => {
        $(
            impl $ty {
                /// Borrow the raw string value.
                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl From<&str> for $ty {
                fn from(s: &str) -> Self {
                    Self(s.to_string())
                }
            }

            impl From<String> for $ty {
                fn from(s: String) -> Self {
                    Self(s)
                }
            }
        )*
    };
}

string_value!(Color, Percentage, Angle);

/// A length given either in pixels or as a percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Distance {
    /// Pixel count, written as a bare number
    Pixels(f64),
    /// Percentage string
    Percentage(Percentage),
}

impl Distance {
    /// Pixel count, if this distance is given in pixels.
    pub fn pixels(&self) -> Option<f64> {
        match self {
            Distance::Pixels(px) => Some(*px),
            Distance::Percentage(_) => None,
        }
    }

    /// Check if this distance is a percentage.
    pub fn is_percentage(&self) -> bool {
        matches!(self, Distance::Percentage(_))
    }
}

/// A two-dimensional pixel offset used by shadows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleOffset {
    /// Horizontal offset in pixels
    pub width: f64,
    /// Vertical offset in pixels
    pub height: f64,
}

/// A single transform operation, written as a one-key object such as
/// `{"rotate": "45deg"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Transform {
    /// Perspective distance in pixels
    Perspective(f64),
    /// Rotation around the z axis
    Rotate(Angle),
    /// Rotation around the x axis
    RotateX(Angle),
    /// Rotation around the y axis
    RotateY(Angle),
    /// Rotation around the z axis
    RotateZ(Angle),
    /// Uniform scale factor
    Scale(f64),
    /// Horizontal scale factor
    ScaleX(f64),
    /// Vertical scale factor
    ScaleY(f64),
    /// Horizontal translation
    TranslateX(Distance),
    /// Vertical translation
    TranslateY(Distance),
    /// Horizontal skew
    SkewX(Angle),
    /// Vertical skew
    SkewY(Angle),
}

/// A single filter operation, written as a one-key object such as
/// `{"blur": 4}`.
///
/// The set of filters is open-ended upstream; only these are recognized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Filter {
    /// Gaussian blur radius
    Blur(Distance),
    /// Brightness multiplier
    Brightness(f64),
    /// Grayscale amount
    Grayscale(Percentage),
}

/// A color stop within a linear gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Stop color
    pub color: Color,
    /// Position of the stop along the gradient line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<Distance>,
}

/// A linear gradient background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    /// Gradient line direction
    pub direction: Angle,
    /// Color stops in order
    pub stops: Vec<GradientStop>,
}

/// Positioning scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    /// Offset from its normal position
    Relative,
    /// Placed relative to the nearest positioned ancestor
    Absolute,
}

/// Display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    /// Block box
    Block,
    /// Inline box
    Inline,
    /// Inline box laid out as a block inside
    InlineBlock,
    /// Block-level flex container
    Flex,
    /// Inline-level flex container
    InlineFlex,
}

/// Main axis of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    /// Left to right
    Row,
    /// Right to left
    RowReverse,
    /// Top to bottom
    Column,
    /// Bottom to top
    ColumnReverse,
}

/// Distribution of flex items along the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    /// Packed at the start
    FlexStart,
    /// Packed in the middle
    Center,
    /// Packed at the end
    FlexEnd,
    /// Equal space around each item
    SpaceAround,
    /// Equal space between items, none at the edges
    SpaceBetween,
}

/// Alignment of flex items along the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    /// Aligned to the cross-start edge
    FlexStart,
    /// Centered on the cross axis
    Center,
    /// Aligned to the cross-end edge
    FlexEnd,
    /// Stretched to fill the cross axis
    Stretch,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Renderer default
    Auto,
    /// Flush left
    Left,
    /// Flush right
    Right,
    /// Centered
    Center,
    /// Stretched to both edges
    Justify,
}

/// Font slant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Upright
    Normal,
    /// Italic
    Italic,
}

/// Style properties attachable to elements and layers.
///
/// Every property is optional. Property names outside this set are
/// ignored rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Styles {
    // Positioning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<Distance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Distance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Distance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Distance>,

    // Margins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<Distance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<Distance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<Distance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<Distance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<Distance>,

    // Padding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Distance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<Distance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<Distance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<Distance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<Distance>,

    // Layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<Display>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<JustifyContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_items: Option<AlignItems>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,

    // Background and shadow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_linear_gradient: Option<LinearGradient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_offset: Option<StyleOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_radius: Option<f64>,

    // Typography
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Distance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_shadow_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_shadow_offset: Option<StyleOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_shadow_radius: Option<f64>,

    // Effects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Vec<Transform>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Vec<Filter>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_filter: Option<Vec<Filter>>,
}

impl Styles {
    /// Check if no property is set.
    pub fn is_empty(&self) -> bool {
        *self == Styles::default()
    }
}
