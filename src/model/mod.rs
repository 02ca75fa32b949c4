//! Story document model.
//!
//! This module defines the shapes of a story document: styles, elements,
//! layers, pages, and the story root. The types are plain data; serde
//! attributes carry the shape rules (tags, required fields, exactness).

use serde::de;
use serde_json::Value;

mod element;
mod layer;
mod page;
mod story;
mod style;

pub use element::{
    ContainerElement, ContainerTag, Dimension, Element, ElementKind, ElementStyles,
    HeadingElement, HeadingKind, ImageElement, ImageTag, LiteralTrue, MediaElement, MediaLayout,
    ParagraphElement, ParagraphTag, VideoElement, VideoSource, VideoTag,
};
pub use layer::{
    FillLayer, FillTemplate, HorizontalLayer, HorizontalTemplate, Layer, LayerTemplate,
    ThirdsLayer, ThirdsTemplate, VerticalLayer, VerticalTemplate,
};
pub use page::Page;
pub use story::{
    MetaField, Publisher, PublisherLogo, Story, StoryAnalytics, StoryMeta, ThirdsExtras,
    Transport,
};
pub use style::{
    AlignItems, Angle, Color, Display, Distance, Filter, FlexDirection, FontStyle, GradientStop,
    JustifyContent, LinearGradient, Percentage, Position, StyleOffset, Styles, TextAlign,
    Transform,
};

/// Look up the tag field of a tagged object for hand-written dispatch.
fn tag_field<'a, E: de::Error>(
    value: &'a Value,
    field: &'static str,
    expected: &'static str,
) -> Result<&'a Value, E> {
    match value {
        Value::Object(map) => map.get(field).ok_or_else(|| E::missing_field(field)),
        other => Err(E::invalid_type(unexpected(other), &expected)),
    }
}

fn unexpected(value: &Value) -> de::Unexpected<'_> {
    match value {
        Value::Null => de::Unexpected::Unit,
        Value::Bool(b) => de::Unexpected::Bool(*b),
        Value::Number(_) => de::Unexpected::Other("number"),
        Value::String(s) => de::Unexpected::Str(s),
        Value::Array(_) => de::Unexpected::Seq,
        Value::Object(_) => de::Unexpected::Map,
    }
}
